//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-lifetime enrollment store and user directory.
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no access rules.

pub mod memory;
