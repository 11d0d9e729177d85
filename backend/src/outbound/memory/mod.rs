//! In-process adapters holding state for the lifetime of the server.
//!
//! # Architecture
//!
//! - **Explicit values**: each adapter is constructed once and injected
//!   through `HttpState`; tests build fresh instances instead of sharing one.
//! - **Single critical section**: every mutation checks and writes under one
//!   `std::sync::Mutex` guard, and no guard is held across an `.await`.
//! - **Strongly typed errors**: a poisoned lock surfaces as the port's
//!   `Unavailable` variant.

mod enrollment_store;
mod user_directory;

pub use enrollment_store::InMemoryEnrollmentStore;
pub use user_directory::InMemoryUserDirectory;
