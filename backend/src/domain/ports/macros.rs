//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and a display template. The macro
//! derives `thiserror::Error` and adds a snake_case constructor per variant
//! whose parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::StudentId;

    define_port_error! {
        pub enum SamplePortError {
            Missing { student_id: StudentId } => "student {student_id} is missing",
            Offline { message: String } => "offline: {message}",
            Retrying { message: String, attempts: u32 } => "{message} after {attempts} attempts",
        }
    }

    #[test]
    fn constructors_convert_string_fields() {
        let err = SamplePortError::offline("lock poisoned");
        assert_eq!(err.to_string(), "offline: lock poisoned");
    }

    #[test]
    fn constructors_accept_domain_types() {
        let id = StudentId::new("650610001").expect("valid student id");
        let err = SamplePortError::missing(id);
        assert_eq!(err.to_string(), "student 650610001 is missing");
    }

    #[test]
    fn constructors_keep_mixed_fields_in_order() {
        let err = SamplePortError::retrying("gave up", 3_u32);
        assert_eq!(
            err,
            SamplePortError::Retrying {
                message: "gave up".to_owned(),
                attempts: 3
            }
        );
        assert_eq!(err.to_string(), "gave up after 3 attempts");
    }
}
