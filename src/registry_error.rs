use thiserror::Error;

/// Reasons a registry operation was rejected.
///
/// The primary API collapses these into `bool` / `Option`; the `try_*` and
/// `require` variants surface them for callers that want to propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The value handed to the registry was absent (`None`).
    #[error("Cannot register an absent value")]
    AbsentValue,

    /// An instance of this type is already registered; the first one is kept.
    #[error("Type already registered: {type_name}")]
    AlreadyRegistered { type_name: &'static str },

    /// No instance of this type is registered.
    #[error("Type not found in registry: {type_name}")]
    TypeNotFound { type_name: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_display() {
        let err = RegistryError::AbsentValue;
        assert_eq!(err.to_string(), "Cannot register an absent value");
    }

    #[test]
    fn test_already_registered_display() {
        let err = RegistryError::AlreadyRegistered { type_name: "i32" };
        assert_eq!(err.to_string(), "Type already registered: i32");
    }

    #[test]
    fn test_type_not_found_display() {
        let err = RegistryError::TypeNotFound {
            type_name: "alloc::string::String",
        };
        assert_eq!(
            err.to_string(),
            "Type not found in registry: alloc::string::String"
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(RegistryError::AbsentValue, RegistryError::AbsentValue);
        assert_ne!(
            RegistryError::AbsentValue,
            RegistryError::TypeNotFound { type_name: "u8" }
        );
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &RegistryError::TypeNotFound { type_name: "u8" };
        assert_eq!(err.to_string(), "Type not found in registry: u8");
    }
}
