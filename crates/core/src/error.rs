//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// There are exactly two kinds of failure: a value of the wrong kind was
/// supplied, or a value of the right kind broke a range or relational rule.
/// Both are raised before any state is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field or argument had the wrong kind (e.g. text where a number is expected).
    #[error("type mismatch: `{field}` must be {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A value failed validation (e.g. negative amount, level above capacity).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_names_field_and_kinds() {
        let err = DomainError::type_mismatch("fuel_level", "a number", "a string");
        assert!(err.is_type_mismatch());
        assert_eq!(
            err.to_string(),
            "type mismatch: `fuel_level` must be a number, got a string"
        );
    }

    #[test]
    fn validation_carries_message() {
        let err = DomainError::validation("amount cannot be negative");
        assert!(err.is_validation());
        assert!(!err.is_type_mismatch());
        assert_eq!(err.to_string(), "validation failed: amount cannot be negative");
    }
}
