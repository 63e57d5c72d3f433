//! Value-range rules shared by every validated entity.
//!
//! Each rule returns the checked value on success so constructors can read
//! `let level = ensure_non_negative("fuel_level", level)?;` in declaration order.

use crate::error::{DomainError, DomainResult};

fn ensure_finite(field: &str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::validation(format!(
            "{field} must be a finite number (got {value})"
        )))
    }
}

/// `value > 0`.
pub fn ensure_positive(field: &str, value: f64) -> DomainResult<f64> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be positive (got {value})"
        )));
    }
    Ok(value)
}

/// `value >= 0`.
pub fn ensure_non_negative(field: &str, value: f64) -> DomainResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(value)
}

/// Integer flavour of [`ensure_positive`].
pub fn ensure_positive_int(field: &str, value: i64) -> DomainResult<i64> {
    if value <= 0 {
        return Err(DomainError::validation(format!(
            "{field} must be positive (got {value})"
        )));
    }
    Ok(value)
}

/// Integer flavour of [`ensure_non_negative`].
pub fn ensure_non_negative_int(field: &str, value: i64) -> DomainResult<i64> {
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(value)
}

/// Cross-field bound: `value <= limit`.
pub fn ensure_at_most(field: &str, value: f64, limit_field: &str, limit: f64) -> DomainResult<f64> {
    if value > limit {
        return Err(DomainError::validation(format!(
            "{field} ({value}) cannot exceed {limit_field} ({limit})"
        )));
    }
    Ok(value)
}

/// Text must not be empty. Whitespace counts as content.
pub fn ensure_not_empty(field: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}
