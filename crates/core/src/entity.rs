//! Validated entity trait: construction either yields a fully valid value or fails.

use serde_json::Value;

use crate::error::DomainResult;
use crate::fields::Fields;

/// An entity whose every field is checked before the value exists.
///
/// Typed constructors cover the in-code path. `from_fields` is the loosely
/// typed path: implementations read fields in declaration order, kind-check
/// then range-check each one, and return the first failure.
pub trait ValidatedEntity: Sized {
    /// Short name used in messages and as the subject of [`Fields`].
    const KIND: &'static str;

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self>;

    fn from_json(value: &Value) -> DomainResult<Self> {
        Self::from_fields(&Fields::from_value(Self::KIND, value)?)
    }
}
