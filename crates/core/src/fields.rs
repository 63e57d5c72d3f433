//! Kind-checked access to loosely typed input.
//!
//! Entities are normally built through their typed constructors, where the
//! compiler already guarantees every field has the right kind. Scenario files
//! and other JSON input go through [`Fields`] first: each accessor checks the
//! JSON kind and reports a [`DomainError::TypeMismatch`] naming the field.

use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Human-readable kind of a JSON value, used in type-mismatch messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read-only view over the fields of one JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap `value`, which must be a JSON object.
    ///
    /// `subject` names the thing being read (an entity kind or a step) and is
    /// used as the field name if `value` is not an object.
    pub fn from_value(subject: &str, value: &'a Value) -> DomainResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(DomainError::type_mismatch(subject, "an object", kind_of(other))),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    fn require(&self, field: &str, expected: &'static str) -> DomainResult<&'a Value> {
        self.map
            .get(field)
            .ok_or_else(|| DomainError::type_mismatch(field, expected, "nothing"))
    }

    /// A JSON string.
    pub fn text(&self, field: &str) -> DomainResult<&'a str> {
        const EXPECTED: &str = "a string";
        match self.require(field, EXPECTED)? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(DomainError::type_mismatch(field, EXPECTED, kind_of(other))),
        }
    }

    /// An integer or a float. Booleans are not numbers here.
    pub fn number(&self, field: &str) -> DomainResult<f64> {
        const EXPECTED: &str = "an integer or a float";
        match self.require(field, EXPECTED)? {
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                DomainError::type_mismatch(field, EXPECTED, "an unrepresentable number")
            }),
            other => Err(DomainError::type_mismatch(field, EXPECTED, kind_of(other))),
        }
    }

    /// A whole number written without a fractional part (`10`, not `10.0`).
    pub fn integer(&self, field: &str) -> DomainResult<i64> {
        const EXPECTED: &str = "an integer";
        match self.require(field, EXPECTED)? {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                let found = if n.is_f64() { "a float" } else { "an out-of-range integer" };
                DomainError::type_mismatch(field, EXPECTED, found)
            }),
            other => Err(DomainError::type_mismatch(field, EXPECTED, kind_of(other))),
        }
    }

    /// Like [`Fields::integer`], but an absent field yields `default`.
    pub fn optional_integer(&self, field: &str, default: i64) -> DomainResult<i64> {
        if self.contains(field) {
            self.integer(field)
        } else {
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_is_a_type_mismatch() {
        let value = json!([1, 2]);
        let err = Fields::from_value("car", &value).unwrap_err();
        assert_eq!(err, DomainError::type_mismatch("car", "an object", "an array"));
    }

    #[test]
    fn number_accepts_integers_and_floats() {
        let value = json!({ "a": 60, "b": 12.5 });
        let fields = Fields::from_value("car", &value).unwrap();
        assert_eq!(fields.number("a").unwrap(), 60.0);
        assert_eq!(fields.number("b").unwrap(), 12.5);
    }

    #[test]
    fn number_rejects_text_and_booleans() {
        let value = json!({ "a": "60", "b": true });
        let fields = Fields::from_value("car", &value).unwrap();
        assert_eq!(
            fields.number("a").unwrap_err(),
            DomainError::type_mismatch("a", "an integer or a float", "a string")
        );
        assert!(fields.number("b").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn integer_rejects_floats() {
        let value = json!({ "years": 2.0, "ok": -3 });
        let fields = Fields::from_value("grow", &value).unwrap();
        assert_eq!(
            fields.integer("years").unwrap_err(),
            DomainError::type_mismatch("years", "an integer", "a float")
        );
        assert_eq!(fields.integer("ok").unwrap(), -3);
    }

    #[test]
    fn missing_field_is_a_type_mismatch() {
        let value = json!({});
        let fields = Fields::from_value("tree", &value).unwrap();
        let err = fields.text("kind").unwrap_err();
        assert_eq!(err, DomainError::type_mismatch("kind", "a string", "nothing"));
    }

    #[test]
    fn optional_integer_defaults_only_when_absent() {
        let value = json!({ "years": "ten" });
        let fields = Fields::from_value("grow", &value).unwrap();
        assert_eq!(fields.optional_integer("months", 1).unwrap(), 1);
        assert!(fields.optional_integer("years", 1).unwrap_err().is_type_mismatch());
    }
}
