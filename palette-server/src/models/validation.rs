//! Required-field validation for request bodies
//!
//! A field counts as missing when it is absent, `null`, or falsy: `false`,
//! `0` and `""` are all rejected. Arrays and objects are always present.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or falsy
    MissingField {
        field: &'static str,
        expected: &'static str,
    },

    /// Every field is present but the body doesn't decode into the schema
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field, expected } => write!(
                f,
                "Expected format: {}. You are missing a \"{}\" property.",
                expected, field
            ),
            Self::InvalidBody { reason } => f.write_str(reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Presence test applied to every required field.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First field of `required`, in order, that is missing from `body`.
pub fn first_missing<'a>(body: &Value, required: &[&'a str]) -> Option<&'a str> {
    required
        .iter()
        .copied()
        .find(|field| !body.get(field).is_some_and(is_present))
}

/// A request body with required fields and a typed shape.
pub trait RequestSchema: DeserializeOwned {
    /// Required fields in the order they are checked.
    const REQUIRED: &'static [&'static str];

    /// Human-readable shape quoted back in validation errors.
    const EXPECTED_FORMAT: &'static str;

    /// Check presence of every required field, then decode.
    fn from_body(body: Value) -> Result<Self, ValidationError> {
        if let Some(field) = first_missing(&body, Self::REQUIRED) {
            return Err(ValidationError::MissingField {
                field,
                expected: Self::EXPECTED_FORMAT,
            });
        }

        serde_json::from_value(body).map_err(|e| ValidationError::InvalidBody {
            reason: e.to_string(),
        })
    }
}
