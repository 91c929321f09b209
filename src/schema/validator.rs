//! Structural validator for candidate animal records
//!
//! Validation semantics:
//! - `name`, `species` and `diet` are present and are strings
//! - `personalityTraits` is present and is an array
//!
//! Deliberately not checked:
//! - Emptiness of strings or of the trait array
//! - Element types inside `personalityTraits`
//! - Any vocabulary for `diet` or `species`
//!
//! A `null` value counts as missing.

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};

/// Required string fields, checked in this order
const STRING_FIELDS: [&str; 3] = ["name", "species", "diet"];

/// Required array field
const TRAITS_FIELD: &str = "personalityTraits";

/// Validates a candidate record.
///
/// Fails on the first offending field. Does not mutate the candidate.
pub fn validate_animal(candidate: &Value) -> SchemaResult<()> {
    let obj = candidate.as_object().ok_or_else(|| {
        SchemaError::validation_failed(ValidationDetails::type_mismatch(
            "$root",
            "object",
            json_type_name(candidate),
        ))
    })?;

    for field in STRING_FIELDS {
        match obj.get(field) {
            None | Some(Value::Null) => {
                return Err(SchemaError::validation_failed(
                    ValidationDetails::missing_field(field),
                ))
            }
            Some(Value::String(_)) => {}
            Some(other) => {
                return Err(SchemaError::validation_failed(
                    ValidationDetails::type_mismatch(field, "string", json_type_name(other)),
                ))
            }
        }
    }

    match obj.get(TRAITS_FIELD) {
        None | Some(Value::Null) => Err(SchemaError::validation_failed(
            ValidationDetails::missing_field(TRAITS_FIELD),
        )),
        Some(Value::Array(_)) => Ok(()),
        Some(other) => Err(SchemaError::validation_failed(
            ValidationDetails::type_mismatch(TRAITS_FIELD, "array", json_type_name(other)),
        )),
    }
}

/// Pass/fail form of [`validate_animal`].
pub fn is_valid_animal(candidate: &Value) -> bool {
    validate_animal(candidate).is_ok()
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
