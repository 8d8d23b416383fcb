//! Structural checks for identifier-shaped inputs arriving as untyped JSON.
//!
//! Only two rules apply: the value must be a JSON string, and it must not be
//! empty once surrounding whitespace is removed. There is no character set or
//! length restriction.

use serde_json::Value;

use crate::shared::domain::model::enums::validation_error::ValidationError;

pub const PAGE_ID_LABEL: &str = "Page ID";

/// Canonical type name of an untyped input. A missing value (`None`) is
/// reported as `undefined`; arrays report as `object`.
pub fn received_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::String(_)) => "string",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::Array(_)) | Some(Value::Object(_)) => "object",
    }
}

/// Returns the trimmed identifier when `value` is a non-blank string.
pub fn validate_identifier<'a>(
    label: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a str, ValidationError> {
    let Some(Value::String(raw)) = value else {
        return Err(ValidationError::TypeMismatch {
            received: received_type_name(value),
        });
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { label });
    }

    Ok(trimmed)
}

pub fn validate_page_id(value: Option<&Value>) -> Result<(), ValidationError> {
    validate_identifier(PAGE_ID_LABEL, value).map(|_| ())
}
