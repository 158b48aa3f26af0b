//! Payload validation for chart create/update requests.
//!
//! Runs in three stages so a client sees every problem it can fix at once:
//! required-field presence on the raw JSON object, typed deserialization,
//! then the `validator` rules declared on the target DTO.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::error::{CoreError, FieldError};

/// Fields a create payload must carry (JSON names).
pub const REQUIRED_CREATE_FIELDS: &[&str] = &["title", "chartType", "data"];

/// Parse and validate a JSON payload into `T`.
///
/// `required` lists JSON field names that must be present and non-null.
pub fn parse_payload<T>(payload: Value, required: &[&str]) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let missing = missing_required_fields(&payload, required);
    if !missing.is_empty() {
        return Err(CoreError::InvalidFields(missing));
    }

    let parsed: T = serde_json::from_value(payload)
        .map_err(|e| CoreError::InvalidFields(vec![FieldError::new("body", e.to_string())]))?;

    parsed
        .validate()
        .map_err(|e| CoreError::InvalidFields(field_errors(&e)))?;

    Ok(parsed)
}

/// Report each required field that is absent or `null`.
///
/// A payload that is not a JSON object yields a single `body` error.
pub fn missing_required_fields(payload: &Value, required: &[&str]) -> Vec<FieldError> {
    let Some(object) = payload.as_object() else {
        return vec![FieldError::new("body", "must be a JSON object")];
    };

    required
        .iter()
        .filter(|field| object.get(**field).map_or(true, Value::is_null))
        .map(|field| FieldError::new(*field, "is required"))
        .collect()
}

/// Flatten `validator` errors into a field list sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// `chart_type` -> `chartType`. Already camel-cased names pass through.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
