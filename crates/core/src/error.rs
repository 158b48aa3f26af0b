use serde::Serialize;

use crate::types::DbId;

/// A single rejected field in a create/update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid fields: {}", format_fields(.0))]
    InvalidFields(Vec<FieldError>),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_message_lists_every_field() {
        let err = CoreError::InvalidFields(vec![
            FieldError::new("data", "is required"),
            FieldError::new("title", "is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid fields: data: is required; title: is required"
        );
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = CoreError::NotFound {
            entity: "Chart",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Chart with id 7");
    }
}
