use crate::types::DbId;
use crate::validator::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more fields failed validation. Carries the field -> message map.
    #[error("Validation failed: {}", summarize(.0))]
    FailedValidation(FieldErrors),

    #[error("Edit conflict: {entity} with id {id} was modified or no longer matches")]
    EditConflict { entity: &'static str, id: DbId },
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field} {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}
