use crate::types::DbId;

/// Domain error taxonomy shared by the service and persistence layers.
///
/// Every variant renders a human-readable message; the HTTP layer wraps
/// these into the uniform response envelope without losing the text.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A supplied foreign reference points at a row that does not exist.
    #[error("Referenced {entity} with id {id} does not exist")]
    ReferenceNotFound { entity: &'static str, id: DbId },

    /// A pagination window failed validation (negative start or end
    /// before start). Never silently corrected.
    #[error("Invalid pagination range: start_index {start}, end_index {end}")]
    InvalidRange { start: i64, end: i64 },

    /// Input violated a validation rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation conflicts with existing data. Callers supply the
    /// full client-facing sentence.
    #[error("{0}")]
    Conflict(String),

    /// The store completed the call but returned a shape the caller
    /// cannot act on (missing created row, unexpected delete count).
    #[error("Persistence failure: {0}")]
    Persistence(String),
}
