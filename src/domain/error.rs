//! Domain error taxonomy

use thiserror::Error;

/// Errors produced by business rules and entity lookups.
///
/// Storage implementations never construct `Validation` or `InvalidState`;
/// those belong to the service layer. The HTTP layer maps each variant to a
/// status code (`NotFound` → 404, everything else → 400).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Malformed or rule-violating input (bad dates, unknown city, negative
    /// distance, blank name)
    #[error("Validation: {0}")]
    Validation(String),

    /// The referenced entity does not exist
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The operation is not permitted in the entity's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
