//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeControlError`] via `From` at the port boundary.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum HomeControlError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HomeControlError {
    /// Whether this error means the requested thing does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Invariant violations on domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("invalid entity id: {0:?}")]
    InvalidEntityId(String),
}

/// A lookup did not match anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
