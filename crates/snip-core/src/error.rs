use thiserror::Error;

/// Result type for URL store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The randomness source could not produce an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("short code generation failed: {0}")]
pub struct GenerationError(String);

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("short code already exists: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Returns `true` when the requested short code has no entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
