use thiserror::Error;

/// Core validation errors for KidsCare domain types
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new EmptyField error
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField(field.into())
    }

    /// Create a new UnknownRole error
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole(role.into())
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
