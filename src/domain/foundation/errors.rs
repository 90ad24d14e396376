//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur when the engine is handed structurally invalid input.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Decision must have at least {required} options, got {actual}")]
    NotEnoughOptions { required: usize, actual: usize },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a not-enough-options validation error.
    pub fn not_enough_options(required: usize, actual: usize) -> Self {
        ValidationError::NotEnoughOptions { required, actual }
    }
}
