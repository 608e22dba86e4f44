use thiserror::Error;

/// Raised when a raw findings record cannot be normalized.
///
/// Normalization fails before any classification rule runs; a partially
/// normalized parameter set is never evaluated.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("findings must be a JSON object")]
    NotAnObject,
}
