use thiserror::Error;

use urolia_core::error::InvalidInputError;

#[derive(Debug, Error)]
pub enum PathwayError {
    #[error("unknown pathway: {0}")]
    UnknownPathway(String),

    #[error("invalid findings: {0}")]
    Input(#[from] InvalidInputError),
}
