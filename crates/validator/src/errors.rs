use thiserror::Error;

use crate::validation::failure::{serialize_failures, ValidationFailure};

/// Failures raised by a policy store. Never escapes the validator facade.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store io error: {0}")]
    Io(String),
    #[error("malformed store document: {0}")]
    Malformed(String),
}

impl From<models::errors::ModelError> for StoreError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Malformed(msg) => Self::Malformed(msg),
        }
    }
}

/// Errors surfaced to callers of the validation layer.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A validator was assembled from bad parts, e.g. without a store.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The object did not pass validation; carries every recorded failure.
    #[error("{}", serialize_failures(.0))]
    Invalid(Vec<ValidationFailure>),
}

impl ValidationError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ValidationError::InvalidArgument(_) => 2001,
            ValidationError::Invalid(f) if f.iter().any(ValidationFailure::is_internal_error) => 2100,
            ValidationError::Invalid(_) => 2002,
        }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            ValidationError::Invalid(f) => f.as_slice(),
            ValidationError::InvalidArgument(_) => &[],
        }
    }
}
