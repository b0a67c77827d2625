//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{ApiError, ValueObjectError};

/// Errors returned by every use case
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// Input rejected before any request was sent
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValueObjectError),

    /// The request failed or the API reported failure
    #[error(transparent)]
    Api(#[from] ApiError),
}
