//! UI layer error definitions.

use thiserror::Error;

use crate::{
    domain::ValueObjectError, infrastructure::api::http::HttpClientError, usecase::UseCaseError,
};

/// Errors that end a client run
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid configuration: {0}")]
    InvalidValue(#[from] ValueObjectError),

    #[error(transparent)]
    HttpClient(#[from] HttpClientError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line editor error: {0}")]
    Readline(String),

    /// A one-shot command failed; already reported to the log
    #[error("{operation} failed: {source}")]
    CommandFailed {
        operation: &'static str,
        source: UseCaseError,
    },
}
