//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId must be a positive integer
    #[error("RoomId must be greater than zero")]
    RoomIdZero,

    /// RoomId could not be parsed
    #[error("RoomId must be a positive integer (got: {0})")]
    RoomIdInvalidFormat(String),

    /// ApiKey validation error
    #[error("ApiKey cannot be empty")]
    ApiKeyEmpty,

    /// MessageBody validation error
    #[error("Message text required")]
    MessageBodyEmpty,

    /// RoomName validation error
    #[error("Room name cannot be empty")]
    RoomNameEmpty,

    /// UserName validation error
    #[error("New username required")]
    UserNameEmpty,

    /// Password validation error
    #[error("New password required")]
    PasswordEmpty,
}

/// Errors reported by a [`ChatApi`](super::ChatApi) call.
///
/// `Transport`, `Status` and `Decode` mean the request itself failed;
/// `Rejected` means the API answered and reported failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, timeout or other network failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success status without a readable error body
    #[error("network response was not ok: {status}")]
    Status { status: u16 },

    /// Response body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The API answered with `success: false` or an `error` field
    #[error("{reason} (status {status})")]
    Rejected { status: u16, reason: String },
}

impl ApiError {
    /// Whether the API itself reported the failure (as opposed to the request failing).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}
