//! HTTP API request and response DTOs for the chat client.

use serde::{Deserialize, Serialize};

use crate::domain::{ApiError, Message};

/// Entry of the message list returned by `GET /api/messages/{room_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub body: String,
}

impl From<MessageDto> for Message {
    fn from(dto: MessageDto) -> Self {
        Message::new(dto.id, dto.body)
    }
}

/// Body of `POST /api/messages/{room_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub body: String,
}

/// Body of `POST /api/room/name`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomNameRequest {
    pub room_id: u64,
    pub name: String,
}

/// Body of `POST /api/user/name`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUsernameRequest {
    pub name: String,
}

/// Body of `POST /api/user/password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

/// Acknowledgement returned by every POST endpoint.
///
/// Success is `{"success": true}`. Failures carry `error` and sometimes a
/// more detailed `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Human-readable failure reason built from `error` and `message`.
    pub fn reason(&self) -> String {
        match (&self.error, &self.message) {
            (Some(error), Some(message)) => format!("{error} ({message})"),
            (Some(error), None) => error.clone(),
            (None, Some(message)) => message.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }

    /// Map the acknowledgement to the domain result.
    pub fn into_result(self, status: u16) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        Err(ApiError::Rejected {
            status,
            reason: self.reason(),
        })
    }
}
