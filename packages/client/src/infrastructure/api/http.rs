//! reqwest implementation of the chat API port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Response, StatusCode,
    header::{HeaderMap, HeaderValue, InvalidHeaderValue},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{ApiError, ApiKey, ChatApi, Message, MessageBody, Password, RoomId, RoomName, UserName},
    infrastructure::dto::http::{
        ApiResponse, MessageDto, PostMessageRequest, UpdatePasswordRequest, UpdateRoomNameRequest,
        UpdateUsernameRequest,
    },
};

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Errors while constructing [`HttpChatApi`]
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Chat API client over HTTP.
///
/// The API key is installed once as a default header, so every request
/// carries it.
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatApi {
    /// Create a client for the API served at `base_url` (e.g. `http://127.0.0.1:5000`).
    pub fn new(
        base_url: &str,
        api_key: &ApiKey,
        timeout: Duration,
    ) -> Result<Self, HttpClientError> {
        let mut key = HeaderValue::from_str(api_key.as_str())?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        read_ack(response).await
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn get_messages(&self, room_id: RoomId) -> Result<Vec<Message>, ApiError> {
        let url = self.url(&format!("/api/messages/{}", room_id));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(failure_from_body(status, &bytes));
        }

        let messages: Vec<MessageDto> =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(messages.into_iter().map(Message::from).collect())
    }

    async fn post_message(&self, room_id: RoomId, body: MessageBody) -> Result<(), ApiError> {
        let request = PostMessageRequest {
            body: body.into_string(),
        };
        self.post_json(&format!("/api/messages/{}", room_id), &request)
            .await
    }

    async fn update_room_name(&self, room_id: RoomId, name: RoomName) -> Result<(), ApiError> {
        let request = UpdateRoomNameRequest {
            room_id: room_id.value(),
            name: name.into_string(),
        };
        self.post_json("/api/room/name", &request).await
    }

    async fn update_username(&self, name: UserName) -> Result<(), ApiError> {
        let request = UpdateUsernameRequest {
            name: name.into_string(),
        };
        self.post_json("/api/user/name", &request).await
    }

    async fn update_password(&self, password: Password) -> Result<(), ApiError> {
        let request = UpdatePasswordRequest {
            password: password.as_str().to_string(),
        };
        self.post_json("/api/user/password", &request).await
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Read a `{success, error?}` acknowledgement.
async fn read_ack(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(failure_from_body(status, &bytes));
    }

    let ack: ApiResponse =
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
    ack.into_result(status.as_u16())
}

/// Map a non-success response to an error, keeping the API's own reason when it sent one.
fn failure_from_body(status: StatusCode, bytes: &[u8]) -> ApiError {
    match serde_json::from_slice::<ApiResponse>(bytes) {
        Ok(ack) if ack.error.is_some() || ack.message.is_some() => ApiError::Rejected {
            status: status.as_u16(),
            reason: ack.reason(),
        },
        _ => ApiError::Status {
            status: status.as_u16(),
        },
    }
}
