//! Chat API port.
//!
//! The use case layer depends on this trait, and the infrastructure layer
//! provides the HTTP implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::Message,
    error::ApiError,
    value_object::{MessageBody, Password, RoomId, RoomName, UserName},
};

/// Operations offered by the chat-room API.
///
/// Every call is a single request authenticated by the API key the
/// implementation was built with.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// List every message of a room.
    async fn get_messages(&self, room_id: RoomId) -> Result<Vec<Message>, ApiError>;

    /// Post a message to a room.
    async fn post_message(&self, room_id: RoomId, body: MessageBody) -> Result<(), ApiError>;

    /// Rename a room.
    async fn update_room_name(&self, room_id: RoomId, name: RoomName) -> Result<(), ApiError>;

    /// Change the current user's name.
    async fn update_username(&self, name: UserName) -> Result<(), ApiError>;

    /// Change the current user's password.
    async fn update_password(&self, password: Password) -> Result<(), ApiError>;
}
