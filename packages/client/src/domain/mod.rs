//! Domain layer for the chat client.
//!
//! This module contains the value objects, entities and the API port that
//! are independent of HTTP, DTOs and terminal concerns.

pub mod api;
pub mod entity;
pub mod error;
pub mod value_object;

pub use api::ChatApi;
#[cfg(test)]
pub use api::MockChatApi;
pub use entity::Message;
pub use error::{ApiError, ValueObjectError};
pub use value_object::{ApiKey, MessageBody, Password, RoomId, RoomName, UserName};
