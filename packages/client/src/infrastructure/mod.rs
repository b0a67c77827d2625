//! Infrastructure layer: wire formats and the HTTP implementation of the chat API.

pub mod api;
pub mod dto;

pub use api::HttpChatApi;
