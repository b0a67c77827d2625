//! Core domain models for the chat client.

use std::fmt;

/// A chat message as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Server-assigned identifier, when the API provides one
    pub id: Option<i64>,
    /// Message text
    pub body: String,
}

impl Message {
    /// Create a new message
    pub fn new(id: Option<i64>, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
