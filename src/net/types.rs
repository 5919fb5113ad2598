//! Wire types for the room chat protocol.
//!
//! Every frame is a JSON object. Outbound frames always carry all three
//! fields; inbound frames from the relay server may omit `room`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// A single chat line, either received from the room or produced locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub username: String,
    pub text: String,
    #[serde(default)]
    pub room: String,
}

impl ChatMessage {
    /// Decode one inbound text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Decode`] if the frame is not a JSON object with
    /// string `username` and `text` fields.
    pub fn from_frame(raw: &str) -> Result<Self, ChatError> {
        serde_json::from_str(raw).map_err(ChatError::Decode)
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.username, self.text)
    }
}

/// Borrowed view of an outbound frame, serialized without cloning the session.
#[derive(Debug, Serialize)]
pub struct OutboundMessage<'a> {
    pub username: &'a str,
    pub text: &'a str,
    pub room: &'a str,
}

impl OutboundMessage<'_> {
    /// Encode as a JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Encode`] if serialization fails.
    pub fn to_frame(&self) -> Result<String, ChatError> {
        serde_json::to_string(self).map_err(ChatError::Encode)
    }
}
