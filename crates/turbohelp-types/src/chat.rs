//! Conversation types and inbound request validation.
//!
//! Clients post `{ "messages": [{ "role": ..., "content": ... }, ...] }`.
//! The payload is accepted as a raw [`serde_json::Value`] and converted into a
//! typed [`ChatRequest`] here, so nothing past the HTTP boundary ever sees an
//! unchecked shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Role of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: MessageRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A validated chat request: the client's turns in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub turns: Vec<ConversationTurn>,
}

impl ChatRequest {
    /// Validate a raw JSON body and convert it into a typed request.
    ///
    /// `messages` must be present and be a non-empty array. Every element must
    /// carry a known role and string content; unknown extra fields on a turn
    /// are ignored.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let raw_turns = body
            .get("messages")
            .and_then(Value::as_array)
            .ok_or(ValidationError::MissingMessages)?;

        if raw_turns.is_empty() {
            return Err(ValidationError::EmptyMessages);
        }

        let turns = raw_turns
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                ConversationTurn::deserialize(raw).map_err(|e| ValidationError::InvalidTurn {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { turns })
    }
}
