//! Message log entries for chat sessions.

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One immutable entry in a session's message log.
///
/// The log is persisted as a JSON array on the session row, so messages
/// carry no identity of their own. `options` is present only on
/// assistant messages that expect the user to pick from a fixed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl Message {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Timestamp::now(),
            options: None,
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Timestamp::now(),
            options: None,
        }
    }

    /// Creates an assistant message offering quick-reply options.
    pub fn assistant_with_options(content: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Timestamp::now(),
            options: Some(options),
        }
    }

    /// Returns who authored the message.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the display text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was created.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns the quick-reply options attached to the message, if any.
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    /// Returns true if the message came from the user.
    pub fn is_from_user(&self) -> bool {
        self.role == Role::User
    }
}
