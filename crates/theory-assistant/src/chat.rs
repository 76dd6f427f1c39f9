//! Conversation state for the research side panel

use std::fmt::Display;

/// Greeting shown before any exchange has happened.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the R-QNT Research Lab. How can I assist your theoretical exploration today?";

/// Appended in place of a reply when the assistant call fails.
pub const CONTACT_ERROR: &str = "Error communicating with the physics module.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Transcript plus the loading flag that gates sends.
///
/// At most one request is in flight: `begin` refuses until the previous
/// exchange has been `complete`d. Failures append [`CONTACT_ERROR`] and
/// clear the flag, so the user can simply try again.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                content: WELCOME_MESSAGE.to_string(),
            }],
            in_flight: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Record the outgoing prompt and raise the loading flag.
    ///
    /// Returns false (and records nothing) for blank prompts or while a
    /// request is already outstanding.
    pub fn begin(&mut self, prompt: &str) -> bool {
        if self.in_flight || prompt.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
        });
        self.in_flight = true;
        true
    }

    /// Record the outcome of the outstanding request and clear the flag.
    pub fn complete<E: Display>(&mut self, reply: Result<String, E>) {
        let content = match reply {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("assistant request failed: {err}");
                CONTACT_ERROR.to_string()
            }
        };
        self.messages.push(ChatMessage {
            role: ChatRole::Model,
            content,
        });
        self.in_flight = false;
    }

    /// Most recent assistant reply, if any exchange has completed.
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Model)
            .map(|m| m.content.as_str())
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
