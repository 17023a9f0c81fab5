//! State for the AI assistant view.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::catalog::assistant::SEED_CONVERSATION;
use crate::net::assistant::AssistantError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    Error,
}

/// A single assistant conversation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    /// Relative time shown under the bubble ("just now", "2 min ago").
    pub time_label: String,
}

impl AssistantMessage {
    fn new(role: MessageRole, content: impl Into<String>, time_label: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            time_label: time_label.into(),
        }
    }
}

/// Conversation history, prompt draft, and pending-reply flag.
#[derive(Clone, Debug)]
pub struct AssistantState {
    pub messages: Vec<AssistantMessage>,
    pub draft: String,
    /// A reply is pending; sending is disabled until it lands.
    pub loading: bool,
}

impl Default for AssistantState {
    fn default() -> Self {
        let messages = SEED_CONVERSATION
            .iter()
            .map(|(role, content, time)| AssistantMessage::new(*role, *content, *time))
            .collect();
        Self { messages, draft: String::new(), loading: false }
    }
}

impl AssistantState {
    pub fn can_send(&self) -> bool {
        !self.loading && !self.draft.trim().is_empty()
    }

    /// Move the draft into the history and return the prompt to send.
    ///
    /// Returns `None` for a blank draft or while a reply is pending.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let prompt = self.draft.trim().to_owned();
        self.messages.push(AssistantMessage::new(MessageRole::User, prompt.clone(), "just now"));
        self.draft.clear();
        self.loading = true;
        Some(prompt)
    }

    /// Record the backend outcome for the pending prompt.
    pub fn receive_reply(&mut self, reply: Result<String, AssistantError>) {
        let message = match reply {
            Ok(text) => AssistantMessage::new(MessageRole::Assistant, text, "just now"),
            Err(e) => AssistantMessage::new(MessageRole::Error, format!("AI request failed: {e}"), "just now"),
        };
        self.messages.push(message);
        self.loading = false;
    }

    /// Replace the draft with a quick-action prompt.
    pub fn use_quick_action(&mut self, prompt: &str) {
        self.draft = prompt.to_owned();
    }
}
