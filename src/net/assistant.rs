//! AI assistant boundary.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::config::SimulatedDelays;
use crate::util::delay;

pub const SCRIPTED_REPLY: &str =
    "Great question! Let me help you with that. I'll provide a detailed explanation with code examples...";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    /// The backend could not produce a reply.
    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}

/// Answers a user prompt with reply text (Markdown).
pub trait AssistantBackend {
    fn ask(&self, prompt: String) -> LocalBoxFuture<'static, Result<String, AssistantError>>;
}

/// Backend that answers every prompt with the same canned reply.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedAssistant {
    delays: SimulatedDelays,
}

impl ScriptedAssistant {
    pub fn new(delays: SimulatedDelays) -> Self {
        Self { delays }
    }
}

impl AssistantBackend for ScriptedAssistant {
    fn ask(&self, prompt: String) -> LocalBoxFuture<'static, Result<String, AssistantError>> {
        let wait_ms = self.delays.assistant_reply_ms;
        async move {
            log::debug!("assistant prompt received ({} chars)", prompt.chars().count());
            delay::sleep(delay::millis(wait_ms)).await;
            Ok(SCRIPTED_REPLY.to_owned())
        }
        .boxed_local()
    }
}
