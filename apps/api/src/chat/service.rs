//! Chat Orchestrator.
//!
//! Builds the per-request system prompt, forwards it with the user message
//! (and prior turns, when present) to the AI gateway, and returns the reply.
//! Never fails outward: any AI-path error becomes the fixed apology string.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::prompts::chat_system_prompt;
use crate::llm_client::{AiBackend, ChatTurn};
use crate::profile::store::ProfileStore;

/// Returned verbatim whenever the AI path fails.
pub const APOLOGY: &str = "Sorry, a temporary error occurred. Please try again.";

#[derive(Clone)]
pub struct ChatService {
    ai: Arc<dyn AiBackend>,
    profile: ProfileStore,
}

impl ChatService {
    pub fn new(ai: Arc<dyn AiBackend>, profile: ProfileStore) -> Self {
        Self { ai, profile }
    }

    pub async fn reply(&self, message: &str, history: Option<&[ChatTurn]>) -> String {
        let profile = self.profile.get();
        let system_prompt = chat_system_prompt(Utc::now(), &profile);
        let full_message = format!("{system_prompt}\n\nUser question: {message}");

        let result = match history {
            Some(turns) if !turns.is_empty() => {
                self.ai.generate_with_history(&full_message, turns).await
            }
            _ => self.ai.generate_content(&full_message).await,
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                warn!("Chat AI call failed: {e}");
                APOLOGY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::ScriptedAi;
    use crate::llm_client::TurnRole;

    fn turn(role: TurnRole, content: &str) -> ChatTurn {
        ChatTurn {
            role,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_reply_passes_through_ai_text() {
        let ai = Arc::new(ScriptedAi::replies("Inspect your hives on Thursday."));
        let service = ChatService::new(ai.clone(), ProfileStore::seeded());
        let reply = service.reply("When should I inspect?", None).await;
        assert_eq!(reply, "Inspect your hives on Thursday.");

        // No history means the single-shot path
        assert!(ai.last_history_len().is_none());
        let prompt = ai.last_prompt().unwrap();
        assert!(prompt.contains("Bloom AI"));
        assert!(prompt.contains("User question: When should I inspect?"));
    }

    #[tokio::test]
    async fn test_history_is_forwarded() {
        let ai = Arc::new(ScriptedAi::replies("Yes, feed them."));
        let service = ChatService::new(ai.clone(), ProfileStore::seeded());
        let history = vec![
            turn(TurnRole::User, "Should I feed my bees?"),
            turn(TurnRole::Assistant, "In early spring, usually yes."),
        ];
        let reply = service.reply("Even this week?", Some(&history)).await;
        assert_eq!(reply, "Yes, feed them.");
        assert_eq!(ai.last_history_len(), Some(2));
    }

    #[tokio::test]
    async fn test_empty_history_uses_single_shot_path() {
        let ai = Arc::new(ScriptedAi::replies("Hello!"));
        let service = ChatService::new(ai.clone(), ProfileStore::seeded());
        service.reply("Hi", Some(&[])).await;
        assert!(ai.last_history_len().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_returns_fixed_apology() {
        let service = ChatService::new(Arc::new(ScriptedAi::fails()), ProfileStore::seeded());
        let reply = service.reply("Anything", None).await;
        assert_eq!(reply, APOLOGY);
    }
}
