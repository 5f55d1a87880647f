//! Scripted AI backend for orchestrator tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AiBackend, AiError, ChatTurn};

enum Script {
    Reply(String),
    TransportFail,
}

/// An `AiBackend` that replays a canned outcome and records what it was
/// asked, so tests can assert on prompt content and degradation policy.
pub struct ScriptedAi {
    script: Script,
    last_prompt: Mutex<Option<String>>,
    last_history_len: Mutex<Option<usize>>,
}

impl ScriptedAi {
    pub fn replies(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            last_prompt: Mutex::new(None),
            last_history_len: Mutex::new(None),
        }
    }

    pub fn fails() -> Self {
        Self {
            script: Script::TransportFail,
            last_prompt: Mutex::new(None),
            last_history_len: Mutex::new(None),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_history_len(&self) -> Option<usize> {
        *self.last_history_len.lock().unwrap()
    }

    fn outcome(&self) -> Result<String, AiError> {
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::TransportFail => Err(AiError::Api {
                status: 503,
                message: "scripted transport failure".to_string(),
            }),
        }
    }
}

#[async_trait]
impl AiBackend for ScriptedAi {
    async fn generate_content(&self, prompt: &str) -> Result<String, AiError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.outcome()
    }

    async fn generate_with_history(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, AiError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_history_len.lock().unwrap() = Some(history.len());
        self.outcome()
    }
}
