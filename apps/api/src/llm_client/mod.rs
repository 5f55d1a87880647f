/// LLM Client — the single point of entry for all Gemini API calls in Leafline.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All AI interactions MUST go through this module.
///
/// The gateway makes exactly one upstream call per invocation — no retry.
/// Degradation policy on failure belongs to the orchestrators, not here.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod test_support;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all AI calls in Leafline.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("AI returned no candidate content")]
    EmptyContent,
}

/// One turn of a conversation as the caller sees it.
/// `Assistant` is translated to Gemini's `model` role label on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    fn wire_role(&self) -> &'static str {
        match self.role {
            TurnRole::User => "user",
            // Gemini only accepts "user" and "model"
            TurnRole::Assistant => "model",
        }
    }
}

/// The seam between orchestrators and the real Gemini client.
/// Tests substitute a scripted implementation.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Single-shot generation from one composed prompt.
    async fn generate_content(&self, prompt: &str) -> Result<String, AiError>;

    /// Multi-turn generation: prior turns are replayed before the prompt.
    async fn generate_with_history(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, AiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt_tokens: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidate_tokens: Option<u32>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single Gemini client used by all services in Leafline.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn call(&self, contents: Vec<Content>) -> Result<String, AiError> {
        let request_body = GenerateContentRequest { contents };
        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to extract the structured error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "AI call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_tokens, usage.candidate_tokens
            );
        }

        parsed.text().ok_or(AiError::EmptyContent)
    }
}

#[async_trait]
impl AiBackend for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, AiError> {
        self.call(vec![Content {
            role: "user",
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }])
        .await
    }

    async fn generate_with_history(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, AiError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: turn.wire_role(),
                parts: vec![Part {
                    text: turn.content.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });
        self.call(contents).await
    }
}

/// Strips a single ```json ... ``` or ``` ... ``` code fence wrapper from AI
/// output. Models routinely wrap JSON in fences despite instructions not to.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_language_tag() {
        let input = "```json\n[{\"date\": \"2025-06-04\"}]\n```";
        assert_eq!(strip_json_fences(input), "[{\"date\": \"2025-06-04\"}]");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"todos\": []}\n```";
        assert_eq!(strip_json_fences(input), "{\"todos\": []}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"todos\": []}";
        assert_eq!(strip_json_fences(input), "{\"todos\": []}");
    }

    #[test]
    fn test_assistant_turn_maps_to_model_role() {
        let turn = ChatTurn {
            role: TurnRole::Assistant,
            content: "Check your hives today.".to_string(),
        };
        assert_eq!(turn.wire_role(), "model");

        let turn = ChatTurn {
            role: TurnRole::User,
            content: "What should I do?".to_string(),
        };
        assert_eq!(turn.wire_role(), "user");
    }

    #[test]
    fn test_turn_role_deserializes_lowercase() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "assistant", "content": "hi"}"#).unwrap();
        assert_eq!(turn.role, TurnRole::Assistant);
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_text_empty_candidates() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(parsed.text().is_none());
    }
}
