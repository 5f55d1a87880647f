// Calendar prediction pipeline.
// Implements: prompt composition, AI response parsing/validation,
// rule-based fallback, and the orchestrator that merges user entries with
// AI predictions. All AI calls go through llm_client.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod service;
