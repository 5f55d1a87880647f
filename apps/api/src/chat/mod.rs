// Chat assistant: per-request system prompt assembly plus the orchestrator.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
