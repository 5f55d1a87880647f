use std::sync::Arc;

use crate::calendar::service::CalendarService;
use crate::chat::service::ChatService;
use crate::llm_client::AiBackend;
use crate::profile::store::ProfileStore;
use crate::todo::recommend::TodoRecommender;
use crate::todo::store::TodoStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Owns the stores and the per-feature orchestrators; the
/// orchestrators share one AI backend and one profile store.
#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileStore,
    pub todos: TodoStore,
    pub calendar: CalendarService,
    pub recommender: TodoRecommender,
    pub chat: ChatService,
}

impl AppState {
    pub fn new(ai: Arc<dyn AiBackend>) -> Self {
        let profile = ProfileStore::seeded();
        Self {
            calendar: CalendarService::new(ai.clone(), profile.clone()),
            recommender: TodoRecommender::new(ai.clone(), profile.clone()),
            chat: ChatService::new(ai, profile.clone()),
            todos: TodoStore::seeded(),
            profile,
        }
    }
}
