// Todo list: in-memory CRUD plus AI recommendation.
// `recommend` is the AI pipeline; `store` is plain state.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod recommend;
pub mod store;
