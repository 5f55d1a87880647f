// User persona: the profile snapshot every AI prompt is built from.
// `store` owns the mutable state; `context` renders read-only snapshots.

pub mod context;
pub mod handlers;
pub mod models;
pub mod store;
