use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/draft", get(handlers::get_draft))
        .route("/api/draft/score", post(handlers::set_score))
        .route("/api/draft/tag", post(handlers::toggle_tag))
        .route("/api/draft/note", post(handlers::set_note))
        .route("/api/save", post(handlers::save))
        .route("/api/history", get(handlers::get_history))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
