use crate::errors::AppError;
use crate::history::{commit_draft, upsert};
use crate::models::{Draft, MoodEntry, NoteRequest, SaveResponse, ScoreRequest, TagRequest};
use crate::state::AppState;
use crate::stats::{compute_stats, Stats};
use crate::storage::persist_history;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let draft = state.draft.lock().await;
    Html(render_index(&draft))
}

pub async fn get_draft(State(state): State<AppState>) -> Json<Draft> {
    let draft = state.draft.lock().await;
    Json(draft.clone())
}

pub async fn set_score(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<Draft>, AppError> {
    if !(1..=10).contains(&payload.score) {
        return Err(AppError::bad_request("score must be between 1 and 10"));
    }

    let mut draft = state.draft.lock().await;
    draft.set_score(payload.score);
    Ok(Json(draft.clone()))
}

pub async fn toggle_tag(
    State(state): State<AppState>,
    Json(payload): Json<TagRequest>,
) -> Result<Json<Draft>, AppError> {
    let tag = payload.tag.trim();
    if tag.is_empty() {
        return Err(AppError::bad_request("tag must not be blank"));
    }

    let mut draft = state.draft.lock().await;
    draft.toggle_tag(tag);
    Ok(Json(draft.clone()))
}

pub async fn set_note(
    State(state): State<AppState>,
    Json(payload): Json<NoteRequest>,
) -> Json<Draft> {
    let mut draft = state.draft.lock().await;
    draft.set_note(payload.note);
    Json(draft.clone())
}

/// Commits the draft: validate, stamp today's date, insert-or-replace by
/// date, persist the whole collection, and only then reset the draft. Any
/// failure leaves both the stored history and the draft as they were.
pub async fn save(State(state): State<AppState>) -> Result<Json<SaveResponse>, AppError> {
    let today = state.clock.today();
    let mut draft = state.draft.lock().await;
    let mut history = state.history.lock().await;

    let entry = commit_draft(&draft, today)?;

    let mut updated = history.clone();
    upsert(&mut updated, entry.clone());

    persist_history(&state.data_path, &updated).await?;

    *history = updated;
    draft.reset(today);
    info!("saved mood entry for {}", entry.date);

    Ok(Json(SaveResponse {
        saved: entry,
        draft: draft.clone(),
        stats: compute_stats(&history),
        history: history.clone(),
    }))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let history = state.history.lock().await;
    Json(history.clone())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    let history = state.history.lock().await;
    Json(compute_stats(&history))
}
