use serde::{Deserialize, Serialize};

use crate::stats::Stats;

pub const DEFAULT_SCORE: u8 = 5;

/// One committed journal entry. The `date` field is the unique key within
/// the persisted collection; field order here matches the stored JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub score: u8,
    pub tags: Vec<String>,
    pub note: String,
    pub date: String,
}

/// The entry currently being composed. Lives only in memory; it is copied
/// into the history on save and reset to defaults afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub score: u8,
    pub tags: Vec<String>,
    pub note: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub score: u8,
}

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub note: String,
}

/// Returned by a successful save so the page can redraw every derived view
/// from the freshly persisted collection.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub saved: MoodEntry,
    pub draft: Draft,
    pub history: Vec<MoodEntry>,
    pub stats: Stats,
}
