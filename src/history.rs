use chrono::NaiveDate;

use crate::clock::date_key;
use crate::errors::AppError;
use crate::models::{Draft, MoodEntry};

/// Turns the draft into a committed entry stamped with `today`. Fails if
/// no tags are selected; the caller must leave its state untouched in that
/// case.
pub fn commit_draft(draft: &Draft, today: NaiveDate) -> Result<MoodEntry, AppError> {
    if draft.tags.is_empty() {
        return Err(AppError::validation("select at least one mood tag"));
    }

    Ok(MoodEntry {
        score: draft.score,
        tags: draft.tags.clone(),
        note: draft.note.clone(),
        date: date_key(today),
    })
}

/// Insert-or-replace keyed by date, then re-establish the descending-date
/// order of the whole collection. ISO dates compare correctly as strings.
pub fn upsert(entries: &mut Vec<MoodEntry>, entry: MoodEntry) {
    match entries.iter_mut().find(|e| e.date == entry.date) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
