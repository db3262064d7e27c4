use serde::Serialize;

use crate::models::MoodEntry;

const RECENT_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_entries: usize,
    pub average_score: f64,
    pub best_score: Option<u8>,
    pub recent_average: f64,
    pub most_common_tag: String,
}

/// Derives the summary aggregates from the persisted collection. Expects
/// `entries` in descending-date order; the recent average covers the first
/// seven elements of that order, not a calendar window.
pub fn compute_stats(entries: &[MoodEntry]) -> Stats {
    if entries.is_empty() {
        return Stats {
            total_entries: 0,
            average_score: 0.0,
            best_score: None,
            recent_average: 0.0,
            most_common_tag: "none".to_string(),
        };
    }

    let recent = &entries[..entries.len().min(RECENT_WINDOW)];

    Stats {
        total_entries: entries.len(),
        average_score: mean_score(entries),
        best_score: entries.iter().map(|e| e.score).max(),
        recent_average: mean_score(recent),
        most_common_tag: most_common_tag(entries),
    }
}

fn mean_score(entries: &[MoodEntry]) -> f64 {
    let sum: u32 = entries.iter().map(|e| u32::from(e.score)).sum();
    round1(f64::from(sum) / entries.len() as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Ties go to the first tag (in first-appearance order across the scan) to
/// reach the maximum count, so the result is stable for a given collection.
fn most_common_tag(entries: &[MoodEntry]) -> String {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for entry in entries {
        for tag in &entry.tags {
            match counts.iter_mut().find(|(name, _)| *name == tag.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag, 1)),
            }
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for (name, count) in counts {
        // Strictly greater, so the first tag to reach the max count wins.
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((name, count));
        }
    }

    best.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "none".to_string())
}
