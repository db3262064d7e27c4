use chrono::NaiveDate;

use crate::clock::date_key;
use crate::models::{Draft, DEFAULT_SCORE};

impl Draft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            score: DEFAULT_SCORE,
            tags: Vec::new(),
            note: String::new(),
            date: date_key(today),
        }
    }

    /// Caller constrains `score` to 1..=10; the holder stores it as given.
    pub fn set_score(&mut self, score: u8) {
        self.score = score;
    }

    /// Removes the tag if present, appends it otherwise. A tag removed and
    /// re-added moves to the end of the list.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn set_note(&mut self, note: String) {
        self.note = note;
    }

    /// Back to the defaults. Must run after every successful save, and
    /// only then.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}
