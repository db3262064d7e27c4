use crate::clock::Clock;
use crate::models::{Draft, MoodEntry};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub history: Arc<Mutex<Vec<MoodEntry>>>,
    pub draft: Arc<Mutex<Draft>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(data_path: PathBuf, history: Vec<MoodEntry>, clock: Arc<dyn Clock>) -> Self {
        let draft = Draft::new(clock.today());
        Self {
            data_path,
            history: Arc::new(Mutex::new(history)),
            draft: Arc::new(Mutex::new(draft)),
            clock,
        }
    }
}
