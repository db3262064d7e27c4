use crate::errors::AppError;
use crate::models::MoodEntry;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/mood_history.json"))
}

/// Reads the stored JSON array. A missing file or an unparseable value
/// loads as an empty history; read failures never reach the caller.
pub async fn load_history(path: &Path) -> Vec<MoodEntry> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse history file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read history file: {err}");
            Vec::new()
        }
    }
}

/// Serializes and writes the whole collection. One key, one value; the
/// previous contents are overwritten, not appended to.
pub async fn persist_history(path: &Path, entries: &[MoodEntry]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(entries).map_err(AppError::persistence)?;
    fs::write(path, payload).await.map_err(AppError::persistence)?;
    Ok(())
}
