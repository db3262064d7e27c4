pub mod app;
pub mod clock;
pub mod draft;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_history, resolve_data_path};
