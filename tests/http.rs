use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Draft {
    score: u8,
    tags: Vec<String>,
    note: String,
    date: String,
}

#[derive(Debug, Deserialize)]
struct MoodEntry {
    score: u8,
    tags: Vec<String>,
    note: String,
    date: String,
}

#[derive(Debug, Deserialize)]
struct Stats {
    total_entries: usize,
    average_score: f64,
    best_score: Option<u8>,
    recent_average: f64,
    most_common_tag: String,
}

#[derive(Debug, Deserialize)]
struct SaveResponse {
    saved: MoodEntry,
    draft: Draft,
    history: Vec<MoodEntry>,
    stats: Stats,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mood_board_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/draft")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server_with_path(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_mood_board"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn spawn_server() -> TestServer {
    spawn_server_with_path(&unique_data_path()).await
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_draft(client: &Client, base_url: &str) -> Draft {
    client
        .get(format!("{base_url}/api/draft"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn get_history(client: &Client, base_url: &str) -> Vec<MoodEntry> {
    client
        .get(format!("{base_url}/api/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn toggle_tag(client: &Client, base_url: &str, tag: &str) -> Draft {
    client
        .post(format!("{base_url}/api/draft/tag"))
        .json(&serde_json::json!({ "tag": tag }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

/// Shared-server tests may leave tags behind after a failed save; start
/// each test from a known draft.
async fn clear_draft_tags(client: &Client, base_url: &str) {
    let draft = get_draft(client, base_url).await;
    for tag in draft.tags {
        toggle_tag(client, base_url, &tag).await;
    }
}

#[tokio::test]
async fn http_save_persists_and_resets_draft() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    clear_draft_tags(&client, &server.base_url).await;

    client
        .post(format!("{}/api/draft/score", server.base_url))
        .json(&serde_json::json!({ "score": 3 }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();
    toggle_tag(&client, &server.base_url, "calm").await;
    client
        .post(format!("{}/api/draft/note", server.base_url))
        .json(&serde_json::json!({ "note": "quiet afternoon" }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let saved: SaveResponse = client
        .post(format!("{}/api/save", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(saved.saved.score, 3);
    assert_eq!(saved.saved.tags, vec!["calm"]);
    assert_eq!(saved.saved.note, "quiet afternoon");
    assert!(!saved.saved.date.is_empty());

    // Draft back to defaults after a successful save.
    assert_eq!(saved.draft.score, 5);
    assert!(saved.draft.tags.is_empty());
    assert_eq!(saved.draft.note, "");
    assert_eq!(saved.draft.date, saved.saved.date);

    // Derived views in the response come from the persisted collection.
    assert_eq!(saved.stats.total_entries, saved.history.len());

    // Round trip through the persisted collection.
    let history = get_history(&client, &server.base_url).await;
    let entry = history
        .iter()
        .find(|e| e.date == saved.saved.date)
        .expect("saved entry missing from history");
    assert_eq!(entry.score, 3);
    assert_eq!(entry.tags, vec!["calm"]);
    assert_eq!(entry.note, "quiet afternoon");
}

#[tokio::test]
async fn http_same_day_resave_replaces_entry() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    clear_draft_tags(&client, &server.base_url).await;
    toggle_tag(&client, &server.base_url, "tired").await;
    let first: SaveResponse = client
        .post(format!("{}/api/save", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    toggle_tag(&client, &server.base_url, "energetic").await;
    toggle_tag(&client, &server.base_url, "tired").await;
    client
        .post(format!("{}/api/draft/score", server.base_url))
        .json(&serde_json::json!({ "score": 9 }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();
    let second: SaveResponse = client
        .post(format!("{}/api/save", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first.saved.date, second.saved.date);
    let same_day: Vec<&MoodEntry> = second
        .history
        .iter()
        .filter(|e| e.date == second.saved.date)
        .collect();
    assert_eq!(same_day.len(), 1);
    assert_eq!(same_day[0].score, 9);
    assert_eq!(same_day[0].tags, vec!["energetic", "tired"]);
}

#[tokio::test]
async fn http_save_without_tags_is_rejected_and_draft_kept() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    clear_draft_tags(&client, &server.base_url).await;
    client
        .post(format!("{}/api/draft/score", server.base_url))
        .json(&serde_json::json!({ "score": 7 }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();
    client
        .post(format!("{}/api/draft/note", server.base_url))
        .json(&serde_json::json!({ "note": "keep me" }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let history_before = get_history(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/save", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let history_after = get_history(&client, &server.base_url).await;
    assert_eq!(history_before.len(), history_after.len());

    // The failed save must not touch the draft.
    let draft = get_draft(&client, &server.base_url).await;
    assert_eq!(draft.score, 7);
    assert_eq!(draft.note, "keep me");
    assert!(draft.tags.is_empty());
}

#[tokio::test]
async fn http_stats_reflect_saved_entries() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    let empty: Stats = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty.total_entries, 0);
    assert_eq!(empty.average_score, 0.0);
    assert_eq!(empty.best_score, None);
    assert_eq!(empty.recent_average, 0.0);
    assert_eq!(empty.most_common_tag, "none");

    toggle_tag(&client, &server.base_url, "grateful").await;
    client
        .post(format!("{}/api/draft/score", server.base_url))
        .json(&serde_json::json!({ "score": 8 }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();
    client
        .post(format!("{}/api/save", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let stats: Stats = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.average_score, 8.0);
    assert_eq!(stats.best_score, Some(8));
    assert_eq!(stats.recent_average, 8.0);
    assert_eq!(stats.most_common_tag, "grateful");
}

#[tokio::test]
async fn http_score_out_of_range_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/draft/score", server.base_url))
        .json(&serde_json::json!({ "score": 11 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/draft/score", server.base_url))
        .json(&serde_json::json!({ "score": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_write_failure_keeps_draft_for_retry() {
    let _guard = TEST_LOCK.lock().await;
    // A directory at the data path makes every write fail while reads
    // still fail open to an empty history.
    let dir = std::env::temp_dir().join(format!(
        "mood_board_blocked_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let server = spawn_server_with_path(&dir.to_string_lossy()).await;
    let client = Client::new();

    toggle_tag(&client, &server.base_url, "anxious").await;
    client
        .post(format!("{}/api/draft/note", server.base_url))
        .json(&serde_json::json!({ "note": "still here" }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let response = client
        .post(format!("{}/api/save", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let draft = get_draft(&client, &server.base_url).await;
    assert_eq!(draft.tags, vec!["anxious"]);
    assert_eq!(draft.note, "still here");

    let history = get_history(&client, &server.base_url).await;
    assert!(history.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
