#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use charcat_api::config::ServerConfig;
use charcat_api::router::build_app_router;
use charcat_api::state::AppState;
use charcat_client::interaction::Interaction;
use charcat_db::JsonStore;
use tempfile::TempDir;

/// A real API server listening on an ephemeral localhost port.
pub struct TestServer {
    pub base_url: String,
    pub data_file: PathBuf,
    _dir: TempDir,
}

/// Start the full router on `127.0.0.1:0` over a fresh data file.
pub async fn spawn_server() -> TestServer {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_file: dir.path().join("characters.json"),
        static_dir: dir.path().to_path_buf(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    };
    let state = AppState {
        store: JsonStore::open(&config.data_file),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        data_file: config.data_file,
        _dir: dir,
    }
}

/// Base URL nothing listens on (port 9 is "discard", closed on test hosts).
pub const DEAD_URL: &str = "http://127.0.0.1:9";

/// Interaction with canned answers that records what it was asked.
#[derive(Default)]
pub struct ScriptedUi {
    answers: VecDeque<Option<String>>,
    confirmations: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub notifications: Vec<String>,
}

impl ScriptedUi {
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            ..Default::default()
        }
    }

    pub fn confirming(answer: bool) -> Self {
        Self {
            confirmations: VecDeque::from([answer]),
            ..Default::default()
        }
    }
}

impl Interaction for ScriptedUi {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.answers.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
