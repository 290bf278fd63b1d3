use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use railstatus::clock::{ManualClock, ProcessClock};
use railstatus::config::PageConfig;
use railstatus::{api, AppState};
use tempfile::TempDir;

/// テスト用アプリ一式（手動クロック・一時公開ディレクトリ付き）
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub source: ManualClock,
    pub clock: ProcessClock,
    pub public_dir: TempDir,
}

/// Fixed process start for deterministic assertions
#[allow(dead_code)]
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// テスト用のアプリを作成する（.oneshot()スタイルのテスト用）
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    let public_dir = tempfile::tempdir().expect("create public dir");
    write_asset(public_dir.path(), "site.webmanifest", r#"{"name":"test"}"#);
    write_asset(public_dir.path(), "favicon-16x16.png", "not-really-a-png");

    let source = ManualClock::new(start_time());
    let clock = ProcessClock::with_clock(Arc::new(source.clone()));
    let state = AppState::new(
        clock.clone(),
        PageConfig::default(),
        public_dir.path().to_path_buf(),
    );

    TestApp {
        router: api::create_app(state),
        source,
        clock,
        public_dir,
    }
}

#[allow(dead_code)]
fn write_asset(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write asset");
}

/// GET request with an empty body
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as UTF-8 text
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
