//! railstatus
//!
//! 起動時刻・稼働時間・最終リクエストからの経過時間を表示するステータスページサーバー

#![warn(missing_docs)]

/// HTTP API（ルーター・ミドルウェア・ハンドラー）
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 起動時刻・最終リクエスト時刻の管理
pub mod clock;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// 経過時間フォーマッター
pub mod duration;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ステータスページHTML生成
pub mod page;

/// axumサーバー起動
pub mod server;

/// Shutdown handle
pub mod shutdown;

use std::path::PathBuf;
use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone, Debug)]
pub struct AppState {
    /// 起動時刻・最終リクエスト時刻
    pub clock: clock::ProcessClock,
    /// ページ表示設定
    pub page: Arc<config::PageConfig>,
    /// 静的ファイルのディレクトリ
    pub public_dir: PathBuf,
}

impl AppState {
    /// Assemble the state handed to the router.
    pub fn new(clock: clock::ProcessClock, page: config::PageConfig, public_dir: PathBuf) -> Self {
        Self {
            clock,
            page: Arc::new(page),
            public_dir,
        }
    }
}
