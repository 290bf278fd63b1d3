//! ロギング初期化ユーティリティ
//!
//! Console output is always on. When `RAILSTATUS_LOG_DIR` is set, a daily
//! rotated `railstatus.log` is written there as well.

use crate::config::{get_env, get_env_or};
use crate::error::{ServerError, ServerResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name prefix inside the log directory
pub const LOG_FILE_NAME: &str = "railstatus.log";

/// Build the level filter.
///
/// `RUST_LOG` wins when present, otherwise `RAILSTATUS_LOG_LEVEL` (default `info`).
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(get_env_or("RAILSTATUS_LOG_LEVEL", "info")))
}

/// Install the global tracing subscriber.
pub fn init() -> ServerResult<()> {
    let file_layer = get_env("RAILSTATUS_LOG_DIR").map(|dir| {
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        fmt::layer().with_ansi(false).with_writer(appender)
    });

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}
