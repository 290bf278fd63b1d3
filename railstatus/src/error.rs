//! エラー型定義
//!
//! Failures can only happen at the process edges: binding the listener,
//! serving connections and installing the log subscriber.

use thiserror::Error;

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener could not be bound
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// Requested address
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Accept loop failed
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// Log subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Result alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;
