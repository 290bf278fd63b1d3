//! Cooperative shutdown handle.
//!
//! `server::run` waits on this together with OS signals, so tests and
//! embedders can stop the server without sending a signal.

use std::sync::Arc;
use tokio::sync::watch;

/// Clonable trigger for graceful shutdown.
#[derive(Clone, Debug)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandle {
    /// New, untriggered handle.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Returns true once shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Request shutdown and wake every waiter.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Resolve once shutdown has been requested.
    pub async fn triggered(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting.
        let _ = rx.wait_for(|requested| *requested).await;
    }
}
