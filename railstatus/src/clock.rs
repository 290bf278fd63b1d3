//! Process clock: start time and last-request bookkeeping.
//!
//! - The start time is captured once when the clock is created.
//! - The last-request time is bumped by the record stage on every request
//!   that reaches the dynamic pipeline.
//! - Uptime is measured from start to the *last request*, downtime from the
//!   last request to now.

use chrono::{DateTime, Utc};
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc, Mutex,
};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current UTC instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for deterministic tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock frozen at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Jump to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Move forward by `delta`.
    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Sentinel for "no request recorded yet".
const UNSET: i64 = i64::MIN;

/// Start/last-request timestamps shared across the server.
#[derive(Clone)]
pub struct ProcessClock {
    inner: Arc<ProcessClockInner>,
}

struct ProcessClockInner {
    source: Arc<dyn Clock>,
    started_at: DateTime<Utc>,
    /// Epoch milliseconds of the last recorded request, or `UNSET`.
    last_request_ms: AtomicI64,
}

impl std::fmt::Debug for ProcessClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessClock")
            .field("started_at", &self.inner.started_at)
            .field("last_request_at", &self.last_request_at())
            .finish()
    }
}

/// One consistent reading of the clock, taken per page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Process start
    pub started_at: DateTime<Utc>,
    /// Most recent recorded request
    pub last_request_at: Option<DateTime<Utc>>,
    /// Instant the snapshot was taken
    pub now: DateTime<Utc>,
    /// Whole seconds from start to the last request
    pub uptime_secs: Option<i64>,
    /// Whole seconds from the last request to `now`
    pub downtime_secs: Option<i64>,
}

impl ProcessClock {
    /// Start tracking against the wall clock.
    pub fn start() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Start tracking against an arbitrary clock source.
    pub fn with_clock(source: Arc<dyn Clock>) -> Self {
        let started_at = source.now();
        Self {
            inner: Arc::new(ProcessClockInner {
                source,
                started_at,
                last_request_ms: AtomicI64::new(UNSET),
            }),
        }
    }

    /// Current instant according to the underlying source.
    pub fn now(&self) -> DateTime<Utc> {
        self.inner.source.now()
    }

    /// Instant the clock was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }

    /// Most recent recorded request, if any.
    pub fn last_request_at(&self) -> Option<DateTime<Utc>> {
        match self.inner.last_request_ms.load(Ordering::SeqCst) {
            UNSET => None,
            ms => DateTime::from_timestamp_millis(ms),
        }
    }

    /// Record "now" as the last-request time.
    ///
    /// Concurrent callers never move the value backwards.
    pub fn record_request(&self) {
        let now_ms = self.now().timestamp_millis();
        self.inner
            .last_request_ms
            .fetch_max(now_ms, Ordering::SeqCst);
    }

    /// Seconds between start and the last request, floored.
    pub fn uptime_seconds(&self) -> Option<i64> {
        let last = self.inner.last_request_ms.load(Ordering::SeqCst);
        if last == UNSET {
            return None;
        }
        Some(floor_secs(last - self.inner.started_at.timestamp_millis()))
    }

    /// Seconds between the last request and `now`, floored.
    pub fn downtime_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        let last = self.inner.last_request_ms.load(Ordering::SeqCst);
        if last == UNSET {
            return None;
        }
        Some(floor_secs(now.timestamp_millis() - last))
    }

    /// Read every value at once.
    pub fn snapshot(&self) -> ClockSnapshot {
        let now = self.now();
        ClockSnapshot {
            started_at: self.started_at(),
            last_request_at: self.last_request_at(),
            now,
            uptime_secs: self.uptime_seconds(),
            downtime_secs: self.downtime_seconds(now),
        }
    }
}

/// Milliseconds to whole seconds, rounding toward negative infinity.
fn floor_secs(millis: i64) -> i64 {
    millis.div_euclid(1000)
}
