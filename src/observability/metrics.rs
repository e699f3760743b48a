//! Request metrics tracking.
//!
//! Lightweight in-process counters for monitoring the health of the intake
//! service. Counters are reported by the health endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics tracker for the application.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    requests_total: Arc<AtomicU64>,
    client_errors_total: Arc<AtomicU64>,
    server_errors_total: Arc<AtomicU64>,
    submissions_created_total: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub client_errors_total: u64,
    pub server_errors_total: u64,
    pub submissions_created_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            client_errors_total: Arc::new(AtomicU64::new(0)),
            server_errors_total: Arc::new(AtomicU64::new(0)),
            submissions_created_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed HTTP request by its response status code.
    pub fn track_request(&self, operation: &str, status: u16, duration_ms: u128) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        match status {
            400..=499 => {
                self.client_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            500..=599 => {
                self.server_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }

        tracing::debug!(
            operation = %operation,
            status = status,
            duration_ms = duration_ms,
            "HTTP request completed"
        );
    }

    /// Track a persisted submission.
    pub fn track_submission_created(&self) {
        self.submissions_created_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn client_errors_total(&self) -> u64 {
        self.client_errors_total.load(Ordering::Relaxed)
    }

    pub fn server_errors_total(&self) -> u64 {
        self.server_errors_total.load(Ordering::Relaxed)
    }

    pub fn submissions_created_total(&self) -> u64 {
        self.submissions_created_total.load(Ordering::Relaxed)
    }

    /// Get the server error rate (0.0 to 1.0).
    pub fn server_error_rate(&self) -> f64 {
        let errors = self.server_errors_total() as f64;
        let total = self.requests_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    /// Copy all counters at once.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total(),
            client_errors_total: self.client_errors_total(),
            server_errors_total: self.server_errors_total(),
            submissions_created_total: self.submissions_created_total(),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Finish the timer with a specific status.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}
