//! Observability module for monitoring and metrics.
//!
//! This module provides request counters and operation timing that feed the
//! structured `tracing` logs and the health endpoint.

pub mod metrics;

pub use metrics::{MetricsSnapshot, MetricsTracker, Timer};
