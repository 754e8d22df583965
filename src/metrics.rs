//! Session statistics for the prediction loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Counters for one predictor session.
pub struct SessionMetrics {
    /// Total successful predictions
    pub predictions_made: AtomicU64,
    /// Total failed prediction attempts
    pub predictions_failed: AtomicU64,
    /// Per-prediction latencies (in microseconds)
    latencies: RwLock<Vec<u64>>,
    /// Predicted day values, for the session summary
    predicted_days: RwLock<Vec<f64>>,
    /// Session start, for duration reporting
    start_time: Instant,
}

impl SessionMetrics {
    /// Create a new session metrics collector.
    pub fn new() -> Self {
        Self {
            predictions_made: AtomicU64::new(0),
            predictions_failed: AtomicU64::new(0),
            latencies: RwLock::new(Vec::new()),
            predicted_days: RwLock::new(Vec::new()),
            start_time: Instant::now(),
        }
    }

    /// Record a successful prediction.
    pub fn record_prediction(&self, latency: Duration, days: f64) {
        self.predictions_made.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut latencies) = self.latencies.write() {
            latencies.push(latency.as_micros() as u64);
        }
        if let Ok(mut predicted) = self.predicted_days.write() {
            predicted.push(days);
        }
    }

    /// Record a failed prediction attempt.
    pub fn record_failure(&self) {
        self.predictions_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get latency statistics for the session so far.
    pub fn latency_stats(&self) -> LatencyStats {
        let latencies = self.latencies.read().unwrap();
        if latencies.is_empty() {
            return LatencyStats::default();
        }

        let mut sorted: Vec<u64> = latencies.clone();
        sorted.sort_unstable();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        LatencyStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Print the session summary.
    pub fn print_summary(&self) {
        let made = self.predictions_made.load(Ordering::Relaxed);
        let failed = self.predictions_failed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed().as_secs();

        info!(
            predictions = made,
            failures = failed,
            session_secs = elapsed,
            "Session summary"
        );

        if made > 0 {
            let stats = self.latency_stats();
            info!(
                mean_us = stats.mean_us,
                p50_us = stats.p50_us,
                p95_us = stats.p95_us,
                max_us = stats.max_us,
                "Prediction latency (us)"
            );

            let predicted = self.predicted_days.read().unwrap();
            let min = predicted.iter().copied().fold(f64::INFINITY, f64::min);
            let max = predicted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = predicted.iter().sum::<f64>() / predicted.len() as f64;
            info!(
                min_days = format!("{:.2}", min),
                mean_days = format!("{:.2}", mean),
                max_days = format!("{:.2}", max),
                "Predicted delivery times"
            );
        }
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Latency statistics
#[derive(Debug, Default)]
pub struct LatencyStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub max_us: u64,
}
