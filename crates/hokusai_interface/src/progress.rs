//! Progress reporting seam.

/// Observer for run progress.
///
/// Purely observational: implementations receive a status line and an
/// integer percentage (0-100, monotonically non-decreasing within a run)
/// and must never influence orchestrator decisions. Reporting is synchronous
/// and should be cheap; UIs that need async delivery should hand off
/// internally.
pub trait ProgressSink: Send + Sync {
    /// Record a status line and progress percentage.
    fn report(&self, percent: u8, status: &str);
}

/// A sink that discards all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _percent: u8, _status: &str) {}
}

/// A sink that forwards progress updates to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&self, percent: u8, status: &str) {
        tracing::info!(percent, status, "progress");
    }
}
