//! Engine run metrics.
//!
//! Collected by `Detector::run_with_metrics` and surfaced through
//! `detect_verbose`. The plain `Detector::run` path still measures (timing
//! three stages is cheap) but drops the numbers.

use crate::api::Detection;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Detector::run_with_metrics`](super::Detector::run_with_metrics).
    pub total: Duration,
    /// The browser rule chain.
    pub browser: BrowserStageMetrics,
    /// Platform table scan and Windows version extraction.
    pub platform: Duration,
    /// AOL marker scan.
    pub cobrand: Duration,
}

/// What happened while walking the browser rule chain.
#[derive(Debug, Default, Clone)]
pub struct BrowserStageMetrics {
    pub duration: Duration,
    /// Rules whose production was called.
    pub rules_evaluated: usize,
    /// Rules passed over because none of their triggers appear in the UA.
    pub rules_skipped: usize,
    /// Name of the rule that produced the browser, if any.
    pub matched_rule: Option<&'static str>,
}

/// Detector output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub detection: Detection,
    pub metrics: RunMetrics,
}
