//! Threshold evaluation and check outcome.
//!
//! Evaluates the deduced queue backlog against warning/critical thresholds
//! and carries the result to the process exit code. A threshold of zero
//! disables that level; a count strictly greater than an active threshold
//! triggers it. Critical is evaluated after warning and takes precedence.

use colored::Colorize;

use crate::core::analyzer::QueueMetrics;

/// Check outcome, in ascending severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl CheckStatus {
    /// Conventional monitoring exit code: OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
            CheckStatus::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
            CheckStatus::Unknown => "UNKNOWN",
        }
    }

    fn colorized(self) -> colored::ColoredString {
        match self {
            CheckStatus::Ok => self.as_str().green(),
            CheckStatus::Warning => self.as_str().yellow(),
            CheckStatus::Critical => self.as_str().red().bold(),
            CheckStatus::Unknown => self.as_str().normal(),
        }
    }
}

/// Warning/critical thresholds; zero disables a level
#[derive(Debug, Clone, Copy)]
pub struct Monitor {
    warning: i64,
    critical: i64,
}

impl Monitor {
    pub fn new(warning: i64, critical: i64) -> Self {
        Self { warning, critical }
    }

    fn has_warning(&self) -> bool {
        self.warning != 0
    }

    fn check_warning(&self, count: i64) -> bool {
        self.has_warning() && count > self.warning
    }

    fn has_critical(&self) -> bool {
        self.critical != 0
    }

    fn check_critical(&self, count: i64) -> bool {
        self.has_critical() && count > self.critical
    }

    /// Evaluate the deduced backlog count against both thresholds
    pub fn evaluate(&self, count: i64) -> CheckStatus {
        let mut status = CheckStatus::Ok;
        if self.check_warning(count) {
            status = CheckStatus::Warning;
        }
        if self.check_critical(count) {
            status = CheckStatus::Critical;
        }
        status
    }
}

/// Final outcome of one check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn new(status: CheckStatus, message: String) -> Self {
        Self { status, message }
    }

    /// Evaluate analyzer metrics into a reportable outcome
    pub fn from_metrics(metrics: &QueueMetrics, monitor: &Monitor) -> Self {
        let queue = metrics.total_queue();
        let exclude = metrics.excluded_sum();
        let count = metrics.count();

        let status = monitor.evaluate(count);
        let message = format!("count: {} (queue: {}, exclude: {})", count, queue, exclude);
        Self { status, message }
    }

    /// One-line summary, status word colorized for terminals
    pub fn summary(&self) -> String {
        format!("Postqueue {}: {}", self.status.colorized(), self.message)
    }
}
