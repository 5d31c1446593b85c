//! Log lines tagged with the component that emitted them.

use std::error::Error;
use std::time::Instant;

use tracing::{debug, warn};

/// Prefixes every message with a fixed component label, e.g. `YAHOO: ...`.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    component: &'static str,
}

impl Logger {
    pub const fn new(component: &'static str) -> Self {
        Self { component }
    }

    fn line(&self, message: &str) -> String {
        format!("{}: {}", self.component, message)
    }

    pub fn debug(&self, message: &str) {
        debug!("{}", self.line(message));
    }

    pub fn warn(&self, message: &str) {
        warn!("{}", self.line(message));
    }

    pub fn warn_with_error(&self, message: &str, error: &dyn Error) {
        warn!(error = %error, "{}", self.line(message));
    }
}

/// Wall-clock span of one unit of work.
pub struct Timer {
    label: &'static str,
    started: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn log_elapsed(&self) {
        debug!(elapsed_ms = self.elapsed_ms(), "{} finished", self.label);
    }
}
