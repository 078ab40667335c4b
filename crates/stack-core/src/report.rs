//! Operator-facing reporting
//!
//! The engine never talks to a global logger directly; it is handed a
//! [`Reporter`] so tests can capture what an operator would have seen.

/// Severity of a reported message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// Sink for operator-facing messages.
pub trait Reporter {
    fn report(&self, severity: Severity, message: &str);

    fn debug(&self, message: &str) {
        self.report(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn critical(&self, message: &str) {
        self.report(Severity::Critical, message);
    }
}

/// Forwards messages to `tracing` under the `sync_tool` target.
///
/// `tracing` has no critical level, so critical messages are emitted as
/// errors carrying a `CRITICAL:` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "sync_tool", "{}", message),
            Severity::Info => tracing::info!(target: "sync_tool", "{}", message),
            Severity::Critical => {
                tracing::error!(target: "sync_tool", "{}: {}", severity.label(), message)
            }
        }
    }
}
