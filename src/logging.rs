//! Logging capability handed to scrapers
//!
//! Scrapers never reach for a process-wide logger. They get a `ScraperLogger`
//! at construction; the default forwards to `tracing` with the scraper's
//! prefix attached as a field.

/// A logging sink for scraper diagnostics
pub trait ScraperLogger {
    /// Logs a diagnostic message that is only interesting while debugging
    fn debug(&self, message: &str);

    /// Logs a message the user should see
    fn warning(&self, message: &str);
}

/// Forwards scraper messages to `tracing`
#[derive(Debug, Clone)]
pub struct TracingLogger {
    prefix: String,
}

impl TracingLogger {
    /// Creates a logger that tags every event with the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ScraperLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(scraper = %self.prefix, "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(scraper = %self.prefix, "{}", message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl ScraperLogger for NullLogger {
    fn debug(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}
}
