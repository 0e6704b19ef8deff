//! Stderr stream handler

use std::io::Write;

use crate::formatter::LogFormatter;
use crate::handlers::traits::Handler;
use crate::record::Record;

/// Formats records and writes them to standard error.
#[derive(Debug, Clone, Default)]
pub struct StreamHandler {
    formatter: LogFormatter,
}

impl StreamHandler {
    /// Creates a stderr handler with the default formatter.
    pub fn new() -> Self {
        Self {
            formatter: LogFormatter::new(),
        }
    }

    /// Creates a stderr handler with a specific formatter.
    pub fn with_formatter(formatter: LogFormatter) -> Self {
        Self { formatter }
    }
}

impl Handler for StreamHandler {
    fn emit(&self, record: &Record<'_>) {
        // A closed stderr is not something the logging path can report.
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", self.formatter.format(record));
    }
}
