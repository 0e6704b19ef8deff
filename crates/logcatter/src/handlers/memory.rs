//! In-memory capturing handler

use parking_lot::Mutex;

use crate::formatter::LogFormatter;
use crate::handlers::traits::Handler;
use crate::record::Record;

/// Captures formatted lines in memory instead of writing them anywhere.
///
/// Useful for tests that assert on rendered output without touching stderr.
#[derive(Debug, Default)]
pub struct MemoryHandler {
    formatter: LogFormatter,
    lines: Mutex<Vec<String>>,
}

impl MemoryHandler {
    /// Creates an empty capturing handler with the default formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a capturing handler with a specific formatter.
    pub fn with_formatter(formatter: LogFormatter) -> Self {
        Self {
            formatter,
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the captured output, one entry per record.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drains and returns the captured output.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Handler for MemoryHandler {
    fn emit(&self, record: &Record<'_>) {
        self.lines.lock().push(self.formatter.format(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_memory_handler_captures_in_order() {
        let handler = MemoryHandler::new();
        assert!(handler.is_empty());

        handler.emit(&Record::new(Level::Info, "memory.rs", "first"));
        handler.emit(&Record::new(Level::Warning, "memory.rs", "second"));

        let lines = handler.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[I/memory.rs] first"));
        assert!(lines[1].contains("[W/memory.rs] second"));
    }

    #[test]
    fn test_take_drains_captured_lines() {
        let handler = MemoryHandler::new();
        handler.emit(&Record::new(Level::Debug, "memory.rs", "once"));
        assert_eq!(handler.take().len(), 1);
        assert!(handler.is_empty());
    }
}
