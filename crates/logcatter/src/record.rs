//! A single dispatched log event

use std::error::Error;

use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;

use crate::level::Level;

/// One log event as seen by the formatter and the handlers.
///
/// A multi-line facade call produces one record per physical line; only the
/// record for the final line carries the error payload and the stack text.
pub struct Record<'a> {
    level: Level,
    tag: &'a str,
    message: &'a str,
    timestamp: DateTime<Local>,
    exception: Option<&'a (dyn Error + 'static)>,
    exc_text: OnceCell<String>,
    stack: Option<String>,
}

impl<'a> Record<'a> {
    /// Creates a record stamped with the current local time.
    pub fn new(level: Level, tag: &'a str, message: &'a str) -> Self {
        Self {
            level,
            tag,
            message,
            timestamp: Local::now(),
            exception: None,
            exc_text: OnceCell::new(),
            stack: None,
        }
    }

    /// Overrides the timestamp, so lines split from one message share it.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attaches an error to be rendered after the message line.
    pub fn with_exception(mut self, exception: &'a (dyn Error + 'static)) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Attaches pre-captured call-stack text.
    pub fn with_stack(mut self, stack: String) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// File name of the call site, used as the line tag.
    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn message(&self) -> &str {
        self.message
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// Captured call-stack text, if requested by the caller.
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Rendered text for the attached error, if any.
    ///
    /// The error's display output and its `source()` chain are rendered
    /// once and cached, so a record passed through several handlers pays
    /// the formatting cost a single time.
    pub fn exception_text(&self) -> Option<&str> {
        self.exception
            .map(|e| self.exc_text.get_or_init(|| render_error(e)).as_str())
    }
}

/// Captures the current call stack as display text.
pub(crate) fn capture_stack() -> String {
    let backtrace = std::backtrace::Backtrace::force_capture();
    backtrace.to_string().trim_end().to_string()
}

fn render_error(err: &(dyn Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str("\nCaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug)]
    struct RootError;

    impl fmt::Display for RootError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "root cause")
        }
    }

    impl Error for RootError {}

    #[derive(Debug)]
    struct WrappedError(RootError);

    impl fmt::Display for WrappedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl Error for WrappedError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[derive(Debug)]
    struct CountingError(Cell<u32>);

    impl fmt::Display for CountingError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            write!(f, "boom")
        }
    }

    impl Error for CountingError {}

    #[test]
    fn test_record_without_exception_has_no_text() {
        let record = Record::new(Level::Info, "main.rs", "hello");
        assert!(record.exception_text().is_none());
        assert!(record.stack().is_none());
    }

    #[test]
    fn test_exception_text_includes_source_chain() {
        let err = WrappedError(RootError);
        let record = Record::new(Level::Error, "main.rs", "boom").with_exception(&err);
        let text = record.exception_text().unwrap();
        assert_eq!(text, "request failed\nCaused by: root cause");
    }

    #[test]
    fn test_exception_text_is_rendered_once() {
        let err = CountingError(Cell::new(0));
        let record = Record::new(Level::Error, "main.rs", "boom").with_exception(&err);
        let first = record.exception_text().unwrap().to_string();
        let second = record.exception_text().unwrap().to_string();
        assert_eq!(first, second);
        assert_eq!(err.0.get(), 1);
    }

    #[test]
    fn test_capture_stack_is_nonempty() {
        let stack = capture_stack();
        assert!(!stack.is_empty());
        assert!(!stack.ends_with('\n'));
    }
}
