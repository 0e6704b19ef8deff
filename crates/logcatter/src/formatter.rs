//! Renders records into colored Logcat-style lines

use chrono::{DateTime, Local};

use crate::level::Level;
use crate::record::Record;

// ANSI sequences, one per severity. VERBOSE and DEBUG share the neutral
// grey, which doubles as the reset sequence.
const GREY: &str = "\x1b[37;20m";
const GREEN: &str = "\x1b[32;20m";
const YELLOW: &str = "\x1b[33;20m";
const RED: &str = "\x1b[31;20m";
const BOLD_RED: &str = "\x1b[31;1m";

/// Renders one record as
/// `<color><timestamp> [<letter>/<tag>] <message><reset>`, followed by the
/// error block and the stack block when present, each wrapped in its own
/// color/reset pair.
#[derive(Debug, Clone, Default)]
pub struct LogFormatter {
    datefmt: Option<String>,
}

impl LogFormatter {
    pub fn new() -> Self {
        Self { datefmt: None }
    }

    /// Uses a custom `chrono` format string instead of the default
    /// `YYYY-MM-DD HH:MM:SS mmm` timestamp.
    pub fn with_datefmt(datefmt: impl Into<String>) -> Self {
        Self {
            datefmt: Some(datefmt.into()),
        }
    }

    /// Escape sequence for a severity.
    pub const fn color(level: Level) -> &'static str {
        match level {
            Level::Verbose | Level::Debug => GREY,
            Level::Info => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
            Level::Fatal => BOLD_RED,
        }
    }

    /// The reset sequence appended after every colored segment.
    pub const fn reset() -> &'static str {
        GREY
    }

    pub fn format(&self, record: &Record<'_>) -> String {
        let color = Self::color(record.level());
        let reset = Self::reset();
        let asctime = self.format_time(record.timestamp());
        let mut result = format!(
            "{color}{asctime} [{}/{}] {}{reset}",
            record.level().letter(),
            record.tag(),
            record.message(),
        );
        if let Some(exc_text) = record.exception_text() {
            if !exc_text.is_empty() {
                if !result.ends_with('\n') {
                    result.push('\n');
                }
                result.push_str(color);
                result.push_str(exc_text);
                result.push_str(reset);
            }
        }
        if let Some(stack) = record.stack() {
            if !result.ends_with('\n') {
                result.push('\n');
            }
            result.push_str(color);
            result.push_str(stack);
            result.push_str(reset);
        }
        result
    }

    fn format_time(&self, timestamp: &DateTime<Local>) -> String {
        match &self.datefmt {
            Some(datefmt) => timestamp.format(datefmt).to_string(),
            None => format!(
                "{} {:03}",
                timestamp.format("%Y-%m-%d %H:%M:%S"),
                timestamp.timestamp_subsec_millis(),
            ),
        }
    }
}
