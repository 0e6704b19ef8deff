//! Static Logcat-style logging interface

use std::error::Error;
use std::panic::Location;
use std::path::Path;

use chrono::Local;

use crate::level::{Level, LevelParseError, Threshold};
use crate::logger::{self, Logger};
use crate::record::{capture_stack, Record};
use crate::writer::LogWriter;

/// Options recognized by the `*_with` entry points.
///
/// Enumerates the extras a call can attach: an error payload rendered after
/// the final message line, and a request to capture the current call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions<'a> {
    pub exception: Option<&'a (dyn Error + 'static)>,
    pub stack: bool,
}

impl<'a> LogOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an error to be rendered after the final message line.
    pub fn exception(mut self, exception: &'a (dyn Error + 'static)) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Requests the current call stack be appended to the final line.
    pub fn stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }
}

/// The static logging surface.
///
/// Mirrors Android's `Log` class: [`Log::d`], [`Log::i`], [`Log::w`], ...
/// write colored, timestamped lines tagged with the calling file name,
/// through one process-wide logger. No setup call is required.
///
/// A multi-line message is split and dispatched line by line, so when two
/// threads log at the same time their lines may interleave. Whole-message
/// atomicity is intentionally not provided.
pub struct Log;

impl Log {
    pub const VERBOSE: Level = Level::Verbose;
    pub const DEBUG: Level = Level::Debug;
    pub const INFO: Level = Level::Info;
    pub const WARNING: Level = Level::Warning;
    pub const ERROR: Level = Level::Error;
    pub const FATAL: Level = Level::Fatal;

    /// Returns the process-wide logger, initializing its stderr handler on
    /// first use.
    pub fn logger() -> &'static Logger {
        logger::global()
    }

    /// Sets the minimum severity. Messages below it are dropped before any
    /// formatting cost is paid.
    pub fn set_level(threshold: impl Into<Threshold>) {
        Self::logger().set_level(threshold);
    }

    /// Sets the minimum severity by case-insensitive name
    /// (`"verbose"`, `"debug"`, `"info"`, `"warning"`, `"error"`, `"fatal"`).
    pub fn set_level_name(name: &str) -> Result<(), LevelParseError> {
        let threshold: Threshold = name.parse()?;
        Self::logger().set_level(threshold);
        Ok(())
    }

    /// Whether the current threshold admits VERBOSE messages.
    pub fn is_verbose() -> bool {
        Self::logger().level() <= Threshold::from(Level::Verbose)
    }

    /// Whether the current threshold is WARNING or above.
    pub fn is_quiet() -> bool {
        Self::logger().level() >= Threshold::from(Level::Warning)
    }

    /// Whether every message, FATAL included, is currently dropped.
    pub fn is_silent() -> bool {
        Self::logger().level() > Threshold::from(Level::Fatal)
    }

    /// Logs a message with the VERBOSE level.
    #[track_caller]
    pub fn v(msg: impl AsRef<str>) {
        Self::log(Level::Verbose, msg.as_ref(), LogOptions::new());
    }

    /// Logs a message with the DEBUG level.
    #[track_caller]
    pub fn d(msg: impl AsRef<str>) {
        Self::log(Level::Debug, msg.as_ref(), LogOptions::new());
    }

    /// Logs a message with the INFO level.
    #[track_caller]
    pub fn i(msg: impl AsRef<str>) {
        Self::log(Level::Info, msg.as_ref(), LogOptions::new());
    }

    /// Logs a message with the WARNING level.
    #[track_caller]
    pub fn w(msg: impl AsRef<str>) {
        Self::log(Level::Warning, msg.as_ref(), LogOptions::new());
    }

    /// Logs a message with the ERROR level.
    #[track_caller]
    pub fn e(msg: impl AsRef<str>) {
        Self::log(Level::Error, msg.as_ref(), LogOptions::new());
    }

    /// Logs a message with the FATAL level.
    #[track_caller]
    pub fn f(msg: impl AsRef<str>) {
        Self::log(Level::Fatal, msg.as_ref(), LogOptions::new());
    }

    /// Logs at VERBOSE with an error payload or stack capture attached.
    #[track_caller]
    pub fn v_with(msg: impl AsRef<str>, opts: LogOptions<'_>) {
        Self::log(Level::Verbose, msg.as_ref(), opts);
    }

    /// Logs at DEBUG with an error payload or stack capture attached.
    #[track_caller]
    pub fn d_with(msg: impl AsRef<str>, opts: LogOptions<'_>) {
        Self::log(Level::Debug, msg.as_ref(), opts);
    }

    /// Logs at INFO with an error payload or stack capture attached.
    #[track_caller]
    pub fn i_with(msg: impl AsRef<str>, opts: LogOptions<'_>) {
        Self::log(Level::Info, msg.as_ref(), opts);
    }

    /// Logs at WARNING with an error payload or stack capture attached.
    #[track_caller]
    pub fn w_with(msg: impl AsRef<str>, opts: LogOptions<'_>) {
        Self::log(Level::Warning, msg.as_ref(), opts);
    }

    /// Logs at ERROR with an error payload or stack capture attached.
    #[track_caller]
    pub fn e_with(msg: impl AsRef<str>, opts: LogOptions<'_>) {
        Self::log(Level::Error, msg.as_ref(), opts);
    }

    /// Logs at FATAL with an error payload or stack capture attached.
    #[track_caller]
    pub fn f_with(msg: impl AsRef<str>, opts: LogOptions<'_>) {
        Self::log(Level::Fatal, msg.as_ref(), opts);
    }

    /// Logs `msg` at `level`, splitting on newlines; each physical line is
    /// dispatched as its own record at the same severity. The error payload
    /// and the captured stack attach only to the final line's record, the
    /// preceding lines carry neither.
    #[track_caller]
    pub fn log(level: Level, msg: &str, opts: LogOptions<'_>) {
        let logger = Self::logger();
        if !logger.enabled(level) {
            return;
        }
        let tag = caller_tag(Location::caller());
        let timestamp = Local::now();
        let mut stack = if opts.stack {
            Some(capture_stack())
        } else {
            None
        };
        let mut lines = msg.split('\n').peekable();
        while let Some(line) = lines.next() {
            let last = lines.peek().is_none();
            let mut record = Record::new(level, tag, line).with_timestamp(timestamp);
            if last {
                if let Some(exception) = opts.exception {
                    record = record.with_exception(exception);
                }
                if let Some(stack) = stack.take() {
                    record = record.with_stack(stack);
                }
            }
            logger.handle(&record);
        }
    }

    /// Returns an [`io::Write`](std::io::Write) adapter that logs each
    /// completed line at `level`, tagged with this call site's file.
    #[track_caller]
    pub fn writer(level: Level) -> LogWriter {
        LogWriter::new(level, caller_tag(Location::caller()).to_string())
    }
}

/// File name of the caller, without its directory path.
fn caller_tag(location: &'static Location<'static>) -> &'static str {
    Path::new(location.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(location.file())
}

/// Logs at VERBOSE with format arguments, e.g. `log_v!("x={}", x)`.
#[macro_export]
macro_rules! log_v {
    ($($arg:tt)*) => {
        $crate::Log::v(format!($($arg)*))
    };
}

/// Logs at DEBUG with format arguments.
#[macro_export]
macro_rules! log_d {
    ($($arg:tt)*) => {
        $crate::Log::d(format!($($arg)*))
    };
}

/// Logs at INFO with format arguments.
#[macro_export]
macro_rules! log_i {
    ($($arg:tt)*) => {
        $crate::Log::i(format!($($arg)*))
    };
}

/// Logs at WARNING with format arguments.
#[macro_export]
macro_rules! log_w {
    ($($arg:tt)*) => {
        $crate::Log::w(format!($($arg)*))
    };
}

/// Logs at ERROR with format arguments.
#[macro_export]
macro_rules! log_e {
    ($($arg:tt)*) => {
        $crate::Log::e(format!($($arg)*))
    };
}

/// Logs at FATAL with format arguments.
#[macro_export]
macro_rules! log_f {
    ($($arg:tt)*) => {
        $crate::Log::f(format!($($arg)*))
    };
}
