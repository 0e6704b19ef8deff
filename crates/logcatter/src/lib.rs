//! Logcatter
//!
//! An Android Logcat-style logging facade: zero configuration, colored,
//! timestamped, file-tagged output lines through one process-wide logger.
//!
//! ```
//! use logcatter::{Level, Log};
//!
//! Log::set_level(Level::Debug);
//! Log::d("starting up");
//! logcatter::log_i!("listening on {}", 8080);
//! ```
//!
//! Messages are tagged with the calling file's name and split on newlines,
//! one rendered line per physical line. Attach an error payload or a stack
//! capture through [`LogOptions`] and the `*_with` entry points.

pub mod level;
pub mod record;
pub mod formatter;
pub mod handlers;
pub mod logger;
pub mod log;
pub mod writer;

// Re-export commonly used types
pub use level::{Level, LevelParseError, Threshold};
pub use record::Record;
pub use formatter::LogFormatter;
pub use handlers::{BoxedHandler, Handler, MemoryHandler, StreamHandler};
pub use logger::{global, LogcatConfig, Logger, LOGCAT};
pub use log::{Log, LogOptions};
pub use writer::LogWriter;

// Tests that touch the process-wide logger serialize on this guard so they
// do not observe each other's handlers or thresholds.
#[cfg(test)]
pub(crate) mod testsupport {
    use parking_lot::Mutex;

    pub(crate) static GLOBAL_LOGGER_GUARD: Mutex<()> = Mutex::new(());
}
