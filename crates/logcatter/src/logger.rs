//! The process-wide logging engine

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::handlers::{BoxedHandler, StreamHandler};
use crate::level::{Level, Threshold};
use crate::record::Record;

/// Name of the process-wide logger.
pub const LOGCAT: &str = "logcat";

/// Plain configuration record for constructing a [`Logger`].
#[derive(Debug, Clone)]
pub struct LogcatConfig {
    pub name: &'static str,
    /// Initial severity cutoff. Defaults to the most permissive level.
    pub level: Level,
}

impl Default for LogcatConfig {
    fn default() -> Self {
        Self {
            name: LOGCAT,
            level: Level::Verbose,
        }
    }
}

/// A named logger holding a severity threshold and a set of handler sinks.
///
/// Records below the threshold are dropped before any formatting happens.
/// Dispatch to handlers is serialized by a lock, so two concurrent records
/// never interleave within a rendered line.
pub struct Logger {
    name: &'static str,
    level: AtomicU8,
    handlers: Mutex<Vec<BoxedHandler>>,
}

impl Logger {
    pub fn new(config: LogcatConfig) -> Self {
        Self {
            name: config.name,
            level: AtomicU8::new(config.level.value()),
            handlers: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Current severity cutoff.
    pub fn level(&self) -> Threshold {
        Threshold::from(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, threshold: impl Into<Threshold>) {
        self.level.store(threshold.into().value(), Ordering::Relaxed);
    }

    /// Whether a message at `level` would currently be dispatched.
    pub fn enabled(&self, level: Level) -> bool {
        self.level().allows(level)
    }

    pub fn has_handlers(&self) -> bool {
        !self.handlers.lock().is_empty()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn add_handler(&self, handler: BoxedHandler) {
        self.handlers.lock().push(handler);
    }

    /// Removes every handler. The global logger re-installs its default
    /// stderr handler on the next [`global`] access.
    pub fn clear_handlers(&self) {
        self.handlers.lock().clear();
    }

    /// Installs the default stderr handler when no handler is registered.
    ///
    /// Idempotence is keyed on observable state (a handler being present)
    /// rather than a did-init flag, so it survives external handler churn.
    fn ensure_default_handler(&self) {
        let mut handlers = self.handlers.lock();
        if handlers.is_empty() {
            handlers.push(Box::new(StreamHandler::new()));
        }
    }

    /// Dispatches one record to every handler, unless it falls below the
    /// current threshold.
    pub fn handle(&self, record: &Record<'_>) {
        if !self.enabled(record.level()) {
            return;
        }
        let handlers = self.handlers.lock();
        for handler in handlers.iter() {
            handler.emit(record);
        }
    }
}

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(LogcatConfig::default()));

/// The process-wide singleton logger.
///
/// The first call installs a [`StreamHandler`] writing to stderr; later
/// calls return the same instance untouched unless its handler list has
/// been emptied in the meantime.
pub fn global() -> &'static Logger {
    let logger = &*LOGGER;
    logger.ensure_default_handler();
    logger
}
