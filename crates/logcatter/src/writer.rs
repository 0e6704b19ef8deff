//! `io::Write` adapter that redirects line output into the logger

use std::io;

use crate::level::Level;
use crate::logger;
use crate::record::Record;

/// Turns a byte stream into per-line log records.
///
/// Created by [`Log::writer`](crate::Log::writer). Each completed line is
/// dispatched at the chosen level through the process-wide logger; an
/// unterminated trailing line is flushed when the writer is dropped.
/// Non-UTF-8 input is decoded lossily.
pub struct LogWriter {
    level: Level,
    tag: String,
    buf: Vec<u8>,
}

impl LogWriter {
    pub(crate) fn new(level: Level, tag: String) -> Self {
        Self {
            level,
            tag,
            buf: Vec::new(),
        }
    }

    fn emit(&self, line: &[u8]) {
        let message = String::from_utf8_lossy(line);
        let record = Record::new(self.level, &self.tag, &message);
        logger::global().handle(&record);
    }

    fn drain_complete_lines(&mut self) {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            self.emit(&line[..line.len() - 1]);
        }
    }
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        self.drain_complete_lines();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            let rest = std::mem::take(&mut self.buf);
            self.emit(&rest);
        }
    }
}
