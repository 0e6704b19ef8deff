//! Severity levels and logger thresholds

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log message, ordered from least to most severe.
///
/// The numeric scale follows the Logcat convention: VERBOSE sits below
/// DEBUG at 5, the remaining levels use the familiar 10..50 steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Verbose = 5,
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Fatal = 50,
}

impl Level {
    /// Numeric value of this level.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Upper-case name of this level.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Single-letter tag used in rendered lines (`V`, `D`, `I`, `W`, `E`, `F`).
    pub const fn letter(self) -> char {
        match self {
            Level::Verbose => 'V',
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warning => 'W',
            Level::Error => 'E',
            Level::Fatal => 'F',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a level name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level: {0:?}")]
pub struct LevelParseError(pub String);

impl FromStr for Level {
    type Err = LevelParseError;

    /// Case-insensitive. Accepts the six canonical names plus the common
    /// aliases `warn` and `critical`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Level::Verbose),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" | "critical" => Ok(Level::Fatal),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

/// Minimum-severity cutoff held by a logger.
///
/// Unlike [`Level`], a threshold can sit above [`Level::Fatal`], which
/// silences the logger entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Threshold strictly above FATAL; drops every message.
    pub const SILENT: Threshold = Threshold(Level::Fatal as u8 + 1);

    /// Numeric value of this threshold.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether a message at `level` passes this cutoff.
    pub const fn allows(self, level: Level) -> bool {
        level as u8 >= self.0
    }
}

impl From<Level> for Threshold {
    fn from(level: Level) -> Self {
        Threshold(level as u8)
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Threshold(value)
    }
}

impl FromStr for Threshold {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Level>().map(Threshold::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Verbose < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_letters() {
        let letters: Vec<char> = [
            Level::Verbose,
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ]
        .iter()
        .map(|l| l.letter())
        .collect();
        assert_eq!(letters, vec!['V', 'D', 'I', 'W', 'E', 'F']);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("VERBOSE".parse::<Level>().unwrap(), Level::Verbose);
        assert_eq!("DeBuG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("critical".parse::<Level>().unwrap(), Level::Fatal);
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert_eq!(err, LevelParseError("loud".to_string()));
        assert!(err.to_string().contains("unknown level"));
    }

    #[test]
    fn test_display_round_trips() {
        for level in [
            Level::Verbose,
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ] {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_threshold_allows_at_boundary() {
        let threshold = Threshold::from(Level::Warning);
        assert!(!threshold.allows(Level::Info));
        assert!(threshold.allows(Level::Warning));
        assert!(threshold.allows(Level::Error));
    }

    #[test]
    fn test_silent_threshold_drops_fatal() {
        assert!(!Threshold::SILENT.allows(Level::Fatal));
        assert!(Threshold::SILENT > Threshold::from(Level::Fatal));
    }

    #[test]
    fn test_threshold_from_raw_value() {
        let threshold = Threshold::from(25u8);
        assert!(!threshold.allows(Level::Info));
        assert!(threshold.allows(Level::Warning));
    }
}
