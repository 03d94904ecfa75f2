//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use super::error::LoggerError;

/// Severity of a message, or threshold of a logger.
///
/// Levels are totally ordered: `All < Trace < Info < Warning < Error <
/// Critical < Fatal < Off`. `All` is the lowest severity a message can carry
/// and, as a threshold, accepts everything. `Off` is only meaningful as a
/// threshold and accepts nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    All = 1,
    Trace = 32,
    #[default]
    Info = 64,
    Warning = 96,
    Error = 128,
    Critical = 160,
    Fatal = 192,
    Off = 255,
}

impl LogLevel {
    /// Every level in ascending order, `Off` included.
    pub const ALL_LEVELS: [LogLevel; 8] = [
        LogLevel::All,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    pub const fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "all",
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::Fatal => "fatal",
            LogLevel::Off => "off",
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`LogLevel::as_u8`].
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(LogLevel::All),
            32 => Some(LogLevel::Trace),
            64 => Some(LogLevel::Info),
            96 => Some(LogLevel::Warning),
            128 => Some(LogLevel::Error),
            160 => Some(LogLevel::Critical),
            192 => Some(LogLevel::Fatal),
            255 => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// Whether calls at this level were stripped by a `disable-*` cargo
    /// feature. Evaluates to a constant for a constant level.
    #[inline(always)]
    pub const fn is_disabled_at_build(self) -> bool {
        if cfg!(feature = "disable-all-logging") {
            return true;
        }
        match self {
            LogLevel::Trace => cfg!(feature = "disable-trace"),
            LogLevel::Info => cfg!(feature = "disable-info"),
            LogLevel::Warning => cfg!(feature = "disable-warning"),
            LogLevel::Error => cfg!(feature = "disable-error"),
            LogLevel::Critical => cfg!(feature = "disable-critical"),
            LogLevel::Fatal => cfg!(feature = "disable-fatal"),
            LogLevel::All | LogLevel::Off => false,
        }
    }

    /// Read a level from an environment variable.
    ///
    /// Returns `Ok(None)` when the variable is unset and an error when it
    /// holds something that is not a level name.
    pub fn from_env(var: &str) -> Result<Option<Self>, LoggerError> {
        match std::env::var(var) {
            Ok(value) => value.trim().parse().map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(LoggerError::InvalidLevel(format!(
                "{} is not valid unicode",
                var
            ))),
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::All | LogLevel::Trace => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => Magenta,
            LogLevel::Fatal | LogLevel::Off => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LogLevel::All),
            "trace" => Ok(LogLevel::Trace),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            "fatal" => Ok(LogLevel::Fatal),
            "off" => Ok(LogLevel::Off),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// A `LogLevel` that can be read and replaced through a shared reference.
#[derive(Debug)]
pub struct AtomicLogLevel(AtomicU8);

impl AtomicLogLevel {
    pub const fn new(level: LogLevel) -> Self {
        Self(AtomicU8::new(level.as_u8()))
    }

    #[inline]
    pub fn load(&self) -> LogLevel {
        // Only values written by `store` ever reach the cell.
        LogLevel::from_u8(self.0.load(Ordering::Acquire)).unwrap_or(LogLevel::Off)
    }

    #[inline]
    pub fn store(&self, level: LogLevel) {
        self.0.store(level.as_u8(), Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_total() {
        for pair in LogLevel::ALL_LEVELS.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_parse_accepts_aliases_and_case() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("Critical".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_u8_roundtrip() {
        for level in LogLevel::ALL_LEVELS {
            assert_eq!(LogLevel::from_u8(level.as_u8()), Some(level));
        }
        assert_eq!(LogLevel::from_u8(7), None);
    }

    #[test]
    fn test_atomic_level() {
        let level = AtomicLogLevel::new(LogLevel::Info);
        assert_eq!(level.load(), LogLevel::Info);
        level.store(LogLevel::Off);
        assert_eq!(level.load(), LogLevel::Off);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:<8}|", LogLevel::Info), "info    |");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LogLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(back, LogLevel::Warning);
    }

    #[cfg(not(any(feature = "disable-all-logging", feature = "disable-trace")))]
    #[test]
    fn test_trace_enabled_by_default_build() {
        assert!(!LogLevel::Trace.is_disabled_at_build());
        assert!(!LogLevel::All.is_disabled_at_build());
    }
}
