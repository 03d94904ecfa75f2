//! Timestamp formatting for rendered log lines

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How a sink renders a record's timestamp.
///
/// # Examples
///
/// ```
/// use rust_sink_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Iso8601.format(&Utc::now()).unwrap();
/// assert!(rendered.ends_with('Z'));
///
/// assert!(TimestampFormat::custom("%H:%M:%S").is_ok());
/// assert!(TimestampFormat::custom("%Q").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// UTC with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Local wall-clock time with milliseconds and no offset:
    /// `2025-01-08T11:30:45.123`
    LocalTime,

    /// Milliseconds since the Unix epoch: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible pattern, applied to UTC
    Custom(String),
}

impl TimestampFormat {
    /// A [`TimestampFormat::Custom`] whose pattern has been checked.
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::format(pattern, "invalid timestamp pattern"));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    /// Render `datetime`. Only a malformed `Custom` pattern can fail.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let rendered = match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => {
                datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, false)
            }
            TimestampFormat::LocalTime => datetime
                .with_timezone(&Local)
                .format("%Y-%m-%dT%H:%M:%S%.3f")
                .to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    LoggerError::format(pattern.as_str(), "invalid timestamp pattern")
                })?;
                out
            }
        };
        Ok(rendered)
    }

    /// Whether the rendering is a bare number (JSON output emits it unquoted)
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(
            TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap(),
            "2025-01-08T10:30:45.123Z"
        );
    }

    #[test]
    fn test_iso8601_micros() {
        assert_eq!(
            TimestampFormat::Iso8601Micros.format(&fixed_datetime()).unwrap(),
            "2025-01-08T10:30:45.123456Z"
        );
    }

    #[test]
    fn test_rfc3339_keeps_offset() {
        assert_eq!(
            TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap(),
            "2025-01-08T10:30:45.123+00:00"
        );
    }

    #[test]
    fn test_local_time_has_no_offset() {
        let rendered = TimestampFormat::LocalTime.format(&fixed_datetime()).unwrap();
        assert_eq!(rendered.len(), "2025-01-08T10:30:45.123".len());
        assert!(rendered.ends_with(".123"));
    }

    #[test]
    fn test_unix_millis() {
        let rendered = TimestampFormat::UnixMillis.format(&fixed_datetime()).unwrap();
        assert_eq!(rendered, "1736332245123");
        assert!(TimestampFormat::UnixMillis.is_numeric());
        assert!(!TimestampFormat::Iso8601.is_numeric());
    }

    #[test]
    fn test_custom() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_invalid_custom_pattern_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::Format { ref spec, .. } if spec == "%Q"));
    }

    #[test]
    fn test_custom_constructor_validates() {
        assert_eq!(
            TimestampFormat::custom("%Y").unwrap(),
            TimestampFormat::Custom("%Y".to_string())
        );
        assert!(matches!(
            TimestampFormat::custom("%Y-%Q"),
            Err(LoggerError::Format { .. })
        ));
    }
}
