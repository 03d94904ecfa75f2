//! Line layouts used by the console and file sinks
//!
//! - Text: `2025-01-08T10:30:45.123Z [info] src/main.rs:42:main Server started`
//! - Json: one JSON object per line
//! - Logfmt: `timestamp=... level=info ... message="Server started"`

use super::error::Result;
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineFormat {
    #[default]
    Text,
    Json,
    Logfmt,
}

impl LineFormat {
    /// Render `record` as a single line, without the trailing newline.
    ///
    /// Fails only when `timestamp_format` is a malformed custom pattern.
    pub fn render(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> Result<String> {
        match self {
            LineFormat::Text => render_text(record, timestamp_format, &record.level.to_string()),
            LineFormat::Json => render_json(record, timestamp_format),
            LineFormat::Logfmt => render_logfmt(record, timestamp_format),
        }
    }
}

/// Text layout with a caller-supplied level label (the console sink passes
/// a colored one).
pub(crate) fn render_text(
    record: &LogRecord,
    timestamp_format: &TimestampFormat,
    level_label: &str,
) -> Result<String> {
    Ok(format!(
        "{} [{}] {}:{}:{} {}",
        timestamp_format.format(&record.timestamp)?,
        level_label,
        record.file,
        record.line,
        record.function,
        escape_control(&record.message)
    ))
}

/// Replace newlines, carriage returns and tabs with escape sequences so one
/// record always renders as one line.
pub(crate) fn escape_control(message: &str) -> String {
    if !message.contains(['\n', '\r', '\t']) {
        return message.to_string();
    }
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn render_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> Result<String> {
    let timestamp = if timestamp_format.is_numeric() {
        serde_json::Value::from(record.timestamp.timestamp_millis())
    } else {
        serde_json::Value::String(timestamp_format.format(&record.timestamp)?)
    };

    Ok(serde_json::json!({
        "timestamp": timestamp,
        "level": record.level,
        "file": record.file,
        "line": record.line,
        "function": record.qualified_function,
        "module": record.module_path,
        "thread": record.thread_label(),
        "message": record.message,
    })
    .to_string())
}

fn render_logfmt(record: &LogRecord, timestamp_format: &TimestampFormat) -> Result<String> {
    let pairs = [
        ("timestamp", timestamp_format.format(&record.timestamp)?),
        ("level", record.level.to_string()),
        ("source", format!("{}:{}", record.file, record.line)),
        ("function", record.function.to_string()),
        ("thread", record.thread_label().to_string()),
    ];

    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(key);
        out.push('=');
        out.push_str(&logfmt_value(&value));
        out.push(' ');
    }
    // The message is always quoted so it stays a single token.
    out.push_str("message=");
    out.push_str(&quote_logfmt(&escape_control(&record.message)));
    Ok(out)
}

fn logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=']) {
        quote_logfmt(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
