//! Integration tests for the logger system
//!
//! These tests verify:
//! - File sink output and one-line-per-record rendering
//! - Fan-out delivery across real sinks
//! - Call-site metadata reaching the sink unchanged
//! - Error propagation from formatting and sinks
//! - Fatal handler behavior through the macro surface
//!
//! Nothing here changes the global level, which stays at `All`.

use parking_lot::Mutex;
use rust_sink_logger::prelude::*;
use rust_sink_logger::{critical, error, fatal, info, infof, logl, warning};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct Capture {
    records: Mutex<Vec<LogRecord>>,
}

impl Capture {
    fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }
}

impl Sink for Capture {
    fn deliver(&self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

/// Fails every delivery with an I/O error.
struct FailingSink {
    attempts: AtomicUsize,
}

impl Sink for FailingSink {
    fn deliver(&self, _record: &LogRecord) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk unplugged").into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[test]
fn test_file_logger_writes_filtered_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::new(
        "file",
        LogLevel::Warning,
        FileSink::new(&log_file).expect("Failed to create sink"),
    );

    info!(logger, "hidden").unwrap();
    warning!(logger, "low disk: ", 93, "%").unwrap();
    error!(logger, "write failed").unwrap();
    logger.flush().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[warning]"));
    assert!(lines[0].ends_with("low disk: 93%"));
    assert!(lines[1].contains("[error]"));
    assert!(!content.contains("hidden"));
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("injection_test.log");

    let logger = Logger::new("file", LogLevel::Info, FileSink::new(&log_file).unwrap());

    let malicious_message = "User login\nerror [2024-10-17] Fake error injected\ninfo Continuation";
    info!(logger, malicious_message).unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("\\n"));
    assert_eq!(content.lines().count(), 1, "Log should be a single line");
}

#[test]
fn test_record_fields_match_call_site() {
    let logger = Logger::new("capture", LogLevel::All, Capture::default());

    let expected_line = line!() + 1;
    critical!(logger, "located").unwrap();

    let records = logger.sink().records.lock();
    let record = &records[0];
    assert_eq!(record.line, expected_line);
    assert_eq!(record.file, file!());
    assert_eq!(record.function, "test_record_fields_match_call_site");
    assert!(record
        .qualified_function
        .ends_with("integration_tests::test_record_fields_match_call_site"));
    assert_eq!(record.module_path, module_path!());
    assert_eq!(record.level, LogLevel::Critical);
    assert_eq!(record.message, "located");
}

#[test]
fn test_explicit_location_is_kept_verbatim() {
    let logger = Logger::new("capture", LogLevel::All, Capture::default());
    let location = Location::new("generated/rules.rs", 9001, "rules", "rules::eval::step");

    logger.info(location, || "from a generator".to_string()).unwrap();

    let records = logger.sink().records.lock();
    assert_eq!(records[0].location(), location);
    assert_eq!(records[0].function, "step");
}

#[test]
fn test_explicit_function_name_reaches_sink() {
    let logger = Logger::new("capture", LogLevel::All, Capture::default());
    let location = Location::with_function("bindings/app.c", 77, "app", "app_main", "main");

    logger.warning(location, || "from bindings".to_string()).unwrap();

    let records = logger.sink().records.lock();
    assert_eq!(records[0].function, "main");
    assert_eq!(records[0].qualified_function, "app_main");
    assert_eq!(records[0].file, "bindings/app.c");
    assert_eq!(records[0].line, 77);
    assert_eq!(records[0].location(), location);
}

#[test]
fn test_fan_out_to_file_and_memory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("errors.log");

    let memory = Arc::new(Logger::new("memory", LogLevel::Info, Capture::default()));
    let errors = Logger::new("errors", LogLevel::Error, FileSink::new(&log_file).unwrap());

    let fan_out = MultiLogger::fan_out("app", LogLevel::All);
    fan_out.insert_logger(memory.clone()).unwrap();
    fan_out.insert_logger(errors.into_shared()).unwrap();

    info!(fan_out, "request served").unwrap();
    error!(fan_out, "request failed").unwrap();

    assert_eq!(memory.sink().messages(), ["request served", "request failed"]);
    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("request failed"));

    // Each child sees the very same record.
    let records = memory.sink().records.lock();
    assert_eq!(records[1].level, LogLevel::Error);
}

#[test]
fn test_fan_out_stops_at_first_failing_child() {
    let fan_out = MultiLogger::fan_out("app", LogLevel::All);
    let first = Arc::new(Logger::new("a-first", LogLevel::All, Capture::default()));
    let broken = Arc::new(Logger::new(
        "b-broken",
        LogLevel::All,
        FailingSink {
            attempts: AtomicUsize::new(0),
        },
    ));
    let last = Arc::new(Logger::new("c-last", LogLevel::All, Capture::default()));
    fan_out.insert_logger(first.clone()).unwrap();
    fan_out.insert_logger(broken.clone()).unwrap();
    fan_out.insert_logger(last.clone()).unwrap();

    let result = warning!(fan_out, "partial");
    assert!(matches!(result, Err(LoggerError::Io(_))));

    // Children are visited in name order; the write before the failure stays.
    assert_eq!(first.sink().messages(), ["partial"]);
    assert_eq!(broken.sink().attempts.load(Ordering::SeqCst), 1);
    assert!(last.sink().messages().is_empty());
}

#[test]
fn test_sink_error_reaches_caller() {
    let logger = Logger::new(
        "failing",
        LogLevel::All,
        FailingSink {
            attempts: AtomicUsize::new(0),
        },
    );

    for _ in 0..3 {
        let result = info!(logger, "lost");
        assert!(result.is_err());
    }
    assert_eq!(logger.sink().attempts.load(Ordering::SeqCst), 3);
    assert_eq!(logger.metrics().failed_count(), 3);
    assert_eq!(logger.metrics().delivered_count(), 0);
}

#[test]
fn test_format_error_reaches_caller() {
    let logger = Logger::new("capture", LogLevel::All, Capture::default());
    let result = infof!(logger, "{} and {}", "only one");
    match result {
        Err(LoggerError::Format { spec, .. }) => assert_eq!(spec, "{} and {}"),
        other => panic!("expected a format error, got {:?}", other.map(|_| ())),
    }
    assert!(logger.sink().messages().is_empty());
}

#[test]
fn test_format_error_not_raised_when_filtered() {
    let logger = Logger::new("capture", LogLevel::Error, Capture::default());
    // The malformed template is never looked at.
    infof!(logger, "{} and {}", "only one").unwrap();
}

#[test]
fn test_default_fatal_handler_unwinds_after_writing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let logger = Logger::new("svc", LogLevel::All, FileSink::new(&log_file).unwrap());

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = fatal!(logger, "cannot continue");
    }));

    let payload = outcome.expect_err("default handler must unwind");
    assert_eq!(
        payload.downcast_ref::<FatalCondition>(),
        Some(&FatalCondition {
            logger_name: "svc".to_string()
        })
    );
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("[fatal]"));
    assert!(content.contains("cannot continue"));
}

#[test]
fn test_custom_fatal_handler_replaces_default() {
    let logger = Logger::new("svc", LogLevel::All, Capture::default());
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    logger.set_fatal_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    fatal!(logger, "recorded").unwrap();
    logl!(logger, LogLevel::Fatal, "again").unwrap();
    critical!(logger, "not fatal").unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(logger.sink().messages(), ["recorded", "again", "not fatal"]);
}

#[test]
fn test_level_change_takes_effect_immediately() {
    let logger = Logger::new("capture", LogLevel::Info, Capture::default());
    info!(logger, "one").unwrap();
    logger.set_level(LogLevel::Off);
    critical!(logger, "two").unwrap();
    logger.set_level(LogLevel::Critical);
    critical!(logger, "three").unwrap();
    assert_eq!(logger.sink().messages(), ["one", "three"]);
}

#[test]
fn test_json_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.jsonl");
    let sink = FileSink::new(&log_file)
        .unwrap()
        .with_line_format(LineFormat::Json)
        .with_timestamp_format(TimestampFormat::UnixMillis);
    let logger = Logger::new("json", LogLevel::All, sink);

    infof!(logger, "user {} signed in", "alice").unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(content.trim_end()).unwrap();
    assert_eq!(parsed["message"], "user alice signed in");
    assert_eq!(parsed["level"], "info");
    assert!(parsed["timestamp"].is_i64());
}

#[test]
fn test_bad_timestamp_pattern_is_returned_not_raised() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("pattern.log");
    let bad = TimestampFormat::Custom("%Q".to_string());

    let console = Logger::new(
        "console",
        LogLevel::All,
        ConsoleSink::new().with_timestamp_format(bad.clone()),
    );
    let file = Logger::new(
        "file",
        LogLevel::All,
        FileSink::new(&log_file)
            .unwrap()
            .with_timestamp_format(bad),
    );

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        (info!(console, "hello").map(|_| ()), info!(file, "hello").map(|_| ()))
    }));
    let (console_result, file_result) = outcome.expect("logging call must not panic");

    assert!(matches!(console_result, Err(LoggerError::Format { ref spec, .. }) if spec == "%Q"));
    assert!(matches!(file_result, Err(LoggerError::Format { .. })));
    assert_eq!(console.metrics().failed_count(), 1);
    assert_eq!(file.metrics().failed_count(), 1);
    assert!(fs::read_to_string(&log_file).unwrap().is_empty());
}

#[test]
fn test_checked_timestamp_pattern_rejected_up_front() {
    assert!(matches!(
        TimestampFormat::custom("%Y-%m-%d %Q"),
        Err(LoggerError::Format { .. })
    ));
    let sink = ConsoleSink::new().with_timestamp_format(TimestampFormat::custom("%H:%M").unwrap());
    let logger = Logger::new("console", LogLevel::All, sink);
    info!(logger, "checked pattern").unwrap();
}
