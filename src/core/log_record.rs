//! Log record structure

use super::location::Location;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// One accepted logging event.
///
/// A record is built once, after the filter has passed and the message has
/// been formatted, and is then handed by reference to the sink. Nothing
/// mutates it afterwards; a fan-out sink passes the same record to each child.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
    pub qualified_function: &'static str,
    pub module_path: &'static str,
    pub level: LogLevel,
    pub thread_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogRecord {
    /// Build a record stamped with the current time and calling thread.
    pub fn new(location: Location, level: LogLevel, message: String) -> Self {
        Self {
            file: location.file,
            line: location.line,
            function: location.function,
            qualified_function: location.qualified_function,
            module_path: location.module_path,
            level,
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
            timestamp: Utc::now(),
            message,
        }
    }

    pub fn location(&self) -> Location {
        Location {
            file: self.file,
            line: self.line,
            module_path: self.module_path,
            qualified_function: self.qualified_function,
            function: self.function,
        }
    }

    /// Thread name when the thread has one, its id otherwise.
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}
