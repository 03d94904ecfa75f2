//! Core logger types and traits

pub mod error;
pub mod filter;
pub mod format;
pub mod location;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod render;
pub mod sink;
pub mod timestamp;

pub use error::{FatalCondition, LoggerError, Result};
pub use filter::is_logging_enabled;
pub use location::Location;
pub use log_level::{AtomicLogLevel, LogLevel};
pub use log_record::LogRecord;
pub use logger::{FatalHandler, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use render::LineFormat;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
