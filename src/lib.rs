//! # Rust Sink Logger
//!
//! A synchronous, leveled logging facility built around one delivery rule:
//! a message reaches a sink only if its level is at least both the logger's
//! level and the process-wide global level, neither of which is `Off`, and
//! the caller's condition (if any) holds. Message arguments are evaluated
//! only after that decision passes.
//!
//! ## Features
//!
//! - **Pluggable sinks**: console, file, fan-out and discard sinks behind
//!   one [`Sink`] trait
//! - **Two thresholds**: per-logger and global levels, both checked on every
//!   call
//! - **Lazy arguments**: macros wrap arguments in closures
//! - **Fatal handler**: a per-logger action run after each delivered `Fatal`
//!   record, panicking with [`FatalCondition`] by default
//! - **Default logger**: a lazily created process-wide logger, replaceable at
//!   any time
//! - **Build-time stripping**: `disable-*` cargo features remove whole
//!   severity tiers
//!
//! ```
//! use rust_sink_logger::prelude::*;
//! use rust_sink_logger::{errorf, info};
//!
//! # fn main() -> rust_sink_logger::Result<()> {
//! let logger = Logger::new("app", LogLevel::Info, ConsoleSink::new());
//! info!(logger, "started with ", 4, " workers")?;
//! errorf!(logger, "request {} failed: {}", 17, "timeout")?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FatalCondition, FatalHandler, LineFormat, Location, LogLevel, LogRecord, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, TimestampFormat,
    };
    pub use crate::global::{
        default_logger, global_level, set_default_logger, set_global_level,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MultiLogger, MultiSink, NullSink};
}

pub use crate::core::{
    FatalCondition, FatalHandler, LineFormat, Location, LogLevel, LogRecord, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, TimestampFormat,
};
pub use global::{default_logger, global_level, set_default_logger, set_global_level};
pub use sinks::{ConsoleSink, FileSink, MultiLogger, MultiSink, NullSink};
