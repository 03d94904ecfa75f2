//! Main logger implementation
//!
//! Every public logging method funnels into one private `dispatch` routine, which
//! evaluates the delivery decision before anything else happens. Message
//! producers are closures and only run once the decision has passed, so a
//! filtered call costs two atomic loads and a comparison.

use super::{
    error::{FatalCondition, Result},
    filter::is_logging_enabled,
    location::Location,
    log_level::{AtomicLogLevel, LogLevel},
    log_record::LogRecord,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::global;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Per-severity wrappers: plain, conditional, formatted, conditional
/// formatted. Each is `dispatch` with the level fixed.
macro_rules! severity_methods {
    ($($level:ident => $plain:ident, $cond:ident, $fmt:ident, $cond_fmt:ident;)+) => {
        $(
            #[doc = concat!("Log at [`LogLevel::", stringify!($level), "`].")]
            #[inline]
            pub fn $plain<F>(&self, location: Location, message: F) -> Result<&Self>
            where
                F: FnOnce() -> String,
            {
                self.dispatch(Some(LogLevel::$level), true, location, || Ok(message()))
            }

            #[inline]
            pub fn $cond<F>(&self, location: Location, condition: bool, message: F) -> Result<&Self>
            where
                F: FnOnce() -> String,
            {
                self.dispatch(Some(LogLevel::$level), condition, location, || Ok(message()))
            }

            #[inline]
            pub fn $fmt<F>(&self, location: Location, message: F) -> Result<&Self>
            where
                F: FnOnce() -> Result<String>,
            {
                self.dispatch(Some(LogLevel::$level), true, location, message)
            }

            #[inline]
            pub fn $cond_fmt<F>(
                &self,
                location: Location,
                condition: bool,
                message: F,
            ) -> Result<&Self>
            where
                F: FnOnce() -> Result<String>,
            {
                self.dispatch(Some(LogLevel::$level), condition, location, message)
            }
        )+
    };
}

/// Action run after a `Fatal` record has been delivered.
pub type FatalHandler = Arc<dyn Fn() + Send + Sync>;

/// A named, leveled front end to a [`Sink`].
///
/// `Logger` defaults to `Logger<dyn Sink>`, the form the global state and
/// fan-out containers store. A concrete `Arc<Logger<ConsoleSink>>` coerces
/// to `Arc<Logger>`.
pub struct Logger<S: Sink + ?Sized = dyn Sink> {
    name: String,
    level: AtomicLogLevel,
    /// `None` means the default handler, which panics with [`FatalCondition`].
    fatal_handler: RwLock<Option<FatalHandler>>,
    metrics: LoggerMetrics,
    sink: S,
}

impl<S: Sink> Logger<S> {
    #[must_use]
    pub fn new(name: impl Into<String>, level: LogLevel, sink: S) -> Self {
        Self {
            name: name.into(),
            level: AtomicLogLevel::new(level),
            fatal_handler: RwLock::new(None),
            metrics: LoggerMetrics::new(),
            sink,
        }
    }

    /// Erase the sink type and share the logger.
    pub fn into_shared(self) -> Arc<Logger>
    where
        S: 'static,
    {
        Arc::new(self)
    }
}

impl<S: Sink + ?Sized> Logger<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level.load()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Replace the action taken after a `Fatal` record is delivered.
    pub fn set_fatal_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
        *self.fatal_handler.write() = Some(Arc::new(handler));
    }

    /// Restore the default fatal handler.
    pub fn reset_fatal_handler(&self) {
        *self.fatal_handler.write() = None;
    }

    /// Whether a message at `level` would currently be delivered.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        is_logging_enabled(level, self.level(), global::global_level())
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// The single decision-and-dispatch path behind every logging method.
    ///
    /// `explicit` overrides the logger's own level as the message level.
    /// `message` runs only when `condition` holds and both thresholds pass;
    /// its error, like a sink error, is returned unchanged.
    #[inline]
    fn dispatch<F>(
        &self,
        explicit: Option<LogLevel>,
        condition: bool,
        location: Location,
        message: F,
    ) -> Result<&Self>
    where
        F: FnOnce() -> Result<String>,
    {
        let level = explicit.unwrap_or_else(|| self.level());
        if !condition || !self.is_enabled(level) {
            self.metrics.record_filtered();
            return Ok(self);
        }

        let message = message().inspect_err(|_| {
            self.metrics.record_failed();
        })?;
        let record = LogRecord::new(location, level, message);
        self.write_record(&record)?;
        Ok(self)
    }

    /// Re-run this logger's own decision against an already built record
    /// and deliver it if it passes. Fan-out sinks call this per child.
    pub fn forward(&self, record: &LogRecord) -> Result<()> {
        if !self.is_enabled(record.level) {
            self.metrics.record_filtered();
            return Ok(());
        }
        self.write_record(record)
    }

    fn write_record(&self, record: &LogRecord) -> Result<()> {
        self.sink.deliver(record).inspect_err(|_| {
            self.metrics.record_failed();
        })?;
        self.metrics.record_delivered();

        if record.level == LogLevel::Fatal {
            self.metrics.record_fatal();
            self.run_fatal_handler();
        }
        Ok(())
    }

    fn run_fatal_handler(&self) {
        // Clone out of the lock so the handler may replace itself.
        let handler = self.fatal_handler.read().clone();
        match handler {
            Some(handler) => handler(),
            None => std::panic::panic_any(FatalCondition {
                logger_name: self.name.clone(),
            }),
        }
    }

    /// Log the values produced by `message` at this logger's own level.
    pub fn log<F>(&self, location: Location, message: F) -> Result<&Self>
    where
        F: FnOnce() -> String,
    {
        self.dispatch(None, true, location, || Ok(message()))
    }

    /// [`Logger::log`], gated by `condition`.
    pub fn logc<F>(&self, location: Location, condition: bool, message: F) -> Result<&Self>
    where
        F: FnOnce() -> String,
    {
        self.dispatch(None, condition, location, || Ok(message()))
    }

    /// Log at an explicit `level`.
    pub fn logl<F>(&self, location: Location, level: LogLevel, message: F) -> Result<&Self>
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Some(level), true, location, || Ok(message()))
    }

    /// Log at an explicit `level`, gated by `condition`.
    pub fn loglc<F>(
        &self,
        location: Location,
        level: LogLevel,
        condition: bool,
        message: F,
    ) -> Result<&Self>
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Some(level), condition, location, || Ok(message()))
    }

    /// Formatted variant of [`Logger::log`]; `message` usually wraps
    /// [`format_message`](crate::core::format::format_message).
    pub fn logf<F>(&self, location: Location, message: F) -> Result<&Self>
    where
        F: FnOnce() -> Result<String>,
    {
        self.dispatch(None, true, location, message)
    }

    pub fn logcf<F>(&self, location: Location, condition: bool, message: F) -> Result<&Self>
    where
        F: FnOnce() -> Result<String>,
    {
        self.dispatch(None, condition, location, message)
    }

    pub fn loglf<F>(&self, location: Location, level: LogLevel, message: F) -> Result<&Self>
    where
        F: FnOnce() -> Result<String>,
    {
        self.dispatch(Some(level), true, location, message)
    }

    pub fn loglcf<F>(
        &self,
        location: Location,
        level: LogLevel,
        condition: bool,
        message: F,
    ) -> Result<&Self>
    where
        F: FnOnce() -> Result<String>,
    {
        self.dispatch(Some(level), condition, location, message)
    }

    severity_methods! {
        Trace => trace, tracec, tracef, tracecf;
        Info => info, infoc, infof, infocf;
        Warning => warning, warningc, warningf, warningcf;
        Error => error, errorc, errorf, errorcf;
        Critical => critical, criticalc, criticalf, criticalcf;
        Fatal => fatal, fatalc, fatalf, fatalcf;
    }
}

impl<S: Sink + ?Sized> fmt::Debug for Logger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("sink", &self.sink.name())
            .finish()
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use rust_sink_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("audit")
///     .level(LogLevel::Warning)
///     .fatal_handler(|| eprintln!("fatal event recorded"))
///     .build(NullSink);
///
/// assert_eq!(logger.name(), "audit");
/// assert_eq!(logger.level(), LogLevel::Warning);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    fatal_handler: Option<FatalHandler>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the logger's own threshold (default `Info`)
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fatal_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.fatal_handler = Some(Arc::new(handler));
        self
    }

    pub fn build<S: Sink>(self, sink: S) -> Logger<S> {
        let logger = Logger::new(self.name, self.level, sink);
        *logger.fatal_handler.write() = self.fatal_handler;
        logger
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
