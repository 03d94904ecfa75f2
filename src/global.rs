//! Process-wide default logger and global level
//!
//! The default logger is created on first access: a [`ConsoleSink`] logger
//! named `"default"` whose level is the global level at that moment.
//! [`set_default_logger`] replaces it (last write wins); readers racing with
//! a replacement see either the old or the new logger, never a partial one.
//!
//! The global level starts at `All`. [`set_global_level`] also pushes the
//! new level onto the current default logger, if one exists; afterwards the
//! two may be changed independently.
//!
//! The free functions below forward to the default logger and return it so
//! calls can be chained. They apply exactly the same decision as the
//! logger's own methods.

use crate::core::{AtomicLogLevel, Location, LogLevel, Logger, Result};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL_LEVEL: AtomicLogLevel = AtomicLogLevel::new(LogLevel::All);
static DEFAULT_LOGGER: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// Name given to the lazily created default logger.
pub const DEFAULT_LOGGER_NAME: &str = "default";

#[inline]
pub fn global_level() -> LogLevel {
    GLOBAL_LEVEL.load()
}

/// Set the global threshold and the current default logger's level.
pub fn set_global_level(level: LogLevel) {
    let default = DEFAULT_LOGGER.read();
    if let Some(logger) = default.as_ref() {
        logger.set_level(level);
    }
    GLOBAL_LEVEL.store(level);
}

/// The current default logger, created on first use.
pub fn default_logger() -> Arc<Logger> {
    if let Some(logger) = DEFAULT_LOGGER.read().as_ref() {
        return Arc::clone(logger);
    }

    let mut slot = DEFAULT_LOGGER.write();
    // Another thread may have won the race for the write lock.
    Arc::clone(slot.get_or_insert_with(|| {
        Logger::new(DEFAULT_LOGGER_NAME, global_level(), ConsoleSink::new()).into_shared()
    }))
}

/// Install `logger` as the default and return the previous one, if any.
pub fn set_default_logger(logger: Arc<Logger>) -> Option<Arc<Logger>> {
    DEFAULT_LOGGER.write().replace(logger)
}

/// Remove the default logger; the next access creates a fresh one.
pub fn take_default_logger() -> Option<Arc<Logger>> {
    DEFAULT_LOGGER.write().take()
}

pub fn log<F>(location: Location, message: F) -> Result<Arc<Logger>>
where
    F: FnOnce() -> String,
{
    let logger = default_logger();
    logger.log(location, message)?;
    Ok(logger)
}

pub fn logc<F>(location: Location, condition: bool, message: F) -> Result<Arc<Logger>>
where
    F: FnOnce() -> String,
{
    let logger = default_logger();
    logger.logc(location, condition, message)?;
    Ok(logger)
}

pub fn logl<F>(location: Location, level: LogLevel, message: F) -> Result<Arc<Logger>>
where
    F: FnOnce() -> String,
{
    let logger = default_logger();
    logger.logl(location, level, message)?;
    Ok(logger)
}

pub fn loglc<F>(
    location: Location,
    level: LogLevel,
    condition: bool,
    message: F,
) -> Result<Arc<Logger>>
where
    F: FnOnce() -> String,
{
    let logger = default_logger();
    logger.loglc(location, level, condition, message)?;
    Ok(logger)
}

pub fn logf<F>(location: Location, message: F) -> Result<Arc<Logger>>
where
    F: FnOnce() -> Result<String>,
{
    let logger = default_logger();
    logger.logf(location, message)?;
    Ok(logger)
}

pub fn logcf<F>(location: Location, condition: bool, message: F) -> Result<Arc<Logger>>
where
    F: FnOnce() -> Result<String>,
{
    let logger = default_logger();
    logger.logcf(location, condition, message)?;
    Ok(logger)
}

pub fn loglf<F>(location: Location, level: LogLevel, message: F) -> Result<Arc<Logger>>
where
    F: FnOnce() -> Result<String>,
{
    let logger = default_logger();
    logger.loglf(location, level, message)?;
    Ok(logger)
}

pub fn loglcf<F>(
    location: Location,
    level: LogLevel,
    condition: bool,
    message: F,
) -> Result<Arc<Logger>>
where
    F: FnOnce() -> Result<String>,
{
    let logger = default_logger();
    logger.loglcf(location, level, condition, message)?;
    Ok(logger)
}

macro_rules! severity_functions {
    ($($level:ident => $plain:ident, $cond:ident, $fmt:ident, $cond_fmt:ident;)+) => {
        $(
            #[doc = concat!("Log at [`LogLevel::", stringify!($level), "`] through the default logger.")]
            pub fn $plain<F>(location: Location, message: F) -> Result<Arc<Logger>>
            where
                F: FnOnce() -> String,
            {
                loglc(location, LogLevel::$level, true, message)
            }

            pub fn $cond<F>(location: Location, condition: bool, message: F) -> Result<Arc<Logger>>
            where
                F: FnOnce() -> String,
            {
                loglc(location, LogLevel::$level, condition, message)
            }

            pub fn $fmt<F>(location: Location, message: F) -> Result<Arc<Logger>>
            where
                F: FnOnce() -> Result<String>,
            {
                loglcf(location, LogLevel::$level, true, message)
            }

            pub fn $cond_fmt<F>(
                location: Location,
                condition: bool,
                message: F,
            ) -> Result<Arc<Logger>>
            where
                F: FnOnce() -> Result<String>,
            {
                loglcf(location, LogLevel::$level, condition, message)
            }
        )+
    };
}

severity_functions! {
    Trace => trace, tracec, tracef, tracecf;
    Info => info, infoc, infof, infocf;
    Warning => warning, warningc, warningf, warningcf;
    Error => error, errorc, errorf, errorcf;
    Critical => critical, criticalc, criticalf, criticalcf;
    Fatal => fatal, fatalc, fatalf, fatalcf;
}
