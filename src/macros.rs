//! Logging macros that capture the call site and defer argument evaluation.
//!
//! Every macro takes the logger first (`info!(logger, ...)`), records `file!()`, `line!()`, `module_path!()` and
//! the enclosing function, and wraps the arguments in a closure so they are
//! only evaluated when the message will actually be delivered.
//!
//! Two message styles are available:
//!
//! - values style (`log!`, `info!`, ...): each argument is rendered with
//!   `Display` and the results are concatenated
//! - format style (`logf!`, `infof!`, ...): a runtime template with `{}` and
//!   `{N}` placeholders, checked when the message is built
//!
//! Level macros accept an optional leading `if <condition>;` gate.
//!
//! # Examples
//!
//! ```
//! use rust_sink_logger::prelude::*;
//! use rust_sink_logger::{info, infof, warning};
//!
//! # fn main() -> rust_sink_logger::Result<()> {
//! let logger = Logger::new("app", LogLevel::Info, NullSink);
//!
//! info!(logger, "Server listening on port ", 8080)?;
//! infof!(logger, "{} workers, {} queued", 4, 0)?;
//!
//! let retries = 3;
//! warning!(logger, if retries > 2; "retried ", retries, " times")?;
//!
//! // The default logger is just another logger expression.
//! info!(default_logger(), "through the default logger")?;
//! # Ok(())
//! # }
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_values {
    ($($value:expr),+ $(,)?) => {
        || $crate::core::format::concat_values(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_format {
    ($spec:expr $(, $arg:expr)* $(,)?) => {
        || $crate::core::format::format_message($spec, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log values at the logger's own level.
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// use rust_sink_logger::log;
/// let logger = Logger::new("app", LogLevel::Info, NullSink);
/// log!(logger, "cache hit ratio: ", 0.93).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log values at the logger's own level if `condition` holds.
#[macro_export]
macro_rules! logc {
    ($logger:expr, $condition:expr, $($value:expr),+ $(,)?) => {
        $logger.logc($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
}

/// Log values at an explicit level.
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// use rust_sink_logger::logl;
/// let logger = Logger::new("app", LogLevel::Info, NullSink);
/// logl!(logger, LogLevel::Critical, "replica ", 2, " lost").unwrap();
/// ```
#[macro_export]
macro_rules! logl {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.logl($crate::location!(), $level, $crate::__log_values!($($value),+))
    };
}

/// Log values at an explicit level if `condition` holds.
#[macro_export]
macro_rules! loglc {
    ($logger:expr, $level:expr, $condition:expr, $($value:expr),+ $(,)?) => {
        $logger.loglc(
            $crate::location!(),
            $level,
            $condition,
            $crate::__log_values!($($value),+),
        )
    };
}

/// Log a formatted message at the logger's own level.
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// use rust_sink_logger::logf;
/// let logger = Logger::new("app", LogLevel::Info, NullSink);
/// logf!(logger, "{} of {} shards ready", 3, 8).unwrap();
/// assert!(logf!(logger, "{} of {}", 3).is_err());
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}

/// Log a formatted message at the logger's own level if `condition` holds.
#[macro_export]
macro_rules! logcf {
    ($logger:expr, $condition:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.logcf(
            $crate::location!(),
            $condition,
            $crate::__log_format!($spec $(, $arg)*),
        )
    };
}

/// Log a formatted message at an explicit level.
#[macro_export]
macro_rules! loglf {
    ($logger:expr, $level:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.loglf(
            $crate::location!(),
            $level,
            $crate::__log_format!($spec $(, $arg)*),
        )
    };
}

/// Log a formatted message at an explicit level if `condition` holds.
#[macro_export]
macro_rules! loglcf {
    ($logger:expr, $level:expr, $condition:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.loglcf(
            $crate::location!(),
            $level,
            $condition,
            $crate::__log_format!($spec $(, $arg)*),
        )
    };
}

/// Log values at trace level.
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// use rust_sink_logger::trace;
/// let logger = Logger::new("app", LogLevel::All, NullSink);
/// trace!(logger, "entering calculate()").unwrap();
/// trace!(logger, if false; "never rendered").unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, if $condition:expr; $($value:expr),+ $(,)?) => {
        $logger.tracec($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.trace($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log a formatted message at trace level.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, if $condition:expr; $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.tracecf($crate::location!(), $condition, $crate::__log_format!($spec $(, $arg)*))
    };
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.tracef($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}

/// Log values at info level.
#[macro_export]
macro_rules! info {
    ($logger:expr, if $condition:expr; $($value:expr),+ $(,)?) => {
        $logger.infoc($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log a formatted message at info level.
#[macro_export]
macro_rules! infof {
    ($logger:expr, if $condition:expr; $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.infocf($crate::location!(), $condition, $crate::__log_format!($spec $(, $arg)*))
    };
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.infof($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}

/// Log values at warning level.
#[macro_export]
macro_rules! warning {
    ($logger:expr, if $condition:expr; $($value:expr),+ $(,)?) => {
        $logger.warningc($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warning($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log a formatted message at warning level.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, if $condition:expr; $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.warningcf($crate::location!(), $condition, $crate::__log_format!($spec $(, $arg)*))
    };
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.warningf($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}

/// Log values at error level.
#[macro_export]
macro_rules! error {
    ($logger:expr, if $condition:expr; $($value:expr),+ $(,)?) => {
        $logger.errorc($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.error($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log a formatted message at error level.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, if $condition:expr; $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorcf($crate::location!(), $condition, $crate::__log_format!($spec $(, $arg)*))
    };
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorf($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}

/// Log values at critical level.
#[macro_export]
macro_rules! critical {
    ($logger:expr, if $condition:expr; $($value:expr),+ $(,)?) => {
        $logger.criticalc($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.critical($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log a formatted message at critical level.
#[macro_export]
macro_rules! criticalf {
    ($logger:expr, if $condition:expr; $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.criticalcf($crate::location!(), $condition, $crate::__log_format!($spec $(, $arg)*))
    };
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.criticalf($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}

/// Log values at fatal level, then run the logger's fatal handler.
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// use rust_sink_logger::fatal;
/// let logger = Logger::new("app", LogLevel::All, NullSink);
/// logger.set_fatal_handler(|| eprintln!("shutting down"));
/// fatal!(logger, "Unable to recover: ", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, if $condition:expr; $($value:expr),+ $(,)?) => {
        $logger.fatalc($crate::location!(), $condition, $crate::__log_values!($($value),+))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.fatal($crate::location!(), $crate::__log_values!($($value),+))
    };
}

/// Log a formatted message at fatal level, then run the fatal handler.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, if $condition:expr; $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatalcf($crate::location!(), $condition, $crate::__log_format!($spec $(, $arg)*))
    };
    ($logger:expr, $spec:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatalf($crate::location!(), $crate::__log_format!($spec $(, $arg)*))
    };
}
