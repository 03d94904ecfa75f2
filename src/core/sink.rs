//! Sink trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// Consumer of finished log records.
///
/// `deliver` runs synchronously on the thread that made the log call, after
/// filtering and formatting have already happened. Errors (usually I/O) are
/// returned unchanged to the caller of the logging method. Implementations
/// take `&self` and guard their own mutable state, so one sink can be shared
/// by every thread that logs through it.
pub trait Sink: Send + Sync {
    fn deliver(&self, record: &LogRecord) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn deliver(&self, record: &LogRecord) -> Result<()> {
        (**self).deliver(record)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
