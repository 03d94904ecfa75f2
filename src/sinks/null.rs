//! Sink that discards everything

use crate::core::{LogRecord, Result, Sink};

/// Accepts every record and drops it.
///
/// Useful as a placeholder logger, and for measuring the cost of the
/// filtering path on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn deliver(&self, _record: &LogRecord) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
