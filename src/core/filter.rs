//! The delivery decision shared by every logging entry point

use super::log_level::LogLevel;

/// Whether a message at `level` passes both thresholds.
///
/// True iff `level` is at least the logger's and the global threshold and
/// neither threshold is `Off`. `Off` itself is never a deliverable level.
/// Levels disabled by a `disable-*` cargo feature never pass. The caller's
/// condition flag is checked before this.
#[inline]
pub fn is_logging_enabled(level: LogLevel, logger_level: LogLevel, global_level: LogLevel) -> bool {
    !level.is_disabled_at_build()
        && level >= global_level
        && level >= logger_level
        && global_level != LogLevel::Off
        && logger_level != LogLevel::Off
        && level != LogLevel::Off
}
