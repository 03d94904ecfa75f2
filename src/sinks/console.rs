//! Console sink implementation

use crate::core::{LineFormat, LogLevel, LogRecord, Result, Sink, TimestampFormat};
use std::io::Write;

/// Writes one rendered line per record to standard output.
///
/// With [`ConsoleSink::with_stderr_threshold`], records at or above the
/// threshold go to standard error instead.
pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    line_format: LineFormat,
    stderr_threshold: Option<LogLevel>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
            line_format: LineFormat::default(),
            stderr_threshold: None,
        }
    }

    /// Enable or disable level coloring in text output.
    ///
    /// Has no effect unless the `console` feature is enabled.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// # Example
    ///
    /// ```
    /// use rust_sink_logger::{ConsoleSink, LineFormat};
    ///
    /// let sink = ConsoleSink::new().with_line_format(LineFormat::Json);
    /// ```
    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.line_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Route records at `level` and above to stderr.
    #[must_use]
    pub fn with_stderr_threshold(mut self, level: LogLevel) -> Self {
        self.stderr_threshold = Some(level);
        self
    }

    fn render(&self, record: &LogRecord) -> Result<String> {
        match self.line_format {
            LineFormat::Text => crate::core::render::render_text(
                record,
                &self.timestamp_format,
                &self.level_label(record.level),
            ),
            LineFormat::Json | LineFormat::Logfmt => {
                self.line_format.render(record, &self.timestamp_format)
            }
        }
    }

    #[cfg(feature = "console")]
    fn level_label(&self, level: LogLevel) -> String {
        use colored::Colorize;
        if self.use_colors {
            level.to_str().color(level.color_code()).to_string()
        } else {
            level.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_label(&self, level: LogLevel) -> String {
        level.to_string()
    }

    fn goes_to_stderr(&self, level: LogLevel) -> bool {
        self.stderr_threshold
            .is_some_and(|threshold| level >= threshold)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn deliver(&self, record: &LogRecord) -> Result<()> {
        let line = self.render(record)?;
        if self.goes_to_stderr(record.level) {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
