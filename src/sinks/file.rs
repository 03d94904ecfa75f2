//! File sink implementation

use crate::core::{LineFormat, LogRecord, LoggerError, Result, Sink, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one rendered line per record to a file it owns.
///
/// The file is opened when the sink is built and closed when it is
/// dropped; buffered data is flushed after every record unless auto-flush
/// is turned off, and always on drop.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
    timestamp_format: TimestampFormat,
    line_format: LineFormat,
    auto_flush: bool,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path.into(), OpenOptions::new().create(true).append(true))
    }

    /// Open `path`, discarding any existing content.
    pub fn truncate(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(
            path.into(),
            OpenOptions::new().create(true).write(true).truncate(true),
        )
    }

    fn open(path: PathBuf, options: &OpenOptions) -> Result<Self> {
        let file = options.open(&path).map_err(|e| {
            LoggerError::io_operation(format!("opening log file '{}'", path.display()), e)
        })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
            timestamp_format: TimestampFormat::default(),
            line_format: LineFormat::default(),
            auto_flush: true,
        })
    }

    /// # Examples
    ///
    /// ```no_run
    /// use rust_sink_logger::{FileSink, TimestampFormat};
    ///
    /// let sink = FileSink::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.line_format = format;
        self
    }

    /// Keep records in the write buffer until `flush` or drop.
    #[must_use]
    pub fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = auto_flush;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn deliver(&self, record: &LogRecord) -> Result<()> {
        let mut line = self.line_format.render(record, &self.timestamp_format)?;
        line.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        if self.auto_flush {
            writer.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.writer.get_mut().flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' on close: {}",
                self.path.display(),
                e
            );
        }
    }
}
