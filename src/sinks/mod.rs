//! Sink implementations

pub mod console;
pub mod file;
pub mod multi;
pub mod null;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use multi::{MultiLogger, MultiSink};
pub use null::NullSink;

pub use crate::core::Sink;
