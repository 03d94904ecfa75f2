//! Fan-out sink broadcasting each record to named child loggers

use crate::core::{LogLevel, LogRecord, Logger, LoggerError, Result, Sink};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Holds child loggers by unique name and forwards every record to each.
///
/// A child sees the record through its own filter: its level and the global
/// level are checked again, so children with different thresholds receive
/// different subsets. Delivery stops at the first child error; children
/// already served keep the record.
///
/// The owning logger's `delivered` counter records what it passed to this
/// sink. Whether any child wrote the record shows in the children's own
/// metrics.
#[derive(Default)]
pub struct MultiSink {
    children: RwLock<BTreeMap<String, Arc<Logger>>>,
}

/// A logger whose sink is a [`MultiSink`].
pub type MultiLogger = Logger<MultiSink>;

impl MultiSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `child` under its own name.
    pub fn insert(&self, child: Arc<Logger>) -> Result<()> {
        let mut children = self.children.write();
        if children.contains_key(child.name()) {
            return Err(LoggerError::duplicate_name(child.name()));
        }
        children.insert(child.name().to_string(), child);
        Ok(())
    }

    /// Unregister and return the child called `name`.
    pub fn remove(&self, name: &str) -> Result<Arc<Logger>> {
        self.children
            .write()
            .remove(name)
            .ok_or_else(|| LoggerError::not_found(name))
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.children.read().get(name).cloned()
    }

    /// Child names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.children.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.children.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.read().is_empty()
    }

    /// Children at the moment of the call. Dispatch works on this copy so a
    /// child's fatal handler may add or remove children.
    fn snapshot(&self) -> Vec<Arc<Logger>> {
        self.children.read().values().cloned().collect()
    }
}

impl Sink for MultiSink {
    fn deliver(&self, record: &LogRecord) -> Result<()> {
        for child in self.snapshot() {
            child.forward(record)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        for child in self.snapshot() {
            child.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "multi"
    }
}

impl Logger<MultiSink> {
    /// An empty fan-out logger.
    pub fn fan_out(name: impl Into<String>, level: LogLevel) -> Self {
        Logger::new(name, level, MultiSink::new())
    }

    /// Add a child; fails if a child with the same name is registered.
    pub fn insert_logger(&self, child: Arc<Logger>) -> Result<()> {
        self.sink().insert(child)
    }

    /// Remove and return the child called `name`; fails if there is none.
    pub fn remove_logger(&self, name: &str) -> Result<Arc<Logger>> {
        self.sink().remove(name)
    }
}
