//! Basic logger usage example
//!
//! Demonstrates console logging, per-logger and global thresholds,
//! conditional calls and formatted messages.
//!
//! Run with: cargo run --example basic_usage

use rust_sink_logger::prelude::*;
use rust_sink_logger::{critical, error, info, infof, logl, trace, warning, warningf};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Basic Usage Example ===\n");

    let logger = Logger::new("basic", LogLevel::All, ConsoleSink::new());

    println!("1. Logging at different levels:");
    trace!(logger, "This is a trace message")?;
    info!(logger, "This is an info message")?;
    warning!(logger, "This is a warning message")?;
    error!(logger, "This is an error message")?;
    critical!(logger, "This is a critical message")?;

    println!("\n2. Values and formatted messages:");
    info!(logger, "Listening on port ", 8080, " with ", 4, " workers")?;
    infof!(logger, "{} of {} shards ready", 3, 8)?;
    warningf!(logger, "{1} retries left for {0}", "db-primary", 2)?;

    println!("\n3. Changing the logger level:");
    logger.set_level(LogLevel::Warning);
    println!("   Logger level set to WARNING - info won't show:");
    info!(logger, "Info message (hidden)")?;
    warning!(logger, "Warning message (visible)")?;

    println!("\n4. Conditional logging:");
    for attempt in 1..=3 {
        warning!(logger, if attempt == 3; "giving up after ", attempt, " attempts")?;
    }

    println!("\n5. Global level:");
    logger.set_level(LogLevel::All);
    set_global_level(LogLevel::Error);
    println!("   Global level set to ERROR - warning won't show:");
    logl!(logger, LogLevel::Warning, "Warning message (hidden)")?;
    logl!(logger, LogLevel::Error, "Error message (visible)")?;
    set_global_level(LogLevel::All);

    println!("\n6. Default logger:");
    info!(default_logger(), "Logged through the process-wide default logger")?;

    let metrics = logger.metrics();
    println!(
        "\nDelivered: {}, filtered: {}",
        metrics.delivered_count(),
        metrics.filtered_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
