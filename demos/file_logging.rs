//! File logging example
//!
//! Demonstrates a file sink with text and JSON lines, and the fatal
//! handler.
//!
//! Run with: cargo run --example file_logging

use rust_sink_logger::prelude::*;
use rust_sink_logger::{error, fatal, info, infof, warning};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - File Logging Example ===\n");

    let logger = Logger::new(
        "file",
        LogLevel::Info,
        FileSink::truncate("application.log")?.with_timestamp_format(TimestampFormat::Rfc3339),
    );

    println!("1. Logging to 'application.log':");
    info!(logger, "Application started")?;
    info!(logger, "Configuration loaded successfully")?;
    warning!(logger, "Using default settings for some options")?;
    error!(logger, "Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        infof!(logger, "Processing item {}/5", i)?;
        if i == 3 {
            warning!(logger, "Item 3 took longer than expected")?;
        }
    }

    println!("\n3. JSON lines to 'application.jsonl':");
    let json = Logger::new(
        "json",
        LogLevel::All,
        FileSink::truncate("application.jsonl")?
            .with_line_format(LineFormat::Json)
            .with_timestamp_format(TimestampFormat::UnixMillis),
    );
    infof!(json, "user {} signed in", "alice")?;

    println!("\n4. Fatal records with a custom handler:");
    logger.set_fatal_handler(|| eprintln!("   fatal handler ran; a real service would stop here"));
    fatal!(logger, "Storage volume is read-only")?;

    logger.flush()?;
    json.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.jsonl' for the output");

    Ok(())
}
