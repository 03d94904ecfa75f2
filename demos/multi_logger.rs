//! Fan-out example
//!
//! One logger call reaches several named child loggers, each applying its
//! own threshold.
//!
//! Run with: cargo run --example multi_logger

use rust_sink_logger::prelude::*;
use rust_sink_logger::{critical, error, info, trace};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Multi Logger Example ===\n");

    let app = MultiLogger::fan_out("app", LogLevel::All);
    app.insert_logger(Logger::new("console", LogLevel::Info, ConsoleSink::new()).into_shared())?;
    app.insert_logger(
        Logger::new("errors", LogLevel::Error, FileSink::truncate("errors.log")?).into_shared(),
    )?;

    println!("Children: {:?}\n", app.sink().names());

    trace!(app, "dropped by every child")?;
    info!(app, "console only")?;
    error!(app, "console and errors.log")?;

    if let Err(e) = app.insert_logger(Logger::new("console", LogLevel::All, NullSink).into_shared()) {
        println!("\nSecond 'console' child rejected: {}", e);
    }

    let removed = app.remove_logger("console")?;
    println!("Removed '{}'; {} child left\n", removed.name(), app.sink().len());

    critical!(app, "errors.log only")?;
    app.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
