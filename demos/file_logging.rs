//! File logging example
//!
//! Demonstrates appending journal records to a file and reading the
//! sink's write metrics.
//!
//! Run with: cargo run --example file_logging

use journal_logger::prelude::*;
use std::sync::Arc;

fn main() -> journal_logger::Result<()> {
    println!("=== Journal Logger - File Logging Example ===\n");

    let metrics = Arc::new(SinkMetrics::new());
    let sink = JournalSink::builder()
        .destination(Destination::append_file("application.log")?)
        .metrics(Arc::clone(&metrics))
        .build();
    let logger = Logger::new(sink).with_name("app");

    println!("1. Logging to 'application.log':");
    logger.info("Application started", &[]);
    logger.info("Connecting to database", kv!["host", "db-1", "port", 5432]);
    logger.error(None, "Failed to load optional plugin", kv!["plugin", "metrics"]);

    println!("\n2. Performing some operations:");
    let worker = logger.with_name("worker");
    for i in 1..=5 {
        worker.info("Processing item", kv!["item", i, "of", 5]);
    }
    worker.info("All operations completed", &[]);

    println!("\n3. Metrics:");
    println!("   Lines written:   {}", metrics.lines_written());
    println!("   Write failures:  {}", metrics.write_failures());

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
