//! Basic logger usage example
//!
//! Demonstrates V-levels, names, inherited values and error records written
//! to standard output in journal format.
//!
//! Run with: cargo run --example basic_usage

use journal_logger::prelude::*;
use journal_logger::{error, info};
use std::io;

fn main() -> journal_logger::Result<()> {
    println!("=== Journal Logger - Basic Usage Example ===\n");

    // Root logger on standard output, writing V-levels up to 1
    let logger = Logger::new(JournalSink::builder().verbosity(1).build());

    println!("1. Info records at different V-levels:");
    logger.info("Application started", &[]);
    logger.v(1).info("Loaded configuration", kv!["path", "/etc/app.json"]);
    logger.v(2).info("This record is filtered out", &[]);

    println!("\n2. Named and valued loggers:");
    let http = logger.with_name("http").with_values(kv!["listen", "0.0.0.0:8080"]);
    info!(http, "Listening");
    let handler = http.with_name("handler").with_values(kv!["route", "/users"]);
    info!(handler, "Request served", "status", 200, "elapsed_ms", 4.2);

    println!("\n3. Error records:");
    let err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    error!(handler, Some(&err), "Upstream call failed", "upstream", "users-db");
    error!(handler.v(5), None, "Errors ignore V-levels");

    println!("\n4. Value kinds:");
    let retries: Option<&u32> = None;
    let limit = 10_u32;
    info!(
        logger,
        "Values",
        "ids", vec![1, 2, 3],
        "tags", vec!["a", "b"],
        "limit", &limit,
        "retries", retries,
        "empty", "",
    );

    println!("\n5. Configuration from JSON:");
    let options = SinkOptions::from_json_str(r#"{ "verbosity": 0, "log_caller_info": false }"#)?;
    let quiet = journal_logger::new_with_options(&options)?;
    quiet.info("No caller on this line", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
