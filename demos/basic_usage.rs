//! Basic logger usage example
//!
//! Demonstrates console and JSON output, permanent fields, per-call fields
//! and error normalization.
//!
//! Run with: cargo run --example basic_usage
//! Try also: LOG_LEVEL=debug LOG_FORMAT=console cargo run --example basic_usage

use rtlog::prelude::*;
use rtlog::{global, info};

fn main() -> Result<()> {
    println!("=== rtlog - Basic Usage Example ===\n");

    if let Err(e) = EnvConfig::process().validate() {
        eprintln!("ignoring logging environment: {}", e);
    }

    println!("1. Logging at different levels (console, trace and up):");
    let mut logger = Logger::builder()
        .level(LogLevel::Trace)
        .format("console")
        .build();
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Permanent and per-call fields:");
    logger.set_permanent("service", "checkout");
    logger.set_permanent("version", env!("CARGO_PKG_VERSION"));
    logger
        .field("order_id", 1042)
        .field("amount", 19.99)
        .field("items", vec!["book", "pen"])
        .info("Order placed");

    println!("\n3. Errors are attached under \"error\":");
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "payment gateway timeout");
    logger.error_field(&err).field("retry", true).warn("Payment failed");

    println!("\n4. JSON output with the process-wide logger:");
    global::set_global_options(vec![LoggerOption::json_writer()]);
    global::reinitialize();
    global::set_permanent("service", "checkout");
    global::field("user_id", 7).info("User signed in");

    let port = 8080;
    info!(global::logger(), "Listening on port {}", port);

    global::flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
