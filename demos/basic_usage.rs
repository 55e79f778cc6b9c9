//! Basic logger usage example
//!
//! Demonstrates levels, the threshold and level prefixes on stderr.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let logger = Logger::with_level(
        LogLevel::DEBUG,
        true,
        std::io::stderr(),
        "demo: ",
        flags::STD_FLAGS | flags::SHORT_FILE,
    )?;

    println!("1. Logging at every level:");
    logger.emerg("This is an emergency");
    logger.alert("This is an alert");
    logger.crit("This is a critical condition");
    logger.err("This is an error");
    logger.warning("This is a warning");
    logger.notice("This is a notice");
    logger.info("This is an info message");
    logger.debug("This is a debug message");

    println!("\n2. Raising the threshold to WARNING:");
    logger.set_level(parse_level("warning")?)?;
    logger.notice("Notice (hidden)");
    logger.info("Info (hidden)");
    logger.warning("Warning (visible)");
    logger.errf(format_args!("Error code {} (visible)", 500));

    println!("\n3. Silencing everything with NULL:");
    logger.set_level(LogLevel::NULL)?;
    logger.emerg("Nothing is written");
    logger.print("print() ignores the threshold");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
