//! File logging example
//!
//! Demonstrates writing to a file with a JSON configuration.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("leveled_logger_demo.log");
    println!("Writing to {}", path.display());

    let config = LoggerConfig::from_json(
        r#"{ "level": "notice", "include_level": true, "prefix": "svc ", "flags": 3 }"#,
    )?;
    let logger = LoggerBuilder::from_config(&config)?
        .writer(FileAppender::new(&path)?)
        .build()?;

    for i in 0..5 {
        logger.notice(format!("Request {} handled", i));
        logger.debug(format!("Request {} details (hidden)", i));
    }
    logger.err("Upstream timed out");
    logger.flush()?;

    let content = std::fs::read_to_string(&path)?;
    println!("\nFile contents:\n{}", content);

    println!("=== Example completed successfully! ===");
    Ok(())
}
