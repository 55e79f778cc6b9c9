//! Channel fan-out example
//!
//! One consumer receives everything, another only what passes the threshold,
//! and a third never reads so its messages time out.
//!
//! Run with: cargo run --example channel_split

use crossbeam_channel::{bounded, unbounded};
use leveled_logger::prelude::*;
use leveled_logger::{info, warning};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Channel Split Example ===\n");

    let (all_tx, all_rx) = unbounded();
    let (lvl_tx, lvl_rx) = unbounded();
    let (stuck_tx, _stuck_rx) = bounded::<Message>(0);

    let logger = Logger::builder()
        .level(LogLevel::WARNING)
        .include_level(true)
        .timeout(Duration::from_millis(10))
        .writer(std::io::stdout())
        .split(all_tx, true)
        .split(lvl_tx, false)
        .split(stuck_tx, false)
        .build()?;

    let audit = thread::spawn(move || {
        for msg in all_rx {
            println!("   [audit] {} {}", msg.timestamp.format("%H:%M:%S%.3f"), msg);
        }
    });

    info!(logger, "Connected to {} peers", 3);
    warning!(logger, "Peer {} is lagging", "10.0.0.7");
    logger.crit("Quorum lost");

    let filtered: Vec<Message> = lvl_rx.try_iter().collect();
    println!("\nFiltered consumer received {} messages", filtered.len());
    println!("Missed deliveries: {}", logger.missed_messages());

    // Dropping the logger closes the audit channel
    drop(logger);
    let _ = audit.join();

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
