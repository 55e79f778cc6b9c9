//! Stress tests for concurrent dispatch
//!
//! These tests verify:
//! - "All" consumers see every message from many threads
//! - Delivery bookkeeping stays exact under contention
//! - Threshold changes and registration race safely with dispatch

use crossbeam_channel::{bounded, unbounded};
use leveled_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

#[test]
fn test_concurrent_dispatch_reaches_all_consumer() {
    let sink = MemoryAppender::new();
    let logger = Logger::with_level(LogLevel::NOTICE, false, sink.clone(), "", 0)
        .expect("Failed to create logger");
    let (tx, rx) = unbounded();
    logger.split(tx, true);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..PER_THREAD {
                    // Alternate between a written and a suppressed level
                    if i % 2 == 0 {
                        logger.notice(format!("t{} m{}", thread_id, i));
                    } else {
                        logger.debug(format!("t{} m{}", thread_id, i));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let total = THREADS * PER_THREAD;
    assert_eq!(rx.len(), total);
    assert_eq!(sink.lines().len(), total / 2);
    assert_eq!(logger.metrics().written_messages(), (total / 2) as u64);
    assert_eq!(logger.metrics().suppressed_messages(), (total / 2) as u64);
    assert_eq!(logger.missed_messages(), 0);
}

#[test]
fn test_concurrent_missed_accounting_is_exact() {
    let sink = MemoryAppender::new();
    let logger = Logger::with_level(LogLevel::DEBUG, false, sink, "", 0)
        .expect("Failed to create logger");
    logger.set_timeout(Duration::from_millis(1));

    // A reader that consumes slowly so some sends time out
    let (tx, rx) = bounded::<Message>(4);
    logger.split(tx, true);
    let received = Arc::new(AtomicUsize::new(0));
    let received_clone = Arc::clone(&received);
    let reader = std::thread::spawn(move || {
        while rx.recv().is_ok() {
            received_clone.fetch_add(1, Ordering::Relaxed);
            std::thread::sleep(Duration::from_micros(200));
        }
    });

    let logger = Arc::new(logger);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..50 {
                    logger.info(i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let sent = (THREADS * 50) as u64;
    let metrics = logger.metrics().clone();
    assert_eq!(metrics.delivered_messages() + metrics.missed_messages(), sent);

    // Dropping the logger drops the last sender and ends the reader
    drop(logger);
    reader.join().expect("Reader panicked");
    assert_eq!(received.load(Ordering::Relaxed) as u64, metrics.delivered_messages());
}

#[test]
fn test_level_changes_during_dispatch() {
    let sink = MemoryAppender::new();
    let logger = Arc::new(
        Logger::with_level(LogLevel::DEBUG, true, sink.clone(), "", 0)
            .expect("Failed to create logger"),
    );
    let (tx, rx) = unbounded();
    logger.split(tx, false);

    let writer = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.warning(i);
            }
        })
    };
    let toggler = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                let level = if i % 2 == 0 { LogLevel::ERR } else { LogLevel::DEBUG };
                logger.set_level(level).expect("valid level");
            }
        })
    };

    writer.join().expect("Writer panicked");
    toggler.join().expect("Toggler panicked");

    // Whatever passed the threshold went to both the channel and the writer
    let written = sink.lines();
    assert_eq!(written.len(), rx.len());
    assert!(written.iter().all(|line| line.starts_with("WARNING ")));
}

#[test]
fn test_registration_during_dispatch() {
    let logger = Arc::new(Logger::new(MemoryAppender::new(), "", 0));
    let (tx, rx) = unbounded();

    let dispatcher = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.info(i);
            }
        })
    };
    for _ in 0..10 {
        logger.split(tx.clone(), true);
    }
    dispatcher.join().expect("Dispatcher panicked");

    assert_eq!(logger.all_consumer_count(), 10);
    assert!(rx.len() <= PER_THREAD * 10);
    assert_eq!(logger.missed_messages(), 0);
}
