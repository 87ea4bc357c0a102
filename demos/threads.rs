//! Multi-threaded logging example
//!
//! Several threads log through one file sink with a short reopen interval
//! while the main thread rotates the file away.
//!
//! Run with: cargo run --example threads

use rust_sink_logger::prelude::*;
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const THREADS: usize = 4;
const MESSAGES_PER_THREAD: usize = 200;

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Threads Example ===\n");

    let path = "threads_demo.log";
    let rotated = "threads_demo.log.1";
    let _ = fs::remove_file(path);
    let _ = fs::remove_file(rotated);

    let sink: Arc<dyn Sink> = Arc::new(
        FileSink::new(path, Duration::from_secs(1)).with_threshold(Severity::Verbose),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    let severity = Severity::ALL[i % Severity::ALL.len()];
                    rust_sink_logger::log!(to: sink, severity, "thread {} message {}", thread_id, i);
                    thread::sleep(Duration::from_millis(5));
                }
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(300));
    fs::rename(path, rotated)?;
    println!("Rotated {path} to {rotated}");

    for handle in handles {
        let _ = handle.join();
    }

    let before = fs::read_to_string(rotated)?.lines().count();
    let after = fs::read_to_string(path)?.lines().count();
    println!("Lines before rotation: {before}");
    println!("Lines after rotation:  {after}");
    println!("Total: {} (expected {})", before + after, THREADS * MESSAGES_PER_THREAD);

    let metrics = sink.metrics();
    println!(
        "Reopens: {}, write failures: {}",
        metrics.reopens(),
        metrics.write_failures()
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
