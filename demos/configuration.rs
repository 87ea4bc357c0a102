//! Sink configuration example
//!
//! Builds each sink type from a configuration map, then installs a file sink
//! as the process-wide sink and logs through the macros.
//!
//! Run with: cargo run --example configuration

use rust_sink_logger::prelude::*;
use rust_sink_logger::{error, info, warning};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Configuration Example ===\n");

    println!("1. Standard stream sink with colors and stderr routing:");
    let std_sink = rust_sink_logger::produce(&SinkConfiguration::from([
        ("type", "std"),
        ("color", ""),
        ("stderr", ""),
    ]))?;
    info!(to: std_sink, "goes to stdout");
    error!(to: std_sink, "goes to stderr");

    println!("\n2. Configuration from JSON:");
    let config = SinkConfiguration::from_json(
        r#"{"type": "xml", "filename": "configuration_demo.xml", "reopen_interval": "60"}"#,
    )?;
    let xml_sink = rust_sink_logger::produce(&config)?;
    warning!(to: xml_sink, "cache hit ratio at {:.1}%", 42.5);
    println!("   Wrote an entry to configuration_demo.xml");

    println!("\n3. Configuration errors:");
    for bad in [
        SinkConfiguration::from([("type", "syslog")]),
        SinkConfiguration::from([("type", "file")]),
        SinkConfiguration::from([("type", "file"), ("filename", "x.log"), ("reopen_interval", "soon")]),
    ] {
        if let Err(e) = rust_sink_logger::produce(&bad) {
            println!("   rejected: {e}");
        }
    }

    println!("\n4. Custom sink type:");
    SinkRegistry::global().register("quiet", |_config| Ok(Box::new(NullSink::new())));
    let quiet = rust_sink_logger::produce(&SinkConfiguration::from([("type", "quiet")]))?;
    info!(to: quiet, "nobody hears this");
    println!("   Registered types: {:?}", SinkRegistry::global().types());

    println!("\n5. Process-wide file sink:");
    configure(&SinkConfiguration::from([
        ("type", "file"),
        ("filename", "configuration_demo.log"),
        ("threshold", "info"),
    ]))?;
    info!("service started");
    warning!("config reload took {} ms", 850);
    if let Err(e) = configure(&SinkConfiguration::from([("type", "std")])) {
        println!("   second configure: {e}");
    }
    println!("   Wrote 2 lines to configuration_demo.log");

    println!("\n=== Example completed successfully ===");
    Ok(())
}
