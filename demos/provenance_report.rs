//! Example of a provenance report for a layered service configuration.
//!
//! This example demonstrates:
//! - Layering in-memory defaults, two JSON files and environment overrides
//! - Reading which source supplied each value and what it overrode
//! - Switching between graphical and plain symbols
//! - Hiding vendor sections or a custom set of prefixes
//!
//! Run with: cargo run --example provenance_report

use config_provenance::prelude::*;
use config_provenance::sources::EnvSource;
use std::fs;

fn main() -> Result<()> {
    let dir = std::env::temp_dir().join("config-provenance-demo");
    fs::create_dir_all(&dir)?;

    let base = dir.join("appsettings.json");
    fs::write(
        &base,
        r#"{
  "Logging": { "LogLevel": { "Default": "Information" } },
  "ConnectionStrings": { "Orders": "Server=db.internal;Database=orders" },
  "Server": { "Host": "0.0.0.0", "Port": 8080 },
  "Features": { "Checkout": true, "Recommendations": false }
}"#,
    )?;

    let development = dir.join("appsettings.Development.json");
    fs::write(
        &development,
        r#"{
  "Logging": { "LogLevel": { "Default": "Debug" } },
  "ConnectionStrings": { "Orders": "Server=localhost;Database=orders" }
}"#,
    )?;

    let config = ConfigRoot::builder()
        .with_values([("Server:Timeout", "30"), ("Server:Port", "80")])
        .with_file(&base)
        .with_file(&development)
        .with_source(EnvSource::new("ORDERS", "__").with_vars([("ORDERS_FEATURES__RECOMMENDATIONS", "true")]))
        .build()?;

    println!("=== Default report (vendor sections hidden) ===\n");
    println!("{}", visualize(&config, true));

    println!("=== Everything, plain symbols ===\n");
    println!("{}", visualize_simple(&config, false));

    println!("=== Hide connection strings only ===\n");
    println!("{}", visualize_excluding(&config, ["ConnectionStrings"]));

    Ok(())
}
