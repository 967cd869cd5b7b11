//! # config-provenance
//!
//! Render layered configuration as a text report that shows, for every value,
//! which source supplied it and which lower-precedence values it overrode.
//!
//! ## Overview
//!
//! `config-provenance` combines:
//! - A layered configuration root built from files, environment variables and
//!   in-memory defaults (loaded through the `config` crate)
//! - A per-path value history collected across all sources
//! - A report renderer with Unicode or plain ASCII symbols and exclusion of
//!   framework-internal sections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use config_provenance::prelude::*;
//!
//! # fn example() -> config_provenance::error::Result<()> {
//! let config = ConfigRoot::builder()
//!     .with_file("appsettings.json")
//!     .with_optional_file("appsettings.Development.json")
//!     .with_env_overrides("APP", "__")
//!     .build()?;
//!
//! // Unicode glyphs, vendor sections hidden
//! println!("{}", visualize(&config, true));
//!
//! // ASCII glyphs, only ConnectionStrings hidden
//! println!("{}", visualize_simple_excluding(&config, ["ConnectionStrings"]));
//! # Ok(())
//! # }
//! ```
//!
//! Any type implementing [`core::Configuration`] can be rendered. A plain
//! [`core::ConfigNode`] tree has no provider information, so its report shows
//! values without provenance.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): debug logging of skipped providers, excluded
//!   sections and loaded sources.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod report;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ConfigNode, ConfigRoot, ConfigRootBuilder, Configuration};
    pub use crate::error::{ConfigError, Result};
    pub use crate::report::{
        ReportBuilder, ReportOptions, SymbolSet, visualize, visualize_excluding, visualize_simple,
        visualize_simple_excluding,
    };
}
