//! Provenance reports.
//!
//! A report is built in two passes over a [`Configuration`]: the providers are
//! walked highest precedence first to collect each path's value history, then
//! the section tree is rendered with every leaf annotated by the provider that
//! supplied its value and the values it overrode.
//!
//! ```text
//! Configuration tree:
//! 📁 Logging
//!   📁 LogLevel
//!     📁 Default = Debug
//!       ↳ Value history (most recent first):
//!         📄 (Active ✓) [appsettings.Development.json] = Debug
//!         📄 (Overridden ✗) [appsettings.json] = Information
//! ```

mod exclusion;
mod history;
mod options;
mod render;
mod symbols;

pub use exclusion::{DEFAULT_VENDOR_PREFIXES, VendorPrefixSet};
pub use history::{HistoryEntry, Provenance, ProviderTable, ValueHistory, collect};
pub use options::ReportOptions;
pub use symbols::{SymbolPreset, SymbolSet, Symbols};

use crate::core::Configuration;
use render::Renderer;
use std::fmt;

/// Builds provenance reports.
///
/// # Examples
///
/// ```rust
/// use config_provenance::core::ConfigRoot;
/// use config_provenance::report::{ReportBuilder, SymbolSet};
/// use config_provenance::sources::MemorySource;
///
/// # fn example() -> config_provenance::error::Result<()> {
/// let root = ConfigRoot::builder()
///     .with_source(MemorySource::new([("Server:Port", "8080")]))
///     .build()?;
///
/// let report = ReportBuilder::new()
///     .with_symbols(SymbolSet::PLAIN)
///     .with_exclusion(false)
///     .build(&root);
/// assert!(report.contains("+ Port = 8080 @ [MemorySource]"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBuilder {
    symbols: SymbolSet,
    exclude_vendor_sections: bool,
    prefixes: VendorPrefixSet,
}

impl ReportBuilder {
    /// Graphical symbols, vendor exclusion on, default prefixes.
    pub fn new() -> Self {
        Self {
            symbols: SymbolSet::GRAPHICAL,
            exclude_vendor_sections: true,
            prefixes: VendorPrefixSet::vendor_defaults(),
        }
    }

    /// Like [`new`](Self::new) with plain ASCII symbols.
    pub fn simple() -> Self {
        Self::new().with_symbols(SymbolSet::PLAIN)
    }

    /// Builder configured from deserialized options.
    pub fn from_options(options: &ReportOptions) -> Self {
        let prefixes = match &options.exclude_prefixes {
            Some(prefixes) => VendorPrefixSet::new(prefixes.iter().cloned()),
            None => VendorPrefixSet::vendor_defaults(),
        };
        Self {
            symbols: options.symbols.resolve(),
            exclude_vendor_sections: options.exclude_vendor_sections,
            prefixes,
        }
    }

    /// Use a different symbol set.
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// Turn vendor exclusion on or off.
    pub fn with_exclusion(mut self, enabled: bool) -> Self {
        self.exclude_vendor_sections = enabled;
        self
    }

    /// Replace the excluded prefixes. This also turns exclusion on.
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = VendorPrefixSet::new(prefixes);
        self.exclude_vendor_sections = true;
        self
    }

    /// The symbol set reports are drawn with.
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Render the full report for `config`.
    ///
    /// The report consists of a title, the provider list, the section tree and
    /// a legend, in that order. Rendering never fails.
    pub fn build<C: Configuration + ?Sized>(&self, config: &C) -> String {
        let provenance = collect(config);
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut out, config, &provenance);
        out
    }

    fn write_report<C: Configuration + ?Sized>(
        &self,
        out: &mut String,
        config: &C,
        provenance: &Provenance,
    ) -> fmt::Result {
        let renderer = Renderer {
            symbols: &self.symbols,
            provenance,
            exclusion: self.exclude_vendor_sections.then_some(&self.prefixes),
        };
        renderer.write_title(out)?;
        renderer.write_providers(out)?;
        renderer.write_tree(out, config.children())?;
        renderer.write_legend(out)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `config` with graphical symbols and the default vendor prefixes.
///
/// With `exclude_vendor_sections` false nothing is pruned.
pub fn visualize<C: Configuration + ?Sized>(config: &C, exclude_vendor_sections: bool) -> String {
    ReportBuilder::new()
        .with_exclusion(exclude_vendor_sections)
        .build(config)
}

/// Render `config` with graphical symbols, pruning sections under `prefixes`
/// instead of the default vendor prefixes.
///
/// An empty `prefixes` hides nothing. Use [`visualize`] with `true` for the
/// default vendor prefixes.
pub fn visualize_excluding<C, I, S>(config: &C, prefixes: I) -> String
where
    C: Configuration + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ReportBuilder::new().with_prefixes(prefixes).build(config)
}

/// [`visualize`] with plain ASCII symbols.
pub fn visualize_simple<C: Configuration + ?Sized>(
    config: &C,
    exclude_vendor_sections: bool,
) -> String {
    ReportBuilder::simple()
        .with_exclusion(exclude_vendor_sections)
        .build(config)
}

/// [`visualize_excluding`] with plain ASCII symbols.
pub fn visualize_simple_excluding<C, I, S>(config: &C, prefixes: I) -> String
where
    C: Configuration + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ReportBuilder::simple().with_prefixes(prefixes).build(config)
}
