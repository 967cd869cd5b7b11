//! Text rendering of the report sections.

use super::exclusion::VendorPrefixSet;
use super::history::{HistoryEntry, Provenance};
use super::symbols::SymbolSet;
use crate::core::{ConfigNode, path};
use std::fmt::{self, Write};

pub(crate) const TITLE: &str = "Configuration Provenance Report";
pub(crate) const PROVIDERS_HEADER: &str = "Providers (highest precedence first):";
pub(crate) const NO_PROVIDERS: &str = "No provider information available.";
pub(crate) const TREE_HEADER: &str = "Configuration tree:";
pub(crate) const LEGEND_HEADER: &str = "Legend:";
pub(crate) const HISTORY_HEADER: &str = "Value history (most recent first):";

const INDENT: &str = "  ";

/// Renders report sections into a string buffer.
pub(crate) struct Renderer<'a> {
    pub(crate) symbols: &'a SymbolSet,
    pub(crate) provenance: &'a Provenance,
    /// `None` disables exclusion.
    pub(crate) exclusion: Option<&'a VendorPrefixSet>,
}

impl Renderer<'_> {
    pub(crate) fn write_title(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", "=".repeat(TITLE.len()))?;
        writeln!(out)
    }

    pub(crate) fn write_providers(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{PROVIDERS_HEADER}")?;
        if self.provenance.providers.is_empty() {
            writeln!(out, "{INDENT}{NO_PROVIDERS}")?;
        }
        for (_, name) in self.provenance.providers.iter() {
            writeln!(out, "{INDENT}{} {name}", self.symbols.provider)?;
        }
        writeln!(out)
    }

    pub(crate) fn write_tree(&self, out: &mut String, roots: &[ConfigNode]) -> fmt::Result {
        writeln!(out, "{TREE_HEADER}")?;
        for root in roots {
            self.write_node(out, root, None, 0)?;
        }
        writeln!(out)
    }

    pub(crate) fn write_legend(&self, out: &mut String) -> fmt::Result {
        let s = self.symbols;
        writeln!(out, "{LEGEND_HEADER}")?;
        writeln!(out, "{INDENT}{} Section", s.section)?;
        writeln!(out, "{INDENT}{} Provider (configuration source)", s.provider)?;
        writeln!(out, "{INDENT}{} Active value", s.active)?;
        writeln!(out, "{INDENT}{} Overridden value", s.overridden)?;
        writeln!(out, "{INDENT}Indentation shows nesting depth.")
    }

    fn write_node(
        &self,
        out: &mut String,
        node: &ConfigNode,
        parent: Option<&str>,
        depth: usize,
    ) -> fmt::Result {
        let node_path = path::combine(parent, node.key());
        if self.exclusion.is_some_and(|set| set.matches(&node_path)) {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %node_path, "excluded section");
            return Ok(());
        }

        let indent = INDENT.repeat(depth);
        write!(out, "{indent}{} {}", self.symbols.section, node.key())?;

        if node.is_leaf_with_value() {
            let value = node.value().unwrap_or_default();
            write!(out, " = {value}")?;
            match self.provenance.history.get(&node_path) {
                [] => {}
                [only] => write!(out, " {} [{}]", self.symbols.provider, self.name_of(only))?,
                entries => {
                    writeln!(out)?;
                    return self.write_history(out, &indent, value, entries);
                }
            }
        }

        writeln!(out)?;
        for child in node.children() {
            self.write_node(out, child, Some(&node_path), depth + 1)?;
        }
        Ok(())
    }

    /// The first entry reports the node's active value, later entries their own.
    fn write_history(
        &self,
        out: &mut String,
        indent: &str,
        active_value: &str,
        entries: &[HistoryEntry],
    ) -> fmt::Result {
        let s = self.symbols;
        writeln!(out, "{indent}{INDENT}{} {HISTORY_HEADER}", s.history_arrow)?;
        for (index, entry) in entries.iter().enumerate() {
            let name = self.name_of(entry);
            if index == 0 {
                writeln!(
                    out,
                    "{indent}{INDENT}{INDENT}{} (Active {}) [{name}] = {active_value}",
                    s.provider, s.active
                )?;
            } else {
                writeln!(
                    out,
                    "{indent}{INDENT}{INDENT}{} (Overridden {}) [{name}] = {}",
                    s.provider, s.overridden, entry.value
                )?;
            }
        }
        Ok(())
    }

    fn name_of(&self, entry: &HistoryEntry) -> &str {
        self.provenance
            .providers
            .name(entry.provider)
            .unwrap_or("unknown")
    }
}
