//! Per-path value history across providers.

use crate::core::{ConfigNode, Configuration, path};
use crate::sources::{Provider, ProviderKey};
use std::collections::HashMap;

/// One provider's value for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Provider that supplied the value.
    pub provider: ProviderKey,
    /// The value it supplied.
    pub value: String,
}

/// Map from path to the values every provider supplied for it.
///
/// Each list is ordered highest precedence first: entry 0 is the value in
/// effect, later entries were overridden.
#[derive(Debug, Clone, Default)]
pub struct ValueHistory {
    paths: HashMap<String, Vec<HistoryEntry>>,
}

impl ValueHistory {
    /// Entries for `path`; empty if no provider supplied it.
    pub fn get(&self, path: &str) -> &[HistoryEntry] {
        self.paths.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of paths with at least one entry.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path has any entry.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn push(&mut self, path: String, entry: HistoryEntry) {
        self.paths.entry(path).or_default().push(entry);
    }
}

/// Display names of the providers that take part in a report.
///
/// Entries are in collection order, highest precedence first.
#[derive(Debug, Clone, Default)]
pub struct ProviderTable {
    entries: Vec<(ProviderKey, String)>,
}

impl ProviderTable {
    /// Display name for `key`.
    pub fn name(&self, key: ProviderKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, name)| name.as_str())
    }

    /// Providers, highest precedence first.
    pub fn iter(&self) -> impl Iterator<Item = (ProviderKey, &str)> {
        self.entries.iter().map(|(k, name)| (*k, name.as_str()))
    }

    /// Number of providers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no providers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the renderer needs to annotate values with their sources.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    /// Provider display names.
    pub providers: ProviderTable,
    /// Value history per path.
    pub history: ValueHistory,
}

/// Collect provider names and per-path value history for `config`.
///
/// Providers are visited highest precedence first, so the first entry
/// recorded for a path is the active one. Providers without a display name
/// are skipped, as are empty values. A configuration that exposes no
/// providers yields an empty [`Provenance`].
pub fn collect<C: Configuration + ?Sized>(config: &C) -> Provenance {
    let mut provenance = Provenance::default();
    let Some(providers) = config.providers() else {
        return provenance;
    };

    for (position, provider) in providers.iter().enumerate().rev() {
        let name = provider
            .kind()
            .map(|kind| kind.display_name())
            .filter(|name| !name.is_empty());
        let Some(name) = name else {
            #[cfg(feature = "tracing")]
            tracing::debug!(position, "skipping provider without a display name");
            continue;
        };

        let key = ProviderKey(position);
        provenance.providers.entries.push((key, name));
        record(*provider, key, config.children(), None, &mut provenance.history);
    }

    provenance
}

fn record(
    provider: &dyn Provider,
    key: ProviderKey,
    nodes: &[ConfigNode],
    parent: Option<&str>,
    history: &mut ValueHistory,
) {
    for node in nodes {
        let node_path = path::combine(parent, node.key());
        if let Some(value) = provider.try_get(&node_path).filter(|v| !v.is_empty()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(path = %node_path, provider = key.0, "recorded value");
            history.push(
                node_path.clone(),
                HistoryEntry {
                    provider: key,
                    value: value.to_string(),
                },
            );
        }
        record(provider, key, node.children(), Some(&node_path), history);
    }
}
