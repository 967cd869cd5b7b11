//! Layered configuration built from an ordered list of providers.

use super::node::{self, ConfigNode, Configuration};
use super::path;
use crate::sources::Provider;

/// A merged configuration together with the providers it was built from.
///
/// Providers are held lowest precedence first. The merged tree takes each
/// path's value from the highest-precedence provider that sets it; a section
/// keeps the key casing and position of its first declaration.
///
/// # Examples
///
/// ```rust
/// use config_provenance::core::ConfigRoot;
/// use config_provenance::sources::MemorySource;
///
/// # fn example() -> config_provenance::error::Result<()> {
/// let root = ConfigRoot::builder()
///     .with_source(MemorySource::new([("Server:Port", "8080")]).with_priority(100))
///     .with_source(MemorySource::new([("Server:Port", "9090")]).with_priority(200))
///     .build()?;
///
/// assert_eq!(root.get("Server:Port"), Some("9090"));
/// # Ok(())
/// # }
/// ```
pub struct ConfigRoot {
    providers: Vec<Box<dyn Provider>>,
    tree: Vec<ConfigNode>,
}

impl ConfigRoot {
    /// Build a root from providers given lowest precedence first.
    pub fn from_providers(providers: Vec<Box<dyn Provider>>) -> Self {
        let tree = merge_tree(&providers);
        Self { providers, tree }
    }

    /// Active value at `path` (case-insensitive).
    pub fn get(&self, path: &str) -> Option<&str> {
        self.providers.iter().rev().find_map(|p| p.try_get(path))
    }

    /// Section at `path` (case-insensitive).
    ///
    /// The returned node is itself a [`Configuration`] without provider
    /// information.
    pub fn section(&self, path: &str) -> Option<&ConfigNode> {
        node::find_in(&self.tree, path)
    }

    /// Number of providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

impl Configuration for ConfigRoot {
    fn children(&self) -> &[ConfigNode] {
        &self.tree
    }

    fn providers(&self) -> Option<Vec<&dyn Provider>> {
        Some(self.providers.iter().map(|p| p.as_ref()).collect())
    }
}

fn merge_tree(providers: &[Box<dyn Provider>]) -> Vec<ConfigNode> {
    let mut roots = Vec::new();
    for provider in providers {
        for (full_path, value) in provider.values().iter() {
            let mut segments = path::segments(full_path);
            let Some(first) = segments.next() else {
                continue;
            };
            let mut current = node::child_entry(&mut roots, first);
            for segment in segments {
                current = current.child_entry(segment);
            }
            current.set_value(value);
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{FlatValues, LoadedProvider, ProviderKind};

    fn provider(name: &str, pairs: &[(&str, &str)]) -> Box<dyn Provider> {
        let values: FlatValues = pairs.iter().copied().collect();
        Box::new(LoadedProvider::new(Some(ProviderKind::named(name)), values))
    }

    #[test]
    fn test_higher_precedence_wins() {
        let root = ConfigRoot::from_providers(vec![
            provider("low", &[("Server:Port", "8080"), ("Server:Host", "localhost")]),
            provider("high", &[("server:port", "9090")]),
        ]);

        assert_eq!(root.get("Server:Port"), Some("9090"));
        assert_eq!(root.get("Server:Host"), Some("localhost"));
        assert_eq!(root.section("Server:Port").and_then(|n| n.value()), Some("9090"));
    }

    #[test]
    fn test_first_declaration_keeps_casing_and_order() {
        let root = ConfigRoot::from_providers(vec![
            provider("low", &[("Zeta", "1"), ("Alpha:B", "2")]),
            provider("high", &[("ALPHA:A", "3"), ("Beta", "4")]),
        ]);

        let keys: Vec<_> = root.children().iter().map(|n| n.key()).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Beta"]);

        let alpha: Vec<_> = root.section("alpha").unwrap().children().iter().map(|n| n.key()).collect();
        assert_eq!(alpha, vec!["B", "A"]);
    }

    #[test]
    fn test_intermediate_sections_have_no_value() {
        let root = ConfigRoot::from_providers(vec![provider("p", &[("A:B:C", "x")])]);
        assert_eq!(root.section("A").and_then(|n| n.value()), None);
        assert_eq!(root.section("A:B:C").and_then(|n| n.value()), Some("x"));
    }

    #[test]
    fn test_empty_root() {
        let root = ConfigRoot::from_providers(Vec::new());
        assert!(root.children().is_empty());
        assert_eq!(root.provider_count(), 0);
        assert_eq!(root.providers().map(|p| p.len()), Some(0));
    }
}
