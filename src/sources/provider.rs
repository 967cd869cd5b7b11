//! Providers: loaded sources that can answer path lookups.

use super::FlatValues;
use std::fmt;
use std::path::PathBuf;

/// What kind of source a provider is, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    /// Loaded from a file; displayed as the file path.
    File {
        /// Path the file was loaded from.
        path: PathBuf,
    },
    /// Any other source; displayed as its category name.
    Named {
        /// Category of the source, e.g. `EnvSource`.
        category: String,
    },
}

impl ProviderKind {
    /// File-backed kind.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Named kind.
    pub fn named(category: impl Into<String>) -> Self {
        Self::Named {
            category: category.into(),
        }
    }

    /// Human-readable name shown in reports.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "{}", path.display()),
            Self::Named { category } => f.write_str(category),
        }
    }
}

/// Stable identity of a provider within one configuration.
///
/// The key is the provider's position in precedence order (0 = lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderKey(pub usize);

/// A source of path/value pairs that has already been loaded.
///
/// Implement this trait to feed custom sources straight into a
/// [`ConfigRoot`](crate::core::ConfigRoot).
pub trait Provider {
    /// What kind of source this is.
    ///
    /// Providers returning `None` (or an empty display name) are left out of
    /// reports entirely.
    fn kind(&self) -> Option<ProviderKind>;

    /// All values this provider supplies.
    fn values(&self) -> &FlatValues;

    /// Value this provider has at `path`, if any (case-insensitive).
    fn try_get(&self, path: &str) -> Option<&str> {
        self.values().get(path)
    }
}

/// A provider holding values produced by a [`ConfigSource`](super::ConfigSource).
#[derive(Debug, Clone)]
pub struct LoadedProvider {
    kind: Option<ProviderKind>,
    values: FlatValues,
}

impl LoadedProvider {
    /// Wrap already-loaded values.
    pub fn new(kind: Option<ProviderKind>, values: FlatValues) -> Self {
        Self { kind, values }
    }
}

impl Provider for LoadedProvider {
    fn kind(&self) -> Option<ProviderKind> {
        self.kind.clone()
    }

    fn values(&self) -> &FlatValues {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(
            ProviderKind::file("config/appsettings.json").display_name(),
            "config/appsettings.json"
        );
        assert_eq!(ProviderKind::named("EnvSource").display_name(), "EnvSource");
    }

    #[test]
    fn test_loaded_provider_lookup() {
        let values: FlatValues = [("Server:Port", "8080")].into_iter().collect();
        let provider = LoadedProvider::new(Some(ProviderKind::named("test")), values);

        assert_eq!(provider.try_get("server:port"), Some("8080"));
        assert_eq!(provider.try_get("server:host"), None);
    }
}
