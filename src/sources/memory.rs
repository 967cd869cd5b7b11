//! In-memory configuration source.

use super::{ConfigSource, FlatValues, ProviderKind};
use crate::error::Result;

/// In-memory configuration source, typically used for programmatic defaults.
///
/// Keys are colon-delimited paths. In reports the source is labelled
/// `MemorySource` unless a different category is given.
///
/// # Examples
///
/// ```rust
/// use config_provenance::sources::MemorySource;
///
/// let defaults = MemorySource::new([
///     ("Server:Port", "8080"),
///     ("Server:Host", "localhost"),
/// ]);
/// ```
pub struct MemorySource {
    values: FlatValues,
    category: String,
    priority: i32,
}

impl MemorySource {
    /// Category name shown in reports.
    pub const CATEGORY: &'static str = "MemorySource";

    /// Create a source from path/value pairs.
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values.into_iter().collect(),
            category: Self::CATEGORY.to_string(),
            priority: 50,
        }
    }

    /// Label this source with a custom category in reports.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl ConfigSource for MemorySource {
    fn load(&self) -> Result<FlatValues> {
        Ok(self.values.clone())
    }

    fn name(&self) -> String {
        format!("memory:{}", self.category)
    }

    fn kind(&self) -> Option<ProviderKind> {
        Some(ProviderKind::named(self.category.clone()))
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
