//! Builder for constructing ConfigRoot instances.

use crate::core::ConfigRoot;
use crate::error::{ConfigError, Result};
use crate::sources::{ConfigSource, EnvSource, FileSource, LoadedProvider, MemorySource, Provider};
use std::path::PathBuf;

/// Builder for constructing a [`ConfigRoot`].
///
/// Provides a fluent interface for registering sources. Every source is loaded
/// once in [`build`](Self::build); sources are then ordered by priority
/// (lowest first, registration order breaking ties).
///
/// # Examples
///
/// ```rust,no_run
/// use config_provenance::prelude::*;
///
/// # fn example() -> Result<()> {
/// let config = ConfigRoot::builder()
///     .with_values([("Server:Port", "8080")])
///     .with_file("config/appsettings.json")
///     .with_file("config/appsettings.Development.json")
///     .with_env_overrides("APP", "__")
///     .build()?;
///
/// println!("{}", visualize(&config, true));
/// # Ok(())
/// # }
/// ```
pub struct ConfigRootBuilder {
    file_paths: Vec<(PathBuf, bool)>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
    custom_sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRootBuilder {
    /// Create a new builder with no sources.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            env_separator: None,
            custom_sources: Vec::new(),
        }
    }

    /// Add a required file source with automatic format detection.
    ///
    /// Supported formats: YAML (.yaml, .yml), TOML (.toml), JSON (.json)
    ///
    /// Files are added in the order they are specified. Later files have higher
    /// priority and will override earlier files.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push((path.into(), true));
        self
    }

    /// Add a file source that is skipped when the file does not exist.
    pub fn with_optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push((path.into(), false));
        self
    }

    /// Add environment variable source with custom prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "APP")
    /// * `separator` - Separator for nested keys (e.g., "__" for APP_DB__HOST)
    ///
    /// Environment variables have the highest priority by default (300).
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Add in-memory defaults (priority 50, below every file).
    pub fn with_values<I, K, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_source(MemorySource::new(values))
    }

    /// Add a custom configuration source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Load every source and build the configuration root.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to load.
    pub fn build(self) -> Result<ConfigRoot> {
        let mut sources: Vec<Box<dyn ConfigSource>> = Vec::new();

        // Add file sources with increasing priority
        for (index, (path, required)) in self.file_paths.into_iter().enumerate() {
            let priority = 100 + (index as i32 * 10); // 100, 110, 120, etc.
            let mut source = FileSource::new(path).with_priority(priority);
            if !required {
                source = source.optional();
            }
            sources.push(Box::new(source));
        }

        sources.extend(self.custom_sources);

        // Add environment variable source (highest priority)
        if let (Some(prefix), Some(separator)) = (self.env_prefix, self.env_separator) {
            sources.push(Box::new(EnvSource::new(prefix, separator)));
        }

        // Stable: equal priorities keep registration order
        sources.sort_by_key(|s| s.priority());

        let mut providers: Vec<Box<dyn Provider>> = Vec::with_capacity(sources.len());
        for source in &sources {
            let values = source.load().map_err(|e| {
                ConfigError::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;
            providers.push(Box::new(LoadedProvider::new(source.kind(), values)));
        }

        Ok(ConfigRoot::from_providers(providers))
    }

    #[cfg(test)]
    fn source_count(&self) -> usize {
        self.file_paths.len()
            + self.custom_sources.len()
            + usize::from(self.env_prefix.is_some())
    }
}

impl Default for ConfigRootBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRoot {
    /// Create a new builder for constructing a configuration root.
    pub fn builder() -> ConfigRootBuilder {
        ConfigRootBuilder::new()
    }
}
