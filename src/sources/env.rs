//! Environment variable configuration source.

use super::{ConfigSource, FlatValues, ProviderKind};
use crate::error::{ConfigError, Result};
use config::{Environment, Source};

/// Environment variable configuration source.
///
/// Loads configuration from environment variables with a specified prefix
/// and separator for nested keys. Keys are lowercased by the underlying
/// `config` crate. In reports the source is labelled `EnvSource`.
///
/// # Examples
///
/// ```rust
/// use config_provenance::sources::EnvSource;
///
/// // APP_SERVER__PORT=8080 -> server:port = 8080
/// let source = EnvSource::new("APP", "__");
/// ```
pub struct EnvSource {
    prefix: String,
    separator: String,
    priority: i32,
    vars: Option<config::Map<String, String>>,
}

impl EnvSource {
    /// Category name shown in reports.
    pub const CATEGORY: &'static str = "EnvSource";

    /// Create a new environment variable source.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "APP")
    /// * `separator` - Separator for nested keys (e.g., "__" for APP_DB__HOST)
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            priority: 300, // Env vars have highest priority by default
            vars: None,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Read from the given variables instead of the process environment.
    ///
    /// Variables are loaded in the order given.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<FlatValues> {
        let mut env_source = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator(&self.separator);

        if let Some(vars) = &self.vars {
            env_source = env_source.source(Some(vars.clone()));
        }

        let table = config::Config::builder()
            .add_source(env_source)
            .build()
            .and_then(|cfg| cfg.collect())
            .map_err(|e| {
                ConfigError::LoadError(format!("Failed to load environment variables: {}", e))
            })?;

        let values = FlatValues::from_table(&table);

        #[cfg(feature = "tracing")]
        tracing::debug!(prefix = %self.prefix, keys = values.len(), "loaded environment variables");

        Ok(values)
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }

    fn kind(&self) -> Option<ProviderKind> {
        Some(ProviderKind::named(Self::CATEGORY))
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
