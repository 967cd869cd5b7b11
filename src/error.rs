//! Error types for config-provenance.

/// Result type alias for config-provenance operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration sources.
///
/// Report generation itself never fails; these errors only surface when a
/// [`ConfigRoot`](crate::core::ConfigRoot) is being built from its sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to load configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
