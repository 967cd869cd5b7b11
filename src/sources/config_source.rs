//! Configuration source trait.

use super::{FlatValues, ProviderKind};
use crate::error::Result;

/// Trait for configuration sources.
///
/// Implement this trait to create custom configuration sources (e.g., remote APIs,
/// databases, key-value stores). A source is loaded once when the
/// [`ConfigRoot`](crate::core::ConfigRoot) is built; the loaded values then act
/// as a [`Provider`](super::Provider) in reports.
pub trait ConfigSource: Send + Sync {
    /// Load configuration as a flat path/value map.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or parsed.
    fn load(&self) -> Result<FlatValues>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// How this source is labelled in reports.
    ///
    /// Returning `None` keeps the source's values in the configuration but
    /// leaves it out of provenance annotations.
    fn kind(&self) -> Option<ProviderKind>;

    /// Get the priority of this source (higher = takes precedence).
    ///
    /// Default priorities:
    /// - Environment variables: 300
    /// - Files: 100, 110, 120, ... in registration order
    /// - In-memory defaults: 50
    fn priority(&self) -> i32 {
        100
    }
}
