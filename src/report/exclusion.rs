//! Vendor section exclusion.

use crate::core::path;

/// Prefixes of framework-internal sections hidden by default.
pub const DEFAULT_VENDOR_PREFIXES: [&str; 8] = [
    "Microsoft",
    "System",
    "Windows",
    "Logging",
    "AllowedHosts",
    "Authentication",
    "DataProtection",
    "Routes",
];

/// A set of case-insensitive path prefixes.
///
/// A section whose full path starts with any prefix is pruned from a report
/// together with everything below it. Matching is a plain string prefix, so
/// `Logging` also hides `LoggingOptions`.
///
/// # Examples
///
/// ```rust
/// use config_provenance::report::VendorPrefixSet;
///
/// let set = VendorPrefixSet::new(["ConnectionStrings"]);
/// assert!(set.matches("connectionstrings:Main"));
/// assert!(!set.matches("Logging"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorPrefixSet {
    prefixes: Vec<String>,
}

impl VendorPrefixSet {
    /// Create a set from the given prefixes, dropping case-insensitive duplicates.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            prefixes: Vec::new(),
        };
        for prefix in prefixes {
            let prefix = prefix.into();
            if !set.prefixes.iter().any(|p| path::eq_ignore_case(p, &prefix)) {
                set.prefixes.push(prefix);
            }
        }
        set
    }

    /// The default vendor prefixes.
    pub fn vendor_defaults() -> Self {
        Self::new(DEFAULT_VENDOR_PREFIXES)
    }

    /// Whether `path` starts with any prefix in the set.
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| path::starts_with_ignore_case(path, prefix))
    }

    /// Prefixes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for VendorPrefixSet {
    fn default() -> Self {
        Self::vendor_defaults()
    }
}
