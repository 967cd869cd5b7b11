//! Glyphs used by the report renderer.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The five glyphs a report is drawn with.
///
/// The renderer only reads these fields, so any set works. Two presets ship:
/// [`SymbolSet::GRAPHICAL`] (Unicode) and [`SymbolSet::PLAIN`] (ASCII).
///
/// # Examples
///
/// ```rust
/// use config_provenance::report::SymbolSet;
///
/// let custom = SymbolSet::new("#", "src:", "(on)", "(off)", "=>");
/// assert_eq!(custom.section, "#");
/// assert_eq!(SymbolSet::default(), SymbolSet::GRAPHICAL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    /// Marks every section line.
    pub section: Cow<'static, str>,
    /// Marks a provider name.
    pub provider: Cow<'static, str>,
    /// Marks the value currently in effect.
    pub active: Cow<'static, str>,
    /// Marks a value that was overridden.
    pub overridden: Cow<'static, str>,
    /// Introduces a value history block.
    pub history_arrow: Cow<'static, str>,
}

impl SymbolSet {
    /// Unicode glyphs.
    pub const GRAPHICAL: SymbolSet = SymbolSet {
        section: Cow::Borrowed("📁"),
        provider: Cow::Borrowed("📄"),
        active: Cow::Borrowed("✓"),
        overridden: Cow::Borrowed("✗"),
        history_arrow: Cow::Borrowed("↳"),
    };

    /// Plain ASCII fallbacks for terminals without Unicode support.
    pub const PLAIN: SymbolSet = SymbolSet {
        section: Cow::Borrowed("+"),
        provider: Cow::Borrowed("@"),
        active: Cow::Borrowed("*"),
        overridden: Cow::Borrowed("x"),
        history_arrow: Cow::Borrowed("->"),
    };

    /// Create a custom symbol set.
    pub fn new(
        section: impl Into<Cow<'static, str>>,
        provider: impl Into<Cow<'static, str>>,
        active: impl Into<Cow<'static, str>>,
        overridden: impl Into<Cow<'static, str>>,
        history_arrow: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            section: section.into(),
            provider: provider.into(),
            active: active.into(),
            overridden: overridden.into(),
            history_arrow: history_arrow.into(),
        }
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::GRAPHICAL
    }
}

/// A named built-in symbol set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPreset {
    /// [`SymbolSet::GRAPHICAL`]
    Graphical,
    /// [`SymbolSet::PLAIN`]
    Plain,
}

/// Symbol selection as written in options: a preset name or a full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbols {
    /// One of the built-in presets, e.g. `"plain"`.
    Preset(SymbolPreset),
    /// A custom five-field set.
    Custom(SymbolSet),
}

impl Symbols {
    /// Resolve to a concrete symbol set.
    pub fn resolve(&self) -> SymbolSet {
        match self {
            Self::Preset(SymbolPreset::Graphical) => SymbolSet::GRAPHICAL,
            Self::Preset(SymbolPreset::Plain) => SymbolSet::PLAIN,
            Self::Custom(set) => set.clone(),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::Preset(SymbolPreset::Graphical)
    }
}
