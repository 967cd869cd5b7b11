//! Serializable report options.

use super::symbols::Symbols;
use serde::{Deserialize, Serialize};

/// Report settings that can be read from an application's own configuration.
///
/// Missing fields take their defaults: graphical symbols, vendor exclusion
/// on, and the default vendor prefixes.
///
/// ```toml
/// [report]
/// symbols = "plain"
/// exclude_vendor_sections = true
/// exclude_prefixes = ["ConnectionStrings"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Preset name (`"graphical"`, `"plain"`) or a custom symbol table.
    pub symbols: Symbols,
    /// Whether excluded prefixes are pruned at all.
    pub exclude_vendor_sections: bool,
    /// Replaces the default vendor prefixes when set.
    pub exclude_prefixes: Option<Vec<String>>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            symbols: Symbols::default(),
            exclude_vendor_sections: true,
            exclude_prefixes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{SymbolPreset, SymbolSet};
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> ReportOptions {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_for_empty_document() {
        assert_eq!(parse(""), ReportOptions::default());
    }

    #[test]
    fn test_preset_and_prefixes() {
        let options = parse(
            r#"
symbols = "plain"
exclude_vendor_sections = false
exclude_prefixes = ["ConnectionStrings", "Secrets"]
"#,
        );

        assert_eq!(options.symbols, Symbols::Preset(SymbolPreset::Plain));
        assert!(!options.exclude_vendor_sections);
        assert_eq!(
            options.exclude_prefixes,
            Some(vec!["ConnectionStrings".to_string(), "Secrets".to_string()])
        );
    }

    #[test]
    fn test_custom_symbol_table() {
        let options = parse(
            r##"
[symbols]
section = "#"
provider = "src"
active = "on"
overridden = "off"
history_arrow = "=>"
"##,
        );

        assert_eq!(
            options.symbols.resolve(),
            SymbolSet::new("#", "src", "on", "off", "=>")
        );
    }
}
