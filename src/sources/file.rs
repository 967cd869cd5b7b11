//! File-based configuration source.

use super::{ConfigSource, FlatValues, ProviderKind};
use crate::error::{ConfigError, Result};
use config::{File, FileFormat, Source};
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based configuration source.
///
/// Loads configuration from YAML, TOML, or JSON files with automatic format detection
/// based on file extension. In reports the source is labelled with its path.
///
/// # Examples
///
/// ```rust,no_run
/// use config_provenance::sources::FileSource;
///
/// let source = FileSource::new("config/appsettings.json");
/// let local = FileSource::new("config/appsettings.local.json").optional();
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
    required: bool,
}

impl FileSource {
    /// Create a new file source with automatic format detection.
    ///
    /// The format is detected from the file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
            required: true,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Treat a missing file as an empty source instead of an error.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Detect the file format from the extension.
    fn format(&self) -> Result<FileFormat> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            _ => Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            ))),
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<FlatValues> {
        let format = self.format()?;

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound && !self.required => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %self.path.display(), "optional configuration file not found");
                return Ok(FlatValues::new());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::LoadError(format!(
                    "Configuration file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let table = config::Config::builder()
            .add_source(File::from_str(&contents, format))
            .build()
            .and_then(|cfg| cfg.collect())
            .map_err(|e| {
                ConfigError::ParseError(format!("{}: {}", self.path.display(), e))
            })?;

        let values = FlatValues::from_table(&table);

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %self.path.display(), keys = values.len(), "loaded configuration file");

        Ok(values)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn kind(&self) -> Option<ProviderKind> {
        Some(ProviderKind::file(self.path.clone()))
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(FileSource::new("config.yaml").format().unwrap(), FileFormat::Yaml);
        assert_eq!(FileSource::new("config.yml").format().unwrap(), FileFormat::Yaml);
        assert_eq!(FileSource::new("config.toml").format().unwrap(), FileFormat::Toml);
        assert_eq!(FileSource::new("config.json").format().unwrap(), FileFormat::Json);
    }

    #[test]
    fn test_format_unknown() {
        assert!(FileSource::new("config.txt").format().is_err());
        assert!(FileSource::new("config").format().is_err());
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(
            &config_path,
            r#"
server:
  port: 8080
  host: localhost
"#,
        )
        .unwrap();

        let values = FileSource::new(&config_path).load().unwrap();
        assert_eq!(values.get("server:port"), Some("8080"));
        assert_eq!(values.get("server:host"), Some("localhost"));
    }

    #[test]
    fn test_load_json_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        fs::write(&config_path, r#"{ "zeta": "1", "alpha": "2", "mid": { "b": 1, "a": 2 } }"#)
            .unwrap();

        let values = FileSource::new(&config_path).load().unwrap();
        let paths: Vec<_> = values.iter().map(|(k, _)| k.to_lowercase()).collect();
        assert_eq!(paths, vec!["zeta", "alpha", "mid:b", "mid:a"]);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let source = FileSource::new("/nonexistent/config.yaml");
        let result = source.load();
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_optional_missing_file() {
        let source = FileSource::new("/nonexistent/config.yaml").optional();
        let values = source.load().unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.json");
        fs::write(&config_path, "{ not json").unwrap();

        let result = FileSource::new(&config_path).load();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_with_priority() {
        let source = FileSource::new("config.yaml").with_priority(200);
        assert_eq!(source.priority(), 200);
    }

    #[test]
    fn test_name_and_kind() {
        let source = FileSource::new("config.yaml");
        assert!(source.name().contains("config.yaml"));
        assert_eq!(source.kind(), Some(ProviderKind::file("config.yaml")));
    }
}
