//! Integration tests for loading layered sources and reporting on them.

use config_provenance::prelude::*;
use config_provenance::sources::{EnvSource, FileSource, MemorySource};
use std::fs;
use tempfile::TempDir;

fn tree_lines(report: &str) -> Vec<&str> {
    report
        .lines()
        .skip_while(|l| *l != "Configuration tree:")
        .skip(1)
        .take_while(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_json_file_override_report() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("appsettings.json");
    let dev = temp_dir.path().join("appsettings.development.json");

    fs::write(
        &base,
        r#"{ "database": { "host": "db.internal", "pool": 10 }, "name": "orders" }"#,
    )
    .unwrap();
    fs::write(&dev, r#"{ "database": { "host": "localhost" } }"#).unwrap();

    let config = ConfigRoot::builder()
        .with_file(&base)
        .with_file(&dev)
        .build()
        .unwrap();

    assert_eq!(config.get("database:host"), Some("localhost"));
    assert_eq!(config.get("database:pool"), Some("10"));

    let report = visualize_simple(&config, true);
    let base_name = base.display().to_string();
    let dev_name = dev.display().to_string();

    let lines = tree_lines(&report);
    assert_eq!(
        lines,
        vec![
            "+ database".to_string(),
            "  + host = localhost".to_string(),
            "    -> Value history (most recent first):".to_string(),
            format!("      @ (Active *) [{}] = localhost", dev_name),
            format!("      @ (Overridden x) [{}] = db.internal", base_name),
            format!("  + pool = 10 @ [{}]", base_name),
            format!("+ name = orders @ [{}]", base_name),
        ]
    );

    let providers: Vec<_> = report
        .lines()
        .skip_while(|l| !l.starts_with("Providers"))
        .skip(1)
        .take_while(|l| !l.is_empty())
        .collect();
    assert_eq!(
        providers,
        vec![format!("  @ {}", dev_name), format!("  @ {}", base_name)]
    );
}

#[test]
fn test_yaml_and_toml_layers() {
    let temp_dir = TempDir::new().unwrap();
    let yaml = temp_dir.path().join("base.yaml");
    let toml = temp_dir.path().join("override.toml");

    fs::write(
        &yaml,
        r#"
server:
  port: 8080
  hosts:
    - a.example
    - b.example
"#,
    )
    .unwrap();
    fs::write(&toml, "[server]\nport = 9090\n").unwrap();

    let config = ConfigRoot::builder()
        .with_file(&yaml)
        .with_file(&toml)
        .build()
        .unwrap();

    assert_eq!(config.get("server:port"), Some("9090"));
    assert_eq!(config.get("server:hosts:0"), Some("a.example"));
    assert_eq!(config.get("server:hosts:1"), Some("b.example"));

    let report = visualize_simple(&config, false);
    assert!(report.contains("    + 0 = a.example @ ["));
    assert!(report.contains("      @ (Overridden x) ["));
}

#[test]
fn test_env_overrides_file_and_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.json");
    fs::write(&path, r#"{ "server": { "port": "8080" } }"#).unwrap();

    let config = ConfigRoot::builder()
        .with_values([("server:port", "80"), ("server:timeout", "30")])
        .with_file(&path)
        .with_source(
            EnvSource::new("APP", "__").with_vars([("APP_SERVER__PORT", "9090")]),
        )
        .build()
        .unwrap();

    assert_eq!(config.get("server:port"), Some("9090"));
    assert_eq!(config.get("server:timeout"), Some("30"));

    let report = visualize_simple(&config, true);
    let lines = tree_lines(&report);
    let file_name = path.display().to_string();
    assert_eq!(
        lines,
        vec![
            "+ server".to_string(),
            "  + port = 9090".to_string(),
            "    -> Value history (most recent first):".to_string(),
            "      @ (Active *) [EnvSource] = 9090".to_string(),
            format!("      @ (Overridden x) [{}] = 8080", file_name),
            "      @ (Overridden x) [MemorySource] = 80".to_string(),
            "  + timeout = 30 @ [MemorySource]".to_string(),
        ]
    );
}

#[test]
fn test_env_report_stable_across_builds() {
    let vars: Vec<_> = (0..8)
        .map(|i| (format!("APP_KEY{}", i), format!("value{}", i)))
        .collect();
    let render = || {
        let config = ConfigRoot::builder()
            .with_source(EnvSource::new("APP", "__").with_vars(vars.clone()))
            .build()
            .unwrap();
        visualize_simple(&config, false)
    };

    let first = render();
    let expected: Vec<_> = (0..8)
        .map(|i| format!("+ key{} = value{} @ [EnvSource]", i, i))
        .collect();
    assert_eq!(tree_lines(&first), expected);

    for _ in 0..20 {
        assert_eq!(render(), first);
    }
}

#[test]
fn test_optional_file_missing() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigRoot::builder()
        .with_optional_file(temp_dir.path().join("missing.yaml"))
        .with_source(MemorySource::new([("Feature", "on")]).with_category("Defaults"))
        .build()
        .unwrap();

    let report = visualize(&config, true);
    assert!(report.contains("📁 Feature = on 📄 [Defaults]"));
}

#[test]
fn test_required_file_missing() {
    let result = ConfigRoot::builder()
        .with_file("/nonexistent/appsettings.json")
        .build();
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_custom_file_source_priority() {
    let temp_dir = TempDir::new().unwrap();
    let low = temp_dir.path().join("low.json");
    let high = temp_dir.path().join("high.json");
    fs::write(&low, r#"{ "mode": "low" }"#).unwrap();
    fs::write(&high, r#"{ "mode": "high" }"#).unwrap();

    // Registered first, but the higher priority wins.
    let config = ConfigRoot::builder()
        .with_source(FileSource::new(&high).with_priority(500))
        .with_file(&low)
        .build()
        .unwrap();

    assert_eq!(config.get("mode"), Some("high"));
}

#[test]
fn test_report_options_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.toml");
    fs::write(
        &path,
        "symbols = \"plain\"\nexclude_prefixes = [\"secrets\"]\n",
    )
    .unwrap();

    let options: ReportOptions = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    let tree = vec![
        ConfigNode::new("Secrets").with_child(ConfigNode::with_value("ApiKey", "hunter2")),
        ConfigNode::new("Logging").with_child(ConfigNode::with_value("Level", "Info")),
    ];

    let report = ReportBuilder::from_options(&options).build(&tree);
    assert_eq!(tree_lines(&report), vec!["+ Logging", "  + Level = Info"]);
}
