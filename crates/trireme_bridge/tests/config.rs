use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use trireme_bridge::{BridgeConfig, ConfigError, ImportSettings};

#[test]
fn partial_ron_keeps_defaults() {
    let config = BridgeConfig::from_ron_str(r#"(import: (cache_dir: "/data/cache"))"#).unwrap();
    assert_eq!(config.import.cache_dir, PathBuf::from("/data/cache"));
    assert_eq!(config.import.buffer_size, 4096);
    assert_eq!(config.picker_mime_type, "application/x-bittorrent");
    assert_eq!(config.log_dir, None);
}

#[test]
fn full_ron_overrides_everything() {
    let text = r#"(
        import: (cache_dir: "/c", buffer_size: 1024),
        picker_mime_type: "application/octet-stream",
        log_dir: Some("/logs"),
    )"#;
    let config = BridgeConfig::from_ron_str(text).unwrap();
    assert_eq!(
        config,
        BridgeConfig {
            import: ImportSettings {
                cache_dir: PathBuf::from("/c"),
                buffer_size: 1024,
            },
            picker_mime_type: "application/octet-stream".to_string(),
            log_dir: Some(PathBuf::from("/logs")),
        }
    );
}

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = BridgeConfig::load(&temp.path().join("trireme.ron")).unwrap();
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trireme.ron");
    std::fs::write(&path, "(import: [").unwrap();
    let err = BridgeConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}
