//! Layered configuration tests
//!
//! Each test works against an isolated config file so that the user's real
//! configuration is never read or written.

use gametag_cli::config::{AppConfig, ConfigManager};
use std::fs;
use tempfile::TempDir;

fn create_test_config_manager(temp_dir: &TempDir) -> ConfigManager {
    ConfigManager::with_path(temp_dir.path().join("config.toml"))
}

#[test]
fn test_defaults_without_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    let config = manager.load().unwrap();
    assert_eq!(config.enrichment.top_k, 20);
    assert_eq!(config.enrichment.max_concurrent_lookups, None);
    assert!(config.cache.enabled);
    assert_eq!(config.output.default_format, "text");
}

#[test]
fn test_file_layer_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);
    fs::write(
        manager.get_config_path(),
        "[enrichment]\ntop_k = 5\nmax_concurrent_lookups = 4\n\n[provider]\nlanguage = \"de\"\n",
    )
    .unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.enrichment.top_k, 5);
    assert_eq!(config.enrichment.max_concurrent_lookups, Some(4));
    assert_eq!(config.provider.language, "de");
    assert_eq!(config.provider.base_url, AppConfig::default().provider.base_url);
}

#[test]
fn test_set_creates_file_and_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    manager.set("enrichment.top_k", "12").unwrap();
    manager.set("cache.enabled", "false").unwrap();
    manager
        .set("provider.base_url", "http://localhost:8080")
        .unwrap();

    assert!(manager.get_config_path().exists());
    assert_eq!(manager.get("enrichment.top_k").unwrap(), "12");
    assert_eq!(manager.get("cache.enabled").unwrap(), "false");
    assert_eq!(
        manager.get("provider.base_url").unwrap(),
        "http://localhost:8080"
    );

    let content = fs::read_to_string(manager.get_config_path()).unwrap();
    assert!(content.contains("top_k = 12"));
    assert!(content.contains("enabled = false"));
}

#[test]
fn test_set_preserves_other_sections() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    manager.set("provider.language", "fr").unwrap();
    manager.set("output.default_format", "csv").unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.provider.language, "fr");
    assert_eq!(config.output.default_format, "csv");
}

#[test]
fn test_set_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    assert!(manager.set("enrichment.top_k", "-1").is_err());
    assert!(manager.set("enrichment.max_concurrent_lookups", "0").is_err());
    assert!(manager.set("provider.timeout_seconds", "0").is_err());
    assert!(manager.set("provider.base_url", "ftp://example.com").is_err());
    assert!(manager.set("output.default_format", "yaml").is_err());
    assert!(manager.set("cache.enabled", "maybe").is_err());

    assert!(!manager.get_config_path().exists());
}

#[test]
fn test_get_unknown_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    assert!(manager.get("enrichment.unknown").is_err());
}

#[test]
fn test_list_is_sorted_and_complete() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    let items = manager.list().unwrap();
    let keys: Vec<&str> = items.iter().map(|(k, _)| k.as_str()).collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    for expected in [
        "cache.enabled",
        "enrichment.top_k",
        "output.color_enabled",
        "output.default_format",
        "provider.base_url",
        "provider.language",
        "provider.timeout_seconds",
        "provider.user_agent",
    ] {
        assert!(keys.contains(&expected), "missing key {expected}");
    }
}
