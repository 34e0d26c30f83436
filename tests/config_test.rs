//! 設定ファイルテスト

use alert_timeline::config::{Config, DEFAULT_API_URL};
use alert_timeline_common::Locale;
use tempfile::tempdir;

/// 設定ファイルがない場合はデフォルト
#[test]
fn test_load_missing_file_gives_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.timeout_seconds, 30);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_url: "http://192.168.1.20:8000".to_string(),
        locale: Locale::Uz,
        timeout_seconds: 10,
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.api_url, "http://192.168.1.20:8000");
    assert_eq!(loaded.locale, Locale::Uz);
    assert_eq!(loaded.timeout_seconds, 10);
}

/// 一部の項目だけの設定ファイル
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale": "uz"}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.locale, Locale::Uz);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

/// 壊れた設定ファイル
#[test]
fn test_broken_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// CLI指定のURLが最優先
#[test]
fn test_cli_url_overrides() {
    let config = Config::default();
    assert_eq!(config.api_url(Some("http://example.test:9000/")), "http://example.test:9000");
}
