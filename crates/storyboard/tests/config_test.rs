//! Tests for layered configuration.

use std::path::PathBuf;
use storyboard::{DEFAULT_HISTORY_CAPACITY, SplitMode, StoryboardConfig, StoryboardErrorKind};
use tempfile::TempDir;

#[test]
fn test_bundled_defaults() {
    let config = StoryboardConfig::from_toml_str("").unwrap();

    assert_eq!(config.generation.default_split, SplitMode::Sentence);
    assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
    assert!(config.history.path.is_none());
    assert!(config.analytics.enabled);
    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.json);
}

#[test]
fn test_overrides_merge_with_defaults() {
    let config = StoryboardConfig::from_toml_str(
        r#"
        [generation]
        default_split = "paragraph"

        [history]
        capacity = 5
        "#,
    )
    .unwrap();

    assert_eq!(config.generation.default_split, SplitMode::Paragraph);
    assert_eq!(config.history.capacity, 5);
    // Untouched sections keep their defaults
    assert!(config.analytics.enabled);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let err = StoryboardConfig::from_toml_str("[history]\ncapacity = 0").unwrap_err();

    assert!(matches!(err.kind(), StoryboardErrorKind::Config(_)));
    assert!(err.to_string().contains("capacity"));
}

#[test]
fn test_unknown_split_mode_is_rejected() {
    let err = StoryboardConfig::from_toml_str("[generation]\ndefault_split = \"word\"").unwrap_err();

    assert!(matches!(err.kind(), StoryboardErrorKind::Config(_)));
}

#[test]
fn test_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "[history]\npath = \"/tmp/boards.json\"\n\n[analytics]\nenabled = false\n",
    )
    .unwrap();

    let config = StoryboardConfig::from_file(&path).unwrap();

    assert_eq!(config.history_path(), PathBuf::from("/tmp/boards.json"));
    assert!(!config.analytics.enabled);
    assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    assert!(StoryboardConfig::from_file(&missing).is_err());
}

#[test]
fn test_default_paths_live_under_storyboard_dir() {
    let config = StoryboardConfig::default();

    assert!(config.history_path().ends_with("storyboard/history.json"));
    assert!(config.analytics_path().ends_with("storyboard/analytics.jsonl"));
}
