//! Config persistence tests

use std::fs;

use vtmledit::config::EditorConfig;
use vtmledit::editable::EditConstraints;

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        theme: "high-contrast".to_string(),
        word_wrap: false,
        max_lines: 40,
        history_limit: 25,
        wrap_width: 320.0,
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_unparseable_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "theme: [unclosed\n").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "max_lines: 12\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.max_lines, 12);
    assert_eq!(config.theme, "default");
    assert_eq!(config.history_limit, 100);
}

#[test]
fn test_constraints_from_config() {
    let config = EditorConfig {
        word_wrap: false,
        max_lines: 0,
        ..EditorConfig::default()
    };
    let constraints = EditConstraints::from_config(&config);
    assert!(constraints.allow_multiline);
    assert_eq!(constraints.wrap_width(), None);
    assert_eq!(constraints.max_lines, 1);

    let wrapping = EditConstraints::from_config(&EditorConfig::default());
    assert_eq!(wrapping.wrap_width(), Some(500.0));
}
