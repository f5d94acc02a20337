use std::fs;
use temper::config::{BOOTSTRAP_CSS, PaginationConfig, TemperConfig};
use temper::error::ConfigError;

#[test]
fn test_defaults() {
    let config = TemperConfig::default();
    assert_eq!(config.page.lang, "en");
    assert_eq!(config.page.stylesheets, vec![BOOTSTRAP_CSS.to_string()]);
    assert!(config.page.scripts.is_empty());
    assert_eq!(
        config.pagination,
        PaginationConfig {
            max_left: 2,
            max_right: 2
        }
    );
}

#[test]
fn test_empty_document_uses_defaults() {
    assert_eq!(TemperConfig::parse("").unwrap(), TemperConfig::default());
}

#[test]
fn test_partial_sections() {
    let config = TemperConfig::parse(
        r#"
[page]
title = "Forge"

[pagination]
max_right = 5
"#,
    )
    .unwrap();
    assert_eq!(config.page.title, "Forge");
    assert_eq!(config.page.lang, "en");
    assert_eq!(config.page.stylesheets, vec![BOOTSTRAP_CSS.to_string()]);
    assert_eq!(config.pagination.max_left, 2);
    assert_eq!(config.pagination.max_right, 5);
}

#[test]
fn test_invalid_toml() {
    let err = TemperConfig::parse("[pagination]\nmax_left = \"many\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("temper.toml");
    fs::write(
        &path,
        "[page]\nscripts = [\"/js/app.js\"]\n\n[pagination]\nmax_left = 1\n",
    )
    .unwrap();

    let config = TemperConfig::from_file(&path).unwrap();
    assert_eq!(config.page.scripts, vec!["/js/app.js".to_string()]);
    assert_eq!(config.pagination.max_left, 1);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TemperConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_pagination_keys() {
    let config = TemperConfig::parse("[pagination]\nmax_left = 1\nmax_right = 7\n").unwrap();
    assert_eq!(config.pagination.max_left, 1);
    assert_eq!(config.pagination.max_right, 7);
}

#[test]
fn test_unknown_keys_are_rejected() {
    for doc in [
        "[pagination]\nmax-left = 1\n",
        "[page]\nlanguage = \"en\"\n",
        "[pages]\ntitle = \"x\"\n",
    ] {
        let err = TemperConfig::parse(doc).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)), "accepted {doc:?}");
    }
}
