#![allow(clippy::unwrap_used)]

use super::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_kwlint_toml() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".kwlint.toml"),
        r#"
[kwlint]
extra_exempt_receivers = ["requests", "click"]
include_tests = false
"#,
    )
    .unwrap();

    let config = Config::load_from_path(dir.path());
    assert_eq!(
        config.kwlint.extra_exempt_receivers,
        Some(vec!["requests".to_owned(), "click".to_owned()])
    );
    assert_eq!(config.kwlint.include_tests, Some(false));
    assert!(config.config_file_path.is_some());
}

#[test]
fn test_load_from_pyproject_tool_table() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("pyproject.toml"),
        r#"
[tool.kwlint]
extra_exempt_methods = ["warn"]
ignore = ["keyword-arg-required"]
"#,
    )
    .unwrap();

    let config = Config::load_from_path(dir.path());
    assert_eq!(
        config.kwlint.extra_exempt_methods,
        Some(vec!["warn".to_owned()])
    );
    assert_eq!(
        config.kwlint.ignore,
        Some(vec!["keyword-arg-required".to_owned()])
    );
}

#[test]
fn test_kwlint_toml_wins_over_pyproject() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".kwlint.toml"),
        "[kwlint]\ninclude_tests = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("pyproject.toml"),
        "[tool.kwlint]\ninclude_tests = false\n",
    )
    .unwrap();

    let config = Config::load_from_path(dir.path());
    assert_eq!(config.kwlint.include_tests, Some(true));
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = Config::load_from_path(&nested);
    assert!(config.kwlint.extra_exempt_receivers.is_none());
    assert!(config.kwlint.include_tests.is_none());
}

#[test]
fn test_config_found_in_parent_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".kwlint.toml"),
        "[kwlint]\ninclude_tests = false\n",
    )
    .unwrap();
    let nested = dir.path().join("src").join("pkg");
    fs::create_dir_all(&nested).unwrap();

    let config = Config::load_from_path(&nested);
    assert_eq!(config.kwlint.include_tests, Some(false));
}
