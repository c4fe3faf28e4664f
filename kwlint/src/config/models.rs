use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for kwlint.
    pub kwlint: KwlintConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for kwlint.
///
/// The exemption sets are policy data, not invariants: each `extra_*`
/// list extends the built-in defaults rather than replacing them.
pub struct KwlintConfig {
    /// Additional receiver root names exempt from the lint.
    pub extra_exempt_receivers: Option<Vec<String>>,
    /// Additional method names exempt regardless of receiver type.
    pub extra_exempt_methods: Option<Vec<String>>,
    /// Whether to lint test files (`test_*.py`, `*_test.py`, `tests/`).
    pub include_tests: Option<bool>,
    /// List of rule codes to ignore.
    pub ignore: Option<Vec<String>>,
    /// List of folders to exclude from scanning.
    pub exclude_folders: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
/// Shape of a `pyproject.toml` carrying a `[tool.kwlint]` table.
pub(super) struct PyProject {
    #[serde(default)]
    pub(super) tool: PyProjectTool,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct PyProjectTool {
    #[serde(default)]
    pub(super) kwlint: KwlintConfig,
}
