//! Static default sets and filenames used across the crate.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Filename of the standalone configuration file.
pub const CONFIG_FILENAME: &str = ".kwlint.toml";
/// Filename of the project manifest that may carry a `[tool.kwlint]` table.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Returns receiver root names that are always exempt from the lint.
///
/// Calls rooted at these names (`logging.getLogger(...)`, `os.path.join(...)`)
/// are idiomatic in positional style.
pub fn get_exempt_receivers() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for name in ["time", "logging", "math", "os", "sys", "pytest"] {
            set.insert(name);
        }
        set
    })
}

/// Returns builtin container/scalar type names whose methods are exempt.
pub fn get_builtin_containers() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for name in [
            "str",
            "list",
            "dict",
            "tuple",
            "set",
            "frozenset",
            "int",
            "float",
            "complex",
            "bool",
        ] {
            set.insert(name);
        }
        set
    })
}

/// Returns common builtin method names exempt regardless of receiver type.
pub fn get_exempt_methods() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for name in [
            "append", "split", "extend", "remove", "pop", "insert", "sort", "join", "range",
            "choice",
        ] {
            set.insert(name);
        }
        set
    })
}

/// Returns default folders excluded from scanning.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for folder in [
            "__pycache__",
            ".pytest_cache",
            ".mypy_cache",
            ".ruff_cache",
            ".tox",
            ".nox",
            "venv",
            ".venv",
            "env",
            ".env",
            "build",
            "dist",
            "site-packages",
            "node_modules",
            ".git",
        ] {
            set.insert(folder);
        }
        set
    })
}

/// Returns the compiled regex for test-file path detection.
pub fn get_test_file_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"(?:^|[/\\])tests?[/\\]|(?:^|[/\\])test_[^/\\]+\.py$|[^/\\]+_test\.py$|conftest\.py$",
        )
        .expect("Invalid test file regex pattern")
    })
}
