//! Analysis engine.
//!
//! Walks the target paths, parses each Python file with ruff's parser,
//! and runs the registered call-site rules over every module. Rule
//! objects live for the whole run so per-run state (the dedup set of
//! reported call sites) spans all files.

mod types;

pub use types::{AnalysisResult, ParseError};

use crate::config::Config;
use crate::inference::ModuleBinder;
use crate::linter::LinterVisitor;
use crate::rules::{get_call_rules, Rule};
use crate::utils::{get_ignored_lines, is_test_path, LineIndex};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Main analyzer state and runtime configuration.
pub struct KwLint {
    /// Whether to include test files in the analysis.
    pub include_tests: bool,
    /// Folders to exclude from analysis.
    pub exclude_folders: Vec<String>,
    /// Configuration object.
    pub config: Config,
}

impl Default for KwLint {
    fn default() -> Self {
        Self {
            include_tests: true,
            exclude_folders: Vec::new(),
            config: Config::default(),
        }
    }
}

impl KwLint {
    /// Applies a loaded configuration, including its scan toggles.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        if let Some(include_tests) = config.kwlint.include_tests {
            self.include_tests = include_tests;
        }
        if let Some(folders) = &config.kwlint.exclude_folders {
            self.exclude_folders.clone_from(folders);
        }
        self.config = config;
        self
    }

    /// Overrides whether test files are linted.
    #[must_use]
    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    /// Analyzes a file or directory tree.
    pub fn analyze(&self, path: &Path) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let mut rules = get_call_rules(&self.config);

        for file in self.collect_python_files(path) {
            let Ok(source) = fs::read_to_string(&file) else {
                continue;
            };
            rules = self.run_file(&source, &file, rules, &mut result);
            result.total_files_analyzed += 1;
        }

        result
            .findings
            .sort_by(|a, b| (&a.file, a.line, a.col).cmp(&(&b.file, b.line, b.col)));
        result
    }

    /// Analyzes a single in-memory source, for tests and tooling.
    pub fn analyze_source(&self, source: &str, file_path: &Path) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let rules = get_call_rules(&self.config);
        self.run_file(source, file_path, rules, &mut result);
        result.total_files_analyzed = 1;
        result
            .findings
            .sort_by(|a, b| (a.line, a.col).cmp(&(b.line, b.col)));
        result
    }

    fn run_file(
        &self,
        source: &str,
        file_path: &Path,
        rules: Vec<Box<dyn Rule>>,
        result: &mut AnalysisResult,
    ) -> Vec<Box<dyn Rule>> {
        let module = match ruff_python_parser::parse_module(source) {
            Ok(parsed) => parsed.into_syntax(),
            Err(err) => {
                result.parse_errors.push(ParseError {
                    file: file_path.to_path_buf(),
                    error: err.to_string(),
                });
                return rules;
            }
        };

        let line_index = LineIndex::new(source);
        let ignored_lines = get_ignored_lines(source);

        let mut visitor = LinterVisitor::new(
            rules,
            file_path.to_path_buf(),
            line_index,
            ModuleBinder::bind(&module),
            self.config.clone(),
        );
        for stmt in &module.body {
            visitor.visit_stmt(stmt);
        }

        let findings = std::mem::take(&mut visitor.findings);
        result
            .findings
            .extend(findings.into_iter().filter(|f| !ignored_lines.contains(&f.line)));
        visitor.into_rules()
    }

    fn collect_python_files(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return vec![root.to_path_buf()];
        }

        let mut excluded: FxHashSet<String> = crate::constants::get_default_exclude_folders()
            .iter()
            .map(|folder| (*folder).to_owned())
            .collect();
        excluded.extend(self.exclude_folders.iter().cloned());

        let mut files = Vec::new();
        let walker = ignore::WalkBuilder::new(root)
            .filter_entry(move |entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !excluded.contains(name))
            })
            .build();
        for entry in walker.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "py") {
                continue;
            }
            if !self.include_tests && is_test_path(&path.to_string_lossy()) {
                continue;
            }
            files.push(path.to_path_buf());
        }
        files.sort();
        files
    }
}
