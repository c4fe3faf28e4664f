use crate::config::Config;
use crate::inference::ModuleBinder;
use crate::utils::LineIndex;
use ruff_python_ast::{Expr, Stmt};
use ruff_text_size::TextSize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
/// Context passed to rules during analysis.
pub struct Context {
    /// Path to the file being analyzed.
    pub filename: PathBuf,
    /// Line index for accurate line/column mapping.
    pub line_index: LineIndex,
    /// Best-effort callee resolution for the current module.
    pub resolver: ModuleBinder,
    /// Configuration settings.
    pub config: Config,
}

#[derive(Debug, Clone, Serialize)]
/// A single issue found by a rule.
pub struct Finding {
    /// ID of the rule that triggered the finding.
    pub rule_id: String,
    /// High-level category of the rule.
    pub category: String,
    /// Severity level (e.g., "LOW", "MEDIUM").
    pub severity: String,
    /// Description of the issue.
    pub message: String,
    /// File where the issue was found.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (0-indexed).
    pub col: usize,
}

/// Static identity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMetadata {
    /// Stable rule identifier.
    pub id: &'static str,
    /// Rule category.
    pub category: &'static str,
}

/// Convention/style category.
pub const CAT_CONVENTION: &str = "Convention";

/// Stable rule identifiers.
pub mod ids {
    /// Calls passing arguments positionally where keywords were intended.
    pub const RULE_ID_KEYWORD_ARGS: &str = "keyword-arg-required";
}

/// Trait defining a linting rule.
pub trait Rule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the rule's static metadata.
    fn metadata(&self) -> RuleMetadata;
    /// Called when entering a statement.
    fn enter_stmt(&mut self, _stmt: &Stmt, _context: &Context) -> Option<Vec<Finding>> {
        None
    }
    /// Called when leaving a statement.
    fn leave_stmt(&mut self, _stmt: &Stmt, _context: &Context) -> Option<Vec<Finding>> {
        None
    }
    /// Called when visiting an expression.
    fn visit_expr(&mut self, _expr: &Expr, _context: &Context) -> Option<Vec<Finding>> {
        None
    }
}

/// Builds one finding at the given source offset.
#[must_use]
pub fn create_finding(
    message: &str,
    metadata: RuleMetadata,
    context: &Context,
    offset: TextSize,
    severity: &str,
) -> Finding {
    let (line, col) = context.line_index.line_col(offset);
    Finding {
        rule_id: metadata.id.to_owned(),
        category: metadata.category.to_owned(),
        severity: severity.to_owned(),
        message: message.to_owned(),
        file: context.filename.clone(),
        line,
        col,
    }
}

/// Returns the call-site rules enabled for this run.
///
/// Rule objects are constructed fresh per analysis run; any per-run state
/// (the keyword-args visited set) starts empty here.
#[must_use]
pub fn get_call_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    let ignored = config.kwlint.ignore.clone().unwrap_or_default();
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();
    if !ignored.iter().any(|id| id == ids::RULE_ID_KEYWORD_ARGS) {
        rules.push(Box::new(keyword_args::KeywordArgsRule::new(
            keyword_args::META_KEYWORD_ARGS,
            keyword_args::ExclusionPolicy::from_config(config),
        )));
    }
    rules
}

/// The keyword-argument call-site classifier.
pub mod keyword_args;
/// Typed metadata registry for all rule IDs.
pub mod rule_registry;
