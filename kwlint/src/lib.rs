//! `kwlint` flags Python function calls whose arguments are passed
//! positionally when the callee's signature suggests keyword arguments
//! were intended.
//!
//! The crate is organized around one lint rule (`keyword-arg-required`)
//! driven by a small analysis engine:
//! - `analyzer`: walks files, parses them with ruff's Python parser, and
//!   runs the registered rules over each module.
//! - `inference`: best-effort callee resolution for a single module,
//!   producing a closed [`inference::ResolvedCallee`] the rules consume.
//! - `rules`: the rule trait, finding records, and the keyword-argument
//!   classifier itself.
//!
//! The lint is a heuristic: unresolved callees are never flagged, and an
//! exclusion policy exempts receivers and methods where positional style
//! is idiomatic.

/// Analysis engine: file walking, parsing, and per-module rule runs.
pub mod analyzer;
/// Configuration loading (`.kwlint.toml` / `pyproject.toml`).
pub mod config;
/// Static default sets and filenames.
pub mod constants;
/// Best-effort callee resolution.
pub mod inference;
/// Rule-driving AST traversal.
pub mod linter;
/// Report printing (text and JSON).
pub mod output;
/// Lint rules and finding records.
pub mod rules;
/// Shared helpers (line index, callee helpers, suppression).
pub mod utils;
