//! Shared helpers: byte-offset to line/column mapping, inline suppression
//! detection, and callee-expression helpers.

use ruff_python_ast::Expr;
use ruff_text_size::TextSize;
use rustc_hash::FxHashSet;

/// A utility struct to convert byte offsets to line numbers.
///
/// The AST parser works with byte offsets, but findings are reported with
/// line/column positions which are more human-readable.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Newlines are always single bytes in UTF-8, so byte iteration suffices.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a `TextSize` to a `(line, column)` pair.
    ///
    /// Lines are 1-indexed, columns 0-indexed byte offsets within the line.
    #[must_use]
    pub fn line_col(&self, offset: TextSize) -> (usize, usize) {
        let line = self.line_index(offset);
        let line_start = self.line_starts.get(line - 1).copied().unwrap_or(0);
        (line, offset.to_usize().saturating_sub(line_start))
    }
}

/// Detects lines with a `# pragma: no kwlint` comment.
///
/// Returns the set of 1-indexed line numbers on which findings are
/// suppressed.
#[must_use]
pub fn get_ignored_lines(source: &str) -> FxHashSet<usize> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains("pragma: no kwlint"))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Checks if a path is a test path.
#[must_use]
pub fn is_test_path(p: &str) -> bool {
    crate::constants::get_test_file_re().is_match(p)
}

/// Returns the leftmost name of a callee expression.
///
/// For a plain name the name is its own root; for an attribute chain
/// (`base.attr1.attr2.method`) the chain is walked down to the leftmost
/// name. Callee shapes that bottom out in something other than a name
/// (a call, a subscript) yield `None`.
#[must_use]
pub fn callee_root(func: &Expr) -> Option<&str> {
    match func {
        Expr::Name(node) => Some(node.id.as_str()),
        Expr::Attribute(node) => {
            let mut base = &*node.value;
            while let Expr::Attribute(inner) = base {
                base = &inner.value;
            }
            match base {
                Expr::Name(name) => Some(name.id.as_str()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Returns the immediate base name of an attribute-access callee.
///
/// `my_list.append` yields `my_list`; a plain name or a deeper chain
/// (`a.b.method` has base `a.b`, not a name) yields `None`.
#[must_use]
pub fn attribute_base_name(func: &Expr) -> Option<&str> {
    if let Expr::Attribute(node) = func {
        if let Expr::Name(base) = &*node.value {
            return Some(base.id.as_str());
        }
    }
    None
}
