//! Best-effort callee resolution.
//!
//! The classifier never inspects AST shapes to guess what a callee is;
//! it consumes the closed [`ResolvedCallee`] enum produced here. All
//! shape heuristics (what counts as a builtin origin, how a literal
//! assignment types a receiver) live in the [`binder`] adapter.

mod binder;

pub use binder::ModuleBinder;

use ruff_python_ast::Expr;

/// The inferred target of a callee expression.
///
/// Inference is best-effort: `Unresolved` is a normal, frequent outcome,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCallee {
    /// The callee could not be resolved.
    Unresolved,
    /// A method attached to a receiver of a known type.
    BoundMethod {
        /// Name of the receiver's type (`list`, or a user-defined class).
        type_name: String,
        /// Name of the method being called.
        method: String,
        /// Whether the receiver type is a builtin.
        builtin: bool,
    },
    /// A free function with a known parameter list.
    PlainFunction {
        /// Declared parameter names, in order.
        params: Vec<String>,
    },
    /// A class being constructed.
    ClassConstructor {
        /// Name of the class.
        class_name: String,
    },
}

/// Resolves callee expressions to their inferred targets.
///
/// Implementations must be total: any callee shape they cannot make
/// sense of yields [`ResolvedCallee::Unresolved`].
pub trait CalleeResolver {
    /// Resolves the callee expression of a call.
    fn resolve(&self, func: &Expr) -> ResolvedCallee;
}
