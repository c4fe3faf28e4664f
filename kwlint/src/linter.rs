//! Rule-driving AST traversal.
//!
//! `LinterVisitor` walks a parsed module in source order and hands every
//! statement and expression to each registered rule. Rules only see the
//! node and the [`Context`]; the traversal owns the recursion.

use crate::config::Config;
use crate::inference::ModuleBinder;
use crate::rules::{Context, Finding, Rule};
use crate::utils::LineIndex;
use ruff_python_ast::{self as ast, Expr, Stmt};
use std::path::PathBuf;

/// Drives a set of rules over one module.
pub struct LinterVisitor {
    rules: Vec<Box<dyn Rule>>,
    context: Context,
    /// Findings accumulated during traversal.
    pub findings: Vec<Finding>,
}

impl LinterVisitor {
    /// Creates a visitor for one file.
    #[must_use]
    pub fn new(
        rules: Vec<Box<dyn Rule>>,
        filename: PathBuf,
        line_index: LineIndex,
        resolver: ModuleBinder,
        config: Config,
    ) -> Self {
        Self {
            rules,
            context: Context {
                filename,
                line_index,
                resolver,
                config,
            },
            findings: Vec::new(),
        }
    }

    /// Returns the rule set, consuming the visitor.
    ///
    /// Used by the engine to carry per-run rule state (dedup sets) across
    /// the files of one analysis run.
    #[must_use]
    pub fn into_rules(self) -> Vec<Box<dyn Rule>> {
        self.rules
    }

    /// Visits a statement and everything beneath it.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        for rule in &mut self.rules {
            if let Some(findings) = rule.enter_stmt(stmt, &self.context) {
                self.findings.extend(findings);
            }
        }
        self.visit_stmt_children(stmt);
        for rule in &mut self.rules {
            if let Some(findings) = rule.leave_stmt(stmt, &self.context) {
                self.findings.extend(findings);
            }
        }
    }

    fn visit_stmt_children(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                for decorator in &node.decorator_list {
                    self.visit_expr(&decorator.expression);
                }
                self.visit_parameters(&node.parameters);
                for item in &node.body {
                    self.visit_stmt(item);
                }
            }
            Stmt::ClassDef(node) => {
                for decorator in &node.decorator_list {
                    self.visit_expr(&decorator.expression);
                }
                if let Some(arguments) = &node.arguments {
                    for arg in &arguments.args {
                        self.visit_expr(arg);
                    }
                    for keyword in &arguments.keywords {
                        self.visit_expr(&keyword.value);
                    }
                }
                for item in &node.body {
                    self.visit_stmt(item);
                }
            }
            Stmt::Expr(node) => self.visit_expr(&node.value),
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Assign(node) => {
                for target in &node.targets {
                    self.visit_expr(target);
                }
                self.visit_expr(&node.value);
            }
            Stmt::AugAssign(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.value);
            }
            Stmt::AnnAssign(node) => {
                self.visit_expr(&node.target);
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::If(node) => {
                self.visit_expr(&node.test);
                for item in &node.body {
                    self.visit_stmt(item);
                }
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.visit_expr(test);
                    }
                    for item in &clause.body {
                        self.visit_stmt(item);
                    }
                }
            }
            Stmt::For(node) => {
                self.visit_expr(&node.iter);
                self.visit_expr(&node.target);
                for item in &node.body {
                    self.visit_stmt(item);
                }
                for item in &node.orelse {
                    self.visit_stmt(item);
                }
            }
            Stmt::While(node) => {
                self.visit_expr(&node.test);
                for item in &node.body {
                    self.visit_stmt(item);
                }
                for item in &node.orelse {
                    self.visit_stmt(item);
                }
            }
            Stmt::With(node) => {
                for item in &node.items {
                    self.visit_expr(&item.context_expr);
                }
                for item in &node.body {
                    self.visit_stmt(item);
                }
            }
            Stmt::Try(node) => {
                for item in &node.body {
                    self.visit_stmt(item);
                }
                for handler in &node.handlers {
                    let ast::ExceptHandler::ExceptHandler(handler) = handler;
                    if let Some(type_) = &handler.type_ {
                        self.visit_expr(type_);
                    }
                    for item in &handler.body {
                        self.visit_stmt(item);
                    }
                }
                for item in &node.orelse {
                    self.visit_stmt(item);
                }
                for item in &node.finalbody {
                    self.visit_stmt(item);
                }
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test);
                if let Some(msg) = &node.msg {
                    self.visit_expr(msg);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &node.cause {
                    self.visit_expr(cause);
                }
            }
            Stmt::Delete(node) => {
                for target in &node.targets {
                    self.visit_expr(target);
                }
            }
            Stmt::Match(node) => {
                self.visit_expr(&node.subject);
                for case in &node.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    for item in &case.body {
                        self.visit_stmt(item);
                    }
                }
            }
            _ => {}
        }
    }

    /// Visits an expression and everything beneath it.
    pub fn visit_expr(&mut self, expr: &Expr) {
        for rule in &mut self.rules {
            if let Some(findings) = rule.visit_expr(expr, &self.context) {
                self.findings.extend(findings);
            }
        }
        self.visit_expr_children(expr);
    }

    fn visit_expr_children(&mut self, expr: &Expr) {
        match expr {
            Expr::Call(node) => {
                self.visit_expr(&node.func);
                for arg in &node.arguments.args {
                    self.visit_expr(arg);
                }
                for keyword in &node.arguments.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            Expr::Attribute(node) => self.visit_expr(&node.value),
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::BinOp(node) => {
                self.visit_expr(&node.left);
                self.visit_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand),
            Expr::Lambda(node) => {
                if let Some(parameters) = &node.parameters {
                    self.visit_parameters(parameters);
                }
                self.visit_expr(&node.body);
            }
            Expr::If(node) => {
                self.visit_expr(&node.test);
                self.visit_expr(&node.body);
                self.visit_expr(&node.orelse);
            }
            Expr::Named(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.value);
            }
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.visit_expr(key);
                    }
                    self.visit_expr(&item.value);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::ListComp(node) => {
                self.visit_generators(&node.generators);
                self.visit_expr(&node.elt);
            }
            Expr::SetComp(node) => {
                self.visit_generators(&node.generators);
                self.visit_expr(&node.elt);
            }
            Expr::DictComp(node) => {
                self.visit_generators(&node.generators);
                if let Some(key) = &node.key {
                    self.visit_expr(key);
                }
                self.visit_expr(&node.value);
            }
            Expr::Generator(node) => {
                self.visit_generators(&node.generators);
                self.visit_expr(&node.elt);
            }
            Expr::Await(node) => self.visit_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value),
            Expr::Compare(node) => {
                self.visit_expr(&node.left);
                for comparator in &node.comparators {
                    self.visit_expr(comparator);
                }
            }
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            Expr::Slice(node) => {
                if let Some(lower) = &node.lower {
                    self.visit_expr(lower);
                }
                if let Some(upper) = &node.upper {
                    self.visit_expr(upper);
                }
                if let Some(step) = &node.step {
                    self.visit_expr(step);
                }
            }
            Expr::Starred(node) => self.visit_expr(&node.value),
            Expr::FString(node) => {
                for part in &node.value {
                    match part {
                        ast::FStringPart::Literal(_) => {}
                        ast::FStringPart::FString(f) => {
                            for element in &f.elements {
                                if let ast::InterpolatedStringElement::Interpolation(interp) =
                                    element
                                {
                                    self.visit_expr(&interp.expression);
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_generators(&mut self, generators: &[ast::Comprehension]) {
        for gen in generators {
            self.visit_expr(&gen.iter);
            self.visit_expr(&gen.target);
            for if_expr in &gen.ifs {
                self.visit_expr(if_expr);
            }
        }
    }

    fn visit_parameters(&mut self, parameters: &ast::Parameters) {
        for parameter in parameters.posonlyargs.iter().chain(&parameters.args) {
            if let Some(default) = &parameter.default {
                self.visit_expr(default);
            }
        }
        for parameter in &parameters.kwonlyargs {
            if let Some(default) = &parameter.default {
                self.visit_expr(default);
            }
        }
    }
}
