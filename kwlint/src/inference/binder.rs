use ruff_python_ast::{self as ast, Expr, Stmt};
use rustc_hash::FxHashMap;

use super::{CalleeResolver, ResolvedCallee};

/// Inferred type of a module-level name binding.
#[derive(Debug, Clone)]
enum BoundType {
    /// Instance of a class defined in this module.
    Instance(String),
    /// Builtin container/scalar, typed from a literal assignment.
    Builtin(&'static str),
}

/// Single-module symbol table built in one pass over the module body.
///
/// Tracks module-level function definitions, class definitions with their
/// methods, and simple name assignments (`x = MyClass()`, `x = [...]`)
/// for receiver typing. Anything beyond that resolves to `Unresolved`.
#[derive(Debug, Clone, Default)]
pub struct ModuleBinder {
    /// Function name -> declared parameter names.
    functions: FxHashMap<String, Vec<String>>,
    /// Class name -> method name -> parameter names (without self/cls).
    classes: FxHashMap<String, FxHashMap<String, Vec<String>>>,
    /// Variable name -> inferred receiver type.
    bindings: FxHashMap<String, BoundType>,
}

impl ModuleBinder {
    /// Builds the binder from a parsed module.
    #[must_use]
    pub fn bind(module: &ast::ModModule) -> Self {
        let mut binder = Self::default();
        for stmt in &module.body {
            binder.bind_stmt(stmt);
        }
        binder
    }

    fn bind_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(def) => {
                self.functions
                    .insert(def.name.to_string(), param_names(&def.parameters));
            }
            Stmt::ClassDef(def) => {
                let mut methods = FxHashMap::default();
                for item in &def.body {
                    if let Stmt::FunctionDef(method) = item {
                        methods.insert(
                            method.name.to_string(),
                            method_param_names(&method.parameters),
                        );
                    }
                }
                self.classes.insert(def.name.to_string(), methods);
            }
            Stmt::Assign(assign) => {
                if let [Expr::Name(target)] = assign.targets.as_slice() {
                    self.bind_name(target.id.as_str(), &assign.value);
                }
            }
            Stmt::AnnAssign(assign) => {
                if let (Expr::Name(target), Some(value)) = (&*assign.target, &assign.value) {
                    self.bind_name(target.id.as_str(), value);
                }
            }
            // Conditional definitions (version guards, TYPE_CHECKING blocks)
            // still bind the names at module scope.
            Stmt::If(if_stmt) => {
                for item in &if_stmt.body {
                    self.bind_stmt(item);
                }
                for clause in &if_stmt.elif_else_clauses {
                    for item in &clause.body {
                        self.bind_stmt(item);
                    }
                }
            }
            _ => {}
        }
    }

    fn bind_name(&mut self, name: &str, value: &Expr) {
        if let Some(builtin) = literal_builtin(value) {
            self.bindings
                .insert(name.to_owned(), BoundType::Builtin(builtin));
        } else if let Expr::Call(call) = value {
            if let Expr::Name(callee) = &*call.func {
                if self.classes.contains_key(callee.id.as_str()) {
                    self.bindings
                        .insert(name.to_owned(), BoundType::Instance(callee.id.to_string()));
                }
            }
        } else if let Expr::Name(source) = value {
            if let Some(bound) = self.bindings.get(source.id.as_str()).cloned() {
                self.bindings.insert(name.to_owned(), bound);
            }
        }
    }
}

impl CalleeResolver for ModuleBinder {
    fn resolve(&self, func: &Expr) -> ResolvedCallee {
        match func {
            Expr::Name(name) => {
                if let Some(params) = self.functions.get(name.id.as_str()) {
                    ResolvedCallee::PlainFunction {
                        params: params.clone(),
                    }
                } else if self.classes.contains_key(name.id.as_str()) {
                    ResolvedCallee::ClassConstructor {
                        class_name: name.id.to_string(),
                    }
                } else {
                    ResolvedCallee::Unresolved
                }
            }
            Expr::Attribute(attr) => {
                let Expr::Name(base) = &*attr.value else {
                    return ResolvedCallee::Unresolved;
                };
                match self.bindings.get(base.id.as_str()) {
                    Some(BoundType::Builtin(type_name)) => ResolvedCallee::BoundMethod {
                        type_name: (*type_name).to_owned(),
                        method: attr.attr.to_string(),
                        builtin: true,
                    },
                    Some(BoundType::Instance(class_name)) => {
                        let known = self
                            .classes
                            .get(class_name)
                            .is_some_and(|methods| methods.contains_key(attr.attr.as_str()));
                        if known {
                            ResolvedCallee::BoundMethod {
                                type_name: class_name.clone(),
                                method: attr.attr.to_string(),
                                builtin: false,
                            }
                        } else {
                            ResolvedCallee::Unresolved
                        }
                    }
                    None => ResolvedCallee::Unresolved,
                }
            }
            _ => ResolvedCallee::Unresolved,
        }
    }
}

fn param_names(parameters: &ast::Parameters) -> Vec<String> {
    parameters
        .posonlyargs
        .iter()
        .chain(&parameters.args)
        .chain(&parameters.kwonlyargs)
        .map(|arg| arg.parameter.name.to_string())
        .collect()
}

fn method_param_names(parameters: &ast::Parameters) -> Vec<String> {
    let mut params = param_names(parameters);
    if matches!(params.first().map(String::as_str), Some("self" | "cls")) {
        params.remove(0);
    }
    params
}

/// Maps a literal expression to the builtin type name it constructs.
fn literal_builtin(value: &Expr) -> Option<&'static str> {
    match value {
        Expr::List(_) | Expr::ListComp(_) => Some("list"),
        Expr::Dict(_) | Expr::DictComp(_) => Some("dict"),
        Expr::Set(_) | Expr::SetComp(_) => Some("set"),
        Expr::Tuple(_) => Some("tuple"),
        Expr::StringLiteral(_) | Expr::FString(_) => Some("str"),
        Expr::BooleanLiteral(_) => Some("bool"),
        Expr::NumberLiteral(number) => match number.value {
            ast::Number::Int(_) => Some("int"),
            ast::Number::Float(_) => Some("float"),
            ast::Number::Complex { .. } => Some("complex"),
        },
        // x = list(...), x = dict(...) etc.
        Expr::Call(call) => {
            if let Expr::Name(name) = &*call.func {
                crate::constants::get_builtin_containers()
                    .get(name.id.as_str())
                    .copied()
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn bind(source: &str) -> ModuleBinder {
        let parsed = ruff_python_parser::parse_module(source).unwrap();
        ModuleBinder::bind(parsed.syntax())
    }

    fn resolve_last_call(source: &str) -> ResolvedCallee {
        let parsed = ruff_python_parser::parse_module(source).unwrap();
        let binder = ModuleBinder::bind(parsed.syntax());
        let Some(Stmt::Expr(stmt)) = parsed.syntax().body.last() else {
            panic!("expected trailing expression statement");
        };
        let Expr::Call(call) = &*stmt.value else {
            panic!("expected call expression");
        };
        binder.resolve(&call.func)
    }

    #[test]
    fn test_resolves_module_level_function() {
        let resolved = resolve_last_call("def foo(a, b):\n    pass\nfoo(1, 2)\n");
        assert_eq!(
            resolved,
            ResolvedCallee::PlainFunction {
                params: vec!["a".to_owned(), "b".to_owned()]
            }
        );
    }

    #[test]
    fn test_resolves_class_constructor() {
        let resolved = resolve_last_call("class Point:\n    pass\nPoint(1, 2)\n");
        assert_eq!(
            resolved,
            ResolvedCallee::ClassConstructor {
                class_name: "Point".to_owned()
            }
        );
    }

    #[test]
    fn test_resolves_user_defined_bound_method() {
        let source = "\
class Greeter:
    def greet(self, name, greeting):
        pass
g = Greeter()
g.greet(\"bob\", \"hi\")
";
        let resolved = resolve_last_call(source);
        assert_eq!(
            resolved,
            ResolvedCallee::BoundMethod {
                type_name: "Greeter".to_owned(),
                method: "greet".to_owned(),
                builtin: false,
            }
        );
    }

    #[test]
    fn test_literal_assignment_types_receiver_as_builtin() {
        let resolved = resolve_last_call("items = [1, 2]\nitems.append(3)\n");
        assert_eq!(
            resolved,
            ResolvedCallee::BoundMethod {
                type_name: "list".to_owned(),
                method: "append".to_owned(),
                builtin: true,
            }
        );
    }

    #[test]
    fn test_builtin_call_assignment_types_receiver() {
        let resolved = resolve_last_call("items = dict(a=1)\nitems.update(b=2)\n");
        assert!(matches!(
            resolved,
            ResolvedCallee::BoundMethod { builtin: true, .. }
        ));
    }

    #[test]
    fn test_unknown_name_is_unresolved() {
        let resolved = resolve_last_call("mystery(1, 2)\n");
        assert_eq!(resolved, ResolvedCallee::Unresolved);
    }

    #[test]
    fn test_unknown_method_on_known_instance_is_unresolved() {
        let source = "\
class Greeter:
    def greet(self, name):
        pass
g = Greeter()
g.wave(1)
";
        assert_eq!(resolve_last_call(source), ResolvedCallee::Unresolved);
    }

    #[test]
    fn test_call_rooted_callee_is_unresolved() {
        let resolved = resolve_last_call("get_logger().info(\"x\")\n");
        assert_eq!(resolved, ResolvedCallee::Unresolved);
    }

    #[test]
    fn test_conditional_definition_binds() {
        let source = "\
import sys
if sys.version_info >= (3, 10):
    def compat(a):
        pass
compat(1)
";
        let resolved = resolve_last_call(source);
        assert!(matches!(resolved, ResolvedCallee::PlainFunction { .. }));
    }

    #[test]
    fn test_method_params_drop_self_and_cls() {
        let binder = bind("\
class C:
    def m(self, a):
        pass
    @classmethod
    def k(cls, b):
        pass
");
        let methods = binder.classes.get("C").unwrap();
        assert_eq!(methods.get("m").unwrap(), &vec!["a".to_owned()]);
        assert_eq!(methods.get("k").unwrap(), &vec!["b".to_owned()]);
    }
}
