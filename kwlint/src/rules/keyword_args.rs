use crate::config::Config;
use crate::inference::{CalleeResolver, ResolvedCallee};
use crate::rules::{create_finding, ids, Context, Finding, Rule, RuleMetadata, CAT_CONVENTION};
use crate::utils::{attribute_base_name, callee_root};
use ruff_python_ast::{self as ast, Expr};
use ruff_text_size::{Ranged, TextRange};
use rustc_hash::FxHashSet;
use std::path::PathBuf;

/// Rule metadata for the keyword-argument call-site lint.
pub const META_KEYWORD_ARGS: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_KEYWORD_ARGS,
    category: CAT_CONVENTION,
};

/// Message emitted for every finding of this rule.
pub const KEYWORD_ARGS_MESSAGE: &str = "Function arguments should be passed as keyword arguments.";

/// Static exemption policy for the keyword-argument lint.
///
/// Policy data, not invariant: the built-in defaults encode the converged
/// behavior, and config may extend the receiver and method sets.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    exempt_receivers: FxHashSet<String>,
    exempt_methods: FxHashSet<String>,
}

impl ExclusionPolicy {
    /// Builds the policy from built-in defaults plus config extensions.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut exempt_receivers: FxHashSet<String> = crate::constants::get_exempt_receivers()
            .iter()
            .map(|name| (*name).to_owned())
            .collect();
        if let Some(extra) = &config.kwlint.extra_exempt_receivers {
            exempt_receivers.extend(extra.iter().cloned());
        }

        let mut exempt_methods: FxHashSet<String> = crate::constants::get_exempt_methods()
            .iter()
            .map(|name| (*name).to_owned())
            .collect();
        if let Some(extra) = &config.kwlint.extra_exempt_methods {
            exempt_methods.extend(extra.iter().cloned());
        }

        Self {
            exempt_receivers,
            exempt_methods,
        }
    }

    fn is_exempt_receiver(&self, name: &str) -> bool {
        self.exempt_receivers.contains(name)
    }

    fn is_builtin_container(name: &str) -> bool {
        crate::constants::get_builtin_containers().contains(name)
    }

    fn is_exempt_method(&self, name: &str) -> bool {
        self.exempt_methods.contains(name)
    }
}

/// Flags calls that pass every argument positionally although the callee
/// resolves to something with nameable parameters.
///
/// The rule is a heuristic: unresolved callees, constructors, builtin
/// methods, and exempted receivers are never flagged, and one finding is
/// emitted per distinct call site no matter how often traversal revisits
/// it.
pub struct KeywordArgsRule {
    metadata: RuleMetadata,
    policy: ExclusionPolicy,
    /// Call-site identities already reported this run. Grows only;
    /// discarded with the rule object at run end.
    reported: FxHashSet<(PathBuf, TextRange)>,
}

impl KeywordArgsRule {
    /// Creates a new keyword-argument rule instance with empty per-run state.
    #[must_use]
    pub fn new(metadata: RuleMetadata, policy: ExclusionPolicy) -> Self {
        Self {
            metadata,
            policy,
            reported: FxHashSet::default(),
        }
    }

    /// Decides whether a call site should be reported.
    ///
    /// Exemption checks run in a fixed order; receiver exemptions come
    /// before inference so an exempted root name is never flagged even
    /// when inference would resolve its target.
    fn classify(&self, call: &ast::ExprCall, resolver: &dyn CalleeResolver) -> bool {
        if let Some(root) = callee_root(&call.func) {
            if self.policy.is_exempt_receiver(root) {
                return false;
            }
        }
        if let Some(base) = attribute_base_name(&call.func) {
            if ExclusionPolicy::is_builtin_container(base) {
                return false;
            }
        }

        match resolver.resolve(&call.func) {
            ResolvedCallee::Unresolved => return false,
            ResolvedCallee::BoundMethod {
                builtin,
                ref method,
                ..
            } => {
                if builtin || self.policy.is_exempt_method(method) {
                    return false;
                }
            }
            ResolvedCallee::PlainFunction { ref params } => {
                if params.is_empty() {
                    return false;
                }
            }
            ResolvedCallee::ClassConstructor { .. } => return false,
        }

        // One keyword argument suffices to pass; mixed calls are fine.
        call.arguments.keywords.is_empty()
    }

    /// Records the call identity; returns `false` if it was already
    /// reported this run.
    fn mark_reported(&mut self, file: &std::path::Path, range: TextRange) -> bool {
        self.reported.insert((file.to_path_buf(), range))
    }
}

impl Rule for KeywordArgsRule {
    fn name(&self) -> &'static str {
        "KeywordArgsRule"
    }
    fn metadata(&self) -> RuleMetadata {
        self.metadata
    }

    fn visit_expr(&mut self, expr: &Expr, context: &Context) -> Option<Vec<Finding>> {
        let Expr::Call(call) = expr else {
            return None;
        };
        // Classification runs before the dedup check so a re-entrant
        // traversal never skips exemption checks.
        if !self.classify(call, &context.resolver) {
            return None;
        }
        if !self.mark_reported(&context.filename, call.range()) {
            return None;
        }
        let severity = crate::rules::rule_registry::get_rule_descriptor(self.metadata.id)
            .map_or("LOW", |descriptor| descriptor.default_severity.as_str());
        Some(vec![create_finding(
            KEYWORD_ARGS_MESSAGE,
            self.metadata,
            context,
            call.range().start(),
            severity,
        )])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::inference::ModuleBinder;
    use crate::utils::LineIndex;

    fn context_for(source: &str) -> (Context, Vec<ast::ExprCall>) {
        let parsed = ruff_python_parser::parse_module(source).unwrap();
        let module = parsed.syntax();
        let context = Context {
            filename: PathBuf::from("sample.py"),
            line_index: LineIndex::new(source),
            resolver: ModuleBinder::bind(module),
            config: Config::default(),
        };
        let calls = module
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                ast::Stmt::Expr(expr_stmt) => match &*expr_stmt.value {
                    Expr::Call(call) => Some(call.clone()),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        (context, calls)
    }

    fn classify_last(source: &str) -> bool {
        let (context, calls) = context_for(source);
        let rule = KeywordArgsRule::new(META_KEYWORD_ARGS, ExclusionPolicy::from_config(&context.config));
        let call = calls.last().expect("expected a call statement");
        rule.classify(call, &context.resolver)
    }

    #[test]
    fn test_positional_call_to_known_function_is_flagged() {
        assert!(classify_last("def foo(a, b):\n    pass\nfoo(1, 2)\n"));
    }

    #[test]
    fn test_keyword_call_is_not_flagged() {
        assert!(!classify_last("def foo(a, b):\n    pass\nfoo(a=1, b=2)\n"));
    }

    #[test]
    fn test_mixed_call_passes_on_any_keyword() {
        assert!(!classify_last("def foo(a, b):\n    pass\nfoo(1, b=2)\n"));
    }

    #[test]
    fn test_zero_parameter_function_is_exempt() {
        assert!(!classify_last("def ping():\n    pass\nping()\n"));
    }

    #[test]
    fn test_unresolved_callee_is_exempt() {
        assert!(!classify_last("mystery(1, 2)\n"));
    }

    #[test]
    fn test_constructor_call_is_exempt() {
        assert!(!classify_last(
            "class Point:\n    def __init__(self, x, y):\n        pass\nPoint(1, 2)\n"
        ));
    }

    #[test]
    fn test_exempt_receiver_root_is_never_flagged() {
        // The chain root (logging) is exempt even though the leaf call
        // carries positional arguments.
        assert!(!classify_last("logging.getLogger(\"app\")\n"));
        assert!(!classify_last("os.path.join(\"a\", \"b\")\n"));
    }

    #[test]
    fn test_receiver_exemption_precedes_inference() {
        // Inference would resolve this to a flaggable user-defined method,
        // but the exempt root name wins.
        let source = "\
class Logger:
    def info(self, msg, extra):
        pass
logging = Logger()
logging.info(\"m\", 1)
";
        assert!(!classify_last(source));
    }

    #[test]
    fn test_builtin_container_base_is_exempt() {
        assert!(!classify_last("str.join(\",\", [\"a\"])\n"));
    }

    #[test]
    fn test_builtin_method_on_typed_receiver_is_exempt() {
        assert!(!classify_last("items = []\nitems.append(1)\n"));
    }

    #[test]
    fn test_user_defined_method_with_positional_args_is_flagged() {
        let source = "\
class Greeter:
    def greet(self, name, greeting):
        pass
g = Greeter()
g.greet(\"bob\", \"hi\")
";
        assert!(classify_last(source));
    }

    #[test]
    fn test_user_defined_method_named_like_builtin_is_exempt() {
        let source = "\
class Bag:
    def append(self, item, priority):
        pass
b = Bag()
b.append(1, 2)
";
        assert!(!classify_last(source));
    }

    #[test]
    fn test_config_extends_exempt_receivers() {
        let source = "def get(url, timeout):\n    pass\nrequests.get(\"x\", 3)\n";
        let (mut context, calls) = context_for(source);
        context.config.kwlint.extra_exempt_receivers = Some(vec!["requests".to_owned()]);
        let rule = KeywordArgsRule::new(
            META_KEYWORD_ARGS,
            ExclusionPolicy::from_config(&context.config),
        );
        assert!(!rule.classify(calls.last().unwrap(), &context.resolver));
    }

    #[test]
    fn test_repeated_visits_report_once() {
        let source = "def foo(a, b):\n    pass\nfoo(1, 2)\n";
        let (context, calls) = context_for(source);
        let mut rule = KeywordArgsRule::new(
            META_KEYWORD_ARGS,
            ExclusionPolicy::from_config(&context.config),
        );
        let call = Expr::Call(calls.last().unwrap().clone());

        let first = rule.visit_expr(&call, &context);
        assert_eq!(first.map(|f| f.len()), Some(1));
        let second = rule.visit_expr(&call, &context);
        assert!(second.is_none());
        let third = rule.visit_expr(&call, &context);
        assert!(third.is_none());
    }

    #[test]
    fn test_identical_calls_at_different_locations_both_report() {
        let source = "def foo(a, b):\n    pass\nfoo(1, 2)\nfoo(1, 2)\n";
        let (context, calls) = context_for(source);
        let mut rule = KeywordArgsRule::new(
            META_KEYWORD_ARGS,
            ExclusionPolicy::from_config(&context.config),
        );
        let mut reported = 0;
        for call in &calls {
            if let Some(findings) = rule.visit_expr(&Expr::Call(call.clone()), &context) {
                reported += findings.len();
            }
        }
        assert_eq!(reported, 2);
    }

    #[test]
    fn test_finding_carries_code_location_and_message() {
        let source = "def foo(a, b):\n    pass\nfoo(1, 2)\n";
        let (context, calls) = context_for(source);
        let mut rule = KeywordArgsRule::new(
            META_KEYWORD_ARGS,
            ExclusionPolicy::from_config(&context.config),
        );
        let findings = rule
            .visit_expr(&Expr::Call(calls.last().unwrap().clone()), &context)
            .unwrap();
        let finding = &findings[0];
        assert_eq!(finding.rule_id, "keyword-arg-required");
        assert_eq!(finding.message, KEYWORD_ARGS_MESSAGE);
        assert_eq!(finding.line, 3);
        assert_eq!(finding.col, 0);
    }
}
