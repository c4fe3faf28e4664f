//! Typed metadata registry for all rule IDs.

use super::ids;

/// Canonical high-level category for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Call-style convention rule.
    Convention,
}

impl RuleCategory {
    /// Returns the canonical display form for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Convention => "Convention",
        }
    }
}

/// Default severity for a rule when no override applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSeverity {
    /// High severity.
    High,
    /// Medium severity.
    Medium,
    /// Low severity.
    Low,
}

impl RuleSeverity {
    /// Returns the canonical display form for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSeverity::High => "HIGH",
            RuleSeverity::Medium => "MEDIUM",
            RuleSeverity::Low => "LOW",
        }
    }
}

/// Strongly typed rule metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleDescriptor {
    /// Stable rule identifier.
    pub id: &'static str,
    /// Rule category.
    pub category: RuleCategory,
    /// Default severity for the rule.
    pub default_severity: RuleSeverity,
    /// Short end-user guidance.
    pub rationale: &'static str,
}

/// All rules shipped with this crate.
pub const RULE_DESCRIPTORS: &[RuleDescriptor] = &[RuleDescriptor {
    id: ids::RULE_ID_KEYWORD_ARGS,
    category: RuleCategory::Convention,
    default_severity: RuleSeverity::Low,
    rationale: "Ensure function calls use keyword arguments.",
}];

/// Looks up a rule descriptor by its stable identifier.
#[must_use]
pub fn get_rule_descriptor(id: &str) -> Option<&'static RuleDescriptor> {
    RULE_DESCRIPTORS.iter().find(|descriptor| descriptor.id == id)
}
