//! Declarative incident-rule configuration tree.
//!
//! These types are what the schema-validation layer hands over: every
//! length, enum-membership, and cardinality constraint has already been
//! checked by the time a value of this shape exists. The reconciliation
//! engine treats them as trusted input and never re-validates primitives.
//!
//! Absence and emptiness are distinct states for the optional collections
//! (`tags`, `details`): `None` means "unspecified", while an empty
//! collection means "clear this field" once it reaches the remote store.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Enumerated domains ──────────────────────────────────────────────

/// Combinator over a rule's condition list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    #[default]
    MatchAll,
    MatchAnyCondition,
    MatchAllConditions,
}

/// Alert field a condition inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionField {
    Message,
    Description,
    Tags,
    ExtraProperties,
    Recipients,
    Teams,
    Priority,
}

/// Comparison applied between the inspected field and the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionOperation {
    Matches,
    Contains,
    StartsWith,
    EndsWith,
    Equals,
    ContainsKey,
    ContainsValue,
    GreaterThan,
    LessThan,
    IsEmpty,
    EqualsIgnoreWhitespace,
}

impl ConditionOperation {
    /// Whether this operation compares against an expected value.
    ///
    /// `is-empty` is the only operation that does not; any configured
    /// value is ignored for it.
    pub fn requires_expected_value(&self) -> bool {
        !matches!(self, ConditionOperation::IsEmpty)
    }
}

/// Incident priority, P1 (highest) through P5 (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
    P5,
}

// ── Config tree ─────────────────────────────────────────────────────

/// A declaratively specified incident rule for one service.
///
/// `service_id` is immutable after creation; the remote-assigned rule id
/// is not part of the config, it lives on the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRuleConfig {
    pub service_id: String,
    #[serde(default)]
    pub condition_match_type: MatchType,
    /// Ordered; each condition carries its own explicit `order` index,
    /// unique within the rule.
    #[serde(default)]
    pub conditions: Vec<ConditionConfig>,
    /// Exactly one per rule.
    pub incident_properties: IncidentPropertiesConfig,
}

/// A single matching predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionConfig {
    pub field: ConditionField,
    pub operation: ConditionOperation,
    /// Inverts the operation's result.
    #[serde(default)]
    pub negate: bool,
    /// Required for every operation except `is-empty`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<String>,
    /// Explicit evaluation-order index, unique within the rule.
    pub order: u32,
}

/// Properties applied to an incident created by the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentPropertiesConfig {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub stakeholder_properties: StakeholderPropertiesConfig,
}

/// Notification settings for incident stakeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderPropertiesConfig {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}
