//! Bidirectional transcoder between the declarative config tree and the
//! store's wire shapes.
//!
//! Both directions are pure functions over already-validated input and
//! never fail; malformed data is rejected upstream by the schema layer
//! before a config value can exist. `expand` and `flatten` are inverses
//! for fully-specified rules.

use rulesync_core::{
    ConditionConfig, IncidentPropertiesConfig, IncidentRuleConfig, StakeholderPropertiesConfig,
};

use crate::wire::{
    RemoteRule, RulePayload, WireCondition, WireIncidentProperties, WireStakeholderProperties,
};

/// Build the full request document for a declarative rule config.
///
/// Declared condition order and each condition's explicit `order` index
/// are preserved. Present-but-empty `tags`/`details` expand to omission:
/// an empty collection on the wire means "clear", which an unspecified
/// block must never do.
pub fn expand(config: &IncidentRuleConfig) -> RulePayload {
    RulePayload {
        condition_match_type: config.condition_match_type,
        conditions: config.conditions.iter().map(expand_condition).collect(),
        incident_properties: expand_properties(&config.incident_properties),
    }
}

fn expand_condition(condition: &ConditionConfig) -> WireCondition {
    // `is-empty` compares against nothing; any configured value is
    // stripped rather than sent.
    let expected_value = if condition.operation.requires_expected_value() {
        condition.expected_value.clone()
    } else {
        None
    };
    WireCondition {
        field: condition.field,
        operation: condition.operation,
        negate: condition.negate,
        expected_value,
        order: condition.order,
    }
}

fn expand_properties(props: &IncidentPropertiesConfig) -> WireIncidentProperties {
    WireIncidentProperties {
        message: props.message.clone(),
        tags: props.tags.clone().filter(|tags| !tags.is_empty()),
        details: props.details.clone().filter(|details| !details.is_empty()),
        description: props.description.clone(),
        priority: props.priority,
        stakeholder_properties: WireStakeholderProperties {
            enable: props.stakeholder_properties.enable,
            message: props.stakeholder_properties.message.clone(),
            description: props.stakeholder_properties.description.clone(),
        },
    }
}

/// Rebuild the declarative config for a rule returned by the store.
///
/// The listing scopes rules by service, so `service_id` is supplied by
/// the caller. Wire-absent substructures flatten to explicitly-absent
/// config blocks (`None`), never to empty ones, so "never set" stays
/// distinguishable from "set to empty" during drift comparison.
pub fn flatten(service_id: &str, rule: &RemoteRule) -> IncidentRuleConfig {
    let props = &rule.payload.incident_properties;
    IncidentRuleConfig {
        service_id: service_id.to_string(),
        condition_match_type: rule.payload.condition_match_type,
        conditions: rule.payload.conditions.iter().map(flatten_condition).collect(),
        incident_properties: IncidentPropertiesConfig {
            message: props.message.clone(),
            tags: props.tags.clone(),
            details: props.details.clone(),
            description: props.description.clone(),
            priority: props.priority,
            stakeholder_properties: StakeholderPropertiesConfig {
                enable: props.stakeholder_properties.enable,
                message: props.stakeholder_properties.message.clone(),
                description: props.stakeholder_properties.description.clone(),
            },
        },
    }
}

fn flatten_condition(condition: &WireCondition) -> ConditionConfig {
    ConditionConfig {
        field: condition.field,
        operation: condition.operation,
        negate: condition.negate,
        expected_value: condition.expected_value.clone(),
        order: condition.order,
    }
}
