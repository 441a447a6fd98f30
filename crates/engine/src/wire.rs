//! Wire-level request/response shapes for the remote rule store.
//!
//! Field names follow the remote API: camelCase keys, kebab-case enum
//! values, responses wrapped in a `data` envelope. Optional collections
//! use `skip_serializing_if` so an unset block is omitted from the
//! document instead of being sent as an empty value; the store reads an
//! empty collection as "clear this field".

use indexmap::IndexMap;
use rulesync_core::{ConditionField, ConditionOperation, MatchType, Priority};
use serde::{Deserialize, Serialize};

/// Full incident-rule document, used verbatim as the Create and Update
/// request body. The store has no partial-update primitive, so Update
/// always carries the whole thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePayload {
    pub condition_match_type: MatchType,
    pub conditions: Vec<WireCondition>,
    pub incident_properties: WireIncidentProperties,
}

/// One matching predicate as the store sees it. The config-side `negate`
/// flag travels as `not` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCondition {
    pub field: ConditionField,
    pub operation: ConditionOperation,
    #[serde(rename = "not", default)]
    pub negate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireIncidentProperties {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub stakeholder_properties: WireStakeholderProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireStakeholderProperties {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

/// An incident rule as returned in the Read listing: the remote-assigned
/// id alongside the full document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRule {
    pub id: String,
    #[serde(flatten)]
    pub payload: RulePayload,
}

/// Remote-assigned identity returned by a successful create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRule {
    pub id: String,
}

/// `{"data": ...}` envelope the store wraps responses in.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> RulePayload {
        RulePayload {
            condition_match_type: MatchType::MatchAnyCondition,
            conditions: vec![WireCondition {
                field: ConditionField::Message,
                operation: ConditionOperation::Contains,
                negate: true,
                expected_value: Some("disk".into()),
                order: 0,
            }],
            incident_properties: WireIncidentProperties {
                message: "Disk incident".into(),
                tags: None,
                details: None,
                description: None,
                priority: Priority::P2,
                stakeholder_properties: WireStakeholderProperties {
                    enable: true,
                    message: "notify".into(),
                    description: None,
                },
            },
        }
    }

    #[test]
    fn payload_serializes_with_remote_field_names() {
        let value = serde_json::to_value(sample_payload()).unwrap();
        assert_eq!(value["conditionMatchType"], json!("match-any-condition"));
        assert_eq!(value["conditions"][0]["not"], json!(true));
        assert_eq!(value["conditions"][0]["expectedValue"], json!("disk"));
        assert_eq!(value["incidentProperties"]["priority"], json!("P2"));
        assert_eq!(
            value["incidentProperties"]["stakeholderProperties"]["enable"],
            json!(true)
        );
    }

    #[test]
    fn unset_collections_are_omitted_not_empty() {
        let value = serde_json::to_value(sample_payload()).unwrap();
        let props = value["incidentProperties"].as_object().unwrap();
        assert!(!props.contains_key("tags"));
        assert!(!props.contains_key("details"));
        assert!(!props.contains_key("description"));
    }

    #[test]
    fn remote_rule_deserializes_from_listing_element() {
        let rule: RemoteRule = serde_json::from_value(json!({
            "id": "rule-42",
            "conditionMatchType": "match-all",
            "conditions": [
                {"field": "priority", "operation": "equals", "expectedValue": "P1", "order": 0}
            ],
            "incidentProperties": {
                "message": "High sev",
                "priority": "P1",
                "stakeholderProperties": {"message": "notify"}
            }
        }))
        .unwrap();

        assert_eq!(rule.id, "rule-42");
        assert_eq!(rule.payload.condition_match_type, MatchType::MatchAll);
        // Wire-absent fields come back as explicit absence.
        assert_eq!(rule.payload.incident_properties.tags, None);
        assert!(!rule.payload.conditions[0].negate);
        // Stakeholder `enable` defaults to true when the store omits it.
        assert!(rule.payload.incident_properties.stakeholder_properties.enable);
    }

    #[test]
    fn data_envelope_unwraps_create_response() {
        let envelope: DataEnvelope<CreatedRule> =
            serde_json::from_value(json!({"data": {"id": "r-7"}, "took": 0.02})).unwrap();
        assert_eq!(envelope.data.id, "r-7");
    }
}
