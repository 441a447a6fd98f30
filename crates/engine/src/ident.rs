//! Composite import identifier: `"<service_id>/<rule_id>"`.

use std::fmt;
use std::str::FromStr;

use crate::error::SyncError;

/// The two-part identifier used to adopt an existing remote rule without
/// creating it: the owning service scope and the remote-assigned rule id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeId {
    pub service_id: String,
    pub rule_id: String,
}

impl FromStr for CompositeId {
    type Err = SyncError;

    /// Parsing is atomic: either both segments are produced or the whole
    /// identifier is rejected. Exactly two non-empty segments are allowed,
    /// so an extra `/` anywhere is malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(service_id), Some(rule_id), None)
                if !service_id.is_empty() && !rule_id.is_empty() =>
            {
                Ok(Self {
                    service_id: service_id.to_string(),
                    rule_id: rule_id.to_string(),
                })
            }
            _ => Err(SyncError::MalformedIdentifier(s.to_string())),
        }
    }
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.service_id, self.rule_id)
    }
}
