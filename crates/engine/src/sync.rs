//! CRUD lifecycle orchestration for a single incident rule.
//!
//! One synchronizer owns exactly one rule identity. Every operation is a
//! blocking request/response exchange with the remote store; `&mut self`
//! serializes operations within an instance, and callers are responsible
//! for not running concurrent operations against the same identity
//! through separate handles.

use rulesync_core::IncidentRuleConfig;
use tracing::{debug, info, warn};

use crate::codec;
use crate::error::SyncError;
use crate::ident::CompositeId;
use crate::store::{RuleStore, StoreError};

/// Lifecycle states for the identity owned by a synchronizer.
///
/// `Creating`, `Updating`, and `Deleting` are held only for the duration
/// of the corresponding remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Absent,
    Creating,
    Present,
    Updating,
    Deleting,
}

/// Outcome of a successful [`RuleSynchronizer::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The rule was found and the local mirror now reflects remote state.
    Present,
    /// The service scope itself returned 404: the rule was deleted out of
    /// band, and the local identity has been cleared.
    Vanished,
}

/// Drives Create/Read/Update/Delete/Import for one rule identity.
///
/// The config passed to `create` and `update` has already been through
/// schema validation; nothing here re-checks primitive constraints.
pub struct RuleSynchronizer<S> {
    store: S,
    service_id: String,
    rule_id: String,
    state: SyncState,
    /// Last known remote-equivalent config. Overwritten by reads, assumed
    /// equal to the submitted config after successful create/update.
    mirror: Option<IncidentRuleConfig>,
}

impl<S: RuleStore> RuleSynchronizer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            service_id: String::new(),
            rule_id: String::new(),
            state: SyncState::Absent,
            mirror: None,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Remote-assigned rule id; empty while absent.
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// Last known remote-equivalent config, for drift comparison against
    /// the desired declarative config. Empty until the first successful
    /// create, update, or read.
    pub fn mirror(&self) -> Option<&IncidentRuleConfig> {
        self.mirror.as_ref()
    }

    /// Create the rule remotely and adopt the assigned identity.
    ///
    /// No partial creation: on failure the identity stays empty and the
    /// state remains `Absent`.
    pub async fn create(&mut self, config: &IncidentRuleConfig) -> Result<(), SyncError> {
        let payload = codec::expand(config);
        self.state = SyncState::Creating;
        info!(service_id = %config.service_id, "creating incident rule");
        match self
            .store
            .create_incident_rule(&config.service_id, &payload)
            .await
        {
            Ok(created) => {
                self.service_id = config.service_id.clone();
                self.rule_id = created.id;
                self.mirror = Some(config.clone());
                self.state = SyncState::Present;
                debug!(rule_id = %self.rule_id, "adopted remote identity");
                Ok(())
            }
            Err(e) => {
                self.state = SyncState::Absent;
                Err(e.into())
            }
        }
    }

    /// Fetch the service's rules and refresh the mirror from the entry
    /// matching the local identity.
    ///
    /// A 404 on the service scope means the rule is gone out of band: the
    /// identity is cleared and no error is surfaced. A successful listing
    /// that lacks the identity is an inconsistency, never a silent no-op.
    pub async fn read(&mut self) -> Result<ReadOutcome, SyncError> {
        if self.state != SyncState::Present {
            return Err(SyncError::Absent);
        }
        debug!(service_id = %self.service_id, "reading incident rules");
        let rules = match self.store.get_incident_rules(&self.service_id).await {
            Ok(rules) => rules,
            Err(StoreError::NotFound) => {
                warn!(
                    service_id = %self.service_id,
                    rule_id = %self.rule_id,
                    "incident rule gone on remote store, clearing local identity"
                );
                self.clear_identity();
                return Ok(ReadOutcome::Vanished);
            }
            Err(e) => return Err(e.into()),
        };

        match rules.iter().find(|rule| rule.id == self.rule_id) {
            Some(rule) => {
                self.mirror = Some(codec::flatten(&self.service_id, rule));
                Ok(ReadOutcome::Present)
            }
            None => Err(SyncError::InconsistentState {
                service_id: self.service_id.clone(),
                rule_id: self.rule_id.clone(),
            }),
        }
    }

    /// Replace the remote rule with the full current declarative config.
    ///
    /// The store has no partial-update primitive, so every mutable field
    /// rides along regardless of what changed. On failure the prior
    /// mirror is left untouched.
    pub async fn update(&mut self, config: &IncidentRuleConfig) -> Result<(), SyncError> {
        if self.state != SyncState::Present {
            return Err(SyncError::Absent);
        }
        let payload = codec::expand(config);
        self.state = SyncState::Updating;
        info!(service_id = %self.service_id, rule_id = %self.rule_id, "updating incident rule");
        let result = self
            .store
            .update_incident_rule(&self.service_id, &self.rule_id, &payload)
            .await;
        self.state = SyncState::Present;
        match result {
            Ok(()) => {
                self.mirror = Some(config.clone());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the remote rule and clear the local identity.
    ///
    /// On failure the identity is retained so the delete can be retried.
    pub async fn delete(&mut self) -> Result<(), SyncError> {
        if self.state != SyncState::Present {
            return Err(SyncError::Absent);
        }
        self.state = SyncState::Deleting;
        info!(service_id = %self.service_id, rule_id = %self.rule_id, "deleting incident rule");
        match self
            .store
            .delete_incident_rule(&self.service_id, &self.rule_id)
            .await
        {
            Ok(()) => {
                self.clear_identity();
                Ok(())
            }
            Err(e) => {
                self.state = SyncState::Present;
                Err(e.into())
            }
        }
    }

    /// Adopt an existing remote rule from a composite identifier without
    /// creating it. No remote call is made; the mirror stays empty until
    /// the next [`read`](Self::read) populates it.
    ///
    /// Parsing is atomic: a malformed identifier mutates nothing.
    pub fn import(&mut self, composite: &str) -> Result<(), SyncError> {
        let id: CompositeId = composite.parse()?;
        self.service_id = id.service_id;
        self.rule_id = id.rule_id;
        self.mirror = None;
        self.state = SyncState::Present;
        info!(
            service_id = %self.service_id,
            rule_id = %self.rule_id,
            "imported incident rule identity"
        );
        Ok(())
    }

    fn clear_identity(&mut self) {
        self.rule_id.clear();
        self.mirror = None;
        self.state = SyncState::Absent;
    }
}
