//! Remote rule store collaborator boundary.
//!
//! The store is the authoritative holder of incident-rule records. The
//! synchronizer only ever talks to it through [`RuleStore`], so tests can
//! substitute a recording mock and the HTTP transport stays swappable.

use async_trait::async_trait;
use thiserror::Error;

use crate::wire::{CreatedRule, RemoteRule, RulePayload};

/// Failures at the remote store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response other than the distinguished 404 case.
    #[error("remote API error: {status}: {body}")]
    Api { status: u16, body: String },

    /// 404 on the requested scope. Benign during read: the synchronizer
    /// treats it as an out-of-band deletion and self-heals.
    #[error("not found")]
    NotFound,
}

/// Request/response operations against the authoritative rule store.
///
/// Implementations perform exactly one remote call per method and never
/// retry; retries, backoff, and deadlines belong to the caller (wrap the
/// future in a timeout, or drop it to cancel).
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Create a rule under `service_id`, returning the remote-assigned id.
    async fn create_incident_rule(
        &self,
        service_id: &str,
        payload: &RulePayload,
    ) -> Result<CreatedRule, StoreError>;

    /// List all incident rules scoped to `service_id`.
    ///
    /// A 404 on the service scope itself surfaces as [`StoreError::NotFound`].
    async fn get_incident_rules(&self, service_id: &str) -> Result<Vec<RemoteRule>, StoreError>;

    /// Replace the rule document wholesale; the store has no partial update.
    async fn update_incident_rule(
        &self,
        service_id: &str,
        rule_id: &str,
        payload: &RulePayload,
    ) -> Result<(), StoreError>;

    /// Delete the rule, scoped by its owning service.
    async fn delete_incident_rule(&self, service_id: &str, rule_id: &str)
        -> Result<(), StoreError>;
}
