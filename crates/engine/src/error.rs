//! Synchronizer-level error taxonomy.

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by [`crate::sync::RuleSynchronizer`].
///
/// Remote failures propagate unchanged; the synchronizer recovers only
/// the read-time 404 case, which therefore never appears here.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A successful listing did not contain the locally adopted identity.
    /// Distinct from a scope-level 404: the scope exists, the rule does not.
    #[error("rule '{rule_id}' missing from listing for service '{service_id}'")]
    InconsistentState { service_id: String, rule_id: String },

    /// An import identifier did not match `<service_id>/<rule_id>`.
    #[error("malformed import identifier '{0}': expected <service_id>/<rule_id>")]
    MalformedIdentifier(String),

    /// The operation needs an adopted rule identity; create or import first.
    #[error("no rule identity adopted: create or import first")]
    Absent,
}
