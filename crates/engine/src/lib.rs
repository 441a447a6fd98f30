//! Reconciliation engine for service incident rules.
//!
//! Keeps a declaratively specified incident rule in sync with the record
//! held by a remote rule store: a bidirectional transcoder between config
//! and wire shapes ([`codec`]), a CRUD/Import orchestrator ([`sync`]),
//! the composite import identifier ([`ident`]), and the store boundary
//! ([`store`]) with its `reqwest` implementation ([`http`]).

pub mod codec;
pub mod error;
pub mod http;
pub mod ident;
pub mod store;
pub mod sync;
pub mod wire;

pub use error::SyncError;
pub use http::HttpRuleStore;
pub use ident::CompositeId;
pub use store::{RuleStore, StoreError};
pub use sync::{ReadOutcome, RuleSynchronizer, SyncState};
