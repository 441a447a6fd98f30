//! `reqwest`-backed implementation of [`RuleStore`].
//!
//! One authenticated request per call, no retries and no internal
//! timeouts; callers that need a deadline wrap the future or hand in a
//! preconfigured client via [`HttpRuleStore::with_client`].

use tracing::debug;

use crate::store::{RuleStore, StoreError};
use crate::wire::{CreatedRule, DataEnvelope, RemoteRule, RulePayload};

/// HTTP client for the remote rule store.
pub struct HttpRuleStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpRuleStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Use a preconfigured client (connection pool, proxy, transport-level
    /// timeouts).
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn rules_url(&self, service_id: &str) -> String {
        format!("{}/v1/services/{}/incident-rules", self.base_url, service_id)
    }

    fn rule_url(&self, service_id: &str, rule_id: &str) -> String {
        format!("{}/{}", self.rules_url(service_id), rule_id)
    }

    fn auth_header(&self) -> String {
        format!("GenieKey {}", self.api_key)
    }
}

/// Map a response status onto the store error taxonomy: 404 is the
/// distinguished recoverable outcome, every other non-2xx is an API error
/// with the body captured for the caller.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(StoreError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait::async_trait]
impl RuleStore for HttpRuleStore {
    async fn create_incident_rule(
        &self,
        service_id: &str,
        payload: &RulePayload,
    ) -> Result<CreatedRule, StoreError> {
        let url = self.rules_url(service_id);
        debug!(%url, "POST incident rule");
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(payload)
            .send()
            .await?;
        let response = check_status(response).await?;
        let envelope: DataEnvelope<CreatedRule> = response.json().await?;
        Ok(envelope.data)
    }

    async fn get_incident_rules(&self, service_id: &str) -> Result<Vec<RemoteRule>, StoreError> {
        let url = self.rules_url(service_id);
        debug!(%url, "GET incident rules");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        let response = check_status(response).await?;
        let envelope: DataEnvelope<Vec<RemoteRule>> = response.json().await?;
        Ok(envelope.data)
    }

    async fn update_incident_rule(
        &self,
        service_id: &str,
        rule_id: &str,
        payload: &RulePayload,
    ) -> Result<(), StoreError> {
        let url = self.rule_url(service_id, rule_id);
        debug!(%url, "PUT incident rule");
        let response = self
            .client
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(payload)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_incident_rule(
        &self,
        service_id: &str,
        rule_id: &str,
    ) -> Result<(), StoreError> {
        let url = self.rule_url(service_id, rule_id);
        debug!(%url, "DELETE incident rule");
        let response = self
            .client
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
