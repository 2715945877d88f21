//! API client for the risk-management REST backend.
//!
//! Every operation is a thin pass-through over a shared [`reqwest::Client`]:
//! no retries, no caching, no request coalescing, no timeout handling beyond
//! what the transport provides. Failures are logged with
//! operation-identifying context and re-raised unchanged; the client never
//! swallows an error, and it does not distinguish network failures from
//! non-success statuses or decode failures.
//!
//! Delete responses are backend-defined, so they are returned as opaque
//! JSON; an empty body decodes to `Value::Null`.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use risk_core::types::{NewRisk, NewTreatment, Risk, RiskMetrics, Treatment};

/// API client for the risk-management backend.
pub struct RiskApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl RiskApiClient {
    /// Create a new API client.
    ///
    /// `base_url` is the server root without a trailing slash, e.g.
    /// `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The server root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get all risks.
    pub async fn list_risks(&self) -> Result<Vec<Risk>> {
        let url = format!("{}/risk/risks/", self.base_url);
        self.get_json(&url).await.map_err(|err| {
            error!(error = %err, "Error fetching risks");
            err
        })
    }

    /// Get a risk by id.
    pub async fn get_risk(&self, id: u64) -> Result<Risk> {
        let url = format!("{}/risk/risks/{}/", self.base_url, id);
        self.get_json(&url).await.map_err(|err| {
            error!(risk_id = id, error = %err, "Error fetching risk");
            err
        })
    }

    /// Create a new risk.
    pub async fn create_risk(&self, data: &NewRisk) -> Result<Risk> {
        let url = format!("{}/risk/risks/", self.base_url);
        self.post_json(&url, data).await.map_err(|err| {
            error!(error = %err, "Error creating risk");
            err
        })
    }

    /// Update an existing risk.
    pub async fn update_risk(&self, id: u64, data: &NewRisk) -> Result<Risk> {
        let url = format!("{}/risk/risks/{}/", self.base_url, id);
        self.put_json(&url, data).await.map_err(|err| {
            error!(risk_id = id, error = %err, "Error updating risk");
            err
        })
    }

    /// Delete a risk. The response body is backend-defined.
    pub async fn delete_risk(&self, id: u64) -> Result<Value> {
        let url = format!("{}/risk/risks/{}/", self.base_url, id);
        self.delete_opaque(&url).await.map_err(|err| {
            error!(risk_id = id, error = %err, "Error deleting risk");
            err
        })
    }

    /// Get the aggregate risk metrics projection.
    pub async fn get_risk_metrics(&self) -> Result<RiskMetrics> {
        let url = format!("{}/risk/risks/metrics/", self.base_url);
        self.get_json(&url).await.map_err(|err| {
            error!(error = %err, "Error fetching risk metrics");
            err
        })
    }

    /// Get all treatments of a risk.
    pub async fn list_treatments(&self, risk_id: u64) -> Result<Vec<Treatment>> {
        let url = format!("{}/risk/risks/{}/treatments/", self.base_url, risk_id);
        self.get_json(&url).await.map_err(|err| {
            error!(risk_id, error = %err, "Error fetching treatments");
            err
        })
    }

    /// Get a treatment by id.
    pub async fn get_treatment(&self, risk_id: u64, treatment_id: u64) -> Result<Treatment> {
        let url = format!(
            "{}/risk/risks/{}/treatments/{}/",
            self.base_url, risk_id, treatment_id
        );
        self.get_json(&url).await.map_err(|err| {
            error!(risk_id, treatment_id, error = %err, "Error fetching treatment");
            err
        })
    }

    /// Create a new treatment under a risk.
    pub async fn create_treatment(&self, risk_id: u64, data: &NewTreatment) -> Result<Treatment> {
        let url = format!("{}/risk/risks/{}/treatments/", self.base_url, risk_id);
        self.post_json(&url, data).await.map_err(|err| {
            error!(risk_id, error = %err, "Error creating treatment");
            err
        })
    }

    /// Update an existing treatment.
    pub async fn update_treatment(
        &self,
        risk_id: u64,
        treatment_id: u64,
        data: &NewTreatment,
    ) -> Result<Treatment> {
        let url = format!(
            "{}/risk/risks/{}/treatments/{}/",
            self.base_url, risk_id, treatment_id
        );
        self.put_json(&url, data).await.map_err(|err| {
            error!(risk_id, treatment_id, error = %err, "Error updating treatment");
            err
        })
    }

    /// Delete a treatment. The response body is backend-defined.
    pub async fn delete_treatment(&self, risk_id: u64, treatment_id: u64) -> Result<Value> {
        let url = format!(
            "{}/risk/risks/{}/treatments/{}/",
            self.base_url, risk_id, treatment_id
        );
        self.delete_opaque(&url).await.map_err(|err| {
            error!(risk_id, treatment_id, error = %err, "Error deleting treatment");
            err
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            anyhow::bail!("API error: {}", response.status())
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        let response = self.client.post(url).json(body).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            anyhow::bail!("API error: {}", response.status())
        }
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        let response = self.client.put(url).json(body).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            anyhow::bail!("API error: {}", response.status())
        }
    }

    // Deletes commonly answer 204 with no body, so the decode tolerates
    // emptiness instead of requiring JSON.
    async fn delete_opaque(&self, url: &str) -> Result<Value> {
        let response = self.client.delete(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("API error: {}", response.status());
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}
