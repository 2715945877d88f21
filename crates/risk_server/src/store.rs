//! In-memory risk and treatment store.
//!
//! Persistence is out of scope for this service; the store lives for the
//! process and is shared across handlers behind a read-write lock. Ids are
//! assigned from a monotonically increasing counter, so creation order and
//! id order coincide.

use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use risk_core::types::{
    NewRisk, NewTreatment, RecentRisk, Risk, RiskMetrics, RiskStatus, Severity, StatusCounts,
    Treatment,
};

/// Number of entries in the recent-risks list of the metrics projection.
const RECENT_RISKS_LIMIT: usize = 3;

/// Lookup failures from store operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No risk with the requested id.
    #[error("Risk not found")]
    RiskNotFound,

    /// The risk exists but has no treatment with the requested id.
    #[error("Treatment not found")]
    TreatmentNotFound,
}

#[derive(Default)]
struct Tables {
    risks: BTreeMap<u64, Risk>,
    treatments: BTreeMap<u64, Treatment>,
    next_risk_id: u64,
    next_treatment_id: u64,
}

/// Shared in-memory store for risks and their treatments.
#[derive(Default)]
pub struct RiskStore {
    tables: RwLock<Tables>,
}

impl RiskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All risks, in id order.
    pub async fn list_risks(&self) -> Vec<Risk> {
        let tables = self.tables.read().await;
        tables.risks.values().cloned().collect()
    }

    /// Look up a single risk.
    pub async fn get_risk(&self, id: u64) -> Result<Risk, StoreError> {
        let tables = self.tables.read().await;
        tables.risks.get(&id).cloned().ok_or(StoreError::RiskNotFound)
    }

    /// Create a risk, assigning id and timestamps.
    pub async fn create_risk(&self, data: NewRisk) -> Risk {
        let mut tables = self.tables.write().await;
        tables.next_risk_id += 1;
        let now = Utc::now();
        let risk = Risk {
            id: tables.next_risk_id,
            title: data.title,
            description: data.description,
            category: data.category,
            severity: data.severity,
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        tables.risks.insert(risk.id, risk.clone());
        risk
    }

    /// Replace the writable fields of a risk.
    pub async fn update_risk(&self, id: u64, data: NewRisk) -> Result<Risk, StoreError> {
        let mut tables = self.tables.write().await;
        let risk = tables.risks.get_mut(&id).ok_or(StoreError::RiskNotFound)?;
        risk.title = data.title;
        risk.description = data.description;
        risk.category = data.category;
        risk.severity = data.severity;
        risk.status = data.status;
        risk.updated_at = Utc::now();
        Ok(risk.clone())
    }

    /// Delete a risk and every treatment attached to it.
    pub async fn delete_risk(&self, id: u64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.risks.remove(&id).is_none() {
            return Err(StoreError::RiskNotFound);
        }
        tables.treatments.retain(|_, t| t.risk_id != id);
        Ok(())
    }

    /// Compute the aggregate metrics projection.
    ///
    /// Every field is populated; consumers treat the fields as optional but
    /// this server always sends the complete projection. The recent list
    /// holds the newest risks first and is capped at
    /// [`RECENT_RISKS_LIMIT`].
    pub async fn metrics(&self) -> RiskMetrics {
        let tables = self.tables.read().await;

        let count_severity = |severity: Severity| {
            tables.risks.values().filter(|r| r.severity == severity).count() as u64
        };
        let count_status = |status: RiskStatus| {
            tables.risks.values().filter(|r| r.status == status).count() as u64
        };

        let status_counts = StatusCounts {
            open: count_status(RiskStatus::Open),
            mitigated: count_status(RiskStatus::Mitigated),
            accepted: count_status(RiskStatus::Accepted),
            transferred: count_status(RiskStatus::Transferred),
            closed: count_status(RiskStatus::Closed),
        };

        // Ids are monotonic, so descending id order is creation order,
        // newest first.
        let recent_risks: Vec<RecentRisk> = tables
            .risks
            .values()
            .rev()
            .take(RECENT_RISKS_LIMIT)
            .map(|r| RecentRisk {
                id: r.id,
                title: r.title.clone(),
                severity: r.severity,
            })
            .collect();

        RiskMetrics {
            total: Some(tables.risks.len() as u64),
            open_risks: Some(status_counts.open),
            closed_risks: Some(status_counts.closed),
            critical: Some(count_severity(Severity::Critical)),
            high: Some(count_severity(Severity::High)),
            medium: Some(count_severity(Severity::Medium)),
            low: Some(count_severity(Severity::Low)),
            status_counts: Some(status_counts),
            recent_risks: Some(recent_risks),
        }
    }

    /// All treatments of a risk, in id order.
    pub async fn list_treatments(&self, risk_id: u64) -> Result<Vec<Treatment>, StoreError> {
        let tables = self.tables.read().await;
        if !tables.risks.contains_key(&risk_id) {
            return Err(StoreError::RiskNotFound);
        }
        Ok(tables
            .treatments
            .values()
            .filter(|t| t.risk_id == risk_id)
            .cloned()
            .collect())
    }

    /// Look up a treatment under a specific risk.
    pub async fn get_treatment(
        &self,
        risk_id: u64,
        treatment_id: u64,
    ) -> Result<Treatment, StoreError> {
        let tables = self.tables.read().await;
        if !tables.risks.contains_key(&risk_id) {
            return Err(StoreError::RiskNotFound);
        }
        tables
            .treatments
            .get(&treatment_id)
            .filter(|t| t.risk_id == risk_id)
            .cloned()
            .ok_or(StoreError::TreatmentNotFound)
    }

    /// Create a treatment under a risk.
    pub async fn create_treatment(
        &self,
        risk_id: u64,
        data: NewTreatment,
    ) -> Result<Treatment, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.risks.contains_key(&risk_id) {
            return Err(StoreError::RiskNotFound);
        }
        tables.next_treatment_id += 1;
        let now = Utc::now();
        let treatment = Treatment {
            id: tables.next_treatment_id,
            risk_id,
            description: data.description,
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        tables.treatments.insert(treatment.id, treatment.clone());
        Ok(treatment)
    }

    /// Replace the writable fields of a treatment.
    pub async fn update_treatment(
        &self,
        risk_id: u64,
        treatment_id: u64,
        data: NewTreatment,
    ) -> Result<Treatment, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.risks.contains_key(&risk_id) {
            return Err(StoreError::RiskNotFound);
        }
        let treatment = tables
            .treatments
            .get_mut(&treatment_id)
            .filter(|t| t.risk_id == risk_id)
            .ok_or(StoreError::TreatmentNotFound)?;
        treatment.description = data.description;
        treatment.status = data.status;
        treatment.updated_at = Utc::now();
        Ok(treatment.clone())
    }

    /// Delete a treatment under a risk.
    pub async fn delete_treatment(
        &self,
        risk_id: u64,
        treatment_id: u64,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.risks.contains_key(&risk_id) {
            return Err(StoreError::RiskNotFound);
        }
        match tables.treatments.get(&treatment_id) {
            Some(t) if t.risk_id == risk_id => {
                tables.treatments.remove(&treatment_id);
                Ok(())
            }
            _ => Err(StoreError::TreatmentNotFound),
        }
    }
}
