//! Deploy Result
//!
//! What a successful deployment reports back to the operator.

use chrono::{DateTime, Utc};

use crate::domain::entities::{DomainMapping, ServiceEndpoints};

/// Result of a deploy run
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// Account the platform CLI was authenticated as
    pub account: String,
    pub project: String,
    pub region: String,
    pub service: String,
    /// Image tag the service now runs
    pub image: String,
    pub endpoints: ServiceEndpoints,
    /// Present when the operator mapped a custom domain
    pub domain: Option<DomainMapping>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl DeployResult {
    pub fn duration_ms(&self) -> u64 {
        (self.finished_at - self.started_at)
            .num_milliseconds()
            .max(0) as u64
    }

    pub fn has_domain(&self) -> bool {
        self.domain.is_some()
    }
}
