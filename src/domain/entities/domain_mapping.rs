//! DomainMapping entity - a custom domain attached to the service

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DomainName;

/// A DNS record the operator must create at their registrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub rrdata: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMapping {
    pub domain: DomainName,
    pub records: Vec<DnsRecord>,
}

impl DomainMapping {
    pub fn new(domain: DomainName, records: Vec<DnsRecord>) -> Self {
        Self { domain, records }
    }

    /// Record name as entered at the registrar. gcloud reports names
    /// relative to the verified domain; an empty name is the apex (`@`).
    pub fn record_label<'a>(&self, record: &'a DnsRecord) -> &'a str {
        match record.name.as_str() {
            "" => "@",
            name => name,
        }
    }
}
