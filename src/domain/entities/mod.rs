//! Domain Entities
//!
//! - `DeployConfig` - Immutable settings for one deployment run
//! - `ServiceSpec` - The deploy request sent to the managed service
//! - `ServiceEndpoints` - Public URLs of the deployed backend
//! - `DomainMapping` - A custom domain and the DNS records it needs

mod deploy_config;
mod domain_mapping;
mod endpoints;
mod service_spec;

pub use deploy_config::{
    DeployConfig, DEFAULT_AI_MODEL, DEFAULT_APIS, DEFAULT_ENVIRONMENT, DEFAULT_IMAGE_NAME,
    DEFAULT_PROJECT_ID, DEFAULT_REGION, DEFAULT_REGISTRY, DEFAULT_SERVICE_NAME,
    DEFAULT_SOURCE_DIR,
};
pub use domain_mapping::{DnsRecord, DomainMapping};
pub use endpoints::{ApiEndpoint, ServiceEndpoints, BACKEND_API, DOCS_PATH, HEALTH_PATH};
pub use service_spec::{ServiceEnvelope, ServiceSpec};
