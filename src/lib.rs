//! Runcast - deploy a containerized backend to Google Cloud Run
//!
//! Runcast drives the `gcloud` CLI through a fixed pipeline: session check,
//! project selection, API enablement, remote image build, service deploy,
//! URL lookup and an optional custom domain mapping. The first failing step
//! stops the run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckResult, CheckUseCase, DeployResult, DeployUseCase};
pub use config::Config;
pub use domain::entities::{DeployConfig, ServiceEndpoints};
pub use domain::value_objects::{DeployStep, DomainName, ImageTag, ProjectId};
pub use error::{RuncastError, RuncastResult};
