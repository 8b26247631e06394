//! Platform Client Port
//!
//! One method per external operation the deployment pipeline performs.
//! The `gcloud` adapter implements it for real runs; tests use in-memory
//! doubles.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::{DnsRecord, ServiceSpec};
use crate::domain::value_objects::{DomainName, ImageTag, ProjectId};

/// Failure of a single platform operation
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The command ran and reported failure
    #[error("`{command}` failed ({})", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The command could not be started at all
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command succeeded but its output was unusable
    #[error("unexpected output from `{command}`: {message}")]
    UnexpectedOutput { command: String, message: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl PlatformError {
    /// Exit status reported by the failing command, if any
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PlatformError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }

    /// Captured stderr of the failing command (empty when it was streamed)
    pub fn stderr(&self) -> Option<&str> {
        match self {
            PlatformError::CommandFailed { stderr, .. } if !stderr.trim().is_empty() => {
                Some(stderr.as_str())
            }
            _ => None,
        }
    }

    /// True when the CLI binary itself is missing
    pub fn is_not_installed(&self) -> bool {
        matches!(
            self,
            PlatformError::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Operations the deployment pipeline needs from the cloud platform.
pub trait PlatformClient {
    /// Active authenticated account, `None` if there is no session.
    fn active_account(&self) -> Result<Option<String>, PlatformError>;

    /// Make `project` the active project context.
    fn set_project(&self, project: &ProjectId) -> Result<(), PlatformError>;

    /// Enable platform services. Enabling an enabled service is a no-op.
    fn enable_apis(&self, apis: &[String]) -> Result<(), PlatformError>;

    /// Package `source` remotely and tag the result as `image`.
    fn submit_build(&self, source: &Path, image: &ImageTag) -> Result<(), PlatformError>;

    /// Deploy (or roll out a new revision of) the managed service.
    fn deploy_service(&self, spec: &ServiceSpec) -> Result<(), PlatformError>;

    /// Public URL of a deployed service.
    fn service_url(&self, service: &str, region: &str) -> Result<String, PlatformError>;

    /// Attach `domain` to `service`.
    fn create_domain_mapping(
        &self,
        service: &str,
        domain: &DomainName,
        region: &str,
    ) -> Result<(), PlatformError>;

    /// DNS records the operator must configure for `domain`.
    fn describe_domain_mapping(
        &self,
        domain: &DomainName,
        region: &str,
    ) -> Result<Vec<DnsRecord>, PlatformError>;
}

/// Read-only probes used by `runcast check`.
pub trait PlatformDiagnostics {
    /// First line of the CLI's version banner.
    fn cli_version(&self) -> Result<String, PlatformError>;

    /// Whether `project` exists and is visible to the active account.
    fn project_exists(&self, project: &ProjectId) -> Result<bool, PlatformError>;
}
