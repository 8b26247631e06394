//! Error types for Runcast
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{PlatformError, PromptError};
use crate::domain::value_objects::{DeployStep, DomainNameError, ProjectIdError};

/// Result type alias for Runcast operations
pub type RuncastResult<T> = Result<T, RuncastError>;

/// Main error type for Runcast operations
#[derive(Error, Debug)]
pub enum RuncastError {
    /// No active account in the platform CLI
    #[error("no active gcloud account found - run 'gcloud auth login' first")]
    NotAuthenticated,

    /// An external command failed during a pipeline step
    #[error("{step} failed: {source}")]
    Step {
        step: DeployStep,
        #[source]
        source: PlatformError,
    },

    /// Project identifier rejected before any step ran
    #[error("invalid project id '{value}': {reason}")]
    InvalidProjectId {
        value: String,
        reason: ProjectIdError,
    },

    /// Domain passed on the command line was rejected
    #[error("invalid domain '{value}': {reason}")]
    InvalidDomain {
        value: String,
        reason: DomainNameError,
    },

    /// Operator input for domain mapping could not be read
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A configured value that parses but cannot be deployed
    #[error("invalid config: {key} {message}")]
    InvalidSetting { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuncastError {
    /// Wrap a platform failure with the step it happened in
    pub fn step(step: DeployStep, source: PlatformError) -> Self {
        RuncastError::Step { step, source }
    }

    /// Process exit status for this error.
    ///
    /// Failed external commands propagate their own exit code; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RuncastError::Step { source, .. } => match source.exit_code() {
                Some(code) if code != 0 => code,
                _ => 1,
            },
            _ => 1,
        }
    }

    /// Stable identifier used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            RuncastError::NotAuthenticated => "not_authenticated",
            RuncastError::Step { .. } => "step_failed",
            RuncastError::InvalidProjectId { .. } => "invalid_project_id",
            RuncastError::InvalidDomain { .. } => "invalid_domain",
            RuncastError::Prompt(_) => "prompt_failed",
            RuncastError::InvalidConfig { .. } | RuncastError::InvalidSetting { .. } => {
                "invalid_config"
            }
            RuncastError::Io(_) => "io",
        }
    }

    /// The pipeline step this error belongs to, if any
    pub fn failed_step(&self) -> Option<DeployStep> {
        match self {
            RuncastError::NotAuthenticated => Some(DeployStep::Authenticate),
            RuncastError::Step { step, .. } => Some(*step),
            RuncastError::Prompt(_) => Some(DeployStep::MapDomain),
            _ => None,
        }
    }
}
