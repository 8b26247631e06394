//! Domain Prompt Port
//!
//! The operator input consulted by the optional domain-mapping step.
//! Implementations can be interactive (terminal prompts, piped stdin) or
//! scripted (answers fixed up front by CLI flags or tests).

use thiserror::Error;

use crate::domain::value_objects::{DomainName, DomainNameError};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read operator input: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before an answer was given
    #[error("input closed before an answer was given")]
    Closed,

    #[error("invalid domain '{input}': {reason}")]
    InvalidDomain {
        input: String,
        reason: DomainNameError,
    },

    /// Error from the terminal prompt library
    #[error("prompt failed: {0}")]
    Interaction(String),
}

/// Source of the operator's answers for domain mapping.
pub trait DomainPrompt {
    /// Ask whether a custom domain should be mapped to `service`.
    fn confirm_mapping(&self, service: &str) -> Result<bool, PromptError>;

    /// Ask which domain to map. Only called after `confirm_mapping` said yes.
    fn domain(&self) -> Result<DomainName, PromptError>;
}

/// Prompt that always declines.
///
/// Use this for non-interactive runs where no domain was requested.
pub struct DeclinePrompt;

impl DomainPrompt for DeclinePrompt {
    fn confirm_mapping(&self, _service: &str) -> Result<bool, PromptError> {
        Ok(false)
    }

    fn domain(&self) -> Result<DomainName, PromptError> {
        Err(PromptError::Closed)
    }
}

/// Prompt that accepts and answers with a fixed domain.
///
/// Use this when `--domain` is passed.
pub struct FixedDomainPrompt(pub DomainName);

impl DomainPrompt for FixedDomainPrompt {
    fn confirm_mapping(&self, _service: &str) -> Result<bool, PromptError> {
        Ok(true)
    }

    fn domain(&self) -> Result<DomainName, PromptError> {
        Ok(self.0.clone())
    }
}
