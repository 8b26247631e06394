//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, DeployUseCase};
use crate::config::Config;
use crate::domain::ports::{DeclinePrompt, DomainPrompt, FixedDomainPrompt};
use crate::domain::value_objects::DomainName;
use crate::error::{RuncastError, RuncastResult};
use crate::infrastructure::{GcloudClient, LinePrompt, ProcessRunner, TerminalPrompt};

/// gcloud client with the real process runner
pub type ConcreteClient = GcloudClient<ProcessRunner>;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<ConcreteClient>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<ConcreteClient>;

/// How gcloud should be run for this invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerOptions {
    pub verbose: u8,
    /// Capture output of long-running commands too (JSON mode)
    pub capture_all: bool,
}

/// Create the gcloud client configured by `config`
pub fn create_client(config: &Config, options: RunnerOptions) -> ConcreteClient {
    GcloudClient::new(
        config.platform.gcloud.clone(),
        ProcessRunner::new(options.verbose, options.capture_all),
    )
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(config: &Config, options: RunnerOptions) -> ConcreteDeployUseCase {
    DeployUseCase::new(create_client(config, options))
}

/// Create a check use case with all dependencies wired up
pub fn create_check_use_case(config: &Config, options: RunnerOptions) -> ConcreteCheckUseCase {
    CheckUseCase::new(create_client(config, options))
}

/// Where the domain-mapping answers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// `--domain <D>`
    Fixed(DomainName),
    /// `--no-domain`, or JSON mode without `--domain`
    Decline,
    /// Ask on the terminal
    Terminal,
    /// Read lines from piped stdin
    Lines,
}

impl PromptSource {
    /// Pick the prompt for the given flags.
    ///
    /// JSON output never prompts: stdout must stay machine-readable.
    pub fn select(
        domain: Option<&str>,
        no_domain: bool,
        json: bool,
        interactive: bool,
    ) -> RuncastResult<Self> {
        if let Some(raw) = domain {
            let domain = DomainName::parse(raw).map_err(|reason| RuncastError::InvalidDomain {
                value: raw.to_string(),
                reason,
            })?;
            return Ok(PromptSource::Fixed(domain));
        }
        if no_domain || json {
            return Ok(PromptSource::Decline);
        }
        Ok(if interactive {
            PromptSource::Terminal
        } else {
            PromptSource::Lines
        })
    }

    /// Domain known before the run starts, if any
    pub fn planned_domain(&self) -> Option<&DomainName> {
        match self {
            PromptSource::Fixed(domain) => Some(domain),
            _ => None,
        }
    }
}

/// Create the domain prompt for a source
pub fn create_domain_prompt(source: PromptSource) -> Box<dyn DomainPrompt> {
    match source {
        PromptSource::Fixed(domain) => Box::new(FixedDomainPrompt(domain)),
        PromptSource::Decline => Box::new(DeclinePrompt),
        PromptSource::Terminal => Box::new(TerminalPrompt::new()),
        PromptSource::Lines => Box::new(LinePrompt::stdio()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_flag_wins() {
        let source = PromptSource::select(Some("API.example.com"), false, true, true).unwrap();
        assert_eq!(
            source.planned_domain().map(DomainName::as_str),
            Some("api.example.com")
        );
    }

    #[test]
    fn invalid_domain_flag_is_rejected() {
        let err = PromptSource::select(Some("localhost"), false, false, true).unwrap_err();
        assert!(matches!(err, RuncastError::InvalidDomain { .. }));
    }

    #[test]
    fn json_mode_never_prompts() {
        assert_eq!(
            PromptSource::select(None, false, true, true).unwrap(),
            PromptSource::Decline
        );
    }

    #[test]
    fn terminal_or_lines_by_tty() {
        assert_eq!(
            PromptSource::select(None, false, false, true).unwrap(),
            PromptSource::Terminal
        );
        assert_eq!(
            PromptSource::select(None, false, false, false).unwrap(),
            PromptSource::Lines
        );
        assert_eq!(
            PromptSource::select(None, true, false, true).unwrap(),
            PromptSource::Decline
        );
    }

    #[test]
    fn factory_uses_configured_program() {
        let mut config = Config::default();
        config.platform.gcloud = "/opt/google-cloud-sdk/bin/gcloud".to_string();
        let client = create_client(&config, RunnerOptions::default());
        assert_eq!(client.program(), "/opt/google-cloud-sdk/bin/gcloud");
    }
}
