//! Dry-run plan: every gcloud call a deploy would make, in order

use serde::Serialize;

use crate::domain::entities::DeployConfig;
use crate::domain::value_objects::{DeployStep, DomainName};

use super::command::GcloudCommand;
use super::commands;

/// One command of a deploy, rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedCommand {
    pub step: DeployStep,
    /// Shell-quoted command line
    pub command: String,
}

/// Commands a deploy of `config` runs, without running any.
///
/// Domain mapping is only included when a domain is already known; the
/// interactive answer cannot be planned. An empty API list enables
/// nothing, so that call is left out as well.
pub fn deploy_plan(
    program: &str,
    config: &DeployConfig,
    domain: Option<&DomainName>,
) -> Vec<PlannedCommand> {
    let mut steps: Vec<(DeployStep, GcloudCommand)> = vec![
        (DeployStep::Authenticate, commands::active_accounts()),
        (
            DeployStep::ConfigureProject,
            commands::set_project(config.project()),
        ),
    ];

    if !config.apis().is_empty() {
        steps.push((DeployStep::EnableApis, commands::enable_apis(config.apis())));
    }

    steps.extend([
        (
            DeployStep::BuildImage,
            commands::submit_build(config.source_dir(), config.image()),
        ),
        (
            DeployStep::DeployService,
            commands::deploy_service(&config.service_spec()),
        ),
        (
            DeployStep::ResolveUrl,
            commands::service_url(config.service_name(), config.region()),
        ),
    ]);

    if let Some(domain) = domain {
        steps.push((
            DeployStep::MapDomain,
            commands::create_domain_mapping(config.service_name(), domain, config.region()),
        ));
        steps.push((
            DeployStep::MapDomain,
            commands::describe_domain_mapping(domain, config.region()),
        ));
    }

    steps
        .into_iter()
        .map(|(step, command)| PlannedCommand {
            step,
            command: command.display(program),
        })
        .collect()
}
