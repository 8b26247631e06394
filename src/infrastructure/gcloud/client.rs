//! `PlatformClient` backed by the gcloud CLI

use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{DnsRecord, ServiceSpec};
use crate::domain::ports::{PlatformClient, PlatformDiagnostics, PlatformError};
use crate::domain::value_objects::{DomainName, ImageTag, ProjectId};

use super::command::{CommandOutput, CommandRunner, GcloudCommand, ProcessRunner};
use super::commands;

/// Default CLI program name
pub const GCLOUD: &str = "gcloud";

pub struct GcloudClient<R: CommandRunner = ProcessRunner> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> GcloudClient<R> {
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run(&self, command: &GcloudCommand) -> Result<CommandOutput, PlatformError> {
        self.runner.run(&self.program, command)
    }

    fn unexpected(&self, command: &GcloudCommand, message: impl Into<String>) -> PlatformError {
        PlatformError::UnexpectedOutput {
            command: command.display(&self.program),
            message: message.into(),
        }
    }
}

fn first_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|l| !l.is_empty())
}

#[derive(Deserialize)]
struct MappingDescription {
    #[serde(default)]
    status: MappingStatus,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MappingStatus {
    #[serde(default)]
    resource_records: Vec<DnsRecord>,
}

impl<R: CommandRunner> PlatformClient for GcloudClient<R> {
    fn active_account(&self) -> Result<Option<String>, PlatformError> {
        let out = self.run(&commands::active_accounts())?;
        Ok(first_line(&out.stdout).map(str::to_string))
    }

    fn set_project(&self, project: &ProjectId) -> Result<(), PlatformError> {
        self.run(&commands::set_project(project)).map(drop)
    }

    fn enable_apis(&self, apis: &[String]) -> Result<(), PlatformError> {
        if apis.is_empty() {
            return Ok(());
        }
        self.run(&commands::enable_apis(apis)).map(drop)
    }

    fn submit_build(&self, source: &Path, image: &ImageTag) -> Result<(), PlatformError> {
        self.run(&commands::submit_build(source, image)).map(drop)
    }

    fn deploy_service(&self, spec: &ServiceSpec) -> Result<(), PlatformError> {
        self.run(&commands::deploy_service(spec)).map(drop)
    }

    fn service_url(&self, service: &str, region: &str) -> Result<String, PlatformError> {
        let command = commands::service_url(service, region);
        let out = self.run(&command)?;
        first_line(&out.stdout)
            .map(str::to_string)
            .ok_or_else(|| self.unexpected(&command, "service has no URL yet"))
    }

    fn create_domain_mapping(
        &self,
        service: &str,
        domain: &DomainName,
        region: &str,
    ) -> Result<(), PlatformError> {
        self.run(&commands::create_domain_mapping(service, domain, region))
            .map(drop)
    }

    fn describe_domain_mapping(
        &self,
        domain: &DomainName,
        region: &str,
    ) -> Result<Vec<DnsRecord>, PlatformError> {
        let command = commands::describe_domain_mapping(domain, region);
        let out = self.run(&command)?;
        if out.stdout.trim().is_empty() {
            return Ok(Vec::new());
        }
        let description: MappingDescription = serde_json::from_str(&out.stdout)
            .map_err(|e| self.unexpected(&command, e.to_string()))?;
        Ok(description.status.resource_records)
    }
}

impl<R: CommandRunner> PlatformDiagnostics for GcloudClient<R> {
    fn cli_version(&self) -> Result<String, PlatformError> {
        let command = commands::version();
        let out = self.run(&command)?;
        first_line(&out.stdout)
            .map(str::to_string)
            .ok_or_else(|| self.unexpected(&command, "empty version banner"))
    }

    fn project_exists(&self, project: &ProjectId) -> Result<bool, PlatformError> {
        match self.run(&commands::describe_project(project)) {
            Ok(out) => Ok(first_line(&out.stdout) == Some(project.as_str())),
            Err(PlatformError::CommandFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
