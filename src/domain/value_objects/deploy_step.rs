//! Deploy step value object - the fixed stages of the pipeline

use serde::Serialize;
use std::fmt;

/// One stage of the deployment pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployStep {
    Authenticate,
    ConfigureProject,
    EnableApis,
    BuildImage,
    DeployService,
    ResolveUrl,
    MapDomain,
}

impl DeployStep {
    pub const ALL: [DeployStep; 7] = [
        DeployStep::Authenticate,
        DeployStep::ConfigureProject,
        DeployStep::EnableApis,
        DeployStep::BuildImage,
        DeployStep::DeployService,
        DeployStep::ResolveUrl,
        DeployStep::MapDomain,
    ];

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            DeployStep::Authenticate => 1,
            DeployStep::ConfigureProject => 2,
            DeployStep::EnableApis => 3,
            DeployStep::BuildImage => 4,
            DeployStep::DeployService => 5,
            DeployStep::ResolveUrl => 6,
            DeployStep::MapDomain => 7,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeployStep::Authenticate => "Checking authentication",
            DeployStep::ConfigureProject => "Configuring project",
            DeployStep::EnableApis => "Enabling APIs",
            DeployStep::BuildImage => "Building image",
            DeployStep::DeployService => "Deploying service",
            DeployStep::ResolveUrl => "Resolving service URL",
            DeployStep::MapDomain => "Mapping custom domain",
        }
    }

    /// Whether this step changes anything on the platform
    pub fn is_mutating(&self) -> bool {
        !matches!(self, DeployStep::Authenticate | DeployStep::ResolveUrl)
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
