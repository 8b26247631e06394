//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    DeployConfig, ServiceEnvelope, DEFAULT_AI_MODEL, DEFAULT_APIS, DEFAULT_ENVIRONMENT,
    DEFAULT_IMAGE_NAME, DEFAULT_PROJECT_ID, DEFAULT_REGION, DEFAULT_REGISTRY,
    DEFAULT_SERVICE_NAME, DEFAULT_SOURCE_DIR,
};
use crate::domain::value_objects::ProjectId;
use crate::error::{RuncastError, RuncastResult};

use super::loader::{self, ConfigWarning};

/// Project placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_project_id")]
    pub id: String,

    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            id: default_project_id(),
            region: default_region(),
        }
    }
}

fn default_project_id() -> String {
    DEFAULT_PROJECT_ID.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Image build settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_registry")]
    pub registry: String,

    #[serde(default = "default_image")]
    pub image: String,

    /// Directory uploaded to the build service
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            image: default_image(),
            source: default_source(),
        }
    }
}

fn default_registry() -> String {
    DEFAULT_REGISTRY.to_string()
}

fn default_image() -> String {
    DEFAULT_IMAGE_NAME.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}

/// Managed service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_memory")]
    pub memory: String,

    #[serde(default = "default_cpu")]
    pub cpu: String,

    #[serde(default = "default_concurrency")]
    pub concurrency: u32,

    #[serde(default)]
    pub min_instances: u32,

    #[serde(default = "default_max_instances")]
    pub max_instances: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,

    #[serde(default = "default_true")]
    pub allow_unauthenticated: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let envelope = ServiceEnvelope::default();
        Self {
            name: default_service_name(),
            port: envelope.port,
            memory: envelope.memory,
            cpu: envelope.cpu,
            concurrency: envelope.concurrency,
            min_instances: envelope.min_instances,
            max_instances: envelope.max_instances,
            timeout_secs: envelope.timeout_secs,
            allow_unauthenticated: envelope.allow_unauthenticated,
        }
    }
}

impl ServiceConfig {
    pub fn envelope(&self) -> ServiceEnvelope {
        ServiceEnvelope {
            port: self.port,
            memory: self.memory.clone(),
            cpu: self.cpu.clone(),
            concurrency: self.concurrency,
            min_instances: self.min_instances,
            max_instances: self.max_instances,
            timeout_secs: self.timeout_secs,
            allow_unauthenticated: self.allow_unauthenticated,
        }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_port() -> u16 {
    ServiceEnvelope::default().port
}

fn default_memory() -> String {
    ServiceEnvelope::default().memory
}

fn default_cpu() -> String {
    ServiceEnvelope::default().cpu
}

fn default_concurrency() -> u32 {
    ServiceEnvelope::default().concurrency
}

fn default_max_instances() -> u32 {
    ServiceEnvelope::default().max_instances
}

fn default_timeout_secs() -> u32 {
    ServiceEnvelope::default().timeout_secs
}

fn default_true() -> bool {
    true
}

/// Platform CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Path or name of the `gcloud` executable
    #[serde(default = "default_gcloud")]
    pub gcloud: String,

    #[serde(default = "default_apis")]
    pub apis: Vec<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            gcloud: default_gcloud(),
            apis: default_apis(),
        }
    }
}

fn default_gcloud() -> String {
    "gcloud".to_string()
}

fn default_apis() -> Vec<String> {
    DEFAULT_APIS.iter().map(|s| s.to_string()).collect()
}

/// Values forwarded to the deployed backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_ai_model")]
    pub ai_model: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            ai_model: default_ai_model(),
        }
    }
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

fn default_ai_model() -> String {
    DEFAULT_AI_MODEL.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALID_VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RuncastResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RuncastResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Build the immutable run configuration.
    ///
    /// `project_override` (the CLI positional argument) wins over the
    /// configured project id. Blank placement or image settings are
    /// rejected here, before any gcloud call.
    pub fn to_deploy_config(&self, project_override: Option<&str>) -> RuncastResult<DeployConfig> {
        let raw = project_override.unwrap_or(&self.project.id);
        let project =
            ProjectId::parse(raw).map_err(|reason| RuncastError::InvalidProjectId {
                value: raw.to_string(),
                reason,
            })?;

        for (key, value) in [
            ("project.region", &self.project.region),
            ("service.name", &self.service.name),
            ("build.registry", &self.build.registry),
            ("build.image", &self.build.image),
        ] {
            if value.trim().is_empty() {
                return Err(RuncastError::InvalidSetting {
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        let config = DeployConfig::new(project)
            .with_region(self.project.region.as_str())
            .with_service_name(self.service.name.as_str())
            .with_image(self.build.registry.as_str(), self.build.image.as_str())
            .with_source_dir(self.build.source.as_str())
            .with_apis(self.platform.apis.clone())
            .with_envelope(self.service.envelope())
            .with_backend(
                self.backend.environment.as_str(),
                self.backend.ai_model.as_str(),
            );

        if config.service_spec().env_delimiter().is_none() {
            return Err(RuncastError::InvalidSetting {
                key: "backend".to_string(),
                message: "values contain every env var delimiter gcloud accepts".to_string(),
            });
        }

        Ok(config)
    }
}
