//! DeployConfig entity - everything one deployment run needs
//!
//! Built once at startup from defaults, config files, environment and the
//! CLI argument. Immutable afterwards: the pipeline only reads it.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ImageTag, ProjectId};

use super::service_spec::{ServiceEnvelope, ServiceSpec};

/// Registry prefix images are pushed to
pub const DEFAULT_REGISTRY: &str = "gcr.io";
/// Base name of the backend image
pub const DEFAULT_IMAGE_NAME: &str = "sw-music-backend";
/// Default region for every regional step
pub const DEFAULT_REGION: &str = "us-central1";
/// Default Cloud Run service name
pub const DEFAULT_SERVICE_NAME: &str = "sw-music-api";
/// Project used when none is supplied
pub const DEFAULT_PROJECT_ID: &str = "sw-musicfasapi";
/// Directory packaged by the build
pub const DEFAULT_SOURCE_DIR: &str = "./backend";
/// Model id forwarded to the backend
pub const DEFAULT_AI_MODEL: &str = "gemini-pro";
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Platform services the backend depends on
pub const DEFAULT_APIS: [&str; 4] = [
    "cloudbuild.googleapis.com",
    "run.googleapis.com",
    "containerregistry.googleapis.com",
    "aiplatform.googleapis.com",
];

/// Immutable configuration for a single deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    project: ProjectId,
    region: String,
    service_name: String,
    registry: String,
    image_name: String,
    image: ImageTag,
    source_dir: PathBuf,
    apis: Vec<String>,
    envelope: ServiceEnvelope,
    environment: String,
    ai_model: String,
}

impl DeployConfig {
    /// Create a config with built-in defaults for everything but the project
    pub fn new(project: ProjectId) -> Self {
        let image = ImageTag::derive(DEFAULT_REGISTRY, &project, DEFAULT_IMAGE_NAME);
        Self {
            project,
            region: DEFAULT_REGION.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            registry: DEFAULT_REGISTRY.to_string(),
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            image,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            apis: DEFAULT_APIS.iter().map(|s| s.to_string()).collect(),
            envelope: ServiceEnvelope::default(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Set registry and image base name; the tag is re-derived.
    pub fn with_image(mut self, registry: impl Into<String>, image_name: impl Into<String>) -> Self {
        self.registry = registry.into();
        self.image_name = image_name.into();
        self.image = ImageTag::derive(&self.registry, &self.project, &self.image_name);
        self
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_apis(mut self, apis: Vec<String>) -> Self {
        self.apis = apis;
        self
    }

    pub fn with_envelope(mut self, envelope: ServiceEnvelope) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn with_backend(mut self, environment: impl Into<String>, ai_model: impl Into<String>) -> Self {
        self.environment = environment.into();
        self.ai_model = ai_model.into();
        self
    }

    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn image(&self) -> &ImageTag {
        &self.image
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn apis(&self) -> &[String] {
        &self.apis
    }

    pub fn envelope(&self) -> &ServiceEnvelope {
        &self.envelope
    }

    pub fn ai_model(&self) -> &str {
        &self.ai_model
    }

    /// Environment variables handed to the deployed backend, in a stable order.
    pub fn backend_env(&self) -> Vec<(String, String)> {
        vec![
            ("ENVIRONMENT".to_string(), self.environment.clone()),
            ("GOOGLE_CLOUD_PROJECT".to_string(), self.project.to_string()),
            ("GOOGLE_CLOUD_LOCATION".to_string(), self.region.clone()),
            ("VERTEX_AI_MODEL".to_string(), self.ai_model.clone()),
        ]
    }

    /// The deploy request for the managed service
    pub fn service_spec(&self) -> ServiceSpec {
        ServiceSpec {
            name: self.service_name.clone(),
            image: self.image.clone(),
            region: self.region.clone(),
            envelope: self.envelope.clone(),
            env: self.backend_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> DeployConfig {
        DeployConfig::new(ProjectId::parse("demo-proj").unwrap())
    }

    #[test]
    fn default_image_is_derived_from_project() {
        assert_eq!(demo().image().as_str(), "gcr.io/demo-proj/sw-music-backend");
    }

    #[test]
    fn with_image_rederives_tag() {
        let config = demo().with_image("registry", "backend-image");
        assert_eq!(config.image().as_str(), "registry/demo-proj/backend-image");
    }

    #[test]
    fn backend_env_carries_project_region_and_model() {
        let config = demo().with_region("europe-west1");
        let env = config.backend_env();
        assert!(env.contains(&("GOOGLE_CLOUD_PROJECT".to_string(), "demo-proj".to_string())));
        assert!(env.contains(&("GOOGLE_CLOUD_LOCATION".to_string(), "europe-west1".to_string())));
        assert!(env.contains(&("VERTEX_AI_MODEL".to_string(), "gemini-pro".to_string())));
        assert_eq!(env[0], ("ENVIRONMENT".to_string(), "production".to_string()));
    }

    #[test]
    fn service_spec_uses_the_run_region() {
        let config = demo().with_region("asia-east1").with_service_name("api");
        let spec = config.service_spec();
        assert_eq!(spec.region, "asia-east1");
        assert_eq!(spec.name, "api");
        assert_eq!(&spec.image, config.image());
    }
}
