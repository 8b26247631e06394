//! Tests for the config module

use super::loader::{self, with_env_overrides_from};
use super::types::*;
use crate::error::RuncastError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.project.id, "sw-musicfasapi");
    assert_eq!(config.project.region, "us-central1");
    assert_eq!(config.service.name, "sw-music-api");
    assert_eq!(config.build.registry, "gcr.io");
    assert_eq!(config.platform.gcloud, "gcloud");
    assert_eq!(config.platform.apis.len(), 4);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[project]
id = "demo-proj"
region = "europe-west1"

[build]
registry = "registry"
image = "backend-image"

[service]
memory = "1Gi"
max_instances = 3

[backend]
ai_model = "gemini-1.5-flash"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.project.id, "demo-proj");
    assert_eq!(config.project.region, "europe-west1");
    assert_eq!(config.service.memory, "1Gi");
    assert_eq!(config.service.max_instances, 3);
    // Unset keys keep their defaults
    assert_eq!(config.service.port, 8000);
    assert_eq!(config.build.source, "./backend");
    assert_eq!(config.backend.environment, "production");
}

#[test]
fn test_to_deploy_config_uses_override() {
    let config = Config::default();
    let deploy = config.to_deploy_config(Some("demo-proj")).unwrap();

    assert_eq!(deploy.project().as_str(), "demo-proj");
    assert_eq!(deploy.image().as_str(), "gcr.io/demo-proj/sw-music-backend");
    assert_eq!(deploy.region(), "us-central1");
}

#[test]
fn test_to_deploy_config_defaults_project() {
    let deploy = Config::default().to_deploy_config(None).unwrap();
    assert_eq!(deploy.project().as_str(), "sw-musicfasapi");
}

#[test]
fn test_to_deploy_config_rejects_invalid_project() {
    let err = Config::default().to_deploy_config(Some("Bad_Project")).unwrap_err();
    assert!(matches!(err, RuncastError::InvalidProjectId { ref value, .. } if value == "Bad_Project"));
}

#[test]
fn test_to_deploy_config_rejects_blank_region() {
    let mut config = Config::default();
    config.project.region = "  ".to_string();

    let err = config.to_deploy_config(None).unwrap_err();
    assert!(matches!(err, RuncastError::InvalidSetting { ref key, .. } if key == "project.region"));
    assert_eq!(err.code(), "invalid_config");
}

#[test]
fn test_to_deploy_config_rejects_blank_service_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("runcast.toml");
    fs::write(&path, "[service]\nname = \"\"\n").unwrap();

    let err = Config::load(&path).unwrap().to_deploy_config(None).unwrap_err();
    assert_eq!(err.to_string(), "invalid config: service.name must not be empty");
}

#[test]
fn test_to_deploy_config_accepts_comma_in_backend_values() {
    let mut config = Config::default();
    config.backend.environment = "prod,eu".to_string();

    let deploy = config.to_deploy_config(None).unwrap();
    assert_eq!(deploy.service_spec().env_delimiter(), Some('@'));
}

#[test]
fn test_to_deploy_config_accepts_domain_scoped_project() {
    let deploy = Config::default()
        .to_deploy_config(Some("example.com:my-proj"))
        .unwrap();
    assert_eq!(deploy.image().as_str(), "gcr.io/example.com/my-proj/sw-music-backend");
}

#[test]
fn test_to_deploy_config_carries_envelope() {
    let mut config = Config::default();
    config.service.concurrency = 10;
    config.service.allow_unauthenticated = false;

    let deploy = config.to_deploy_config(None).unwrap();
    assert_eq!(deploy.envelope().concurrency, 10);
    assert!(!deploy.envelope().allow_unauthenticated);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("runcast.toml");
    fs::write(
        &path,
        "[service]\nname = \"api\"\nmemroy = \"4Gi\"\n\n[extra]\nfoo = 1\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.service.name, "api");
    assert_eq!(warnings.len(), 2);

    let typo = warnings.iter().find(|w| w.key == "memroy").unwrap();
    assert_eq!(typo.line, Some(3));
    assert_eq!(typo.suggestion.as_deref(), Some("memory"));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("runcast.toml");
    fs::write(&path, "[service\nname = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, RuncastError::InvalidConfig { .. }));
}

#[test]
fn test_resolve_prefers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("runcast.toml"),
        "[project]\nregion = \"asia-east1\"\n",
    )
    .unwrap();

    let loaded = loader::resolve(None, dir.path()).unwrap();
    assert_eq!(loaded.source, Some(dir.path().join("runcast.toml")));
    assert_eq!(loaded.config.project.region, "asia-east1");
}

#[test]
fn test_resolve_explicit_missing_file_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(loader::resolve(Some(&missing), dir.path()).is_err());
}

#[test]
fn test_env_overrides_apply() {
    let mut out = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("RUNCAST_PROJECT", "demo-proj"),
            ("RUNCAST_REGION", "europe-west4"),
            ("RUNCAST_SERVICE", "radio-api"),
            ("RUNCAST_AI_MODEL", "gemini-1.5-pro"),
            ("RUNCAST_GCLOUD", "/opt/google-cloud-sdk/bin/gcloud"),
            ("RUNCAST_COLOR", "never"),
        ]),
        &mut out,
    );

    assert_eq!(config.project.id, "demo-proj");
    assert_eq!(config.project.region, "europe-west4");
    assert_eq!(config.service.name, "radio-api");
    assert_eq!(config.backend.ai_model, "gemini-1.5-pro");
    assert_eq!(config.platform.gcloud, "/opt/google-cloud-sdk/bin/gcloud");
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(out.is_empty());
}

#[test]
fn test_env_overrides_ignore_blank_values() {
    let mut out = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("RUNCAST_PROJECT", "  "), ("RUNCAST_REGION", "")]),
        &mut out,
    );

    assert_eq!(config.project.id, "sw-musicfasapi");
    assert_eq!(config.project.region, "us-central1");
}

#[test]
fn test_env_override_invalid_color_warns() {
    let mut out = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("RUNCAST_COLOR", "nevr")]),
        &mut out,
    );

    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(String::from_utf8(out).unwrap().contains("Did you mean 'never'?"));
}
