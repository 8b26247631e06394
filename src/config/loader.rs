//! Configuration loading
//!
//! Lookup order (first hit wins, env overrides applied on top):
//! 1. Explicit `--config <FILE>`
//! 2. `./runcast.toml`
//! 3. `<config dir>/runcast/config.toml`
//! 4. Built-in defaults

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RuncastError, RuncastResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{ColorMode, Config};

pub use crate::domain::value_objects::ConfigWarning;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "runcast.toml";

/// A resolved configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RuncastResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RuncastError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a run started in `cwd`.
///
/// An explicit path must exist; the implicit locations are optional.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> RuncastResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings) = match &candidate {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: candidate,
        warnings,
    })
}

/// `<config dir>/runcast/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("runcast").join("config.toml"))
}

/// Apply environment variable overrides (RUNCAST_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

pub(crate) fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(project) = non_empty("RUNCAST_PROJECT") {
        config.project.id = project.trim().to_string();
    }

    if let Some(region) = non_empty("RUNCAST_REGION") {
        config.project.region = region.trim().to_string();
    }

    if let Some(service) = non_empty("RUNCAST_SERVICE") {
        config.service.name = service.trim().to_string();
    }

    if let Some(model) = non_empty("RUNCAST_AI_MODEL") {
        config.backend.ai_model = model.trim().to_string();
    }

    if let Some(gcloud) = non_empty("RUNCAST_GCLOUD") {
        config.platform.gcloud = gcloud;
    }

    if let Some(color) = get_env("RUNCAST_COLOR") {
        let validator = EnvVarValidator::new("RUNCAST_COLOR", ColorMode::VALID_VALUES);
        config.output.color =
            validator.parse_with_writer(&color, ColorMode::parse, config.output.color, warnings);
    }

    config
}

const KNOWN_KEYS: &[&str] = &[
    "project",
    "id",
    "region",
    "build",
    "registry",
    "image",
    "source",
    "service",
    "name",
    "port",
    "memory",
    "cpu",
    "concurrency",
    "min_instances",
    "max_instances",
    "timeout_secs",
    "allow_unauthenticated",
    "platform",
    "gcloud",
    "apis",
    "backend",
    "environment",
    "ai_model",
    "output",
    "color",
    "unicode",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
