//! Configuration module for Runcast
//!
//! Configuration hierarchy:
//! 1. CLI flags and the positional project id (highest priority)
//! 2. Environment variables (RUNCAST_*)
//! 3. `--config <FILE>` or `./runcast.toml`
//! 4. User config (`<config dir>/runcast/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    resolve, user_config_path, with_env_overrides, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    BackendConfig, BuildConfig, ColorMode, Config, OutputConfig, PlatformConfig, ProjectConfig,
    ServiceConfig,
};
