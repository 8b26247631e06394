//! ServiceSpec entity - what gets deployed to the managed service

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ImageTag;

/// Resource and scaling bounds for the deployed service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEnvelope {
    /// Port the container listens on
    pub port: u16,
    pub memory: String,
    pub cpu: String,
    /// Max concurrent requests per instance
    pub concurrency: u32,
    pub min_instances: u32,
    pub max_instances: u32,
    /// Request timeout, passed through to the platform
    pub timeout_secs: u32,
    /// Public access without IAM
    pub allow_unauthenticated: bool,
}

impl Default for ServiceEnvelope {
    fn default() -> Self {
        Self {
            port: 8000,
            memory: "2Gi".to_string(),
            cpu: "2".to_string(),
            concurrency: 80,
            min_instances: 0,
            max_instances: 10,
            timeout_secs: 300,
            allow_unauthenticated: true,
        }
    }
}

/// A deploy request: image, placement, envelope and backend env vars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: String,
    pub image: ImageTag,
    pub region: String,
    pub envelope: ServiceEnvelope,
    pub env: Vec<(String, String)>,
}

/// Separators tried when a value already contains a comma
const ALTERNATE_DELIMITERS: [char; 8] = ['@', '|', ';', '#', '~', '%', '!', '*'];

impl ServiceSpec {
    /// Separator between `KEY=VALUE` pairs: `,` unless some pair contains
    /// one, then the first alternate found in no pair.
    ///
    /// `None` when every candidate occurs somewhere in the env.
    pub fn env_delimiter(&self) -> Option<char> {
        let used = |d: char| self.env.iter().any(|(k, v)| k.contains(d) || v.contains(d));
        if !used(',') {
            return Some(',');
        }
        ALTERNATE_DELIMITERS.into_iter().find(|d| !used(*d))
    }

    /// Env vars for `--set-env-vars`.
    ///
    /// Plain `KEY=VALUE,KEY=VALUE` when no value has a comma, otherwise
    /// gcloud's escaped form `^D^KEY=VALUE DKEY=VALUE` with `D` from
    /// [`Self::env_delimiter`].
    pub fn env_list(&self) -> String {
        let delimiter = self.env_delimiter().unwrap_or(',');
        let joined = self
            .env
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());

        if delimiter == ',' {
            joined
        } else {
            format!("^{}^{}", delimiter, joined)
        }
    }
}
