//! Shared JSON event types for consistent CLI output.
//!
//! Deploy progress events come from the library's `JsonEventSink`; these
//! cover command lifecycle and the non-deploy commands.

use serde::Serialize;

use runcast::application::{CheckItem, CheckStatus};
use runcast::domain::entities::{ApiEndpoint, ServiceEndpoints};
use runcast::DeployStep;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<DeployStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            exit_code: 1,
            step: None,
            stderr: None,
            help: None,
        }
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn with_step(mut self, step: Option<DeployStep>) -> Self {
        self.step = step;
        self
    }

    pub fn with_stderr(mut self, stderr: Option<&str>) -> Self {
        self.stderr = stderr.map(|s| s.trim_end().to_string());
        self
    }

    pub fn with_help(mut self, help: Option<String>) -> Self {
        self.help = help;
        self
    }
}

/// One probe of `runcast check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub name: &'a str,
    pub status: &'static str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'a str>,
}

impl<'a> CheckEvent<'a> {
    pub fn new(item: &'a CheckItem) -> Self {
        Self {
            event: "check",
            command: "check",
            name: item.name,
            status: match item.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Fail => "fail",
                CheckStatus::Skipped => "skipped",
            },
            message: &item.message,
            recommendation: item.recommendation.as_deref(),
        }
    }
}

/// Resolved service endpoints, emitted by `runcast url`.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointsEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub service: &'a str,
    #[serde(flatten)]
    pub endpoints: &'a ServiceEndpoints,
    pub api: Vec<ApiEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiEntry<'a> {
    pub method: &'static str,
    pub url: String,
    pub summary: &'a str,
}

impl<'a> EndpointsEvent<'a> {
    pub fn new(service: &'a str, endpoints: &'a ServiceEndpoints, api: &'a [ApiEndpoint]) -> Self {
        Self {
            event: "endpoints",
            command: "url",
            service,
            endpoints,
            api: api
                .iter()
                .map(|e| ApiEntry {
                    method: e.method,
                    url: endpoints.resolve(e),
                    summary: e.summary,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runcast::domain::entities::BACKEND_API;

    #[test]
    fn start_event_serializes_correctly() {
        let json = serde_json::to_value(StartEvent::new("deploy")).unwrap();

        assert_eq!(json["event"], "start");
        assert_eq!(json["command"], "deploy");
        assert!(json["version"].is_string());
    }

    #[test]
    fn error_event_includes_step_and_exit_code() {
        let event = ErrorEvent::new("deploy", "step_failed", "Building image failed")
            .with_exit_code(3)
            .with_step(Some(DeployStep::BuildImage));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "error");
        assert_eq!(json["exit_code"], 3);
        assert_eq!(json["step"], "build_image");
        assert!(json.get("help").is_none());
    }

    #[test]
    fn endpoints_event_flattens_urls() {
        let endpoints = ServiceEndpoints::from_url("https://x.run.app");
        let event = EndpointsEvent::new("sw-music-api", &endpoints, &BACKEND_API);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["docs"], "https://x.run.app/docs");
        assert_eq!(json["api"].as_array().unwrap().len(), 4);
        assert_eq!(json["api"][3]["method"], "GET");
    }

    #[test]
    fn check_event_uses_lowercase_status() {
        let item = CheckItem {
            name: "gcloud",
            status: CheckStatus::Skipped,
            message: "n/a".to_string(),
            recommendation: None,
        };
        let json = serde_json::to_value(CheckEvent::new(&item)).unwrap();
        assert_eq!(json["status"], "skipped");
    }
}
