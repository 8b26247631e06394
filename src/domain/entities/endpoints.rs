//! ServiceEndpoints entity - public URLs of a deployed backend

use serde::Serialize;

/// Sub-path serving the interactive API docs
pub const DOCS_PATH: &str = "/docs";
/// Sub-path of the unauthenticated AI health check
pub const HEALTH_PATH: &str = "/api/v1/google-ai/health";

/// An HTTP endpoint exposed by the backend (documentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiEndpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

/// Endpoints API clients call on the deployed backend
pub const BACKEND_API: [ApiEndpoint; 4] = [
    ApiEndpoint {
        method: "POST",
        path: "/api/v1/google-ai/generate-text",
        summary: "Text generation",
    },
    ApiEndpoint {
        method: "POST",
        path: "/api/v1/google-ai/generate-music-intro",
        summary: "Radio-style music intro",
    },
    ApiEndpoint {
        method: "POST",
        path: "/api/v1/google-ai/analyze-music-preferences",
        summary: "Listener preference analysis",
    },
    ApiEndpoint {
        method: "GET",
        path: HEALTH_PATH,
        summary: "AI service health check",
    },
];

/// The deployed service URL with its conventional sub-paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEndpoints {
    pub url: String,
    pub docs: String,
    pub health: String,
}

impl ServiceEndpoints {
    pub fn from_url(url: &str) -> Self {
        let base = url.trim().trim_end_matches('/');
        Self {
            url: base.to_string(),
            docs: format!("{}{}", base, DOCS_PATH),
            health: format!("{}{}", base, HEALTH_PATH),
        }
    }

    /// Absolute URL of a backend endpoint
    pub fn resolve(&self, endpoint: &ApiEndpoint) -> String {
        format!("{}{}", self.url, endpoint.path)
    }
}
