//! Check Use Case
//!
//! Read-only probes that tell an operator whether a deploy can work:
//! CLI installed, session active, project reachable. Later probes are
//! skipped when an earlier one makes them meaningless.

use crate::domain::ports::{PlatformClient, PlatformDiagnostics};
use crate::domain::value_objects::ProjectId;

/// Where to get the platform CLI
pub const INSTALL_URL: &str = "https://cloud.google.com/sdk/docs/install";

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    /// Not run because a prerequisite failed
    Skipped,
}

/// Result of a single probe
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: &'static str,
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
}

impl CheckItem {
    fn pass(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Pass,
            message: message.into(),
            recommendation: None,
        }
    }

    fn fail(name: &'static str, message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Fail,
            message: message.into(),
            recommendation: Some(fix.into()),
        }
    }

    fn skipped(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Skipped,
            message: reason.into(),
            recommendation: None,
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
}

impl CheckResult {
    /// Every probe ran and passed
    pub fn is_success(&self) -> bool {
        self.items.iter().all(|i| i.status == CheckStatus::Pass)
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }
}

pub struct CheckUseCase<P> {
    platform: P,
}

impl<P> CheckUseCase<P>
where
    P: PlatformClient + PlatformDiagnostics,
{
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn execute(&self, project: &ProjectId) -> CheckResult {
        let mut result = CheckResult::default();

        match self.platform.cli_version() {
            Ok(version) => result.items.push(CheckItem::pass("gcloud", version)),
            Err(e) => {
                let fix = if e.is_not_installed() {
                    format!("Install the Google Cloud CLI: {}", INSTALL_URL)
                } else {
                    "Reinstall or update the Google Cloud CLI".to_string()
                };
                result.items.push(CheckItem::fail("gcloud", e.to_string(), fix));
                result
                    .items
                    .push(CheckItem::skipped("account", "gcloud is not available"));
                result
                    .items
                    .push(CheckItem::skipped("project", "gcloud is not available"));
                return result;
            }
        }

        let authenticated = match self.platform.active_account() {
            Ok(Some(account)) => {
                result.items.push(CheckItem::pass("account", account));
                true
            }
            Ok(None) => {
                result.items.push(CheckItem::fail(
                    "account",
                    "no active account",
                    "Run `gcloud auth login` (and `gcloud auth application-default login` for local development)",
                ));
                false
            }
            Err(e) => {
                result.items.push(CheckItem::fail(
                    "account",
                    e.to_string(),
                    "Run `gcloud auth login`",
                ));
                false
            }
        };

        if !authenticated {
            result
                .items
                .push(CheckItem::skipped("project", "requires an active account"));
            return result;
        }

        match self.platform.project_exists(project) {
            Ok(true) => result
                .items
                .push(CheckItem::pass("project", format!("{} is reachable", project))),
            Ok(false) => result.items.push(CheckItem::fail(
                "project",
                format!("{} was not found or is not visible", project),
                format!("Create it with `gcloud projects create {}` or check access", project),
            )),
            Err(e) => result.items.push(CheckItem::fail(
                "project",
                e.to_string(),
                "Check network access and permissions",
            )),
        }

        result
    }
}
