//! gcloud CLI adapter
//!
//! - `command` - argument lists and the process runner
//! - `commands` - one builder per gcloud call
//! - `client` - `PlatformClient` / `PlatformDiagnostics` implementation
//! - `plan` - the full command sequence for `--dry-run`

pub mod client;
pub mod command;
pub mod commands;
mod plan;

pub use client::{GcloudClient, GCLOUD};
pub use command::{
    shell_quote, CommandOutput, CommandRunner, GcloudCommand, OutputMode, ProcessRunner,
};
pub use plan::{deploy_plan, PlannedCommand};
