//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `gcloud/` - `PlatformClient` over the gcloud CLI
//! - `prompt/` - `DomainPrompt` implementations (terminal, piped stdin)
//! - `events/` - `DeployEventSink` implementations

pub mod events;
pub mod gcloud;
pub mod prompt;

// Re-export for convenience
pub use events::JsonEventSink;
pub use gcloud::{GcloudClient, ProcessRunner, GCLOUD};
pub use prompt::{LinePrompt, TerminalPrompt};
