//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod domain_prompt;
pub mod platform_client;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use domain_prompt::{DeclinePrompt, DomainPrompt, FixedDomainPrompt, PromptError};
pub use platform_client::{PlatformClient, PlatformDiagnostics, PlatformError};
