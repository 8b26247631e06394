//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT spawn processes or read the terminal itself
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs the seven-step deployment pipeline
//! - `CheckUseCase` - Probes CLI, session and project before a deploy

pub mod check;
pub mod deploy;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase, INSTALL_URL};
pub use deploy::{DeployResult, DeployUseCase};
