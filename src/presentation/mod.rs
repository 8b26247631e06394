//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - clap argument model
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! Rendering lives in the binary's `ui` module.
//!
//! ## Usage
//!
//! ```ignore
//! use runcast::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, RunnerOptions::default());
//! let result = use_case.execute(&deploy_config, &DeclinePrompt);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, DeployArgs};
pub use factory::{
    create_check_use_case, create_client, create_deploy_use_case, create_domain_prompt,
    PromptSource, RunnerOptions,
};
