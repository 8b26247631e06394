//! Deploy Module
//!
//! Orchestrates the deployment pipeline for Runcast.
//!
//! ## Structure
//!
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Pipeline sequencing (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use runcast::application::deploy::DeployUseCase;
//! use runcast::domain::ports::DeclinePrompt;
//!
//! let use_case = DeployUseCase::new(platform);
//! let result = use_case.execute(&config, &DeclinePrompt)?;
//! ```

mod result;
mod use_case;

pub use result::DeployResult;
pub use use_case::DeployUseCase;
