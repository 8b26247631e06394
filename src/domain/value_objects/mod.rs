//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod deploy_step;
mod domain_name;
mod image_tag;
mod project_id;

pub use config_warning::ConfigWarning;
pub use deploy_step::DeployStep;
pub use domain_name::{DomainName, DomainNameError};
pub use image_tag::ImageTag;
pub use project_id::{ProjectId, ProjectIdError};
