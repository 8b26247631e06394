//! Domain Layer
//!
//! Pure deployment concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - DeployConfig, ServiceSpec, ServiceEndpoints, DomainMapping
//! - `value_objects/` - ProjectId, ImageTag, DomainName, DeployStep
//! - `ports/` - Interfaces the infrastructure layer implements
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or reads the terminal
//! 2. **Ports & Adapters** - All platform calls and operator input go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
