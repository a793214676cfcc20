//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod path;
pub mod plan;
pub mod planner;
pub mod pod;
pub mod validate;

pub use command::RuntimeCommand;
pub use config::{AppConfig, RawAppConfig, app_config_path};
pub use error::{ConfigError, LookupError, PlanProblem, ValidationError};
pub use path::build_path;
pub use plan::{Action, Phase, Plan, PlanOptions, PlanStep};
pub use pod::{ContainerSpec, PodConfig, PodSpec, RawPodConfig, VolumeMapping};
