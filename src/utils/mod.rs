// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod patterns;
pub mod telemetry;
pub mod template;
pub mod validation;

pub use telemetry::{HealthCheck, HealthReport, HealthStatus, OperationTimer};
pub use template::{PathParams, PathTemplate};
pub use validation::Validator;
