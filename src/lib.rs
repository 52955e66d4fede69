// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod utils;

pub use config::{Config, LoggingConfig, StoreConfig};
pub use error::{RepositoryError, Result};
pub use models::{Division, EntityKind, Identifiable, Record};
pub use repository::{
    CorpusInspector, FileRepository, Layout, TranslationCache, TranslationCacheMode,
};
pub use utils::{
    HealthCheck, HealthReport, HealthStatus, OperationTimer, PathParams, PathTemplate, Validator,
};
