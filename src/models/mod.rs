// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod division;
pub mod kind;
pub mod record;

pub use division::{Division, FieldTable, Identifiable, exposed_fields};
pub use kind::EntityKind;
pub use record::Record;
