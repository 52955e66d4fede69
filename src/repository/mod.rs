// file: src/repository/mod.rs
// description: file-backed division repository module exports
// reference: Internal module structure

pub mod inspect;
pub mod layout;
pub mod store;
pub mod translations;

pub use inspect::CorpusInspector;
pub use layout::Layout;
pub use store::FileRepository;
pub use translations::{TranslationCache, TranslationCacheMode};
