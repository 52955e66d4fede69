// file: src/repository/store.rs
// description: read-only repository over sharded json division files
// reference: https://docs.rs/serde_json

use crate::error::{RepositoryError, Result};
use crate::models::{EntityKind, Identifiable, Record};
use crate::repository::layout::Layout;
use crate::repository::translations::{TranslationCache, TranslationCacheMode};
use crate::utils::PathParams;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub struct FileRepository {
    prefix: PathBuf,
    layout: Arc<Layout>,
    translations: TranslationCache,
}

impl FileRepository {
    pub fn new(prefix: impl Into<PathBuf>, layout: Arc<Layout>) -> Self {
        Self::with_cache_mode(prefix, layout, TranslationCacheMode::default())
    }

    pub fn with_cache_mode(
        prefix: impl Into<PathBuf>,
        layout: Arc<Layout>,
        mode: TranslationCacheMode,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            layout,
            translations: TranslationCache::new(mode),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Affects subsequent lookups only; cached translations are kept.
    pub fn set_prefix(&mut self, prefix: impl Into<PathBuf>) {
        self.prefix = prefix.into();
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn translation_cache(&self) -> &TranslationCache {
        &self.translations
    }

    pub fn resolve_path(&self, kind: EntityKind, params: &PathParams) -> Result<PathBuf> {
        self.layout.resolve_path(kind, &self.prefix, params)
    }

    /// Loads the shard for `kind`. A missing shard is normal for divisions
    /// without sub-data and yields an empty list.
    pub fn get_data(&self, kind: EntityKind, params: &PathParams) -> Result<Vec<Record>> {
        let path = self.resolve_path(kind, params)?;

        let mut records: Vec<Record> = match load_json(&path) {
            Ok(records) => records,
            Err(RepositoryError::FileNotFound { path }) => {
                debug!("No shard at {}, returning empty set", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        // State-level loads are narrowed to the requested country. No other
        // kind is filtered: city shards are already scoped by their path.
        if kind == EntityKind::State
            && let Some(code) = params.get("code")
        {
            let before = records.len();
            records.retain(|record| record.parent() == Some(code));
            debug!(
                "Filtered {} of {} records not belonging to {}",
                before - records.len(),
                before,
                code
            );
        }

        Ok(records)
    }

    pub fn index_search(&self, id: u64, kind: EntityKind) -> Result<Record> {
        Self::index_search_in(&self.layout, id, kind, &self.prefix)
    }

    /// Finds a division by its geonames id through the kind's index file.
    ///
    /// Both the index and the shard it points to must exist. An id missing
    /// from the index and an id missing from its shard fail differently.
    pub fn index_search_in(
        layout: &Layout,
        id: u64,
        kind: EntityKind,
        prefix: &Path,
    ) -> Result<Record> {
        let index_path = layout.resolve_index(kind, prefix)?;
        let index: HashMap<String, String> = load_json(&index_path)?;

        let shard_key = index
            .get(&id.to_string())
            .ok_or(RepositoryError::ObjectNotFound { id })?;

        let placeholder = if kind == EntityKind::State {
            "parentCode"
        } else {
            "code"
        };
        let params = PathParams::new().with(placeholder, shard_key.as_str());
        let shard_path = layout.resolve_path(kind, prefix, &params)?;

        debug!(
            "Index hit for #{} -> {} ({})",
            id,
            shard_key,
            shard_path.display()
        );

        let members: Vec<Record> = load_json(&shard_path)?;

        members
            .into_iter()
            .find(|member| member.geonames_id() == Some(id))
            .ok_or(RepositoryError::MissingMeta { id })
    }

    /// Translated record for `subject`, or `None` when the loaded translation
    /// set has no entry for its code.
    pub fn get_translations<E>(&mut self, subject: &E, language: &str) -> Result<Option<&Record>>
    where
        E: Identifiable + ?Sized,
    {
        let kind = subject.kind();
        let key = kind.key();

        // Once anything is cached, first-load-only never touches the disk
        // again, so the source path is not needed.
        let may_load = match self.translations.mode() {
            TranslationCacheMode::PerSource => true,
            TranslationCacheMode::FirstLoadOnly => self.translations.is_empty(),
        };

        if may_load {
            let path = self.layout.resolve_translation(
                kind,
                &self.prefix,
                language,
                subject.country_code(),
            )?;

            if self.translations.needs_load(&path) {
                let records: Vec<Record> = load_json(&path)?;
                let stored = self.translations.insert_all(&path, key, language, records);
                info!(
                    "Loaded {} {} translations for '{}' from {}",
                    stored,
                    key,
                    language,
                    path.display()
                );
            }
        }

        Ok(subject
            .code()
            .and_then(|code| self.translations.get(key, language, code)))
    }
}

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RepositoryError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => RepositoryError::FileOperation {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&contents).map_err(|source| RepositoryError::DataCorruption {
        path: path.to_path_buf(),
        source,
    })
}
