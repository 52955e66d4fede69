// file: src/repository/translations.rs
// description: per-repository cache of localized division records
// reference: in-memory metadata cache patterns

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// When the cache goes back to disk for another translation file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationCacheMode {
    /// Every distinct translation file is loaded once, on first use.
    #[default]
    PerSource,
    /// Only the first file is ever loaded; later requests reuse it even for
    /// other kinds or languages. Kept for parity with older deployments.
    FirstLoadOnly,
}

type CodeMap = HashMap<String, Record>;

/// kind key -> language -> division code -> translated record
#[derive(Debug, Default)]
pub struct TranslationCache {
    mode: TranslationCacheMode,
    entries: HashMap<String, HashMap<String, CodeMap>>,
    loaded: HashSet<PathBuf>,
    loads: usize,
}

impl TranslationCache {
    pub fn new(mode: TranslationCacheMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> TranslationCacheMode {
        self.mode
    }

    pub fn needs_load(&self, source: &Path) -> bool {
        match self.mode {
            TranslationCacheMode::PerSource => !self.loaded.contains(source),
            TranslationCacheMode::FirstLoadOnly => self.entries.is_empty(),
        }
    }

    /// Stores every record under its `code`; records without one are skipped.
    /// A file with no coded records leaves the cache empty. Returns how many
    /// were cached.
    pub fn insert_all(
        &mut self,
        source: &Path,
        key: &str,
        language: &str,
        records: Vec<Record>,
    ) -> usize {
        let coded: Vec<(String, Record)> = records
            .into_iter()
            .filter_map(|record| record.code().map(str::to_string).map(|code| (code, record)))
            .collect();
        let stored = coded.len();

        if stored > 0 {
            self.entries
                .entry(key.to_string())
                .or_default()
                .entry(language.to_string())
                .or_default()
                .extend(coded);
        }

        self.loaded.insert(source.to_path_buf());
        self.loads += 1;
        stored
    }

    pub fn get(&self, key: &str, language: &str, code: &str) -> Option<&Record> {
        self.entries.get(key)?.get(language)?.get(code)
    }

    /// Number of translation files read into this cache so far.
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
