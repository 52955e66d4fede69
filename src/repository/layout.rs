// file: src/repository/layout.rs
// description: on-disk corpus layout and shard path resolution
// reference: internal layout conventions

use crate::error::{RepositoryError, Result};
use crate::models::EntityKind;
use crate::utils::{PathParams, PathTemplate};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where each kind's shards, indexes and translations live under the root.
///
/// A kind's shard template names the file holding the divisions one level
/// below it: the planet owns `countries.json`, a country owns its states and
/// a state owns its cities. Cities own nothing and have no template.
#[derive(Debug, Clone)]
pub struct Layout {
    shards: HashMap<EntityKind, PathTemplate>,
    indexes: HashMap<EntityKind, PathBuf>,
    translations_dir: PathBuf,
}

impl Layout {
    pub fn standard() -> Self {
        let shards = HashMap::from([
            (EntityKind::Planet, PathTemplate::new("countries.json")),
            (EntityKind::Country, PathTemplate::new("states/{code}.json")),
            (EntityKind::State, PathTemplate::new("cities/{parentCode}.json")),
        ]);

        let indexes = HashMap::from([
            (EntityKind::Country, PathBuf::from("indexCountry.json")),
            (EntityKind::State, PathBuf::from("indexState.json")),
        ]);

        Self {
            shards,
            indexes,
            translations_dir: PathBuf::from("translations"),
        }
    }

    pub fn empty() -> Self {
        Self {
            shards: HashMap::new(),
            indexes: HashMap::new(),
            translations_dir: PathBuf::from("translations"),
        }
    }

    pub fn with_shard(mut self, kind: EntityKind, template: impl Into<String>) -> Self {
        self.shards.insert(kind, PathTemplate::new(template));
        self
    }

    pub fn shard_template(&self, kind: EntityKind) -> Option<&PathTemplate> {
        self.shards.get(&kind)
    }

    pub fn index_file(&self, kind: EntityKind) -> Option<&Path> {
        self.indexes.get(&kind).map(PathBuf::as_path)
    }

    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// Full shard path for `kind`. Fails without touching the disk when the
    /// kind has no template.
    pub fn resolve_path(
        &self,
        kind: EntityKind,
        prefix: &Path,
        params: &PathParams,
    ) -> Result<PathBuf> {
        let template = self.shard_template(kind).ok_or_else(|| {
            RepositoryError::Misconfiguration(format!("{} is not supposed to load data", kind))
        })?;

        Ok(prefix.join(template.render(params)))
    }

    pub fn resolve_index(&self, kind: EntityKind, prefix: &Path) -> Result<PathBuf> {
        let file = self.index_file(kind).ok_or_else(|| {
            RepositoryError::Misconfiguration(format!("{} has no id index", kind))
        })?;

        Ok(prefix.join(file))
    }

    /// `translations/<kind>/<language>.json`, or
    /// `translations/city/<language>/<country>.json` for cities.
    pub fn resolve_translation(
        &self,
        kind: EntityKind,
        prefix: &Path,
        language: &str,
        country: Option<&str>,
    ) -> Result<PathBuf> {
        let dir = prefix.join(&self.translations_dir).join(kind.key());

        if kind == EntityKind::City {
            let country = country.ok_or_else(|| {
                RepositoryError::Validation(
                    "city translations need the owning country code".to_string(),
                )
            })?;
            Ok(dir.join(language).join(format!("{}.json", country)))
        } else {
            Ok(dir.join(format!("{}.json", language)))
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shard_paths() {
        let layout = Layout::standard();
        let root = Path::new("/data");

        assert_eq!(
            layout
                .resolve_path(EntityKind::Planet, root, &PathParams::new())
                .unwrap(),
            PathBuf::from("/data/countries.json")
        );
        assert_eq!(
            layout
                .resolve_path(
                    EntityKind::Country,
                    root,
                    &PathParams::new().with("code", "FR")
                )
                .unwrap(),
            PathBuf::from("/data/states/FR.json")
        );
        assert_eq!(
            layout
                .resolve_path(
                    EntityKind::State,
                    root,
                    &PathParams::new().with("parentCode", "IDF")
                )
                .unwrap(),
            PathBuf::from("/data/cities/IDF.json")
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let layout = Layout::standard();
        let params = PathParams::new().with("code", "RU").with("parentCode", "MOW");
        let root = Path::new("/srv/geo");

        for kind in [EntityKind::Planet, EntityKind::Country, EntityKind::State] {
            let first = layout.resolve_path(kind, root, &params).unwrap();
            let _ = layout.resolve_path(EntityKind::Planet, root, &PathParams::new());
            let second = layout.resolve_path(kind, root, &params).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_kind_without_template_is_misconfiguration() {
        let err = Layout::standard()
            .resolve_path(EntityKind::City, Path::new("/data"), &PathParams::new())
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Misconfiguration(_)));
        assert!(err.to_string().contains("city is not supposed to load data"));
    }

    #[test]
    fn test_index_paths() {
        let layout = Layout::standard();
        assert_eq!(
            layout
                .resolve_index(EntityKind::State, Path::new("/data"))
                .unwrap(),
            PathBuf::from("/data/indexState.json")
        );
        assert!(matches!(
            layout.resolve_index(EntityKind::Planet, Path::new("/data")),
            Err(RepositoryError::Misconfiguration(_))
        ));
    }

    #[test]
    fn test_translation_paths() {
        let layout = Layout::standard();
        let root = Path::new("/data");

        assert_eq!(
            layout
                .resolve_translation(EntityKind::Country, root, "ru", None)
                .unwrap(),
            PathBuf::from("/data/translations/country/ru.json")
        );
        assert_eq!(
            layout
                .resolve_translation(EntityKind::City, root, "de", Some("FR"))
                .unwrap(),
            PathBuf::from("/data/translations/city/de/FR.json")
        );
        assert!(
            layout
                .resolve_translation(EntityKind::City, root, "de", None)
                .is_err()
        );
    }

    #[test]
    fn test_custom_layout() {
        let layout = Layout::empty().with_shard(EntityKind::City, "districts/{code}.json");
        assert!(
            layout
                .resolve_path(EntityKind::Planet, Path::new("/x"), &PathParams::new())
                .is_err()
        );
        assert_eq!(
            layout
                .resolve_path(
                    EntityKind::City,
                    Path::new("/x"),
                    &PathParams::new().with("code", "LYS")
                )
                .unwrap(),
            PathBuf::from("/x/districts/LYS.json")
        );
    }
}
