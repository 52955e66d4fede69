// file: src/models/division.rs
// description: division entity wrapper with statically registered field access
// reference: internal data structures

use crate::error::{RepositoryError, Result};
use crate::models::{EntityKind, Record};
use crate::repository::FileRepository;
use serde_json::{Map, Value};

/// What the repository needs from an entity to build translation lookups.
pub trait Identifiable {
    fn kind(&self) -> EntityKind;

    fn meta(&self) -> &Record;

    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Owning country, read from the entity's own metadata.
    fn country_code(&self) -> Option<&str> {
        self.meta().country()
    }
}

/// Exposed field name to dot path inside the record.
pub type FieldTable = &'static [(&'static str, &'static str)];

const PLANET_FIELDS: FieldTable = &[("code", "code"), ("geonamesCode", "ids.geonames")];

const COUNTRY_FIELDS: FieldTable = &[
    ("code", "code"),
    ("code3", "code3"),
    ("geonamesCode", "ids.geonames"),
    ("isoCode", "ids.iso_3166"),
    ("currency", "currency"),
    ("phonePrefix", "phone"),
    ("area", "area"),
    ("population", "population"),
    ("continent", "continent"),
];

const STATE_FIELDS: FieldTable = &[
    ("code", "code"),
    ("isoCode", "iso"),
    ("geonamesCode", "ids.geonames"),
    ("parent", "parent"),
    ("timezone", "timezone"),
];

const CITY_FIELDS: FieldTable = &[
    ("code", "code"),
    ("geonamesCode", "ids.geonames"),
    ("country", "country"),
    ("latitude", "lat"),
    ("longitude", "lng"),
    ("population", "population"),
];

pub fn exposed_fields(kind: EntityKind) -> FieldTable {
    match kind {
        EntityKind::Planet => PLANET_FIELDS,
        EntityKind::Country => COUNTRY_FIELDS,
        EntityKind::State => STATE_FIELDS,
        EntityKind::City => CITY_FIELDS,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    kind: EntityKind,
    meta: Record,
}

impl Division {
    pub fn new(kind: EntityKind, meta: Record) -> Self {
        Self { kind, meta }
    }

    pub fn name(&self) -> Option<&str> {
        self.meta.get("name").and_then(Value::as_str)
    }

    /// Value of an exposed field, `Ok(None)` when the record lacks it.
    pub fn get(&self, field: &str) -> Result<Option<&Value>> {
        let path = exposed_fields(self.kind)
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, path)| *path)
            .ok_or_else(|| RepositoryError::UnknownField(field.to_string()))?;

        Ok(self.meta.extract(path))
    }

    /// `name` plus every exposed field; absent values become null.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "name".to_string(),
            self.name().map(Value::from).unwrap_or(Value::Null),
        );

        for (field, path) in exposed_fields(self.kind) {
            let value = self.meta.extract(path).cloned().unwrap_or(Value::Null);
            map.insert(field.to_string(), value);
        }

        map
    }

    /// Localized name when a translation exists, otherwise the base name.
    pub fn translated_name(
        &self,
        repository: &mut FileRepository,
        language: &str,
    ) -> Result<Option<String>> {
        let translated = repository
            .get_translations(self, language)?
            .and_then(|record| record.get("name").and_then(Value::as_str).map(str::to_string));

        Ok(translated.or_else(|| self.name().map(str::to_string)))
    }
}

impl Identifiable for Division {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn meta(&self) -> &Record {
        &self.meta
    }
}
