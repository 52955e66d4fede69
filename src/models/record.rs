// file: src/models/record.rs
// description: untyped division metadata record with dot-path access
// reference: https://docs.rs/serde_json

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One division's metadata as stored in a shard or translation file.
///
/// The repository only relies on `code`, `parent`, `country` and
/// `ids.geonames`; every other field is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }

    pub fn parent(&self) -> Option<&str> {
        self.0.get("parent").and_then(Value::as_str)
    }

    /// Owning country code, carried by city records.
    pub fn country(&self) -> Option<&str> {
        self.0.get("country").and_then(Value::as_str)
    }

    /// Stable external id at `ids.geonames`. String-encoded integers and
    /// whole-valued floats are accepted.
    pub fn geonames_id(&self) -> Option<u64> {
        match self.extract("ids.geonames")? {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Follows a dot-separated path through nested objects.
    ///
    /// Returns `None` at the first missing segment or when a non-object is
    /// reached before the path ends. A JSON null counts as absent.
    pub fn extract(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        if current.is_null() { None } else { Some(current) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_core_fields() {
        let r = record(json!({
            "code": "IDF",
            "parent": "FR",
            "ids": { "geonames": 3012874 }
        }));

        assert_eq!(r.code(), Some("IDF"));
        assert_eq!(r.parent(), Some("FR"));
        assert_eq!(r.geonames_id(), Some(3012874));
        assert_eq!(r.country(), None);
    }

    #[test]
    fn test_string_encoded_geonames_id() {
        let r = record(json!({ "ids": { "geonames": "2017370" } }));
        assert_eq!(r.geonames_id(), Some(2017370));
    }

    #[test]
    fn test_float_encoded_geonames_id() {
        let whole = record(json!({ "ids": { "geonames": 2017370.0 } }));
        let fractional = record(json!({ "ids": { "geonames": 2017370.5 } }));
        let negative = record(json!({ "ids": { "geonames": -1 } }));

        assert_eq!(whole.geonames_id(), Some(2017370));
        assert_eq!(fractional.geonames_id(), None);
        assert_eq!(negative.geonames_id(), None);
    }

    #[test]
    fn test_extract_nested_paths() {
        let r = record(json!({
            "names": { "long": { "default": "Russian Federation" } },
            "area": 17100000,
            "flag": null
        }));

        assert_eq!(
            r.extract("names.long.default"),
            Some(&json!("Russian Federation"))
        );
        assert_eq!(r.extract("area"), Some(&json!(17100000)));
        assert_eq!(r.extract("names.short"), None);
        assert_eq!(r.extract("area.value"), None);
        assert_eq!(r.extract("flag"), None);
        assert_eq!(r.extract("missing.deeper"), None);
    }

    #[test]
    fn test_extract_does_not_modify_record() {
        let r = record(json!({ "ids": { "geonames": 1 } }));
        let before = r.clone();
        let _ = r.extract("ids.iso.alpha2");
        assert_eq!(r, before);
    }
}
