// file: src/utils/template.rs
// description: Shard path templates with named placeholder substitution
// reference: Internal layout conventions

use std::collections::BTreeMap;
use std::fmt;

/// Substitution values for a [`PathTemplate`], keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: BTreeMap<String, String>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Relative path with `{name}` placeholders, e.g. `states/{code}.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    template: String,
}

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Single left-to-right pass. Placeholders without a value stay literal and
    /// substituted values are never scanned again.
    pub fn render(&self, params: &PathParams) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match params.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    result.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        result.push_str(rest);
        result
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
