// file: src/utils/validation.rs
// description: validation of roots, language codes and path parameters
// reference: input validation patterns

use crate::error::{RepositoryError, Result};
use crate::utils::patterns::{LANGUAGE_CODE, PARAM_NAME, SHARD_KEY};
use crate::utils::template::PathParams;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(RepositoryError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(RepositoryError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_language(language: &str) -> Result<()> {
        if !LANGUAGE_CODE.is_match(language) {
            return Err(RepositoryError::Validation(format!(
                "Invalid language code: {}",
                language
            )));
        }
        Ok(())
    }

    /// Rejects values that would inject placeholders or escape the shard directory.
    pub fn validate_shard_key(value: &str) -> Result<()> {
        if !SHARD_KEY.is_match(value) {
            return Err(RepositoryError::Validation(format!(
                "Invalid shard key: {}",
                value
            )));
        }
        Ok(())
    }

    /// Parses `key=value` into a checked parameter pair.
    pub fn parse_param(raw: &str) -> Result<(String, String)> {
        let (key, value) = raw.split_once('=').ok_or_else(|| {
            RepositoryError::Validation(format!("Expected key=value, got: {}", raw))
        })?;

        let key = key.trim();
        let value = value.trim();

        if !PARAM_NAME.is_match(key) {
            return Err(RepositoryError::Validation(format!(
                "Invalid parameter name: {}",
                key
            )));
        }
        Self::validate_shard_key(value)?;

        Ok((key.to_string(), value.to_string()))
    }

    pub fn parse_params<S: AsRef<str>>(raw: &[S]) -> Result<PathParams> {
        raw.iter()
            .map(|item| Self::parse_param(item.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(|pairs| pairs.into_iter().collect())
    }
}
