// file: src/utils/patterns.rs
// description: compiled regex patterns for user supplied identifiers
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "en", "pt-BR", "zh_Hant"
    pub static ref LANGUAGE_CODE: Regex = Regex::new(
        r"^[a-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})?$"
    ).expect("LANGUAGE_CODE regex is valid");

    // Substitution values end up inside file names
    pub static ref SHARD_KEY: Regex = Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9_-]*$"
    ).expect("SHARD_KEY regex is valid");

    pub static ref PARAM_NAME: Regex = Regex::new(
        r"^[A-Za-z][A-Za-z0-9_]*$"
    ).expect("PARAM_NAME regex is valid");
}
