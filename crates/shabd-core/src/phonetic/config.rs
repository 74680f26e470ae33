use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::{CONSONANT_PROBE, MATRA_PROBE, VOWEL_PROBE};
use crate::unicode::is_devanagari;

/// Raw phonetic tables as written in TOML.
#[derive(Debug, Deserialize)]
pub struct PhoneticConfig {
    pub consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, String>,
    pub matras: BTreeMap<String, String>,
    #[serde(default)]
    pub overrides: Vec<WordOverride>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordOverride {
    pub latin: String,
    pub marathi: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PhoneticConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("key must be lowercase ASCII letters: {0}")]
    NonAsciiKey(String),
    #[error("key longer than {max} letters in [{table}]: {key}")]
    KeyTooLong {
        table: &'static str,
        key: String,
        max: usize,
    },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("non-Devanagari value for key: {0}")]
    NonDevanagariValue(String),
    #[error("duplicate override: {0}")]
    DuplicateOverride(String),
    #[error("phonetic table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate phonetic tables from TOML text.
pub fn parse_phonetic_toml(toml_str: &str) -> Result<PhoneticConfig, PhoneticConfigError> {
    let config: PhoneticConfig =
        toml::from_str(toml_str).map_err(|e| PhoneticConfigError::Parse(e.to_string()))?;

    validate_table("consonants", &config.consonants, CONSONANT_PROBE[0], false)?;
    validate_table("vowels", &config.vowels, VOWEL_PROBE[0], false)?;
    validate_table("matras", &config.matras, MATRA_PROBE[0], true)?;

    let mut seen = HashSet::new();
    for entry in &config.overrides {
        if !is_grapheme_key(&entry.latin) {
            return Err(PhoneticConfigError::NonAsciiKey(entry.latin.clone()));
        }
        if entry.marathi.trim().is_empty() {
            return Err(PhoneticConfigError::EmptyValue(entry.latin.clone()));
        }
        if !seen.insert(entry.latin.as_str()) {
            return Err(PhoneticConfigError::DuplicateOverride(entry.latin.clone()));
        }
    }

    Ok(config)
}

fn validate_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    max_len: usize,
    allow_empty_value: bool,
) -> Result<(), PhoneticConfigError> {
    if map.is_empty() {
        return Err(PhoneticConfigError::Empty(table));
    }
    for (key, value) in map {
        if !is_grapheme_key(key) {
            return Err(PhoneticConfigError::NonAsciiKey(key.clone()));
        }
        if key.len() > max_len {
            return Err(PhoneticConfigError::KeyTooLong {
                table,
                key: key.clone(),
                max: max_len,
            });
        }
        if value.is_empty() && !allow_empty_value {
            return Err(PhoneticConfigError::EmptyValue(key.clone()));
        }
        if !value.chars().all(is_devanagari) {
            return Err(PhoneticConfigError::NonDevanagariValue(key.clone()));
        }
    }
    Ok(())
}

fn is_grapheme_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_lowercase())
}
