//! Global settings loaded from TOML, following the same OnceLock pattern as the phonetic table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::numeric::MAX_WORDS_VALUE;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub numeric: NumericSettings,
    pub suggest: SuggestSettings,
    #[serde(default)]
    pub transliterate: TransliterateSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumericSettings {
    pub max_value: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    pub max_results: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransliterateSettings {
    #[serde(default)]
    pub devanagari_digits: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.numeric.max_value == 0 {
        return Err(SettingsError::InvalidValue {
            field: "numeric.max_value".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.numeric.max_value > MAX_WORDS_VALUE {
        return Err(SettingsError::InvalidValue {
            field: "numeric.max_value".to_string(),
            reason: format!("must not exceed {MAX_WORDS_VALUE}"),
        });
    }
    if s.suggest.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggest.max_results".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.numeric.max_value, 99_999_999_999_999);
        assert_eq!(s.suggest.max_results, 5);
        assert!(!s.transliterate.devanagari_digits);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[numeric]
max_value = 1000000

[suggest]
max_results = 10

[transliterate]
devanagari_digits = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.numeric.max_value, 1_000_000);
        assert_eq!(s.suggest.max_results, 10);
        assert!(s.transliterate.devanagari_digits);
    }

    #[test]
    fn transliterate_section_optional() {
        let toml = r#"
[numeric]
max_value = 100

[suggest]
max_results = 3
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(!s.transliterate.devanagari_digits);
    }

    #[test]
    fn error_ceiling_above_supported() {
        let toml = r#"
[numeric]
max_value = 100000000000000

[suggest]
max_results = 5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "numeric.max_value")
        );
    }

    #[test]
    fn error_zero_values() {
        let toml = r#"
[numeric]
max_value = 0

[suggest]
max_results = 5
"#;
        assert!(matches!(
            parse_settings_toml(toml).unwrap_err(),
            SettingsError::InvalidValue { .. }
        ));

        let toml = r#"
[numeric]
max_value = 10

[suggest]
max_results = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "suggest.max_results")
        );
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[numeric]\nmax_value = 10\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
