use shabd_core::phonetic::{self, PhoneticTable};
use shabd_core::settings;

use super::{read_file, CliError};

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

pub fn settings_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = settings::parse_settings_toml(&content)?;
    Ok(format!(
        "OK: numeric.max_value={}, suggest.max_results={}, transliterate.devanagari_digits={}",
        s.numeric.max_value, s.suggest.max_results, s.transliterate.devanagari_digits
    ))
}

pub fn phonetic_export() -> &'static str {
    phonetic::default_toml()
}

pub fn phonetic_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let config = phonetic::parse_phonetic_toml(&content)?;
    Ok(format!(
        "OK: {} consonants, {} vowels, {} matras, {} overrides",
        config.consonants.len(),
        config.vowels.len(),
        config.matras.len(),
        config.overrides.len()
    ))
}

/// Install a custom settings file. Must run before any conversion.
pub fn load_settings(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    settings::init_custom(content)?;
    Ok(())
}

/// Install a custom phonetic table. Must run before any transliteration.
pub fn load_phonetic(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    PhoneticTable::init_custom(content)?;
    Ok(())
}
