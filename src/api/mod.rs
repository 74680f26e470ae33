//! UniFFI export layer: type-safe Kotlin/Swift bindings for the engines.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod types;

pub use types::{ShabdError, ShabdNumber};

use tracing::warn;

use shabd_core::numeric;
use shabd_core::phonetic::{self, PhoneticTable};
use shabd_core::settings;

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert number input as typed by the user.
#[uniffi::export]
pub fn number_convert(input: String) -> Result<ShabdNumber, ShabdError> {
    Ok(numeric::convert_number_input(&input)?.into())
}

#[uniffi::export]
pub fn number_to_words(n: i64) -> Result<String, ShabdError> {
    Ok(numeric::to_marathi_words(n)?)
}

#[uniffi::export]
pub fn number_to_devanagari(digits: String) -> String {
    numeric::to_devanagari_digits(&digits)
}

#[uniffi::export]
pub fn number_format_grouped(n: i64) -> String {
    numeric::format_indian_grouping(n)
}

// ---------------------------------------------------------------------------
// Transliteration
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn transliterate(input: String) -> String {
    phonetic::transliterate(&input)
}

#[uniffi::export]
pub fn transliteration_suggestions(prefix: String) -> Vec<String> {
    phonetic::suggest_completions(&prefix)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn settings_load_config(path: String) -> Result<(), ShabdError> {
    let content = std::fs::read_to_string(&path).map_err(|e| ShabdError::Io {
        msg: format!("{path}: {e}"),
    })?;
    settings::init_custom(content).map_err(|e| {
        warn!(%path, error = %e, "rejected settings config");
        ShabdError::InvalidData { msg: e.to_string() }
    })
}

#[uniffi::export]
pub fn phonetic_load_config(path: String) -> Result<(), ShabdError> {
    let content = std::fs::read_to_string(&path).map_err(|e| ShabdError::Io {
        msg: format!("{path}: {e}"),
    })?;
    PhoneticTable::init_custom(content).map_err(|e| {
        warn!(%path, error = %e, "rejected phonetic config");
        ShabdError::InvalidData { msg: e.to_string() }
    })
}

/// Start JSON tracing into `log_dir`. No-op unless built with `trace`.
#[uniffi::export]
pub fn tracing_init(log_dir: String) {
    crate::trace_init::init_tracing(std::path::Path::new(&log_dir));
}

#[uniffi::export]
pub fn settings_default_config() -> String {
    settings::default_toml().to_string()
}

#[uniffi::export]
pub fn phonetic_default_config() -> String {
    phonetic::default_toml().to_string()
}
