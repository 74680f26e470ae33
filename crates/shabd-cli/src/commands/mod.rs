//! Subcommand implementations for `shabdtool`.
//!
//! Each command returns its rendered output so the binary only decides
//! where to print it and how to exit.

pub mod config_ops;
pub mod convert_ops;

use std::path::PathBuf;

use shabd_core::numeric::NumericError;
use shabd_core::phonetic::PhoneticConfigError;
use shabd_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid phonetic table: {0}")]
    Phonetic(#[from] PhoneticConfigError),
    #[error("{0}")]
    Numeric(#[from] NumericError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: PathBuf::from(path),
        source,
    })
}
