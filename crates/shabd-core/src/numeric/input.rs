//! Parsing of user-typed number input (`12,34,567.89`, `१२३`).

use serde::Serialize;
use tracing::{debug, debug_span};

use super::{
    format_indian_decimal, from_devanagari_digits, to_devanagari_digits, to_marathi_words,
    NumericError,
};
use crate::settings::settings;

/// A validated, floored number plus the fractional digits the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub integer: u64,
    pub fraction: String,
}

/// Every rendering of one number input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberConversion {
    pub value: u64,
    pub grouped: String,
    pub devanagari: String,
    pub words: String,
}

/// Parse number input made of digits, comma separators and at most one
/// decimal point. Devanagari digits are accepted and normalised to ASCII.
pub fn parse_number_input(raw: &str, max: u64) -> Result<ParsedNumber, NumericError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NumericError::Empty);
    }

    let normalized = from_devanagari_digits(trimmed);
    let (int_part, frac_part) = match normalized.split_once('.') {
        Some((i, f)) => (i, f),
        None => (normalized.as_str(), ""),
    };

    let int_ok = int_part.chars().all(|c| c.is_ascii_digit() || c == ',');
    let frac_ok = frac_part.chars().all(|c| c.is_ascii_digit());
    if !int_ok || !frac_ok {
        return Err(NumericError::Malformed(raw.to_string()));
    }

    let int_digits: String = int_part.chars().filter(|&c| c != ',').collect();
    if int_digits.is_empty() && frac_part.is_empty() {
        return Err(NumericError::Malformed(raw.to_string()));
    }

    let out_of_range = || NumericError::OutOfRange {
        value: format!("{int_digits}.{frac_part}")
            .trim_end_matches('.')
            .to_string(),
        max,
    };

    let integer = if int_digits.is_empty() {
        0
    } else {
        // Overflowing u64 is necessarily above any ceiling.
        int_digits.parse::<u64>().map_err(|_| out_of_range())?
    };

    let has_fraction = frac_part.bytes().any(|b| b != b'0');
    if integer > max || (integer == max && has_fraction) {
        debug!(integer, max, "number input above ceiling");
        return Err(out_of_range());
    }

    Ok(ParsedNumber {
        integer,
        fraction: frac_part.to_string(),
    })
}

/// Parse `raw` against the configured ceiling and render it as grouped
/// digits, Devanagari digits and Marathi words.
pub fn convert_number_input(raw: &str) -> Result<NumberConversion, NumericError> {
    let _span = debug_span!("convert_number_input", raw).entered();
    let parsed = parse_number_input(raw, settings().numeric.max_value)?;

    // The ceiling never exceeds MAX_WORDS_VALUE, which fits in i64.
    let signed = i64::try_from(parsed.integer).map_err(|_| NumericError::OutOfRange {
        value: parsed.integer.to_string(),
        max: settings().numeric.max_value,
    })?;

    Ok(NumberConversion {
        value: parsed.integer,
        grouped: format_indian_decimal(parsed.integer, &parsed.fraction),
        devanagari: to_devanagari_digits(&parsed.integer.to_string()),
        words: to_marathi_words(signed)?,
    })
}
