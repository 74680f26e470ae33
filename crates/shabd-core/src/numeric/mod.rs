//! Marathi number conversion.
//!
//! Converts integers into Marathi number words using Indian place-value
//! grouping (हजार, लाख, कोटी, अर्ब, लाख कोटी) and rewrites ASCII digits as
//! Devanagari digits. Values up to 99,99,99,99,99,99,999 (10^14 - 1) are
//! supported; larger magnitudes are rejected rather than approximated.

mod grouping;
mod input;
pub(crate) mod lexicon;


pub use grouping::{format_indian_decimal, format_indian_grouping};
pub use input::{convert_number_input, parse_number_input, NumberConversion, ParsedNumber};

use tracing::trace;

use crate::unicode::is_devanagari_digit;
use lexicon::{
    DIGIT_MAP, HUNDRED_SUFFIX, NEGATIVE_WORD, ONE_HUNDRED, PLACE_VALUES, SMALL_NUMBERS,
};

/// Largest magnitude accepted by [`to_marathi_words`].
pub const MAX_WORDS_VALUE: u64 = 99_999_999_999_999;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    #[error("{value} exceeds the supported maximum of {max}")]
    OutOfRange { value: String, max: u64 },
    #[error("malformed number: {0}")]
    Malformed(String),
    #[error("empty input")]
    Empty,
}

/// Replace every ASCII digit with its Devanagari glyph.
///
/// Anything that is not an ASCII digit passes through unchanged, so the
/// function is idempotent on text that is already Devanagari.
pub fn to_devanagari_digits(digits: &str) -> String {
    digits
        .chars()
        .map(|c| devanagari_digit(c).unwrap_or(c))
        .collect()
}

/// Devanagari glyph for a single ASCII digit.
pub fn devanagari_digit(c: char) -> Option<char> {
    c.to_digit(10).map(|d| DIGIT_MAP[d as usize])
}

/// Replace every Devanagari digit with its ASCII counterpart.
pub fn from_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_devanagari_digit(c) {
                char::from_digit(c as u32 - DIGIT_MAP[0] as u32, 10).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Spell out `n` in Marathi words.
///
/// Negative values are prefixed with नकारात्मक. Returns
/// [`NumericError::OutOfRange`] when `|n|` exceeds [`MAX_WORDS_VALUE`].
pub fn to_marathi_words(n: i64) -> Result<String, NumericError> {
    let magnitude = n.unsigned_abs();
    if magnitude > MAX_WORDS_VALUE {
        return Err(NumericError::OutOfRange {
            value: n.to_string(),
            max: MAX_WORDS_VALUE,
        });
    }
    let words = words_for(magnitude);
    if n < 0 {
        Ok(format!("{NEGATIVE_WORD} {words}"))
    } else {
        Ok(words)
    }
}

/// Recursive core of [`to_marathi_words`]. Depth is bounded by the number of
/// scales, since every quotient is strictly smaller than its input.
pub(crate) fn words_for(n: u64) -> String {
    if n <= 99 {
        return SMALL_NUMBERS[n as usize].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;

    for scale in &PLACE_VALUES {
        if rest >= scale.divisor {
            let quotient = rest / scale.divisor;
            trace!(quotient, scale = scale.word, "scale segment");
            parts.push(format!("{} {}", words_for(quotient), scale.word));
            rest %= scale.divisor;
        }
    }

    if rest >= 100 {
        let hundreds = rest / 100;
        if hundreds == 1 {
            parts.push(ONE_HUNDRED.to_string());
        } else {
            parts.push(format!("{}{HUNDRED_SUFFIX}", words_for(hundreds)));
        }
        rest %= 100;
    }

    if rest > 0 {
        parts.push(SMALL_NUMBERS[rest as usize].to_string());
    }

    parts.join(" ")
}
