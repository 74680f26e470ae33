use tracing::{debug, debug_span};

use super::{GraphemeKind, PhoneticTable};
use crate::numeric::devanagari_digit;
use crate::settings::settings;
use crate::unicode::{is_latin, HALANT};

/// Transliterate `input` with the global phonetic table and settings.
pub fn transliterate(input: &str) -> String {
    transliterate_with(
        PhoneticTable::global(),
        input,
        settings().transliterate.devanagari_digits,
    )
}

/// Transliterate `input` into Devanagari.
///
/// Never fails: characters that match no grapheme are copied through
/// unchanged. When `devanagari_digits` is set, ASCII digits are emitted as
/// Devanagari digits instead of being copied.
pub fn transliterate_with(table: &PhoneticTable, input: &str, devanagari_digits: bool) -> String {
    let _span = debug_span!("transliterate", input).entered();
    if input.is_empty() {
        return String::new();
    }

    if let Some(word) = table.override_for(input.trim()) {
        debug!(word, "whole-word override");
        return word.to_string();
    }

    let original: Vec<char> = input.chars().collect();
    let lowered: Vec<char> = original.iter().map(char::to_ascii_lowercase).collect();
    let mut out = String::with_capacity(input.len() * 3);
    let mut i = 0;

    while i < lowered.len() {
        let c = lowered[i];

        if !is_latin(c) {
            match devanagari_digit(c) {
                Some(d) if devanagari_digits => out.push(d),
                _ => out.push(original[i]),
            }
            i += 1;
            continue;
        }

        if let Some(consonant) = table.longest_match(GraphemeKind::Consonant, &lowered, i) {
            out.push_str(consonant.glyph);
            let next = i + consonant.len;
            if let Some(matra) = table.longest_match(GraphemeKind::Matra, &lowered, next) {
                out.push_str(matra.glyph);
                i = next + matra.len;
            } else {
                // A bare consonant followed by another consonant forms a cluster.
                if table
                    .longest_match(GraphemeKind::Consonant, &lowered, next)
                    .is_some()
                {
                    out.push(HALANT);
                }
                i = next;
            }
            continue;
        }

        if let Some(vowel) = table.longest_match(GraphemeKind::Vowel, &lowered, i) {
            out.push_str(vowel.glyph);
            i += vowel.len;
            continue;
        }

        out.push(original[i]);
        i += 1;
    }

    if out.is_empty() {
        input.to_string()
    } else {
        out
    }
}
