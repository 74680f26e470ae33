//! Property-based tests for the numeral and transliteration engines.

use proptest::prelude::*;

use crate::numeric::lexicon::PLACE_VALUES;
use crate::numeric::{to_devanagari_digits, to_marathi_words, MAX_WORDS_VALUE};
use crate::phonetic::{transliterate_with, PhoneticTable};
use crate::unicode::{is_devanagari, is_devanagari_digit};

const NEGATIVE_PREFIX: &str = "नकारात्मक ";

fn arb_magnitude() -> impl Strategy<Value = i64> {
    prop_oneof![
        0i64..=99,
        100i64..=99_999,
        100_000i64..=99_999_999,
        100_000_000i64..=MAX_WORDS_VALUE as i64,
    ]
}

fn arb_mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => prop::sample::select(vec![
                'a', 'e', 'i', 'o', 'u', 'k', 'h', 'c', 's', 't', 'r', 'm', 'n', 'y',
            ]),
            1 => prop::sample::select(vec![' ', '1', '9', '.', '-', '!', '@']),
            1 => prop::sample::select(vec!['A', 'K', 'Q', 'X', 'ß', 'é']),
        ],
        0..24,
    )
    .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn negative_is_prefixed_positive(n in 1i64..=MAX_WORDS_VALUE as i64) {
        let negative = to_marathi_words(-n).unwrap();
        let positive = to_marathi_words(n).unwrap();
        prop_assert!(negative.starts_with(NEGATIVE_PREFIX));
        prop_assert_eq!(&negative[NEGATIVE_PREFIX.len()..], positive.as_str());
    }

    #[test]
    fn words_are_devanagari_and_trimmed(n in arb_magnitude()) {
        let words = to_marathi_words(n).unwrap();
        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "));
        prop_assert!(words.chars().all(|c| c == ' ' || is_devanagari(c)));
    }

    #[test]
    fn largest_scale_splits_recursively(n in arb_magnitude()) {
        let Some(scale) = PLACE_VALUES.iter().find(|s| n as u64 >= s.divisor) else {
            return Ok(());
        };
        let quotient = n / scale.divisor as i64;
        let remainder = n % scale.divisor as i64;
        let mut expected = format!("{} {}", to_marathi_words(quotient).unwrap(), scale.word);
        if remainder > 0 {
            expected.push(' ');
            expected.push_str(&to_marathi_words(remainder).unwrap());
        }
        prop_assert_eq!(to_marathi_words(n).unwrap(), expected);
    }

    #[test]
    fn lakh_crore_boundary(k in 1i64..=9) {
        let n = k * 10_000_000_000_000;
        prop_assert_eq!(
            to_marathi_words(n).unwrap(),
            format!("{} लाख कोटी", to_marathi_words(k).unwrap())
        );
    }

    #[test]
    fn above_ceiling_is_rejected(n in (MAX_WORDS_VALUE as i64 + 1)..=i64::MAX) {
        prop_assert!(to_marathi_words(n).is_err());
        prop_assert!(to_marathi_words(-n).is_err());
    }

    #[test]
    fn digit_mapping_preserves_length(n in any::<u64>()) {
        let ascii = n.to_string();
        let mapped = to_devanagari_digits(&ascii);
        prop_assert_eq!(mapped.chars().count(), ascii.chars().count());
        prop_assert!(mapped.chars().all(is_devanagari_digit));
        // Idempotent on already-converted text.
        prop_assert_eq!(to_devanagari_digits(&mapped), mapped);
    }

    #[test]
    fn transliteration_keeps_unmapped_characters(input in arb_mixed_text()) {
        let table = PhoneticTable::global();
        let out = transliterate_with(table, &input, false);
        if table.override_for(input.trim()).is_none() {
            for c in input.chars().filter(|c| !c.is_ascii_alphabetic()) {
                prop_assert!(out.contains(c), "{:?} dropped from {:?} -> {:?}", c, input, out);
            }
            let non_latin_in = input.chars().filter(|c| !c.is_ascii_alphabetic()).count();
            let non_latin_out = out.chars().filter(|&c| !is_devanagari(c) && !c.is_ascii_alphabetic()).count();
            prop_assert_eq!(non_latin_in, non_latin_out);
        }
    }
}
