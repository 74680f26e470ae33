//! Character-level Unicode classification for Devanagari and Latin text.

/// Virama (्), suppresses the inherent vowel of the preceding consonant.
pub const HALANT: char = '\u{094D}';

/// Check the full Devanagari block (U+0900..U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Devanagari digits ० through ९ (U+0966..U+096F).
pub fn is_devanagari_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

/// Transliteration only applies to ASCII letters.
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_devanagari('क'));
        assert!(is_devanagari(HALANT));
        assert!(is_devanagari('५'));
        assert!(!is_devanagari('k'));
        assert!(is_devanagari_digit('०'));
        assert!(is_devanagari_digit('९'));
        assert!(!is_devanagari_digit('क'));
        assert!(!is_devanagari_digit('9'));
        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(!is_latin('क'));
        assert!(!is_latin('1'));
    }
}
