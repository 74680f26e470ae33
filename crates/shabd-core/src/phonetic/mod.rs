//! Latin-to-Devanagari phonetic transliteration.
//!
//! A single left-to-right scan composes consonants, dependent vowel signs
//! (matras) and halant from table-driven graphemes, always preferring the
//! longest grapheme available at the cursor. Whole words listed as
//! overrides bypass the scan entirely.

mod config;
mod suggest;
mod transliterate;


pub use config::{parse_phonetic_toml, PhoneticConfig, PhoneticConfigError, WordOverride};
pub use suggest::{suggest_completions, suggest_with};
pub use transliterate::{transliterate, transliterate_with};

use std::collections::HashMap;
use std::sync::OnceLock;

/// Grapheme lengths probed for consonants, longest first.
pub const CONSONANT_PROBE: &[usize] = &[3, 2, 1];
/// Grapheme lengths probed for standalone vowels, longest first.
pub const VOWEL_PROBE: &[usize] = &[2, 1];
/// Grapheme lengths probed for dependent vowel signs, longest first.
pub const MATRA_PROBE: &[usize] = &[2, 1];

/// Embedded default tables: `[consonants]`, `[vowels]` and `[matras]` map
/// lowercase Latin graphemes to Devanagari, and the ordered `[[overrides]]`
/// list maps whole words and feeds suggestions.
const DEFAULT_TOML: &str = include_str!("default_phonetic.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default phonetic TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphemeKind {
    Consonant,
    Vowel,
    Matra,
}

impl GraphemeKind {
    pub fn probe_lengths(self) -> &'static [usize] {
        match self {
            GraphemeKind::Consonant => CONSONANT_PROBE,
            GraphemeKind::Vowel => VOWEL_PROBE,
            GraphemeKind::Matra => MATRA_PROBE,
        }
    }
}

/// A grapheme found at some cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphemeMatch<'t> {
    /// Number of source characters consumed.
    pub len: usize,
    pub glyph: &'t str,
}

pub struct PhoneticTable {
    consonants: HashMap<String, String>,
    vowels: HashMap<String, String>,
    matras: HashMap<String, String>,
    overrides: Vec<WordOverride>,
    override_index: HashMap<String, usize>,
}

impl PhoneticTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PhoneticConfigError> {
        // Validate eagerly
        parse_phonetic_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PhoneticConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhoneticTable {
        static INSTANCE: OnceLock<PhoneticTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            PhoneticTable::from_toml(toml_str).expect("phonetic TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PhoneticConfigError> {
        parse_phonetic_toml(toml_str).map(Self::from_config)
    }

    pub fn from_config(config: PhoneticConfig) -> Self {
        let override_index = config
            .overrides
            .iter()
            .enumerate()
            .map(|(i, o)| (o.latin.clone(), i))
            .collect();
        Self {
            consonants: config.consonants.into_iter().collect(),
            vowels: config.vowels.into_iter().collect(),
            matras: config.matras.into_iter().collect(),
            overrides: config.overrides,
            override_index,
        }
    }

    fn map(&self, kind: GraphemeKind) -> &HashMap<String, String> {
        match kind {
            GraphemeKind::Consonant => &self.consonants,
            GraphemeKind::Vowel => &self.vowels,
            GraphemeKind::Matra => &self.matras,
        }
    }

    /// Exact lookup of a single grapheme.
    pub fn lookup(&self, kind: GraphemeKind, grapheme: &str) -> Option<&str> {
        self.map(kind).get(grapheme).map(String::as_str)
    }

    /// Find the longest grapheme of `kind` starting at `chars[at]`, trying
    /// the lengths in [`GraphemeKind::probe_lengths`] in order.
    pub fn longest_match(
        &self,
        kind: GraphemeKind,
        chars: &[char],
        at: usize,
    ) -> Option<GraphemeMatch<'_>> {
        let map = self.map(kind);
        kind.probe_lengths().iter().find_map(|&len| {
            let window = chars.get(at..at + len)?;
            let key: String = window.iter().collect();
            map.get(&key).map(|glyph| GraphemeMatch {
                len,
                glyph: glyph.as_str(),
            })
        })
    }

    /// Whole-word override for `word` (case-insensitive, exact match).
    pub fn override_for(&self, word: &str) -> Option<&str> {
        let key = word.to_ascii_lowercase();
        self.override_index
            .get(&key)
            .map(|&i| self.overrides[i].marathi.as_str())
    }

    /// Overrides in table order.
    pub fn overrides(&self) -> impl Iterator<Item = &WordOverride> {
        self.overrides.iter()
    }
}
