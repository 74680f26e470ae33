//! Static tables for Marathi number words.

/// ASCII digit `d` maps to `DIGIT_MAP[d]`.
pub(crate) const DIGIT_MAP: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Words for 0..=99. These forms are irregular and never decomposed.
pub(crate) const SMALL_NUMBERS: [&str; 100] = [
    "शून्य",
    "एक",
    "दोन",
    "तीन",
    "चार",
    "पाच",
    "सहा",
    "सात",
    "आठ",
    "नऊ",
    "दहा",
    "अकरा",
    "बारा",
    "तेरा",
    "चौदा",
    "पंधरा",
    "सोळा",
    "सतरा",
    "अठरा",
    "एकोणीस",
    "वीस",
    "एकवीस",
    "बावीस",
    "तेवीस",
    "चोवीस",
    "पंचवीस",
    "सव्वीस",
    "सत्तावीस",
    "अठ्ठावीस",
    "एकोणतीस",
    "तीस",
    "एकतीस",
    "बत्तीस",
    "तेहत्तीस",
    "चौतीस",
    "पस्तीस",
    "छत्तीस",
    "सदतीस",
    "अडतीस",
    "एकोणचाळीस",
    "चाळीस",
    "एकेचाळीस",
    "बेचाळीस",
    "त्रेचाळीस",
    "चव्वेचाळीस",
    "पंचेचाळीस",
    "सेहेचाळीस",
    "सत्तेचाळीस",
    "अठ्ठेचाळीस",
    "एकोणपन्नास",
    "पन्नास",
    "एकावन्न",
    "बावन्न",
    "त्रेपन्न",
    "चोपन्न",
    "पंचावन्न",
    "छप्पन्न",
    "सत्तावन्न",
    "अठ्ठावन्न",
    "एकोणसाठ",
    "साठ",
    "एकसष्ठ",
    "बासष्ठ",
    "त्रेसष्ठ",
    "चौसष्ठ",
    "पंचसष्ठ",
    "सहासष्ठ",
    "सदुसष्ठ",
    "अडुसष्ठ",
    "एकोणसत्तर",
    "सत्तर",
    "एकाहत्तर",
    "बाहत्तर",
    "त्र्याहत्तर",
    "चौर्याहत्तर",
    "पंच्याहत्तर",
    "शहात्तर",
    "सत्त्याहत्तर",
    "अठ्ठ्याहत्तर",
    "एकोण ऐंशी",
    "ऐंशी",
    "एक्याऐंशी",
    "ब्याऐंशी",
    "त्र्याऐंशी",
    "चौर्याऐंशी",
    "पंच्याऐंशी",
    "शहाऐंशी",
    "सत्त्याऐंशी",
    "अठ्ठ्याऐंशी",
    "एकोणनव्वद",
    "नव्वद",
    "एक्याण्णव",
    "ब्याण्णव",
    "त्र्याण्णव",
    "चौर्याण्णव",
    "पंच्याण्णव",
    "शहाण्णव",
    "सत्त्याण्णव",
    "अठ्ठ्याण्णव",
    "नव्व्याण्णव",
];

/// Prefix for negative numbers.
pub(crate) const NEGATIVE_WORD: &str = "नकारात्मक";

/// "One hundred" is contracted irregularly rather than built as एक + शे.
pub(crate) const ONE_HUNDRED: &str = "एकशे";

/// Suffix attached directly to the hundreds digit word (दोनशे, तीनशे, ...).
pub(crate) const HUNDRED_SUFFIX: &str = "शे";

/// One step of Indian place-value grouping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scale {
    pub divisor: u64,
    pub word: &'static str,
}

/// Scales above hundreds, largest first. Scale words are never contracted.
pub(crate) const PLACE_VALUES: [Scale; 5] = [
    Scale {
        divisor: 10_000_000_000_000,
        word: "लाख कोटी",
    },
    Scale {
        divisor: 1_000_000_000,
        word: "अर्ब",
    },
    Scale {
        divisor: 10_000_000,
        word: "कोटी",
    },
    Scale {
        divisor: 100_000,
        word: "लाख",
    },
    Scale {
        divisor: 1_000,
        word: "हजार",
    },
];
