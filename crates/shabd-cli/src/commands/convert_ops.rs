use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use shabd_core::numeric::{convert_number_input, to_devanagari_digits, to_marathi_words};
use shabd_core::phonetic::{suggest_completions, transliterate};

use super::CliError;

pub fn number_cmd(input: &str, json: bool) -> Result<String, CliError> {
    let conversion = convert_number_input(input)?;
    if json {
        return Ok(serde_json::to_string_pretty(&conversion)?);
    }
    Ok(format!(
        "grouped:    {}\ndevanagari: {}\nwords:      {}",
        conversion.grouped, conversion.devanagari, conversion.words
    ))
}

pub fn words_cmd(n: i64) -> Result<String, CliError> {
    Ok(to_marathi_words(n)?)
}

pub fn digits_cmd(text: &str) -> String {
    to_devanagari_digits(text)
}

#[derive(Debug, Serialize)]
struct TranslitRow {
    input: String,
    output: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

pub fn translit_cmd(inputs: &[String], suggest: bool, json: bool) -> Result<String, CliError> {
    let rows: Vec<TranslitRow> = inputs
        .iter()
        .map(|input| TranslitRow {
            input: input.clone(),
            output: transliterate(input),
            suggestions: if suggest {
                suggest_completions(input)
            } else {
                Vec::new()
            },
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let width = rows.iter().map(|r| r.input.width()).max().unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|r| {
            let pad = " ".repeat(width - r.input.width());
            let mut line = format!("{}{pad} → {}", r.input, r.output);
            if !r.suggestions.is_empty() {
                line.push_str(&format!("  [{}]", r.suggestions.join(", ")));
            }
            line
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn suggest_cmd(prefix: &str) -> String {
    suggest_completions(prefix).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_text_output() {
        let out = number_cmd("1,000", false).unwrap();
        assert_eq!(
            out,
            "grouped:    1,000\ndevanagari: १०००\nwords:      एक हजार"
        );
    }

    #[test]
    fn number_json_output() {
        let out = number_cmd("456", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["value"], 456);
        assert_eq!(v["words"], "चारशे छप्पन्न");
        assert_eq!(v["devanagari"], "४५६");
    }

    #[test]
    fn number_rejects_garbage() {
        assert!(matches!(
            number_cmd("12x", false),
            Err(CliError::Numeric(_))
        ));
    }

    #[test]
    fn words_and_digits() {
        assert_eq!(words_cmd(-100).unwrap(), "नकारात्मक एकशे");
        assert!(words_cmd(i64::MAX).is_err());
        assert_eq!(digits_cmd("2024"), "२०२४");
    }

    #[test]
    fn translit_aligned() {
        let out = translit_cmd(&["ka".to_string(), "court".to_string()], false, false).unwrap();
        assert_eq!(out, "ka    → क\ncourt → न्यायालय");
    }

    #[test]
    fn translit_with_suggestions_json() {
        let out = translit_cmd(&["la".to_string()], true, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["output"], "ल");
        assert_eq!(v[0]["suggestions"][0], "कायदा");
    }

    #[test]
    fn suggest_lines() {
        assert_eq!(suggest_cmd("law"), "वकील");
        assert_eq!(suggest_cmd("zzz"), "");
    }
}
