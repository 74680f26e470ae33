use tracing::debug_span;

use super::PhoneticTable;
use crate::settings::settings;

/// Prefix completions from the global override table, capped by
/// `suggest.max_results`.
pub fn suggest_completions(input: &str) -> Vec<String> {
    suggest_with(
        PhoneticTable::global(),
        input,
        settings().suggest.max_results,
    )
}

/// Marathi values of overrides whose Latin key extends `input`, in table
/// order. An exact match is not a completion and is skipped.
///
/// Unlike a literal `starts_with` over the raw input, the prefix is trimmed
/// first and a blank prefix completes to nothing.
pub fn suggest_with(table: &PhoneticTable, input: &str, limit: usize) -> Vec<String> {
    let _span = debug_span!("suggest_completions", input, limit).entered();
    let prefix = input.trim().to_ascii_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }
    table
        .overrides()
        .filter(|o| o.latin.starts_with(&prefix) && o.latin != prefix)
        .take(limit)
        .map(|o| o.marathi.clone())
        .collect()
}
