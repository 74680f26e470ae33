//! Marathi numeral and transliteration engines.
//!
//! Both engines are pure functions over strings and integers. Lookup tables
//! are immutable after first use and safe to share across threads.

pub mod numeric;
pub mod phonetic;
pub mod settings;
pub mod unicode;

#[cfg(test)]
mod tests;
