//! Host-facing entry point for the Marathi numeral and transliteration engines.
//!
//! The engines live in `shabd-core`; this crate exports them through UniFFI
//! for the mobile shell and owns tracing setup.

uniffi::setup_scaffolding!();

pub mod api;
pub mod trace_init;

pub use shabd_core::{numeric, phonetic, settings, unicode};
