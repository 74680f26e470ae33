use shabd_core::numeric::{NumberConversion, NumericError};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ShabdError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("out of range: {msg}")]
    OutOfRange { msg: String },
    #[error("malformed input: {msg}")]
    Malformed { msg: String },
}

impl From<NumericError> for ShabdError {
    fn from(e: NumericError) -> Self {
        let msg = e.to_string();
        match e {
            NumericError::OutOfRange { .. } => ShabdError::OutOfRange { msg },
            NumericError::Malformed(_) | NumericError::Empty => ShabdError::Malformed { msg },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ShabdNumber {
    pub value: u64,
    pub grouped: String,
    pub devanagari: String,
    pub words: String,
}

impl From<NumberConversion> for ShabdNumber {
    fn from(c: NumberConversion) -> Self {
        Self {
            value: c.value,
            grouped: c.grouped,
            devanagari: c.devanagari,
            words: c.words,
        }
    }
}
