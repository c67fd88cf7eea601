use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    /// Zero-length input handed to the compressor.
    #[error("input is empty")]
    EmptyInput,

    /// Byte outside the configured alphabet.
    #[error("unsupported symbol {symbol:#04x} at offset {offset}")]
    UnsupportedSymbol { symbol: u8, offset: usize },

    /// Malformed header, truncated structure or undecodable payload.
    #[error("corrupt container: {0}")]
    CorruptContainer(String),

    /// Symbol count does not fit the 4-byte header field.
    #[error("input of {0} bytes exceeds the container limit")]
    InputTooLarge(usize),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    pub(crate) fn corrupt(msg: impl Into<String>) -> Self {
        HuffError::CorruptContainer(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;
