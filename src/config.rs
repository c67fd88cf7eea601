/// Set of byte values the compressor accepts.
///
/// The container format itself carries any byte; the restriction only
/// applies when counting symbols on the compression path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Every byte value `0..=255`.
    #[default]
    Bytes,
    /// 7-bit ASCII, `0..=127`.
    Ascii,
}

impl Alphabet {
    /// Largest byte value accepted by this alphabet.
    pub fn max_symbol(self) -> u8 {
        match self {
            Alphabet::Bytes => u8::MAX,
            Alphabet::Ascii => 0x7F,
        }
    }

    #[inline]
    pub fn admits(self, symbol: u8) -> bool {
        symbol <= self.max_symbol()
    }
}

/// Runtime configuration for the compressor.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Accepted input alphabet.
    pub alphabet: Alphabet,
}

impl Config {
    /// Configuration restricted to 7-bit ASCII input.
    pub fn ascii() -> Self {
        Self {
            alphabet: Alphabet::Ascii,
        }
    }
}
