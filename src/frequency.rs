use std::collections::BTreeMap;

use crate::config::Alphabet;
use crate::error::{HuffError, Result};

/// Occurrence counts for every distinct symbol of an input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Number of occurrences of `symbol`, zero if it never appeared.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

/// Count every symbol of `data`, rejecting bytes outside `alphabet`.
pub fn count_symbols(data: &[u8], alphabet: Alphabet) -> Result<FrequencyTable> {
    if data.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    if u32::try_from(data.len()).is_err() {
        return Err(HuffError::InputTooLarge(data.len()));
    }
    let mut counts = BTreeMap::new();
    for (offset, &symbol) in data.iter().enumerate() {
        if !alphabet.admits(symbol) {
            return Err(HuffError::UnsupportedSymbol { symbol, offset });
        }
        *counts.entry(symbol).or_insert(0u64) += 1;
    }
    Ok(FrequencyTable {
        counts,
        total: data.len() as u64,
    })
}
