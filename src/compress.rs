use serde::Serialize;

use crate::code_table::CodeTable;
use crate::config::Config;
use crate::container::encode_container;
use crate::error::{HuffError, Result};
use crate::frequency::count_symbols;
use crate::tree::HuffmanTree;

/// Size and bit accounting of one compression run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressionReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub unique_symbols: usize,
    pub header_bytes: usize,
    pub payload_bits: u64,
    pub padding_bits: u8,
}

impl CompressionReport {
    /// Output size relative to input, in percent.
    pub fn ratio(&self) -> f64 {
        self.output_bytes as f64 * 100.0 / self.input_bytes as f64
    }
}

/// Compress `data` with the default configuration (any byte accepted).
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with_config(data, &Config::default())
}

pub fn compress_with_config(data: &[u8], config: &Config) -> Result<Vec<u8>> {
    compress_with_report(data, config).map(|(bytes, _)| bytes)
}

/// Compress `data` and report how the output is made up.
pub fn compress_with_report(data: &[u8], config: &Config) -> Result<(Vec<u8>, CompressionReport)> {
    let frequencies = count_symbols(data, config.alphabet)?;
    let tree = HuffmanTree::build(&frequencies).ok_or(HuffError::EmptyInput)?;
    let table = CodeTable::from_tree(&tree);
    tracing::debug!(
        unique = table.len(),
        max_code_len = tree.depth().max(1),
        "generated code table"
    );
    let encoded = encode_container(data, &table)?;
    let report = CompressionReport {
        input_bytes: data.len(),
        output_bytes: encoded.bytes.len(),
        unique_symbols: table.len(),
        header_bytes: encoded.header_len,
        payload_bits: encoded.payload_bits,
        padding_bits: encoded.padding_bits,
    };
    tracing::debug!(?report, "compressed");
    Ok((encoded.bytes, report))
}
