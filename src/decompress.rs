use crate::code_table::DecodeTrie;
use crate::container::{decode_payload, parse_header};
use crate::error::{HuffError, Result};

/// Decode a container, refusing any that declares more than `limit` symbols.
pub fn decompress_with_limit(data: &[u8], limit: usize) -> Result<Vec<u8>> {
    let header = parse_header(data)?;
    if header.total_count as usize > limit {
        return Err(HuffError::corrupt(format!(
            "declared length {} exceeds limit {}",
            header.total_count, limit
        )));
    }
    let trie = DecodeTrie::build(&header.table)?;
    tracing::debug!(
        unique = header.unique_count,
        total = header.total_count,
        payload_bytes = data.len() - header.payload_offset,
        "parsed container header"
    );
    decode_payload(&data[header.payload_offset..], &trie, header.total_count)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_with_limit(data, usize::MAX)
}
