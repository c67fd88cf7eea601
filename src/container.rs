//! Container wire format.
//!
//! ```text
//! repeat unique_count times:
//!     symbol               1 byte
//!     code                 ASCII '0'/'1', at least one character
//!     terminator           0x00
//! sentinel                 0x07
//! unique_count             u32 little-endian
//! total_count              u32 little-endian
//! payload                  codes packed MSB-first, zero-padded to a byte
//! ```
//!
//! `0x07` is also a legal symbol byte. At an entry boundary it is read as the
//! sentinel only when the next four bytes hold the number of entries parsed
//! so far; for a symbol entry those bytes start with a code character and can
//! never encode a count of at most 256.

use crate::bit_io::{BitReader, BitWriter};
use crate::code_table::{Code, CodeTable, DecodeTrie, Step};
use crate::error::{HuffError, Result};

pub const TERMINATOR: u8 = 0x00;
pub const SENTINEL: u8 = 0x07;
/// Two u32 count fields.
pub const COUNTS_LEN: usize = 8;
/// A byte alphabet never has more distinct symbols than this.
const MAX_ENTRIES: usize = 256;

/// Parsed container header.
#[derive(Debug, Clone)]
pub struct ContainerHeader {
    pub table: CodeTable,
    pub unique_count: u32,
    pub total_count: u32,
    /// Offset of the first payload byte.
    pub payload_offset: usize,
}

/// Serialized container plus the bit accounting of its payload.
#[derive(Debug, Clone)]
pub struct EncodedContainer {
    pub bytes: Vec<u8>,
    pub header_len: usize,
    pub payload_bits: u64,
    pub padding_bits: u8,
}

/// Write the code table and both counts.
pub fn encode_header(table: &CodeTable, total_count: u32) -> Vec<u8> {
    let mut out = Vec::new();
    for (symbol, code) in table.entries() {
        out.push(*symbol);
        out.extend_from_slice(&code.to_ascii());
        out.push(TERMINATOR);
    }
    out.push(SENTINEL);
    out.extend_from_slice(&(table.len() as u32).to_le_bytes());
    out.extend_from_slice(&total_count.to_le_bytes());
    out
}

/// Serialize a full container for `data` using `table`.
///
/// Every byte of `data` must have an entry in `table`.
pub fn encode_container(data: &[u8], table: &CodeTable) -> Result<EncodedContainer> {
    let total = u32::try_from(data.len()).map_err(|_| HuffError::InputTooLarge(data.len()))?;
    let header = encode_header(table, total);
    let header_len = header.len();
    let mut writer = BitWriter::with_prefix(header);
    for (offset, &symbol) in data.iter().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(HuffError::UnsupportedSymbol { symbol, offset })?;
        writer.write_bits(code.bits());
    }
    let payload_bits = writer.bits_written();
    let (bytes, padding_bits) = writer.finish();
    Ok(EncodedContainer {
        bytes,
        header_len,
        payload_bits,
        padding_bits,
    })
}

fn read_u32_le(data: &[u8], at: usize) -> Option<u32> {
    let bytes: [u8; 4] = data.get(at..at + 4)?.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}

/// Parse the header at the start of `data`.
pub fn parse_header(data: &[u8]) -> Result<ContainerHeader> {
    let mut entries: Vec<(u8, Code)> = Vec::new();
    let mut pos = 0usize;
    loop {
        let Some(&byte) = data.get(pos) else {
            return Err(HuffError::corrupt("header sentinel not found"));
        };
        if byte == SENTINEL
            && !entries.is_empty()
            && read_u32_le(data, pos + 1) == Some(entries.len() as u32)
        {
            break;
        }
        if entries.len() == MAX_ENTRIES {
            return Err(HuffError::corrupt("more than 256 header entries"));
        }
        let code_start = pos + 1;
        let Some(len) = data
            .get(code_start..)
            .and_then(|rest| rest.iter().position(|&b| b == TERMINATOR))
        else {
            return Err(HuffError::corrupt(format!(
                "unterminated code for symbol {byte:#04x}"
            )));
        };
        let code = Code::from_ascii(&data[code_start..code_start + len])?;
        if code.is_empty() {
            return Err(HuffError::corrupt(format!(
                "empty code for symbol {byte:#04x}"
            )));
        }
        tracing::trace!(symbol = byte, code = %code, "header entry");
        entries.push((byte, code));
        pos = code_start + len + 1;
    }

    let unique_count = read_u32_le(data, pos + 1)
        .ok_or_else(|| HuffError::corrupt("truncated unique symbol count"))?;
    let total_count = read_u32_le(data, pos + 5)
        .ok_or_else(|| HuffError::corrupt("truncated total symbol count"))?;
    if total_count == 0 {
        return Err(HuffError::corrupt("total symbol count is zero"));
    }
    let table = CodeTable::from_entries(entries)?;
    Ok(ContainerHeader {
        table,
        unique_count,
        total_count,
        payload_offset: pos + 1 + COUNTS_LEN,
    })
}

/// Decode exactly `total` symbols from `payload`.
///
/// Decoding stops at `total`; whatever follows, padding bits included, is
/// never read.
pub fn decode_payload(payload: &[u8], trie: &DecodeTrie, total: u32) -> Result<Vec<u8>> {
    let total = total as usize;
    let mut out = Vec::with_capacity(total.min(payload.len().saturating_mul(8)));
    let mut reader = BitReader::from_slice(payload);
    let mut at = DecodeTrie::ROOT;
    while out.len() < total {
        let Some(bit) = reader.next() else {
            return Err(HuffError::corrupt(format!(
                "payload exhausted after {} of {} symbols",
                out.len(),
                total
            )));
        };
        match trie.step(at, bit) {
            Some(Step::Symbol(symbol)) => {
                out.push(symbol);
                at = DecodeTrie::ROOT;
            }
            Some(Step::Pending(next)) => at = next,
            None => {
                return Err(HuffError::corrupt(format!(
                    "bit sequence at payload bit {} matches no code",
                    reader.bits_read() - 1
                )))
            }
        }
    }
    if reader.bits_remaining() >= 8 {
        tracing::trace!(
            unread_bits = reader.bits_remaining(),
            "ignoring data after last symbol"
        );
    }
    Ok(out)
}
