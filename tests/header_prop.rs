use quickcheck::quickcheck;
use huffpack::container::{encode_header, SENTINEL};
use huffpack::{count_symbols, parse_header, Alphabet, CodeTable, HuffmanTree};

fn table_for(data: &[u8]) -> CodeTable {
    let freq = count_symbols(data, Alphabet::Bytes).unwrap();
    CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap())
}

quickcheck! {
    fn header_roundtrip(data: Vec<u8>, total: u32) -> bool {
        if data.is_empty() || total == 0 {
            return true;
        }
        let table = table_for(&data);
        let bytes = encode_header(&table, total);
        match parse_header(&bytes) {
            Ok(h) => {
                h.table.entries() == table.entries()
                    && h.unique_count as usize == table.len()
                    && h.total_count == total
                    && h.payload_offset == bytes.len()
            }
            Err(_) => false,
        }
    }

    fn header_with_bell_roundtrip(data: Vec<u8>) -> bool {
        let mut data = data;
        data.push(SENTINEL);
        let table = table_for(&data);
        let bytes = encode_header(&table, data.len() as u32);
        matches!(parse_header(&bytes), Ok(h) if h.table.entries() == table.entries())
    }
}

#[test]
fn counts_are_little_endian() {
    let table = table_for(b"ab");
    let bytes = encode_header(&table, 0x0102_0304);
    let tail = &bytes[bytes.len() - 8..];
    assert_eq!(tail, &[2, 0, 0, 0, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(bytes[bytes.len() - 9], SENTINEL);
}
