use proptest::prelude::*;
use huffpack::{
    compress, compress_with_report, count_symbols, decompress, Alphabet, CodeTable, Config,
    HuffmanTree,
};

proptest! {
    #[test]
    fn roundtrip_random(data in proptest::collection::vec(any::<u8>(), 1..4096)) {
        let packed = compress(&data).unwrap();
        let output = decompress(&packed).unwrap();
        prop_assert_eq!(output, data);
    }

    #[test]
    fn codes_are_prefix_free(data in proptest::collection::vec(any::<u8>(), 1..2048)) {
        let freq = count_symbols(&data, Alphabet::Bytes).unwrap();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap());
        prop_assert_eq!(table.len(), freq.unique());
        prop_assert!(table.is_prefix_free());
    }

    #[test]
    fn payload_bit_accounting(data in proptest::collection::vec(0u8..16, 1..2048)) {
        let freq = count_symbols(&data, Alphabet::Bytes).unwrap();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap());
        let expected: u64 = freq
            .iter()
            .map(|(s, c)| c * table.get(s).unwrap().len() as u64)
            .sum();

        let (packed, report) = compress_with_report(&data, &Config::default()).unwrap();
        prop_assert_eq!(report.payload_bits, expected);
        prop_assert!(report.padding_bits <= 7);
        let payload_bytes = (packed.len() - report.header_bytes) as u64;
        prop_assert_eq!(payload_bytes * 8, expected + report.padding_bits as u64);
    }

    #[test]
    fn ascii_text_roundtrip(text in "[ -~\n\t]{1,512}") {
        let packed = huffpack::compress_with_config(text.as_bytes(), &Config::ascii()).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), text.as_bytes());
    }
}
