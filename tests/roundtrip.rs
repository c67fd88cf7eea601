use huffpack::{
    compress, compress_with_config, compress_with_report, count_symbols, decompress,
    parse_header, Alphabet, Config, HuffError,
};
use rand::Rng;

#[test]
fn three_symbol_scenario() {
    let input = b"aaabbbbcc";
    let (packed, report) = compress_with_report(input, &Config::default()).unwrap();
    let header = parse_header(&packed).unwrap();
    let table = &header.table;

    let len = |s: u8| table.get(s).unwrap().len() as u64;
    assert!(len(b'b') < len(b'a'));
    assert!(len(b'b') < len(b'c'));
    assert_eq!(report.payload_bits, 3 * len(b'a') + 4 * len(b'b') + 2 * len(b'c'));
    assert_eq!(header.unique_count, 3);
    assert_eq!(header.total_count, 9);
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn single_symbol_input() {
    let input = [b'x'; 50];
    let packed = compress(&input).unwrap();
    let header = parse_header(&packed).unwrap();
    assert_eq!(header.table.len(), 1);
    assert_eq!(header.table.get(b'x').unwrap().to_string(), "0");
    // 50 one-bit codes in 7 payload bytes
    assert_eq!(packed.len() - header.payload_offset, 7);
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn single_byte_input() {
    let packed = compress(b"z").unwrap();
    assert_eq!(decompress(&packed).unwrap(), b"z");
}

#[test]
fn empty_input_rejected() {
    assert!(matches!(compress(b""), Err(HuffError::EmptyInput)));
}

#[test]
fn sentinel_and_terminator_bytes_as_symbols() {
    let input = b"\x07\x07\x00bell\x07\x00\x00\x07end";
    let packed = compress(input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);

    let only_bells = [0x07u8; 13];
    let packed = compress(&only_bells).unwrap();
    assert_eq!(decompress(&packed).unwrap(), only_bells);
}

#[test]
fn every_byte_value() {
    let input: Vec<u8> = (0..=255u8).cycle().take(256 * 5 + 17).collect();
    let packed = compress(&input).unwrap();
    assert_eq!(parse_header(&packed).unwrap().table.len(), 256);
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn ascii_alphabet_rejects_binary() {
    let config = Config::ascii();
    let text = b"plain 7-bit text\n";
    let packed = compress_with_config(text, &config).unwrap();
    assert_eq!(decompress(&packed).unwrap(), text);

    let err = compress_with_config(b"caf\xC3\xA9", &config).unwrap_err();
    assert!(matches!(
        err,
        HuffError::UnsupportedSymbol {
            symbol: 0xC3,
            offset: 3
        }
    ));
}

#[test]
fn skewed_distribution_shrinks() {
    let mut input = vec![b'e'; 4000];
    input.extend(std::iter::repeat(b't').take(500));
    input.extend(b"qzxj".iter().copied());
    let (packed, report) = compress_with_report(&input, &Config::default()).unwrap();
    assert!(packed.len() < input.len() / 4);
    assert_eq!(report.output_bytes, packed.len());
    assert!(report.ratio() < 25.0);
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn random_inputs_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(1..2000);
        let spread = rng.gen_range(1..=255u8);
        let input: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=spread)).collect();
        let packed = compress(&input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input);
    }
}

#[test]
fn deterministic_output() {
    let input = b"the same input always packs the same way";
    assert_eq!(compress(input).unwrap(), compress(input).unwrap());
    let freq = count_symbols(input, Alphabet::Bytes).unwrap();
    assert_eq!(freq.total(), input.len() as u64);
}
