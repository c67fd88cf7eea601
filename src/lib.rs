//! Whole-file Huffman compressor.
//!
//! Compression counts symbol frequencies, builds a Huffman tree with a binary
//! min-heap, derives prefix codes from it and writes a self-describing
//! container: the code table as ASCII bit strings, two little-endian counts
//! and the bit-packed payload. See [`container`] for the exact layout.
//!
//! ```
//! let packed = huffpack::compress(b"aaabbbbcc").unwrap();
//! assert_eq!(huffpack::decompress(&packed).unwrap(), b"aaabbbbcc");
//! ```

pub mod bit_io;
pub mod code_table;
pub mod compress;
pub mod config;
pub mod container;
pub mod decompress;
pub mod error;
pub mod frequency;
pub mod io_utils;
pub mod min_heap;
pub mod tree;

pub use code_table::{Code, CodeTable, DecodeTrie};
pub use compress::{compress, compress_with_config, compress_with_report, CompressionReport};
pub use config::{Alphabet, Config};
pub use container::{parse_header, ContainerHeader};
pub use decompress::{decompress, decompress_with_limit};
pub use error::{HuffError, Result};
pub use frequency::{count_symbols, FrequencyTable};
pub use tree::{HuffmanTree, Node};
