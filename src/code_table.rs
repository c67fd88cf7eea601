//! Prefix codes derived from a [`HuffmanTree`] and the structures used to
//! apply them.
//!
//! [`CodeTable`] maps symbols to codes for the encoder and remembers the order
//! in which the traversal discovered them, which is the order entries are
//! written to the container header. [`DecodeTrie`] is the inverse: a binary
//! trie walked one bit at a time by the decoder.

use std::collections::HashMap;
use std::fmt;

use crate::error::{HuffError, Result};
use crate::tree::{HuffmanTree, Node};

/// Bit string bound to a symbol, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Parse an ASCII `'0'`/`'1'` string as stored in the container header.
    pub fn from_ascii(text: &[u8]) -> Result<Self> {
        let bits = text
            .iter()
            .map(|&c| match c {
                b'0' => Ok(false),
                b'1' => Ok(true),
                other => Err(HuffError::corrupt(format!(
                    "invalid code character {other:#04x}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { bits })
    }

    pub fn to_ascii(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| if b { b'1' } else { b'0' }).collect()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: Vec<(u8, Code)>,
    index: HashMap<u8, usize>,
}

impl CodeTable {
    /// Walk the tree left-first, `0` on left edges and `1` on right edges.
    ///
    /// A tree that is a single leaf gets the one-bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        match tree.root() {
            Node::Leaf { symbol, .. } => table.push(*symbol, Code::from_bits(vec![false])),
            root => {
                let mut path = Vec::new();
                table.collect(root, &mut path);
            }
        }
        table
    }

    fn collect(&mut self, node: &Node, path: &mut Vec<bool>) {
        match node {
            Node::Leaf { symbol, .. } => self.push(*symbol, Code::from_bits(path.clone())),
            Node::Internal { left, right, .. } => {
                path.push(false);
                self.collect(left, path);
                path.pop();
                path.push(true);
                self.collect(right, path);
                path.pop();
            }
        }
    }

    fn push(&mut self, symbol: u8, code: Code) {
        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, code));
    }

    /// Build a table from header entries, rejecting duplicate symbols.
    pub fn from_entries(entries: Vec<(u8, Code)>) -> Result<Self> {
        let mut table = CodeTable::default();
        for (symbol, code) in entries {
            if table.index.contains_key(&symbol) {
                return Err(HuffError::corrupt(format!(
                    "symbol {symbol:#04x} listed twice"
                )));
            }
            table.push(symbol, code);
        }
        Ok(table)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.index.get(&symbol).map(|&i| &self.entries[i].1)
    }

    /// Entries in discovery order.
    pub fn entries(&self) -> &[(u8, Code)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no code is a prefix of another. Quadratic, meant for checks
    /// rather than the hot path; [`DecodeTrie::build`] enforces the same
    /// property incrementally.
    pub fn is_prefix_free(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, (_, a))| {
            self.entries
                .iter()
                .enumerate()
                .all(|(j, (_, b))| i == j || !a.is_prefix_of(b))
        })
    }
}

const NO_CHILD: u32 = u32::MAX;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [u32; 2],
    symbol: Option<u8>,
}

impl TrieNode {
    fn empty() -> Self {
        Self {
            children: [NO_CHILD; 2],
            symbol: None,
        }
    }

    fn has_children(&self) -> bool {
        self.children != [NO_CHILD; 2]
    }
}

/// Result of advancing the trie by one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A complete code was matched.
    Symbol(u8),
    /// More bits are needed; continue from this node.
    Pending(usize),
}

/// Binary trie over the codes of a table, stored in an index arena.
#[derive(Debug, Clone)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    pub const ROOT: usize = 0;

    /// Insert every code of `table`; fails if the codes are not prefix-free.
    pub fn build(table: &CodeTable) -> Result<Self> {
        let mut trie = DecodeTrie {
            nodes: vec![TrieNode::empty()],
        };
        for (symbol, code) in table.entries() {
            trie.insert(*symbol, code)?;
        }
        Ok(trie)
    }

    fn insert(&mut self, symbol: u8, code: &Code) -> Result<()> {
        if code.is_empty() {
            return Err(HuffError::corrupt(format!(
                "empty code for symbol {symbol:#04x}"
            )));
        }
        let mut at = Self::ROOT;
        for &bit in code.bits() {
            if self.nodes[at].symbol.is_some() {
                return Err(HuffError::corrupt(format!(
                    "code {code} for symbol {symbol:#04x} extends another code"
                )));
            }
            let slot = self.nodes[at].children[bit as usize];
            at = if slot == NO_CHILD {
                let next = self.nodes.len();
                self.nodes.push(TrieNode::empty());
                self.nodes[at].children[bit as usize] = next as u32;
                next
            } else {
                slot as usize
            };
        }
        let node = &mut self.nodes[at];
        if node.symbol.is_some() || node.has_children() {
            return Err(HuffError::corrupt(format!(
                "code {code} for symbol {symbol:#04x} is not prefix-free"
            )));
        }
        node.symbol = Some(symbol);
        Ok(())
    }

    /// Follow `bit` from node `at`. `None` means no code continues this way,
    /// or `at` is not a node of this trie.
    #[inline]
    pub(crate) fn step(&self, at: usize, bit: bool) -> Option<Step> {
        let next = self.nodes.get(at)?.children[bit as usize];
        if next == NO_CHILD {
            return None;
        }
        let next = next as usize;
        Some(match self.nodes[next].symbol {
            Some(symbol) => Step::Symbol(symbol),
            None => Step::Pending(next),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Alphabet;
    use crate::frequency::count_symbols;

    fn table_for(data: &[u8]) -> CodeTable {
        let freq = count_symbols(data, Alphabet::Bytes).unwrap();
        CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap())
    }

    #[test]
    fn most_frequent_gets_shortest_code() {
        let table = table_for(b"aaabbbbcc");
        let b = table.get(b'b').unwrap().len();
        assert!(b <= table.get(b'a').unwrap().len());
        assert!(b <= table.get(b'c').unwrap().len());
        assert_eq!(table.get(b'b').unwrap().to_string(), "0");
        assert!(table.is_prefix_free());
    }

    #[test]
    fn single_symbol_gets_zero() {
        let table = table_for(&[b'x'; 50]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0], (b'x', Code::from_ascii(b"0").unwrap()));
    }

    #[test]
    fn ascii_codes() {
        let code = Code::from_ascii(b"1011").unwrap();
        assert_eq!(code.bits(), &[true, false, true, true]);
        assert_eq!(code.to_ascii(), b"1011");
        assert!(Code::from_ascii(b"10x").is_err());
    }

    #[test]
    fn trie_rejects_prefix_conflicts() {
        let entries = vec![
            (b'a', Code::from_ascii(b"0").unwrap()),
            (b'b', Code::from_ascii(b"01").unwrap()),
        ];
        let table = CodeTable::from_entries(entries).unwrap();
        assert!(!table.is_prefix_free());
        assert!(matches!(
            DecodeTrie::build(&table),
            Err(HuffError::CorruptContainer(_))
        ));

        let entries = vec![
            (b'a', Code::from_ascii(b"01").unwrap()),
            (b'b', Code::from_ascii(b"0").unwrap()),
        ];
        let table = CodeTable::from_entries(entries).unwrap();
        assert!(DecodeTrie::build(&table).is_err());
    }

    #[test]
    fn duplicate_symbols_rejected() {
        let entries = vec![
            (b'a', Code::from_ascii(b"0").unwrap()),
            (b'a', Code::from_ascii(b"1").unwrap()),
        ];
        assert!(CodeTable::from_entries(entries).is_err());
    }

    #[test]
    fn trie_steps_match_codes() {
        let table = table_for(b"aaabbbbcc");
        let trie = DecodeTrie::build(&table).unwrap();
        for (symbol, code) in table.entries() {
            let mut at = DecodeTrie::ROOT;
            let (last, init) = code.bits().split_last().unwrap();
            for &bit in init {
                match trie.step(at, bit) {
                    Some(Step::Pending(next)) => at = next,
                    other => panic!("unexpected {other:?}"),
                }
            }
            assert_eq!(trie.step(at, *last), Some(Step::Symbol(*symbol)));
        }
    }

    #[test]
    fn incomplete_trie_has_dead_ends() {
        let table = CodeTable::from_entries(vec![(b'x', Code::from_ascii(b"0").unwrap())]).unwrap();
        let trie = DecodeTrie::build(&table).unwrap();
        assert_eq!(trie.step(DecodeTrie::ROOT, false), Some(Step::Symbol(b'x')));
        assert_eq!(trie.step(DecodeTrie::ROOT, true), None);
    }

    #[test]
    fn step_outside_arena_is_none() {
        let table = table_for(b"aaabbbbcc");
        let trie = DecodeTrie::build(&table).unwrap();
        assert_eq!(trie.step(trie.nodes.len(), false), None);
        assert_eq!(trie.step(usize::MAX, true), None);
    }
}
