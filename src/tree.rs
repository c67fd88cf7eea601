use crate::frequency::FrequencyTable;
use crate::min_heap::{MinHeap, Weighted};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Join two subtrees; `left` is the one extracted first.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Weighted for Node {
    fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Huffman tree owning its nodes.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Greedily pair the two lightest nodes until a single root remains.
    ///
    /// Returns `None` only for a table with no symbols, which
    /// [`count_symbols`](crate::count_symbols) never produces.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap = MinHeap::with_capacity(frequencies.unique());
        for (symbol, weight) in frequencies.iter() {
            heap.insert(Node::Leaf { symbol, weight });
        }
        while heap.len() > 1 {
            let a = heap.extract_min()?;
            let b = heap.extract_min()?;
            heap.insert(Node::merge(a, b));
        }
        let root = heap.extract_min()?;
        tracing::debug!(
            symbols = frequencies.unique(),
            weight = root.weight(),
            "built huffman tree"
        );
        Some(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Internal { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }
}
