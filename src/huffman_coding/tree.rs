//! Huffman tree construction.
//!
//! The tree lives in a fixed arena of 511 slots. Slots 0-255 are the leaves, one per byte
//! value, and slots 256 and up are internal nodes in the order they were created. A node is
//! a leaf exactly when it has no children.
//!
//! Construction repeatedly takes the two lightest active nodes, using a linear scan where
//! the lowest index wins ties, and merges them into the next free slot. The first node
//! taken becomes the left child. That tie-break fixes the exact shape of the tree, so two
//! builds from the same counts always give the same codes.

use log::{debug, error, trace};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::{FrequencyTable, ALPHABET_SIZE};

/// Arena size: every leaf plus the most internal nodes a strict binary tree can have.
pub const MAX_NODES: usize = ALPHABET_SIZE * 2 - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Node {
    pub weight: u64,
    /// (left, right) arena indices, or None for a leaf.
    pub kids: Option<(usize, usize)>,
}

/// Where a slot stands while the tree is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Symbol never seen, or internal slot not created yet.
    Absent,
    /// Waiting to be merged.
    Active,
    /// Already placed under a parent (or chosen as the root).
    Consumed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: [Node; MAX_NODES],
    /// Arena index of the top node.
    root: usize,
    /// First unused arena slot, i.e. 256 + number of internal nodes.
    next_free: usize,
}

impl HuffmanTree {
    /// Build a tree from the counts in freqs. The table is only read.
    /// Returns DegenerateTree if every count is zero.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut nodes = [Node::default(); MAX_NODES];
        let mut status = [Slot::Absent; MAX_NODES];

        for (symbol, &count) in freqs.counts().iter().enumerate() {
            nodes[symbol].weight = count as u64;
            if count > 0 {
                status[symbol] = Slot::Active;
            }
        }

        let mut next_free = ALPHABET_SIZE;
        let mut last_taken = None;

        loop {
            let ind1 = match smallest_active(&nodes, &status, next_free) {
                Some(idx) => idx,
                None => break,
            };
            status[ind1] = Slot::Consumed;
            last_taken = Some(ind1);

            // A lone survivor is the root: the last internal node, or the only leaf.
            let ind2 = match smallest_active(&nodes, &status, next_free) {
                Some(idx) => idx,
                None => break,
            };
            status[ind2] = Slot::Consumed;

            nodes[next_free] = Node {
                weight: nodes[ind1].weight + nodes[ind2].weight,
                kids: Some((ind1, ind2)),
            };
            status[next_free] = Slot::Active;
            trace!(
                "Node {} = {} + {} (weight {})",
                next_free,
                ind1,
                ind2,
                nodes[next_free].weight
            );
            next_free += 1;
        }

        let root = match last_taken {
            Some(idx) => idx,
            None => {
                error!("No symbols to build a huffman tree from.");
                return Err(HuffError::DegenerateTree);
            }
        };
        debug!(
            "Built tree with {} internal nodes, root {} (weight {})",
            next_free - ALPHABET_SIZE,
            root,
            nodes[root].weight
        );

        Ok(Self {
            nodes,
            root,
            next_free,
        })
    }

    /// Convenience: count data and build from it.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        Self::build(&FrequencyTable::from_data(data))
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub fn weight(&self, idx: usize) -> u64 {
        self.nodes[idx].weight
    }

    pub fn is_leaf(&self, idx: usize) -> bool {
        self.nodes[idx].kids.is_none()
    }

    pub fn children(&self, idx: usize) -> Option<(usize, usize)> {
        self.nodes[idx].kids
    }

    /// True when only one symbol was present and the root is its leaf.
    pub fn is_single_symbol(&self) -> bool {
        self.is_leaf(self.root)
    }

    /// Number of internal nodes created.
    pub fn internal_count(&self) -> usize {
        self.next_free - ALPHABET_SIZE
    }

    /// Number of leaves reachable from the root.
    pub fn leaf_count(&self) -> usize {
        self.internal_count() + 1
    }

    /// Arena indices of the internal nodes, in creation order.
    pub fn internal_nodes(&self) -> std::ops::Range<usize> {
        ALPHABET_SIZE..self.next_free
    }

    /// Log the tree shape, one node per line, indented by depth.
    pub fn dump(&self) {
        debug!("Huffman tree structure:");
        self.dump_node(self.root, 0, "root");
    }

    fn dump_node(&self, idx: usize, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        match self.nodes[idx].kids {
            None => debug!(
                "{}{} -> leaf {} [weight: {}]",
                indent, label, idx, self.nodes[idx].weight
            ),
            Some((left, right)) => {
                debug!(
                    "{}{} -> node {} [weight: {}]",
                    indent, label, idx, self.nodes[idx].weight
                );
                self.dump_node(left, depth + 1, "L");
                self.dump_node(right, depth + 1, "R");
            }
        }
    }
}

/// Index of the lightest active node in [0, scan_size), lowest index on ties.
fn smallest_active(nodes: &[Node], status: &[Slot], scan_size: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    for idx in 0..scan_size {
        if status[idx] != Slot::Active {
            continue;
        }
        match best {
            Some(b) if nodes[b].weight <= nodes[idx].weight => {}
            _ => best = Some(idx),
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_symbols_test() {
        let tree = HuffmanTree::from_data(b"aaab").unwrap();
        assert_eq!(tree.root(), 256);
        assert_eq!(tree.internal_count(), 1);
        // Lightest first: b on the left, a on the right.
        assert_eq!(tree.children(256), Some((b'b' as usize, b'a' as usize)));
        assert_eq!(tree.weight(256), 4);
    }

    #[test]
    fn equal_weights_tie_break_test() {
        let tree = HuffmanTree::from_data(b"abcd").unwrap();
        assert_eq!(tree.children(256), Some((b'a' as usize, b'b' as usize)));
        assert_eq!(tree.children(257), Some((b'c' as usize, b'd' as usize)));
        assert_eq!(tree.children(258), Some((256, 257)));
        assert_eq!(tree.root(), 258);
    }

    #[test]
    fn leaf_beats_internal_on_tie_test() {
        // After a+b merge (weight 2), c (weight 2) has the lower index and is taken first.
        let tree = HuffmanTree::from_data(b"abcc").unwrap();
        assert_eq!(tree.children(256), Some((b'a' as usize, b'b' as usize)));
        assert_eq!(tree.children(257), Some((b'c' as usize, 256)));
    }

    #[test]
    fn single_symbol_test() {
        let tree = HuffmanTree::from_data(b"aaaa").unwrap();
        assert_eq!(tree.root(), b'a' as usize);
        assert!(tree.is_single_symbol());
        assert_eq!(tree.internal_count(), 0);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.weight(tree.root()), 4);
    }

    #[test]
    fn empty_input_test() {
        assert_eq!(
            HuffmanTree::from_data(b"").unwrap_err(),
            HuffError::DegenerateTree
        );
    }

    #[test]
    fn frequency_table_left_untouched_test() {
        let freqs = FrequencyTable::from_data(b"hello");
        let before = freqs.clone();
        let _ = HuffmanTree::build(&freqs).unwrap();
        assert_eq!(freqs, before);
    }

    #[test]
    fn full_alphabet_test() {
        let data: Vec<u8> = (0..=255).collect();
        let tree = HuffmanTree::from_data(&data).unwrap();
        assert_eq!(tree.internal_count(), 255);
        assert_eq!(tree.root(), MAX_NODES - 1);
        assert_eq!(tree.weight(tree.root()), 256);
        for idx in tree.internal_nodes() {
            let (l, r) = tree.children(idx).unwrap();
            assert_eq!(tree.weight(idx), tree.weight(l) + tree.weight(r));
        }
    }
}
