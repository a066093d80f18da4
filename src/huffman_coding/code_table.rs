//! Flattens a huffman tree into a table of codes.
//!
//! Every used symbol's code is packed back to back into one bit buffer, in depth-first
//! (left before right) leaf order. The table keeps the offset and length of each code in
//! that buffer. Generation takes two walks over the tree: the first only measures code
//! lengths so the total size can be checked against the buffer, the second writes the bits.
//!

use std::ops::Range;

use log::{debug, error, info};

use super::tree::HuffmanTree;
use crate::bitstream::BitStream;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::ALPHABET_SIZE;

/// Worst case packed size: codes of length 1, 2, ... 256 for 257 tokens, minus one.
pub const MAX_TABLE_BITS: usize = (ALPHABET_SIZE + 1) * ALPHABET_SIZE - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Bit offset of each symbol's code in packed.
    offsets: [usize; ALPHABET_SIZE],
    /// Code length in bits. Zero means the symbol has no code.
    lengths: [usize; ALPHABET_SIZE],
    /// All codes, root-side bit first.
    packed: BitStream,
}

impl CodeTable {
    /// Generate the code table for tree.
    ///
    /// When the tree holds a single symbol its root is a leaf at depth 0; that symbol gets
    /// the one bit code `0` so every occurrence still costs a bit on the stream.
    pub fn generate(tree: &HuffmanTree) -> Result<Self> {
        let mut table = Self {
            offsets: [0; ALPHABET_SIZE],
            lengths: [0; ALPHABET_SIZE],
            packed: BitStream::with_capacity(MAX_TABLE_BITS),
        };

        let mut path: Vec<bool> = Vec::with_capacity(ALPHABET_SIZE);
        if tree.is_single_symbol() {
            path.push(false);
        }

        // Pass 1: sizes only.
        let mut total_bits = 0;
        walk(tree, tree.root(), &mut path, &mut |symbol: usize, code: &[bool]| {
            table.lengths[symbol] = code.len();
            total_bits += code.len();
            Ok(())
        })?;
        if total_bits > MAX_TABLE_BITS {
            error!(
                "Code table needs {} bits but only {} are available.",
                total_bits, MAX_TABLE_BITS
            );
            return Err(HuffError::CapacityExceeded {
                needed: total_bits,
                capacity: MAX_TABLE_BITS,
            });
        }
        debug!("Total bitcount of all codes: {} bits", total_bits);

        // Pass 2: each code starts where the previous one ended.
        let packed = &mut table.packed;
        let offsets = &mut table.offsets;
        walk(tree, tree.root(), &mut path, &mut |symbol: usize, code: &[bool]| {
            offsets[symbol] = packed.len();
            for &bit in code {
                packed.write_bit(bit)?;
            }
            Ok(())
        })?;

        info!(
            "Code table: {} symbols, {} bits packed",
            tree.leaf_count(),
            table.packed.len()
        );
        Ok(table)
    }

    /// Code length of symbol in bits, 0 if it has no code.
    pub fn len(&self, symbol: u8) -> usize {
        self.lengths[symbol as usize]
    }

    pub fn offset(&self, symbol: u8) -> usize {
        self.offsets[symbol as usize]
    }

    pub fn has_code(&self, symbol: u8) -> bool {
        self.lengths[symbol as usize] > 0
    }

    /// Range of packed bits holding symbol's code, None if it has no code.
    pub fn bit_range(&self, symbol: u8) -> Option<Range<usize>> {
        let len = self.len(symbol);
        if len == 0 {
            return None;
        }
        let start = self.offset(symbol);
        Some(start..start + len)
    }

    /// The packed buffer holding every code.
    pub fn packed(&self) -> &BitStream {
        &self.packed
    }

    /// Total bits used by all codes together.
    pub fn total_bits(&self) -> usize {
        self.packed.len()
    }

    /// Symbol's code as a string of '0' and '1'.
    pub fn code(&self, symbol: u8) -> Option<String> {
        let range = self.bit_range(symbol)?;
        range
            .map(|pos| self.packed.bit_at(pos).map(|bit| if bit { '1' } else { '0' }))
            .collect::<Result<String>>()
            .ok()
    }

    /// Log the code of every symbol that has one.
    pub fn dump(&self) {
        for symbol in 0..=u8::MAX {
            if let Some(code) = self.code(symbol) {
                info!("Token: {} -> {}", symbol, code);
            }
        }
    }
}

/// Depth first walk, left before right, calling visit(symbol, path) at every leaf.
/// Path holds the root-to-node bits on the way down.
fn walk<F>(tree: &HuffmanTree, idx: usize, path: &mut Vec<bool>, visit: &mut F) -> Result<()>
where
    F: FnMut(usize, &[bool]) -> Result<()>,
{
    match tree.children(idx) {
        None => visit(idx, path),
        Some((left, right)) => {
            path.push(false);
            walk(tree, left, path, visit)?;
            path.pop();
            path.push(true);
            walk(tree, right, path, visit)?;
            path.pop();
            Ok(())
        }
    }
}
