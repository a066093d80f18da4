use log::{error, trace, warn};

use crate::bitstream::BitStream;
use crate::error::{HuffError, Result};
use crate::huffman_coding::tree::HuffmanTree;

/// How the decoder knows it is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Decode exactly this many symbols.
    Count(usize),
    /// Stop right after this symbol is decoded. A real occurrence of the value earlier in
    /// the data ends decoding there.
    Sentinel(u8),
}

/// Walk the tree from the root, one bit per step (1 = right, 0 = left), until a leaf.
pub fn decode_symbol(tree: &HuffmanTree, stream: &mut BitStream) -> Result<u8> {
    let mut current = tree.root();

    // The lone symbol of a single symbol tree is coded as a single 0 bit.
    if tree.is_single_symbol() {
        let position = stream.position();
        if stream.read_bit()? {
            error!("Found a 1 bit at {} in a single symbol stream.", position);
            return Err(HuffError::InvalidCode { position });
        }
        return Ok(current as u8);
    }

    while let Some((left, right)) = tree.children(current) {
        current = if stream.read_bit()? { right } else { left };
    }
    // Leaves are slots 0-255.
    Ok(current as u8)
}

/// Decode symbols from stream into out, starting at the stream cursor. Returns how many
/// bytes were written.
///
/// Sentinel decoding that stops while bits are still unread returns PrematureTermination,
/// since the stream held more than the data up to the sentinel.
pub fn decode(
    tree: &HuffmanTree,
    stream: &mut BitStream,
    termination: Termination,
    out: &mut [u8],
) -> Result<usize> {
    if let Termination::Count(count) = termination {
        if count > out.len() {
            return Err(HuffError::CapacityExceeded {
                needed: count,
                capacity: out.len(),
            });
        }
    }

    let mut written = 0;
    loop {
        if termination == Termination::Count(written) {
            break;
        }
        if written == out.len() {
            return Err(HuffError::CapacityExceeded {
                needed: written + 1,
                capacity: out.len(),
            });
        }

        let symbol = decode_symbol(tree, stream)?;
        out[written] = symbol;
        written += 1;

        if termination == Termination::Sentinel(symbol) {
            let remaining_bits = stream.remaining();
            if remaining_bits > 0 {
                warn!(
                    "Sentinel {} decoded at symbol {} with {} bits left on the stream.",
                    symbol, written, remaining_bits
                );
                return Err(HuffError::PrematureTermination {
                    decoded: written,
                    remaining_bits,
                });
            }
            break;
        }
    }
    trace!("Decoded {} symbols, stream at {}", written, stream.loc());
    Ok(written)
}
