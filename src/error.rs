//! Error types for the huffman pipeline.
//!
//! Every failure the pipeline can hit is its own variant so callers (and tests) can
//! match on the exact condition instead of parsing a message.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, HuffError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffError {
    /// A bit or byte buffer would grow past its fixed bound.
    #[error("capacity exceeded: need {needed}, capacity is {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// The encoder was handed a byte that never appeared when the tree was built.
    #[error("symbol {symbol} has no code in this tree")]
    UnknownSymbol { symbol: u8 },

    /// No symbol had a nonzero count, so there is nothing to build a tree from.
    #[error("cannot build a tree without at least one symbol")]
    DegenerateTree,

    /// Sentinel decoding stopped while encoded bits were still waiting to be read.
    #[error("sentinel reached after {decoded} symbols with {remaining_bits} bits unread")]
    PrematureTermination { decoded: usize, remaining_bits: usize },

    /// Read at or past the last written bit.
    #[error("read at bit {position} but only {len} bits were written")]
    StreamExhausted { position: usize, len: usize },

    /// The bitstream describes a path that does not exist in the tree.
    #[error("invalid code at bit {position}")]
    InvalidCode { position: usize },
}
