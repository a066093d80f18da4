//! Huffman coding of a byte buffer, with no allocation on the encode/decode paths.
//!
//! Counts the bytes of an input, builds a huffman tree from the counts, flattens the tree
//! into a packed code table, then encodes the input into a bitstream and decodes it back.
//!
//! The tree is not serialized into the bitstream. The decoder must be given the same tree
//! (the same `Codec`) that produced the encoding.
//!
//! Basic usage:
//!
//! ```
//! use huffmania::{Codec, HuffOpts};
//!
//! let data = b"Now is the winter of our discount tents.";
//! let codec = Codec::new(data, &HuffOpts::default())?;
//! let mut encoded = codec.encode(data)?;
//! assert_eq!(codec.decode(&mut encoded)?, data);
//! # Ok::<(), huffmania::HuffError>(())
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::BitStream;
pub use compression::codec::{Codec, Encoded};
pub use compression::decode::Termination;
pub use error::{HuffError, Result};
pub use huffman_coding::{code_table::CodeTable, tree::HuffmanTree};
pub use tools::freq_count::FrequencyTable;
pub use tools::options::HuffOpts;
