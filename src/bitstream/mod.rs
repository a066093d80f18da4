//! The bitstream module is the bit level I/O layer of huffmania.
//!
//! It knows nothing about huffman codes. The same type backs both the packed code table
//! (written once, then read many times by offset) and the encoded output stream (written,
//! reset, then read back in order).
//!
pub mod stream;

pub use stream::BitStream;
