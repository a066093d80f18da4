//! The compression module runs the encode and decode sides of huffmania.
//!
//! Compression happens in the following steps:
//! - Frequency count: count every byte value in the input.
//! - Tree build: merge the two lightest nodes until one root remains.
//! - Code table: walk the tree and pack every symbol's code into one bit buffer.
//! - Encode: append each input byte's code to the output bitstream.
//!
//! Decompression rewinds the bitstream and walks the same tree from the root, one bit per
//! step, emitting a byte at every leaf. It stops after a known number of symbols, or at a
//! sentinel byte value when asked to.
//!
//! Everything is single threaded. Each Codec owns its own tables and buffers.
//!

pub mod codec;
pub mod decode;
pub mod encode;
