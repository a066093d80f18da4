//! The huffman module turns symbol frequencies into codes.
//!
//! `tree` builds the huffman tree in a fixed arena by repeatedly merging the two lightest
//! nodes. `code_table` walks that tree and packs every symbol's code into one bit buffer.
//!
//! Codes are not canonical: their exact bits depend on the tie-break used while building
//! the tree, so the decoder needs the very same tree the encoder used.
//!

pub mod code_table;
pub mod tree;
