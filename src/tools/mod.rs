//! The tools module provides helper pieces for huffmania.
//!
//! The tools are:
//! - cli: Command line interface for the demo binary.
//! - freq_count: Frequency table over the 256 byte values.
//! - options: Settings for an encode/decode cycle.
//!
pub mod cli;
pub mod freq_count;
pub mod options;
