//! huffmania options - structs and impls for library level settings
use std::{fmt::Display, fmt::Formatter};

use log::LevelFilter;

/// Default encoded stream buffer: 8k bytes.
pub const DEFAULT_STREAM_BYTES: usize = 8192;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the number of -v flags to a verbosity, as the command line counts them.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Defines all settings that control an encode/decode cycle
pub struct HuffOpts {
    /// Size of the encoded output stream in bytes
    pub stream_bytes: usize,
    /// Stop decoding at this byte value instead of after a symbol count
    pub sentinel: Option<u8>,
    /// User feedback level setting
    pub verbose: Verbosity,
    /// Log the frequency table, tree and code table while building them
    pub dump_tables: bool,
}

impl HuffOpts {
    /// Default parameters
    pub fn new() -> Self {
        Self {
            stream_bytes: DEFAULT_STREAM_BYTES,
            sentinel: None,
            verbose: Verbosity::Info,
            dump_tables: false,
        }
    }

    /// Capacity of the encoded stream in bits.
    pub fn stream_bits(&self) -> usize {
        self.stream_bytes * 8
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}
