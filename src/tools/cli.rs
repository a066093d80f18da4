use clap::Parser;
use log::{info, warn};

use super::options::{HuffOpts, Verbosity, DEFAULT_STREAM_BYTES};

/// Demo sentence, trailing NUL included.
pub const DEMO_TEXT: &str = "Now is the winter of our discount tents.\0";

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds a huffman code for a piece of text, encodes it and decodes it again",
    long_about = "
    Counts every byte of the text, builds a huffman tree from the counts, prints the
    code of every byte used, encodes the text into a bitstream and decodes it back.
    The tree is not stored in the bitstream: decoding reuses the tree built in memory."
)]
pub struct Args {
    /// Text to compress. Defaults to the built in demo sentence.
    #[clap()]
    text: Option<String>,

    /// Stop decoding at this byte value instead of after a symbol count.
    /// The value is appended to the text if the text does not already end with it.
    #[clap(short = 's', long = "sentinel")]
    sentinel: Option<u8>,

    /// Size of the encoded stream buffer in bytes
    #[clap(short = 'b', long = "buffer", default_value_t = DEFAULT_STREAM_BYTES)]
    stream_bytes: usize,

    /// Do not log the frequency, tree and code tables
    #[clap(short = 'q', long = "no-dump")]
    no_dump: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the command line into options and the bytes to compress.
pub fn init_huff_opts() -> (HuffOpts, Vec<u8>) {
    opts_from_args(Args::parse())
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> (HuffOpts, Vec<u8>) {
    let mut opts = HuffOpts::new();

    opts.verbose = Verbosity::from_level(args.v);
    log::set_max_level(opts.verbose.level_filter());

    opts.stream_bytes = args.stream_bytes;
    opts.sentinel = args.sentinel;
    opts.dump_tables = !args.no_dump;

    let mut data = match args.text {
        Some(text) => text.into_bytes(),
        None => DEMO_TEXT.as_bytes().to_vec(),
    };
    if let Some(value) = opts.sentinel {
        if data.last() != Some(&value) {
            data.push(value);
        }
        if data.iter().filter(|&&b| b == value).count() > 1 {
            warn!(
                "Sentinel {} occurs inside the text; decoding will stop at its first occurrence.",
                value
            );
        }
    }

    // Below we report initialization status to the user
    info!("---- Huffmania Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    info!("Stream buffer set to {} bytes", opts.stream_bytes);
    match opts.sentinel {
        Some(value) => info!("Decoding stops at sentinel {}", value),
        None => info!("Decoding stops after {} symbols", data.len()),
    }
    info!("---- Huffmania Initialization End ----\n");

    (opts, data)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> (HuffOpts, Vec<u8>) {
        opts_from_args(Args::parse_from(argv))
    }

    #[test]
    fn defaults_test() {
        let (opts, data) = parse(&["huffmania"]);
        assert_eq!(data, DEMO_TEXT.as_bytes());
        assert_eq!(opts.sentinel, None);
        assert_eq!(opts.stream_bytes, 8192);
        assert!(opts.dump_tables);
        assert_eq!(opts.verbose, Verbosity::Info);
    }

    #[test]
    fn sentinel_appended_test() {
        let (opts, data) = parse(&["huffmania", "-s", "0", "abc"]);
        assert_eq!(opts.sentinel, Some(0));
        assert_eq!(data, b"abc\0");
    }

    #[test]
    fn sentinel_not_doubled_test() {
        let (_, data) = parse(&["huffmania", "--sentinel", "99", "abc"]);
        assert_eq!(data, b"abc");
    }

    #[test]
    fn flags_test() {
        let (opts, _) = parse(&["huffmania", "-q", "-b", "16", "-v", "5", "x"]);
        assert!(!opts.dump_tables);
        assert_eq!(opts.stream_bytes, 16);
        assert_eq!(opts.verbose, Verbosity::Trace);
    }
}
