//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffmania::tools::cli::init_huff_opts;
use huffmania::Codec;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )?;

    let (opts, data) = init_huff_opts();

    // Scan the buffer once, then make the tree and flatten it into codes
    let codec = Codec::new(&data, &opts)?;

    let mut encoded = codec.encode(&data)?;

    // The decoder needs the tree that is still held in memory by codec
    info!("Decoding to stdout:");
    let decoded = codec.decode(&mut encoded)?;
    println!("{}", String::from_utf8_lossy(&decoded));

    if decoded == data {
        info!("Decoded!");
    } else {
        error!(
            "Decoded {} bytes that do not match the {} byte input.",
            decoded.len(),
            data.len()
        );
    }
    Ok(())
}
