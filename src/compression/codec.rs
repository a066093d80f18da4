//! One complete encode/decode cycle.
//!
//! A Codec owns the frequency table, tree and code table built from one input. Every cycle
//! builds its own, so nothing here is shared between cycles. The tree is not written to
//! the output: decoding needs the same Codec (and therefore the same in-memory tree) that
//! did the encoding.

use log::{error, info};

use super::decode::{decode, Termination};
use super::encode::encode;
use crate::bitstream::BitStream;
use crate::error::{HuffError, Result};
use crate::huffman_coding::{code_table::CodeTable, tree::HuffmanTree};
use crate::tools::freq_count::FrequencyTable;
use crate::tools::options::HuffOpts;

/// An encoded stream plus the number of symbols it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub stream: BitStream,
    pub symbols: usize,
}

impl Encoded {
    /// Encoded length in bits.
    pub fn bits(&self) -> usize {
        self.stream.len()
    }

    pub fn bytes(&self) -> &[u8] {
        self.stream.as_bytes()
    }
}

#[derive(Debug, Clone)]
pub struct Codec {
    freqs: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
    opts: HuffOpts,
}

impl Codec {
    /// Count data and build the tree and code table for it.
    pub fn new(data: &[u8], opts: &HuffOpts) -> Result<Self> {
        if data.len() > u32::MAX as usize {
            error!("Input of {} bytes overflows the frequency counters.", data.len());
            return Err(HuffError::CapacityExceeded {
                needed: data.len(),
                capacity: u32::MAX as usize,
            });
        }
        Self::from_frequencies(FrequencyTable::from_data(data), opts)
    }

    /// Build from counts gathered elsewhere, e.g. over several chunks.
    pub fn from_frequencies(freqs: FrequencyTable, opts: &HuffOpts) -> Result<Self> {
        if opts.dump_tables {
            freqs.dump();
        }
        let tree = HuffmanTree::build(&freqs)?;
        let table = CodeTable::generate(&tree)?;
        if opts.dump_tables {
            tree.dump();
            table.dump();
        }
        Ok(Self {
            freqs,
            tree,
            table,
            opts: opts.clone(),
        })
    }

    /// Encode data into a fresh stream sized by the options.
    pub fn encode(&self, data: &[u8]) -> Result<Encoded> {
        let mut stream = BitStream::with_byte_capacity(self.opts.stream_bytes);
        encode(data, &self.table, &mut stream)?;
        info!("Original stream size: {} bytes", data.len());
        info!(
            "Encoded stream size: {} bits, {} bytes",
            stream.len(),
            stream.byte_len()
        );
        Ok(Encoded {
            stream,
            symbols: data.len(),
        })
    }

    /// Rewind the stream and decode it with this codec's tree.
    ///
    /// Stops after `encoded.symbols` symbols, or at the sentinel when the options name one.
    pub fn decode(&self, encoded: &mut Encoded) -> Result<Vec<u8>> {
        encoded.stream.reset();
        let (termination, room) = match self.opts.sentinel {
            // Every symbol costs at least one bit.
            Some(value) => (Termination::Sentinel(value), encoded.stream.len()),
            None => (Termination::Count(encoded.symbols), encoded.symbols),
        };
        let mut out = vec![0_u8; room];
        let written = decode(&self.tree, &mut encoded.stream, termination, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn options(&self) -> &HuffOpts {
        &self.opts
    }
}
