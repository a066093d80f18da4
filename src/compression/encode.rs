use log::{error, trace};

use crate::bitstream::BitStream;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;

/// Append the code of every byte in data to out.
///
/// Fails with UnknownSymbol on a byte that has no code, and with CapacityExceeded once
/// out is full. Bits already written before a failure stay in out.
pub fn encode(data: &[u8], table: &CodeTable, out: &mut BitStream) -> Result<()> {
    let packed = table.packed();
    for &byte in data {
        let range = match table.bit_range(byte) {
            Some(range) => range,
            None => {
                error!("Symbol {} is not in the code table.", byte);
                return Err(HuffError::UnknownSymbol { symbol: byte });
            }
        };
        for pos in range {
            out.write_bit(packed.bit_at(pos)?)?;
        }
    }
    trace!("Encoded {} bytes into {} bits", data.len(), out.len());
    Ok(())
}

/// Number of bits data will take once encoded, without writing anything.
pub fn encoded_len(data: &[u8], table: &CodeTable) -> Result<usize> {
    data.iter().try_fold(0, |bits, &byte| match table.len(byte) {
        0 => Err(HuffError::UnknownSymbol { symbol: byte }),
        len => Ok(bits + len),
    })
}
