//! BitStream: a fixed capacity bit buffer with a single cursor.
//!
//! Bits are addressed most significant bit first within each byte. The backing storage is
//! allocated once, when the stream is created, and never grows.
//!
use log::error;

use crate::error::{HuffError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    /// Backing storage, sized once at creation.
    buffer: Vec<u8>,
    /// Current read/write position in BITS.
    cursor: usize,
    /// Number of valid bits. Reads at or past this point fail.
    len: usize,
    /// Maximum number of bits this stream can hold.
    capacity: usize,
}

impl BitStream {
    /// Create an empty stream able to hold `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; (capacity + 7) / 8],
            cursor: 0,
            len: 0,
            capacity,
        }
    }

    /// Create an empty stream able to hold `bytes` full bytes.
    pub fn with_byte_capacity(bytes: usize) -> Self {
        Self::with_capacity(bytes * 8)
    }

    /// Put a bit in the stream and advance the cursor.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        if self.cursor >= self.capacity {
            error!(
                "Bitstream full at bit {} (capacity {} bits).",
                self.cursor, self.capacity
            );
            return Err(HuffError::CapacityExceeded {
                needed: self.cursor + 1,
                capacity: self.capacity,
            });
        }
        let mask = 0x80 >> (self.cursor % 8);
        // Set or clear, so a reset stream can be written over.
        if bit {
            self.buffer[self.cursor / 8] |= mask;
        } else {
            self.buffer[self.cursor / 8] &= !mask;
        }
        self.cursor += 1;
        self.len = self.len.max(self.cursor);
        Ok(())
    }

    /// Get the bit under the cursor and advance the cursor.
    pub fn read_bit(&mut self) -> Result<bool> {
        let bit = self.bit_at(self.cursor)?;
        self.cursor += 1;
        Ok(bit)
    }

    /// Random access read. Does not move the cursor.
    pub fn bit_at(&self, position: usize) -> Result<bool> {
        if position >= self.len {
            return Err(HuffError::StreamExhausted {
                position,
                len: self.len,
            });
        }
        Ok(self.buffer[position / 8] & (0x80 >> (position % 8)) != 0)
    }

    /// Move the cursor back to the start. Contents are kept.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor position in bits.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bits written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bits not yet read past the cursor.
    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.cursor)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whole bytes needed to hold the written bits.
    pub fn byte_len(&self) -> usize {
        (self.len + 7) / 8
    }

    /// The written bytes, padded with zeros in the least significant bits of the last byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.byte_len()]
    }

    /// Debugging function. Report the cursor as [bytes.bits].
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor / 8, self.cursor % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitStream;
    use crate::error::HuffError;

    #[test]
    fn msb_first_test() {
        let mut bs = BitStream::with_capacity(16);
        for bit in [true, false, false, false, false, false, false, true, true] {
            bs.write_bit(bit).unwrap();
        }
        assert_eq!(bs.len(), 9);
        assert_eq!(bs.byte_len(), 2);
        assert_eq!(bs.as_bytes(), &[0b1000_0001, 0b1000_0000]);
    }

    #[test]
    fn write_reset_read_test() {
        let mut bs = BitStream::with_capacity(8);
        bs.write_bit(true).unwrap();
        bs.write_bit(false).unwrap();
        bs.write_bit(true).unwrap();
        bs.reset();
        assert_eq!(bs.read_bit(), Ok(true));
        assert_eq!(bs.read_bit(), Ok(false));
        assert_eq!(bs.read_bit(), Ok(true));
        assert_eq!(bs.loc(), "[0.3]");
    }

    #[test]
    fn over_read_is_an_error_test() {
        let mut bs = BitStream::with_capacity(8);
        bs.write_bit(false).unwrap();
        bs.reset();
        assert_eq!(bs.read_bit(), Ok(false));
        assert_eq!(
            bs.read_bit(),
            Err(HuffError::StreamExhausted {
                position: 1,
                len: 1
            })
        );
    }

    #[test]
    fn capacity_test() {
        let mut bs = BitStream::with_capacity(2);
        bs.write_bit(true).unwrap();
        bs.write_bit(true).unwrap();
        assert_eq!(
            bs.write_bit(true),
            Err(HuffError::CapacityExceeded {
                needed: 3,
                capacity: 2
            })
        );
        assert_eq!(bs.len(), 2);
    }

    #[test]
    fn overwrite_after_reset_test() {
        let mut bs = BitStream::with_byte_capacity(1);
        bs.write_bit(true).unwrap();
        bs.write_bit(true).unwrap();
        bs.reset();
        bs.write_bit(false).unwrap();
        assert_eq!(bs.len(), 2);
        assert_eq!(bs.bit_at(0), Ok(false));
        assert_eq!(bs.bit_at(1), Ok(true));
        assert_eq!(bs.remaining(), 1);
    }
}
