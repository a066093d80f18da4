use log::info;

pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count of every byte value. Can be fed in chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Build a table from a single buffer.
    pub fn from_data(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.accumulate(data);
        table
    }

    pub fn reset(&mut self) {
        self.counts = [0; ALPHABET_SIZE];
    }

    /// Add the bytes in data to the running counts. Callers must keep the total under u32::MAX.
    pub fn accumulate(&mut self, data: &[u8]) {
        data.iter().for_each(|&el| self.counts[el as usize] += 1);
    }

    pub fn count(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    pub fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Number of distinct symbols seen.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Log every nonzero count.
    pub fn dump(&self) {
        for (symbol, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                info!("Frequency for {} is {}", symbol, count);
            }
        }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
