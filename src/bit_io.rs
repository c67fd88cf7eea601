//! MSB-first bit packing shared by the serializer and the decoder.

/// Accumulates bits into bytes, most significant bit first.
#[derive(Debug, Default)]
pub struct BitWriter {
    out: Vec<u8>,
    byte: u8,
    used: u8,
    bits_written: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer appending after existing bytes, e.g. a serialized header.
    pub fn with_prefix(out: Vec<u8>) -> Self {
        Self {
            out,
            ..Self::default()
        }
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.byte = (self.byte << 1) | bit as u8;
        self.used += 1;
        self.bits_written += 1;
        if self.used == 8 {
            self.out.push(self.byte);
            self.byte = 0;
            self.used = 0;
        }
    }

    pub fn write_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Bits written so far, excluding any prefix and padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Zero-pad the trailing partial byte and return the buffer together
    /// with the number of padding bits added.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let mut padding = 0;
        if self.used > 0 {
            padding = 8 - self.used;
            self.out.push(self.byte << padding);
        }
        (self.out, padding)
    }
}

/// Reads bits MSB-first from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn bits_read(&self) -> usize {
        self.pos
    }

    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.pos / 8)?;
        let bit = (byte >> (7 - (self.pos % 8))) & 1 != 0;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits_remaining();
        (n, Some(n))
    }
}
