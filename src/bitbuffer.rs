use crate::error::{QrError, Result};

/// An appendable sequence of bits (0s and 1s).
///
/// Bits are only ever added at the end; once handed to a [`QrSegment`](crate::QrSegment)
/// the buffer is read as an ordered bit sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Appends the `len` low-order bits of `val`, most significant bit first.
    ///
    /// Fails if `len > 31` or if `val` has a set bit at or above position `len`.
    pub fn append_bits(&mut self, val: u32, len: u8) -> Result<()> {
        if len > 31 {
            return Err(QrError::OutOfRange {
                what: "Bit length",
                value: i64::from(len),
            });
        }
        if val >> len != 0 {
            return Err(QrError::ValueTooWide { value: val, len });
        }
        self.bits.extend((0..len).rev().map(|i| get_bit(val, i)));
        Ok(())
    }

    /// Appends each byte as 8 bits, most significant bit first.
    pub fn append_bytes(&mut self, data: &[u8]) {
        self.bits.reserve(data.len() * 8);
        for &b in data {
            self.bits.extend((0..8).rev().map(|i| get_bit(b.into(), i)));
        }
    }

    pub(crate) fn extend_from_bits(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// Packs the bits into bytes, MSB first. A trailing partial byte is zero-padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }
}

pub(crate) fn get_bit(x: u32, i: u8) -> bool {
    ((x >> i) & 1) != 0
}
