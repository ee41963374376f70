//! Reed-Solomon error correction codewords over GF(2^8/0x11D).
//!
//! Field multiplication is done bit by bit, without log/exp tables.
use crate::error::{QrError, Result};

/// Computes the product of two field elements modulo GF(2^8/0x11D).
pub fn multiply(x: u8, y: u8) -> u8 {
    // Russian peasant multiplication
    let mut z: u8 = 0;
    for i in (0..8).rev() {
        z = (z << 1) ^ ((z >> 7) * 0x1d);
        z ^= ((y >> i) & 1) * x;
    }
    z
}

/// Returns the generator polynomial of the given degree, the product of
/// `(x - 2^i)` for `i` in `0..degree`.
///
/// Coefficients are stored from highest to lowest power, excluding the leading
/// term which is always 1. For example the polynomial x^2 + 3x + 2 is `[3, 2]`.
pub fn compute_divisor(degree: usize) -> Result<Vec<u8>> {
    if !(1..=255).contains(&degree) {
        return Err(QrError::OutOfRange {
            what: "Reed-Solomon degree",
            value: degree as i64,
        });
    }
    let mut result = vec![0u8; degree];
    result[degree - 1] = 1; // Start off with the monomial x^0

    // Multiply by (x - r^0) * ... * (x - r^{degree-1}), dropping the highest
    // monomial term which is always 1.
    let mut root: u8 = 1;
    for _ in 0..degree {
        for j in 0..degree {
            result[j] = multiply(result[j], root);
            if j + 1 < degree {
                result[j] ^= result[j + 1];
            }
        }
        root = multiply(root, 0x02);
    }
    Ok(result)
}

/// Returns the remainder of dividing `data` by `divisor`, i.e. the error correction
/// codewords for one block.
pub fn compute_remainder(data: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; divisor.len()];
    if result.is_empty() {
        return result;
    }
    for b in data {
        let factor: u8 = b ^ result[0];
        result.rotate_left(1);
        let last = result.len() - 1;
        result[last] = 0;
        for (x, &y) in result.iter_mut().zip(divisor.iter()) {
            *x ^= multiply(y, factor);
        }
    }
    result
}

/// A divisor polynomial of fixed degree, reused for every block of one symbol.
pub struct ReedSolomonGenerator {
    divisor: Vec<u8>,
}

impl ReedSolomonGenerator {
    pub fn new(degree: usize) -> Result<Self> {
        Ok(Self {
            divisor: compute_divisor(degree)?,
        })
    }

    pub fn degree(&self) -> usize {
        self.divisor.len()
    }

    pub fn divisor(&self) -> &[u8] {
        &self.divisor
    }

    pub fn compute_remainder(&self, data: &[u8]) -> Vec<u8> {
        compute_remainder(data, &self.divisor)
    }
}
