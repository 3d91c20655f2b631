// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Fixed-width field elements.

use ark_ff::{BigInt, BigInteger, PrimeField};
use std::fmt;

pub use ark_bn254::Fr;

/// A field element with a fixed serialized byte width.
///
/// `WIDTH` is the only place the byte size of an element is defined. Every conversion between
/// element arrays and byte buffers goes through [`crate::codec`], which relies on it.
pub trait FieldElement: Copy + Default + PartialEq + fmt::Debug {
    /// Number of bytes a single encoded element occupies.
    const WIDTH: usize;

    /// Writes the canonical encoding of `self` into `out`.
    ///
    /// `out` is exactly `WIDTH` bytes long.
    fn write_bytes(&self, out: &mut [u8]);

    /// Reads an element from exactly `WIDTH` bytes.
    ///
    /// Returns `None` if the bytes are not a canonical encoding.
    fn read_bytes(bytes: &[u8]) -> Option<Self>;
}

/// BN254 scalars are stored as their reduced value in 32 little-endian bytes.
impl FieldElement for Fr {
    const WIDTH: usize = 32;

    fn write_bytes(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.into_bigint().to_bytes_le());
    }

    fn read_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::WIDTH {
            return None;
        }
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        // from_bigint rejects values >= modulus
        Fr::from_bigint(BigInt(limbs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Field, One, Zero};

    #[test]
    fn test_fr_width_matches_modulus_size() {
        assert_eq!(Fr::WIDTH, (Fr::MODULUS_BIT_SIZE as usize).div_ceil(64) * 8);
    }

    #[test]
    fn test_small_values_are_little_endian() {
        let mut out = [0u8; 32];
        Fr::from(0x0102u64).write_bytes(&mut out);
        assert_eq!(out[0], 0x02);
        assert_eq!(out[1], 0x01);
        assert!(out[2..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_read_back_written_value() {
        let value = Fr::from(7u64).inverse().unwrap();
        let mut out = [0u8; 32];
        value.write_bytes(&mut out);
        assert_eq!(Fr::read_bytes(&out), Some(value));
    }

    #[test]
    fn test_zero_and_minus_one() {
        let mut out = [0u8; 32];
        Fr::zero().write_bytes(&mut out);
        assert_eq!(out, [0u8; 32]);

        let minus_one = -Fr::one();
        minus_one.write_bytes(&mut out);
        assert_eq!(Fr::read_bytes(&out), Some(minus_one));
    }

    #[test]
    fn test_rejects_modulus_and_above() {
        let modulus = Fr::MODULUS.to_bytes_le();
        assert_eq!(Fr::read_bytes(&modulus), None);
        assert_eq!(Fr::read_bytes(&[0xff; 32]), None);
    }

    #[test]
    fn test_rejects_wrong_width() {
        assert_eq!(Fr::read_bytes(&[0u8; 31]), None);
        assert_eq!(Fr::read_bytes(&[0u8; 33]), None);
    }
}
