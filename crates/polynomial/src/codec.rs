// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Conversion between element arrays and raw byte payloads.
//!
//! A payload is the densely packed encoding of each element in order: `n` elements of width
//! `F::WIDTH` occupy exactly `n * F::WIDTH` bytes. There is no header, checksum or version, so
//! the element count has to be known by the caller when decoding.

use crate::{FieldElement, PolynomialError};

/// Number of bytes `count` elements of `F` occupy.
pub fn byte_len<F: FieldElement>(count: usize) -> Result<usize, PolynomialError> {
    count
        .checked_mul(F::WIDTH)
        .ok_or(PolynomialError::TooLarge { count })
}

/// Encodes `elements` into a freshly allocated payload.
pub fn encode_elements<F: FieldElement>(elements: &[F]) -> Result<Vec<u8>, PolynomialError> {
    let mut out = vec![0u8; byte_len::<F>(elements.len())?];
    encode_into(elements, &mut out)?;
    Ok(out)
}

/// Encodes `elements` into `out`, which must be exactly `elements.len() * F::WIDTH` bytes.
pub fn encode_into<F: FieldElement>(elements: &[F], out: &mut [u8]) -> Result<(), PolynomialError> {
    let expected = byte_len::<F>(elements.len())?;
    if out.len() != expected {
        return Err(PolynomialError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }
    for (element, chunk) in elements.iter().zip(out.chunks_exact_mut(F::WIDTH)) {
        element.write_bytes(chunk);
    }
    Ok(())
}

/// Decodes exactly `count` elements from `bytes`.
///
/// Fails if `bytes` is not `count * F::WIDTH` long or if any element is not canonical.
pub fn decode_elements<F: FieldElement>(
    bytes: &[u8],
    count: usize,
) -> Result<Vec<F>, PolynomialError> {
    let expected = byte_len::<F>(count)?;
    if bytes.len() != expected {
        return Err(PolynomialError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    bytes
        .chunks_exact(F::WIDTH)
        .enumerate()
        .map(|(index, chunk)| F::read_bytes(chunk).ok_or(PolynomialError::NonCanonical { index }))
        .collect()
}
