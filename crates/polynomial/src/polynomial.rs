// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense polynomial container.

use crate::codec::{byte_len, decode_elements, encode_elements};
use crate::{FieldElement, Fr, PolynomialError};

/// A polynomial represented as a dense array of field elements.
///
/// The elements are coefficients or evaluations depending on the caller; this type does not
/// interpret them. The element count is the only shape metadata. The buffer is exclusively
/// owned, so handing a polynomial to a store by value leaves no aliased copy behind.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<F: FieldElement = Fr> {
    coefficients: Vec<F>,
}

impl<F: FieldElement> Polynomial<F> {
    /// Creates a new polynomial from a vector of elements.
    pub fn new(coefficients: Vec<F>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial of `len` zero elements.
    pub fn zero(len: usize) -> Self {
        Self {
            coefficients: vec![F::default(); len],
        }
    }

    /// Returns the elements of the polynomial.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    pub fn coefficients_mut(&mut self) -> &mut [F] {
        &mut self.coefficients
    }

    /// Consumes the polynomial and returns its element buffer.
    pub fn into_coefficients(self) -> Vec<F> {
        self.coefficients
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Size of the encoded payload in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.coefficients.len() * F::WIDTH
    }

    /// Encodes the polynomial as its raw payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PolynomialError> {
        encode_elements(&self.coefficients)
    }

    /// Rebuilds a polynomial of `len` elements from its raw payload.
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self, PolynomialError> {
        Ok(Self::new(decode_elements(bytes, len)?))
    }

    /// Allocates a zeroed payload buffer sized for `len` elements.
    pub fn payload_buffer(len: usize) -> Result<Vec<u8>, PolynomialError> {
        Ok(vec![0u8; byte_len::<F>(len)?])
    }
}

impl<F: FieldElement + From<u64>> Polynomial<F> {
    /// Creates a polynomial from small integer values.
    pub fn from_u64s(values: &[u64]) -> Self {
        Self::new(values.iter().copied().map(F::from).collect())
    }
}

impl<F: FieldElement> From<Vec<F>> for Polynomial<F> {
    fn from(coefficients: Vec<F>) -> Self {
        Self::new(coefficients)
    }
}

impl<F: FieldElement> FromIterator<F> for Polynomial<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
