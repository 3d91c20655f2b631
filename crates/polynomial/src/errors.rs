// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial encoding and decoding.

use thiserror::Error;

/// Errors that can occur while converting polynomials to and from bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Byte buffer length does not match `count * WIDTH`
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Encoded element is not the canonical representation of a field element
    #[error("Non-canonical field element at index {index}")]
    NonCanonical { index: usize },

    /// `count * WIDTH` does not fit in the address space
    #[error("Polynomial of {count} elements is too large to encode")]
    TooLarge { count: usize },
}
