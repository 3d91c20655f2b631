// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Dense polynomials over a prime field, sized for proving pipelines that have to move
//! large coefficient or evaluation arrays in and out of a bounded address space.
//!
//! ## Features
//!
//! - `FieldElement`: a field type with a single fixed serialized byte width.
//! - `Polynomial`: an exclusively owned, contiguous array of field elements.
//! - Codec: the one place where `n` elements of width `w` become `n * w` bytes and back,
//!   with length and canonicity checks on the way in.
//!
//! The BN254 scalar field (`ark_bn254::Fr`) is the default element type.

pub mod codec;
mod errors;
pub mod field;
pub mod polynomial;

pub use codec::{byte_len, decode_elements, encode_elements, encode_into};
pub use errors::PolynomialError;
pub use field::{FieldElement, Fr};
pub use polynomial::Polynomial;
