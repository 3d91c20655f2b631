// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Write-through storage for polynomials that do not fit in active memory.
//!
//! A [`PolynomialStore`] keeps only the element count of each key in process. The encoded
//! payload lives in a [`BackingStore`], which may be the host heap, a sled database, or
//! anything else that can store and return byte ranges by key.

mod errors;
mod open;
mod polynomial_store;

pub use errors::*;
pub use open::*;
pub use polynomial_store::*;

pub use polystore_data::{BackingStore, BackingStoreError, InMemStore, SledStore};
pub use polystore_polynomial::{FieldElement, Fr, Polynomial};
