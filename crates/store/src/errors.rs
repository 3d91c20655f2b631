// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use polystore_data::BackingStoreError;
use polystore_polynomial::PolynomialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No size is recorded for the key so the polynomial cannot be allocated
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    /// The backing store payload does not match the recorded element count
    #[error("Size mismatch for '{key}': expected {expected} bytes, backing store holds {actual}")]
    SizeMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },

    #[error("Backing store failed for '{key}'")]
    BackingStore {
        key: String,
        #[source]
        source: BackingStoreError,
    },

    #[error("Could not convert polynomial '{key}'")]
    Codec {
        key: String,
        #[source]
        source: PolynomialError,
    },
}

impl StoreError {
    pub(crate) fn from_backing(key: &str, source: BackingStoreError) -> Self {
        match source {
            BackingStoreError::LengthMismatch {
                expected, actual, ..
            } => StoreError::SizeMismatch {
                key: key.to_string(),
                expected,
                actual,
            },
            source => StoreError::BackingStore {
                key: key.to_string(),
                source,
            },
        }
    }

    pub(crate) fn from_codec(key: &str, source: PolynomialError) -> Self {
        match source {
            PolynomialError::LengthMismatch { expected, actual } => StoreError::SizeMismatch {
                key: key.to_string(),
                expected,
                actual,
            },
            source => StoreError::Codec {
                key: key.to_string(),
                source,
            },
        }
    }
}
