// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Failures reported by a [`crate::BackingStore`].
#[derive(Debug, Error)]
pub enum BackingStoreError {
    /// Nothing has been written under the key
    #[error("No payload stored for key '{key}'")]
    NotFound { key: String },

    /// The stored payload is not the length the caller asked for. Nothing was copied.
    #[error("Payload for key '{key}' is {actual} bytes but {expected} were requested")]
    LengthMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },

    /// The write would take the store over its configured capacity
    #[error("Writing {requested} bytes for key '{key}' exceeds capacity of {capacity} bytes")]
    CapacityExceeded {
        key: String,
        requested: usize,
        capacity: usize,
    },

    /// The underlying medium failed
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

pub(crate) fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}
