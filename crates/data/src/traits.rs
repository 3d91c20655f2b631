// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::BackingStoreError;

/// A byte-addressed key value primitive.
///
/// The store knows nothing about what the bytes mean. Callers are responsible for knowing how
/// long a payload is before reading it.
pub trait BackingStore {
    /// Stores `data` under `key`, replacing any previous payload.
    fn write_bytes(&mut self, key: &[u8], data: &[u8]) -> Result<(), BackingStoreError>;

    /// Fills `out` with the payload stored under `key`.
    ///
    /// Implementations must check that the stored payload is exactly `out.len()` bytes before
    /// copying anything and report [`BackingStoreError::LengthMismatch`] otherwise.
    fn read_bytes(&self, key: &[u8], out: &mut [u8]) -> Result<(), BackingStoreError>;
}

impl<T: BackingStore + ?Sized> BackingStore for Box<T> {
    fn write_bytes(&mut self, key: &[u8], data: &[u8]) -> Result<(), BackingStoreError> {
        (**self).write_bytes(key, data)
    }

    fn read_bytes(&self, key: &[u8], out: &mut [u8]) -> Result<(), BackingStoreError> {
        (**self).read_bytes(key, out)
    }
}

impl<T: BackingStore + ?Sized> BackingStore for &mut T {
    fn write_bytes(&mut self, key: &[u8], data: &[u8]) -> Result<(), BackingStoreError> {
        (**self).write_bytes(key, data)
    }

    fn read_bytes(&self, key: &[u8], out: &mut [u8]) -> Result<(), BackingStoreError> {
        (**self).read_bytes(key, out)
    }
}

/// Copies `stored` into `out` after checking the lengths agree.
pub(crate) fn fill_checked(
    key: &[u8],
    stored: &[u8],
    out: &mut [u8],
) -> Result<(), BackingStoreError> {
    if stored.len() != out.len() {
        return Err(BackingStoreError::LengthMismatch {
            key: crate::errors::display_key(key),
            expected: out.len(),
            actual: stored.len(),
        });
    }
    out.copy_from_slice(stored);
    Ok(())
}
