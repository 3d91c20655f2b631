// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::StoreError;
use polystore_data::BackingStore;
use polystore_polynomial::{FieldElement, Fr, Polynomial};
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::{trace, warn};

/// Maps string keys to polynomials whose payloads live in a [`BackingStore`].
///
/// Only the element count of each key is held in process. `put` moves the polynomial in and
/// drops it once its bytes are written, `get` allocates a fresh polynomial of the recorded
/// count and has the backing store fill it.
pub struct PolynomialStore<B: BackingStore, F: FieldElement = Fr> {
    backing: B,
    size_map: HashMap<String, usize>,
    _field: PhantomData<F>,
}

impl<B: BackingStore, F: FieldElement> PolynomialStore<B, F> {
    pub fn new(backing: B) -> Self {
        Self {
            backing,
            size_map: HashMap::new(),
            _field: PhantomData,
        }
    }

    /// Writes `value` under `key`, replacing any previous polynomial for that key.
    ///
    /// If the backing store rejects the write the key is forgotten, since its payload can no
    /// longer be assumed to match any recorded size.
    pub fn put(&mut self, key: &str, value: Polynomial<F>) -> Result<(), StoreError> {
        let count = value.len();
        let bytes = value
            .to_bytes()
            .map_err(|e| StoreError::from_codec(key, e))?;
        drop(value);

        if let Err(source) = self.backing.write_bytes(key.as_bytes(), &bytes) {
            if self.size_map.remove(key).is_some() {
                warn!(key, "write failed, dropping recorded size");
            }
            return Err(StoreError::from_backing(key, source));
        }

        self.size_map.insert(key.to_owned(), count);
        trace!(key, count, "put polynomial");
        Ok(())
    }

    /// Reconstructs the polynomial most recently `put` under `key`.
    pub fn get(&self, key: &str) -> Result<Polynomial<F>, StoreError> {
        let count = self
            .size_of(key)
            .ok_or_else(|| StoreError::UnknownKey(key.to_owned()))?;

        let mut buffer =
            Polynomial::<F>::payload_buffer(count).map_err(|e| StoreError::from_codec(key, e))?;
        self.backing
            .read_bytes(key.as_bytes(), &mut buffer)
            .map_err(|e| StoreError::from_backing(key, e))?;

        let value =
            Polynomial::from_bytes(&buffer, count).map_err(|e| StoreError::from_codec(key, e))?;
        trace!(key, count, "get polynomial");
        Ok(value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.size_map.contains_key(key)
    }

    /// Element count recorded for `key`.
    pub fn size_of(&self, key: &str) -> Option<usize> {
        self.size_map.get(key).copied()
    }

    /// Number of keys with a recorded size.
    pub fn len(&self) -> usize {
        self.size_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size_map.is_empty()
    }

    /// Total payload bytes across all tracked keys.
    ///
    /// Counted in `u64` since payloads live outside the address space and may add up to more
    /// than `usize::MAX` on 32-bit hosts. Saturates at `u64::MAX`.
    pub fn size_in_bytes(&self) -> u64 {
        total_payload_bytes(self.size_map.values().copied(), F::WIDTH)
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn backing_mut(&mut self) -> &mut B {
        &mut self.backing
    }

    pub fn into_backing(self) -> B {
        self.backing
    }
}

fn total_payload_bytes(counts: impl IntoIterator<Item = usize>, width: usize) -> u64 {
    counts.into_iter().fold(0u64, |total, count| {
        total.saturating_add((count as u64).saturating_mul(width as u64))
    })
}
