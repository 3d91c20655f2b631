// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::display_key;
use crate::traits::fill_checked;
use crate::{BackingStore, BackingStoreError};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataOp {
    Write { key: Vec<u8>, len: usize },
}

/// Backing store that keeps payloads on the host heap.
#[derive(Debug, Default)]
pub struct InMemStore {
    db: BTreeMap<Vec<u8>, Vec<u8>>,
    log: Vec<DataOp>,
    capture: bool,
    capacity: Option<usize>,
    used: usize,
}

impl InMemStore {
    pub fn new(capture: bool) -> Self {
        Self {
            capture,
            ..Default::default()
        }
    }

    /// Limits the total number of payload bytes the store will hold.
    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn get_log(&self) -> &[DataOp] {
        &self.log
    }

    /// Total payload bytes currently held.
    pub fn used_bytes(&self) -> usize {
        self.used
    }

    /// Returns the raw payload for `key` without any length check.
    pub fn get_raw(&self, key: &[u8]) -> Option<&[u8]> {
        self.db.get(key).map(Vec::as_slice)
    }

    /// Replaces the payload for `key` bypassing capacity accounting and capture.
    ///
    /// Intended for simulating external corruption of a payload.
    pub fn insert_raw(&mut self, key: &[u8], value: Vec<u8>) {
        let new_len = value.len();
        if let Some(old) = self.db.insert(key.to_vec(), value) {
            self.used -= old.len();
        }
        self.used += new_len;
    }

    pub fn get_dump(&self) -> Result<Vec<u8>> {
        bincode::serialize(&self.db).context("Error serializing BTreeMap")
    }

    /// Construct an InMemStore from a bincode-serialized database.
    pub fn from_dump(db: Vec<u8>, capture: bool) -> Result<Self> {
        let db: BTreeMap<Vec<u8>, Vec<u8>> =
            bincode::deserialize(&db).context("Error deserializing BTreeMap")?;
        let used = db.values().map(Vec::len).sum();
        Ok(Self {
            db,
            capture,
            used,
            ..Default::default()
        })
    }
}

impl BackingStore for InMemStore {
    fn write_bytes(&mut self, key: &[u8], data: &[u8]) -> Result<(), BackingStoreError> {
        let previous = self.db.get(key).map(Vec::len).unwrap_or(0);
        let next = self.used - previous + data.len();
        if let Some(capacity) = self.capacity {
            if next > capacity {
                return Err(BackingStoreError::CapacityExceeded {
                    key: display_key(key),
                    requested: data.len(),
                    capacity,
                });
            }
        }

        self.db.insert(key.to_vec(), data.to_vec());
        self.used = next;

        if self.capture {
            self.log.push(DataOp::Write {
                key: key.to_vec(),
                len: data.len(),
            });
        }
        Ok(())
    }

    fn read_bytes(&self, key: &[u8], out: &mut [u8]) -> Result<(), BackingStoreError> {
        let stored = self.db.get(key).ok_or_else(|| BackingStoreError::NotFound {
            key: display_key(key),
        })?;
        fill_checked(key, stored, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() -> Result<()> {
        let mut store = InMemStore::new(false);
        store.write_bytes(b"key", b"value")?;

        let mut out = [0u8; 5];
        store.read_bytes(b"key", &mut out)?;
        assert_eq!(&out, b"value");
        Ok(())
    }

    #[test]
    fn test_overwrite_replaces_payload() -> Result<()> {
        let mut store = InMemStore::new(false);
        store.write_bytes(b"key", b"first")?;
        store.write_bytes(b"key", b"second!")?;

        assert_eq!(store.get_raw(b"key"), Some(&b"second!"[..]));
        assert_eq!(store.used_bytes(), 7);
        Ok(())
    }

    #[test]
    fn test_missing_key() {
        let store = InMemStore::new(false);
        let mut out = [0u8; 1];
        assert!(matches!(
            store.read_bytes(b"nope", &mut out),
            Err(BackingStoreError::NotFound { key }) if key == "nope"
        ));
    }

    #[test]
    fn test_length_mismatch_leaves_buffer_untouched() -> Result<()> {
        let mut store = InMemStore::new(false);
        store.write_bytes(b"key", &[1, 2, 3])?;

        let mut out = [9u8; 4];
        let err = store.read_bytes(b"key", &mut out).unwrap_err();
        assert!(matches!(
            err,
            BackingStoreError::LengthMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
        assert_eq!(out, [9u8; 4]);
        Ok(())
    }

    #[test]
    fn test_capacity_limit() -> Result<()> {
        let mut store = InMemStore::new(false).with_capacity_limit(8);
        store.write_bytes(b"a", &[0; 4])?;
        store.write_bytes(b"b", &[0; 4])?;

        let err = store.write_bytes(b"c", &[0; 1]).unwrap_err();
        assert!(matches!(
            err,
            BackingStoreError::CapacityExceeded { capacity: 8, .. }
        ));
        assert_eq!(store.get_raw(b"c"), None);

        // overwriting in place frees the old payload first
        store.write_bytes(b"a", &[1; 4])?;
        assert_eq!(store.used_bytes(), 8);
        Ok(())
    }

    #[test]
    fn test_capture_log() -> Result<()> {
        let mut store = InMemStore::new(true);
        store.write_bytes(b"a", &[0; 3])?;
        store.write_bytes(b"b", &[0; 5])?;

        assert_eq!(
            store.get_log(),
            &[
                DataOp::Write {
                    key: b"a".to_vec(),
                    len: 3
                },
                DataOp::Write {
                    key: b"b".to_vec(),
                    len: 5
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_dump_and_restore() -> Result<()> {
        let mut store = InMemStore::new(false);
        store.write_bytes(b"a", &[1, 2, 3])?;
        store.write_bytes(b"b", &[4])?;

        let restored = InMemStore::from_dump(store.get_dump()?, false)?;
        assert_eq!(restored.get_raw(b"a"), Some(&[1u8, 2, 3][..]));
        assert_eq!(restored.get_raw(b"b"), Some(&[4u8][..]));
        assert_eq!(restored.used_bytes(), 4);
        Ok(())
    }
}
