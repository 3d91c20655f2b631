// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::display_key;
use crate::sled_utils::{evict_db, get_or_open_db_tree};
use crate::traits::fill_checked;
use crate::{BackingStore, BackingStoreError};
use anyhow::{Context, Result};
use sled::Tree;
use std::path::Path;
use tracing::info;

/// Backing store that keeps payloads in a sled tree on disk.
pub struct SledStore {
    db: Tree,
}

impl SledStore {
    pub fn new(path: &Path, tree: &str) -> Result<Self> {
        info!("Starting SledStore with {:?}", path);
        let db = get_or_open_db_tree(path, tree)?;
        Ok(Self { db })
    }

    /// Drops the process-wide connection for `path` so the next `new` reopens it from disk.
    /// Stores already open on `path` keep working until they are dropped.
    pub fn close_connection(path: &Path) -> bool {
        evict_db(path)
    }

    /// Blocks until all pending writes have reached disk.
    pub fn flush(&self) -> Result<()> {
        self.db.flush().context("Could not flush db")?;
        Ok(())
    }
}

impl BackingStore for SledStore {
    fn write_bytes(&mut self, key: &[u8], data: &[u8]) -> Result<(), BackingStoreError> {
        self.db
            .insert(key, data)
            .with_context(|| format!("Could not insert data for '{}'", display_key(key)))?;
        Ok(())
    }

    fn read_bytes(&self, key: &[u8], out: &mut [u8]) -> Result<(), BackingStoreError> {
        let stored = self
            .db
            .get(key)
            .with_context(|| format!("Failed to fetch {}", display_key(key)))?
            .ok_or_else(|| BackingStoreError::NotFound {
                key: display_key(key),
            })?;
        fill_checked(key, &stored, out)
    }
}
