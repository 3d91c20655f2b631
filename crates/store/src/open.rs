// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::PolynomialStore;
use anyhow::Result;
use polystore_config::{BackendConfig, StoreConfig};
use polystore_data::{BackingStore, InMemStore, SledStore};
use polystore_polynomial::{FieldElement, Fr};
use tracing::info;

/// Opens the backing store described by `config`.
pub fn open_backing_store(config: &StoreConfig) -> Result<Box<dyn BackingStore>> {
    let store: Box<dyn BackingStore> = match &config.backend {
        BackendConfig::InMem { capacity } => {
            info!(?capacity, capture = config.capture, "Starting InMemStore");
            let store = InMemStore::new(config.capture);
            match capacity {
                Some(capacity) => Box::new(store.with_capacity_limit(*capacity)),
                None => Box::new(store),
            }
        }
        BackendConfig::Sled { path, tree } => Box::new(SledStore::new(path, tree)?),
    };
    Ok(store)
}

/// A polynomial store over a backing store chosen at runtime.
pub type DynPolynomialStore<F = Fr> = PolynomialStore<Box<dyn BackingStore>, F>;

impl<F: FieldElement> PolynomialStore<Box<dyn BackingStore>, F> {
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self::new(open_backing_store(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use polystore_test_helpers::poly_of;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_in_memory() -> Result<()> {
        let mut store = DynPolynomialStore::<Fr>::from_config(&StoreConfig::default())?;
        store.put("w_l", poly_of(&[1, 2, 3, 4]))?;
        assert_eq!(store.get("w_l")?, poly_of(&[1, 2, 3, 4]));
        Ok(())
    }

    #[test]
    fn test_capacity_from_config() -> Result<()> {
        let config = StoreConfig {
            backend: BackendConfig::InMem {
                capacity: Some(Fr::WIDTH),
            },
            capture: false,
        };
        let mut store = DynPolynomialStore::<Fr>::from_config(&config)?;
        store.put("one", poly_of(&[1]))?;
        assert!(matches!(
            store.put("two", poly_of(&[1, 2])),
            Err(StoreError::BackingStore { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_sled_from_config() -> Result<()> {
        let dir = tempdir()?;
        let config = StoreConfig {
            backend: BackendConfig::Sled {
                path: dir.path().join("polys"),
                tree: "polynomials".to_string(),
            },
            capture: false,
        };
        let mut store = DynPolynomialStore::<Fr>::from_config(&config)?;
        store.put("w_r", poly_of(&[5, 6]))?;
        assert_eq!(store.get("w_r")?, poly_of(&[5, 6]));
        Ok(())
    }
}
