// SPDX-License-Identifier: Apache-2.0

use crate::backend::CatalogBackend;
use crate::error::EngineError;
use macroscout_model::{DetailRecord, ItemSlug};
use macroscout_store::{CacheKey, CacheStore, CachedResultSet};
use std::sync::Arc;
use tracing::debug;

/// Reads one item's detail record through the shared cache. A fresh cached
/// record is served as-is; a stale mark (left by a confirmed favorite
/// toggle) forces an authoritative re-fetch, which reconciles optimistic
/// counts with server-side values.
#[derive(Clone)]
pub struct DetailLoader {
    backend: Arc<dyn CatalogBackend>,
    store: CacheStore,
}

impl DetailLoader {
    #[must_use]
    pub fn new(backend: Arc<dyn CatalogBackend>, store: CacheStore) -> Self {
        Self { backend, store }
    }

    pub async fn load(&self, slug: &ItemSlug) -> Result<Option<DetailRecord>, EngineError> {
        let key = CacheKey::detail(slug);
        if !self.store.is_stale(&key) {
            if let Some(CachedResultSet::Detail { record }) = self.store.get(&key) {
                return Ok(Some(record));
            }
        }

        match self.backend.get_detail(slug).await {
            Ok(Some(record)) => {
                debug!(slug = slug.as_str(), "detail fetched");
                self.store.insert(
                    key,
                    CachedResultSet::Detail {
                        record: record.clone(),
                    },
                );
                Ok(Some(record))
            }
            Ok(None) => Ok(None),
            Err(err) => Err(EngineError::from(err)),
        }
    }
}
