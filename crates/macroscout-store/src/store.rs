// SPDX-License-Identifier: Apache-2.0

use crate::key::{CacheKey, CacheNamespace};
use crate::shape::CachedResultSet;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_entries: 256,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedResultSet,
    inserted_at: Instant,
    stale: bool,
}

/// Value-level copy of a set of entries, sufficient to restore them exactly
/// regardless of shape. Opaque to callers; produced by
/// [`CacheStore::snapshot_namespaces`] and consumed by
/// [`CacheStore::restore`].
#[derive(Debug)]
pub struct CacheSnapshot {
    entries: Vec<(CacheKey, CacheEntry)>,
}

impl CacheSnapshot {
    /// Keys captured in this snapshot, in capture order.
    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clonable handle over the shared cache map. Injected into the fetch
/// controller and the mutation engine; tests build an isolated store per
/// case. The inner lock is held only for the duration of one map operation,
/// never across an await point.
#[derive(Clone)]
pub struct CacheStore {
    config: CacheConfig,
    entries: Arc<Mutex<HashMap<CacheKey, CacheEntry>>>,
}

impl CacheStore {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn insert(&self, key: CacheKey, value: CachedResultSet) {
        let mut entries = self.lock_entries();
        Self::prune(&mut entries, self.config.ttl);
        if entries.len() >= self.config.max_entries && !entries.contains_key(&key) {
            if let Some(victim) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(k, _)| k.clone())
            {
                debug!(key = %victim, "cache capacity eviction");
                entries.remove(&victim);
            }
        }
        entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                stale: false,
            },
        );
    }

    /// Returns a clone of the cached set, pruning expired entries first.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<CachedResultSet> {
        let mut entries = self.lock_entries();
        Self::prune(&mut entries, self.config.ttl);
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// True when the entry exists but has been marked stale: the value is
    /// still renderable, and a fresh authoritative fetch is due.
    #[must_use]
    pub fn is_stale(&self, key: &CacheKey) -> bool {
        let entries = self.lock_entries();
        entries.get(key).is_some_and(|entry| entry.stale)
    }

    /// Narrowest write primitive: mutates one entry in place. Returns false
    /// when the key is absent. Concurrent writers to other entries are
    /// never clobbered.
    pub fn update<F>(&self, key: &CacheKey, mutate: F) -> bool
    where
        F: FnOnce(&mut CachedResultSet),
    {
        let mut entries = self.lock_entries();
        match entries.get_mut(key) {
            Some(entry) => {
                mutate(&mut entry.value);
                true
            }
            None => false,
        }
    }

    /// Value-level copy of every live entry under the given namespaces.
    #[must_use]
    pub fn snapshot_namespaces(&self, namespaces: &[CacheNamespace]) -> CacheSnapshot {
        let entries = self.lock_entries();
        let snapshot = entries
            .iter()
            .filter(|(key, _)| namespaces.contains(&key.namespace))
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect();
        CacheSnapshot { entries: snapshot }
    }

    /// Writes every snapshotted entry back exactly as captured, staleness
    /// and age included. Entries created after the snapshot are untouched.
    pub fn restore(&self, snapshot: CacheSnapshot) {
        let mut entries = self.lock_entries();
        for (key, entry) in snapshot.entries {
            entries.insert(key, entry);
        }
    }

    /// Marks every entry under the namespace stale so subsequent reads
    /// trigger an authoritative re-fetch.
    pub fn mark_namespace_stale(&self, namespace: CacheNamespace) {
        let mut entries = self.lock_entries();
        let mut marked = 0_usize;
        for (key, entry) in entries.iter_mut() {
            if key.namespace == namespace {
                entry.stale = true;
                marked += 1;
            }
        }
        debug!(namespace = namespace.as_str(), marked, "namespace marked stale");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        // Every lock scope leaves the map consistent, so a poisoned lock is
        // still safe to recover.
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn prune(entries: &mut HashMap<CacheKey, CacheEntry>, ttl: Duration) {
        entries.retain(|_, entry| entry.inserted_at.elapsed() <= ttl);
    }
}
