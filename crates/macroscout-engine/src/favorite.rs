// SPDX-License-Identifier: Apache-2.0

use crate::backend::CatalogBackend;
use crate::error::EngineError;
use macroscout_model::{VariantId, ViewerId};
use macroscout_store::{CacheNamespace, CacheStore};
use std::sync::Arc;
use tracing::{debug, warn};

const PATCHED_NAMESPACES: [CacheNamespace; 2] =
    [CacheNamespace::ProductList, CacheNamespace::ProductDetail];

/// One "toggle favorite" intent against the viewer's current knowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub variant_id: VariantId,
    /// `None` means the viewer is unauthenticated.
    pub viewer: Option<ViewerId>,
    /// The status the viewer currently sees; the submit carries this
    /// pre-toggle value so the backend decides add-vs-remove from known
    /// prior state.
    pub favorited_now: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The toggle was confirmed; affected namespaces are marked stale so
    /// the next read picks up authoritative counts.
    Applied { favorited: bool },
    /// No viewer: the caller must redirect to the authentication entry
    /// point (with a return path) before anything is attempted. The cache
    /// was not touched.
    RequiresAuth,
}

/// Executes favorite toggles as an explicit three-phase protocol:
/// snapshot, speculative patch, commit-or-revert.
///
/// Every cache entry under the product namespaces is snapshotted before
/// any patch, so a backend rejection restores the exact pre-toggle state
/// whatever shapes were touched. Toggles on distinct identifiers are
/// independent; two in-flight toggles on the same identifier race and the
/// last settlement wins, so callers should disable the control for an
/// identifier while its mutation is outstanding.
#[derive(Clone)]
pub struct FavoriteMutator {
    backend: Arc<dyn CatalogBackend>,
    store: CacheStore,
}

impl FavoriteMutator {
    #[must_use]
    pub fn new(backend: Arc<dyn CatalogBackend>, store: CacheStore) -> Self {
        Self { backend, store }
    }

    pub async fn toggle(&self, request: &ToggleRequest) -> Result<ToggleOutcome, EngineError> {
        // Authentication gates the whole protocol: an unauthenticated
        // attempt must never touch the cache.
        let Some(viewer) = &request.viewer else {
            debug!(variant = request.variant_id.as_str(), "toggle without viewer");
            return Ok(ToggleOutcome::RequiresAuth);
        };

        let favorited_next = !request.favorited_now;
        let snapshot = self.store.snapshot_namespaces(&PATCHED_NAMESPACES);

        let mut patched = 0_usize;
        for key in snapshot.keys() {
            self.store.update(key, |set| {
                if set.apply_favorite(&request.variant_id, favorited_next) {
                    patched += 1;
                }
            });
        }
        debug!(
            variant = request.variant_id.as_str(),
            favorited = favorited_next,
            patched,
            "optimistic patch applied"
        );

        match self
            .backend
            .submit_favorite_toggle(&request.variant_id, viewer, request.favorited_now)
            .await
        {
            Ok(()) => {
                for namespace in PATCHED_NAMESPACES {
                    self.store.mark_namespace_stale(namespace);
                }
                Ok(ToggleOutcome::Applied {
                    favorited: favorited_next,
                })
            }
            Err(err) => {
                warn!(
                    variant = request.variant_id.as_str(),
                    error = %err,
                    "toggle rejected; rolling back optimistic patch"
                );
                self.store.restore(snapshot);
                Err(EngineError::from(err))
            }
        }
    }
}
