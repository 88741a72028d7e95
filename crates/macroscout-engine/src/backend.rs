// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use macroscout_model::{DetailRecord, FilterState, ItemSlug, ResultItem, SortState, VariantId, ViewerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendErrorCode {
    NotFound,
    Unauthenticated,
    Rejected,
    Unavailable,
    Internal,
}

impl BackendErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Unauthenticated => "unauthenticated",
            Self::Rejected => "rejected",
            Self::Unavailable => "unavailable",
            Self::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub code: BackendErrorCode,
    pub message: String,
}

impl BackendError {
    #[must_use]
    pub fn new(code: BackendErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for BackendError {}

/// The hosted search/detail/favorite collaborator, opaque to this crate.
/// Tests substitute scripted fakes.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Ranked results for one filter/sort tuple. Returns at most `limit`
    /// items starting at `offset`; a shorter page signals exhaustion.
    async fn search(
        &self,
        filters: &FilterState,
        sort: SortState,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ResultItem>, BackendError>;

    async fn get_detail(&self, slug: &ItemSlug) -> Result<Option<DetailRecord>, BackendError>;

    /// Persists a favorite toggle. Receives the pre-toggle status so the
    /// backend decides add-vs-remove from known prior state, not from the
    /// optimistic guess.
    async fn submit_favorite_toggle(
        &self,
        variant_id: &VariantId,
        viewer: &ViewerId,
        prior_favorited: bool,
    ) -> Result<(), BackendError>;
}
