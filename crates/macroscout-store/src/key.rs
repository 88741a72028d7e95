// SPDX-License-Identifier: Apache-2.0

use macroscout_model::ItemSlug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Cache namespaces the mutation engine snapshots wholesale before an
/// optimistic patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[non_exhaustive]
pub enum CacheNamespace {
    ProductList,
    ProductDetail,
}

impl CacheNamespace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductList => "product_list",
            Self::ProductDetail => "product_detail",
        }
    }
}

/// Key of one cache entry: a namespace plus an identity string. Listings
/// use the query tuple hash (prefixed by shape so a paginated and a flat
/// set over the same query coexist); details use the item slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct CacheKey {
    pub namespace: CacheNamespace,
    pub ident: String,
}

impl CacheKey {
    /// Key for the infinite-scroll page accumulation of one query tuple.
    #[must_use]
    pub fn listing(query_hash: &str) -> Self {
        Self {
            namespace: CacheNamespace::ProductList,
            ident: format!("pages:{query_hash}"),
        }
    }

    /// Key for the flat full-list form of one query tuple.
    #[must_use]
    pub fn flat(query_hash: &str) -> Self {
        Self {
            namespace: CacheNamespace::ProductList,
            ident: format!("flat:{query_hash}"),
        }
    }

    /// Key for one item's detail record.
    #[must_use]
    pub fn detail(slug: &ItemSlug) -> Self {
        Self {
            namespace: CacheNamespace::ProductDetail,
            ident: format!("detail:{}", slug.as_str()),
        }
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace.as_str(), self.ident)
    }
}
