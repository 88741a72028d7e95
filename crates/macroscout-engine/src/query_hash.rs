// SPDX-License-Identifier: Apache-2.0

use crate::error::{EngineError, EngineErrorCode};
use macroscout_model::{FilterState, SortState};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Serialize)]
struct QueryTuple<'a> {
    filters: &'a FilterState,
    sort: SortState,
    page_size: usize,
}

/// Stable hash of one logical query tuple. Serialization is deterministic
/// (sets and maps are ordered), so equal tuples hash equally across
/// processes; the hash keys listing cache entries.
pub fn query_tuple_hash(
    filters: &FilterState,
    sort: SortState,
    page_size: usize,
) -> Result<String, EngineError> {
    let tuple = QueryTuple {
        filters,
        sort,
        page_size,
    };
    let bytes = serde_json::to_vec(&tuple)
        .map_err(|e| EngineError::new(EngineErrorCode::Internal, e.to_string()))?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroscout_model::CatalogConfig;

    #[test]
    fn equal_tuples_hash_equally() {
        let config = CatalogConfig::default();
        let filters = FilterState::default_for(&config);
        let a = query_tuple_hash(&filters, SortState::default(), 24).expect("hash");
        let b = query_tuple_hash(&filters.clone(), SortState::default(), 24).expect("hash");
        assert_eq!(a, b);
    }

    #[test]
    fn page_size_is_part_of_the_tuple() {
        let config = CatalogConfig::default();
        let filters = FilterState::default_for(&config);
        let scroll = query_tuple_hash(&filters, SortState::default(), 24).expect("hash");
        let full = query_tuple_hash(&filters, SortState::default(), 100).expect("hash");
        assert_ne!(scroll, full);
    }
}
