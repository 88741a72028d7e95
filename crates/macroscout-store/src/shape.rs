// SPDX-License-Identifier: Apache-2.0

use macroscout_model::{DetailRecord, ResultItem, ResultPage, VariantId};
use serde::{Deserialize, Serialize};

/// The closed set of shapes one cached result set can take. A favorite
/// patch must dispatch on the shape explicitly; assuming one shape would
/// corrupt or skip the others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CachedResultSet {
    /// Infinite-scroll accumulation: an ordered sequence of fetched pages.
    Paginated { pages: Vec<ResultPage> },
    /// A single ordered sequence of items (full-list queries).
    Flat { items: Vec<ResultItem> },
    /// A detail record with the embedded `selected.item` substructure.
    Detail { record: DetailRecord },
}

impl CachedResultSet {
    /// Applies a favorite flip to the item matching `variant_id`, adjusting
    /// its count by one in the flip direction. Touches nothing else: other
    /// items, page boundaries, and non-matching shapes stay byte-identical.
    /// Returns whether any item changed.
    pub fn apply_favorite(&mut self, variant_id: &VariantId, favorited: bool) -> bool {
        match self {
            Self::Paginated { pages } => {
                let mut changed = false;
                for page in pages {
                    for item in &mut page.items {
                        changed |= patch_item(item, variant_id, favorited);
                    }
                }
                changed
            }
            Self::Flat { items } => {
                let mut changed = false;
                for item in items {
                    changed |= patch_item(item, variant_id, favorited);
                }
                changed
            }
            Self::Detail { record } => patch_item(&mut record.selected.item, variant_id, favorited),
        }
    }

    /// True if any shape variant holds an item with this identifier.
    #[must_use]
    pub fn contains(&self, variant_id: &VariantId) -> bool {
        match self {
            Self::Paginated { pages } => pages
                .iter()
                .any(|page| page.items.iter().any(|item| &item.variant_id == variant_id)),
            Self::Flat { items } => items.iter().any(|item| &item.variant_id == variant_id),
            Self::Detail { record } => &record.selected.item.variant_id == variant_id,
        }
    }
}

fn patch_item(item: &mut ResultItem, variant_id: &VariantId, favorited: bool) -> bool {
    if &item.variant_id != variant_id || item.favorited == favorited {
        return false;
    }
    item.favorited = favorited;
    item.favorite_count = if favorited {
        item.favorite_count.saturating_add(1)
    } else {
        item.favorite_count.saturating_sub(1)
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroscout_model::{ItemSlug, SelectedVariant, SkuId};

    fn item(id: &str, favorited: bool, count: u64) -> ResultItem {
        ResultItem {
            variant_id: VariantId::parse(id).expect("id"),
            sku_id: SkuId::parse("sku-1").expect("sku"),
            name: format!("item {id}"),
            flavor: Some("chocolate".to_string()),
            protein_g: 24,
            calories: 120,
            carbs_g: 3,
            sugar_g: 1,
            favorited,
            favorite_count: count,
        }
    }

    #[test]
    fn paginated_patch_touches_only_the_target() {
        let mut set = CachedResultSet::Paginated {
            pages: vec![
                ResultPage::new(vec![item("v1", false, 5), item("v2", true, 9)]),
                ResultPage::new(vec![item("v3", false, 0)]),
            ],
        };
        let target = VariantId::parse("v1").expect("id");

        assert!(set.apply_favorite(&target, true));
        let CachedResultSet::Paginated { pages } = &set else {
            panic!("shape changed");
        };
        assert!(pages[0].items[0].favorited);
        assert_eq!(pages[0].items[0].favorite_count, 6);
        assert_eq!(pages[0].items[1], item("v2", true, 9));
        assert_eq!(pages[1].items[0], item("v3", false, 0));
    }

    #[test]
    fn unfavorite_saturates_at_zero() {
        let mut set = CachedResultSet::Flat {
            items: vec![item("v1", true, 0)],
        };
        let target = VariantId::parse("v1").expect("id");

        assert!(set.apply_favorite(&target, false));
        let CachedResultSet::Flat { items } = &set else {
            panic!("shape changed");
        };
        assert_eq!(items[0].favorite_count, 0);
    }

    #[test]
    fn already_at_target_state_is_a_no_op() {
        let mut set = CachedResultSet::Flat {
            items: vec![item("v1", true, 4)],
        };
        let target = VariantId::parse("v1").expect("id");
        assert!(!set.apply_favorite(&target, true));
    }

    #[test]
    fn detail_patch_flips_the_embedded_item() {
        let mut set = CachedResultSet::Detail {
            record: DetailRecord {
                slug: ItemSlug::parse("gold-standard").expect("slug"),
                description: None,
                selected: SelectedVariant {
                    item: item("v1", false, 5),
                },
            },
        };
        let target = VariantId::parse("v1").expect("id");

        assert!(set.apply_favorite(&target, true));
        assert!(set.contains(&target));
        let CachedResultSet::Detail { record } = &set else {
            panic!("shape changed");
        };
        assert!(record.selected.item.favorited);
        assert_eq!(record.selected.item.favorite_count, 6);
    }

    #[test]
    fn absent_identifier_changes_nothing() {
        let mut set = CachedResultSet::Flat {
            items: vec![item("v1", false, 5)],
        };
        let before = set.clone();
        let absent = VariantId::parse("v999").expect("id");

        assert!(!set.apply_favorite(&absent, true));
        assert!(!set.contains(&absent));
        assert_eq!(set, before);
    }
}
