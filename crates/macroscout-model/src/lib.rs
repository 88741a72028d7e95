#![forbid(unsafe_code)]
//! Discovery model SSOT.
//!
//! Every crate in the workspace reads filter/sort state, catalog
//! vocabularies, and result records from here; nothing else defines them.

mod catalog;
mod filter;
mod item;
mod sort;

pub use catalog::{CatalogConfig, RangeDomain, POWDER_FORM};
pub use filter::{FilterState, RangeFilter};
pub use item::{
    DetailRecord, ItemSlug, ParseError, ResultItem, ResultPage, SelectedVariant, SkuId,
    VariantId, ViewerId, ID_MAX_LEN, SLUG_MAX_LEN,
};
pub use sort::{SortKey, SortOrder, SortState};

pub const CRATE_NAME: &str = "macroscout-model";
