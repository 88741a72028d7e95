#![forbid(unsafe_code)]
//! Bidirectional mapping between [`FilterState`]/[`SortState`] and the flat
//! string-keyed parameter map carried by a shareable location identifier.
//!
//! Decode is total: malformed input never fails, it is repaired against the
//! catalog vocabulary and flagged, and the minimal canonical parameter map
//! for the repaired state comes back alongside it. Encode is the left
//! inverse of that canonicalization, so a cleaned map re-decodes to itself
//! and the default state encodes to the empty map.
//!
//! [`FilterState`]: macroscout_model::FilterState
//! [`SortState`]: macroscout_model::SortState

mod decode;
mod encode;
mod sanitize;
mod value;

pub use decode::{decode, DecodedQuery};
pub use encode::encode;
pub use sanitize::{normalize_query_lookup, sanitize_search_query, QUERY_MAX_CHARS};
pub use value::{ParamValue, RawParams};

pub const CRATE_NAME: &str = "macroscout-params";

/// Parameter keys of the location identifier surface.
pub mod keys {
    pub const FLAVOR: &str = "flavor";
    pub const PROTEIN_TYPE: &str = "type";
    pub const FORM: &str = "form";
    pub const PACKAGE: &str = "package";
    pub const PROTEIN_MIN: &str = "protein_min";
    pub const PROTEIN_MAX: &str = "protein_max";
    pub const CALORIE_MIN: &str = "calorie_min";
    pub const CALORIE_MAX: &str = "calorie_max";
    pub const CARB_MIN: &str = "carb_min";
    pub const CARB_MAX: &str = "carb_max";
    pub const SUGAR_MIN: &str = "sugar_min";
    pub const SUGAR_MAX: &str = "sugar_max";
    pub const QUERY: &str = "q";
    pub const SORT: &str = "sort";
    pub const ORDER: &str = "order";
}
