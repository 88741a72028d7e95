// SPDX-License-Identifier: Apache-2.0

use crate::keys;
use crate::value::{ParamValue, RawParams};
use macroscout_model::{CatalogConfig, FilterState, RangeDomain, RangeFilter, SortState};
use std::collections::BTreeSet;

/// Encodes resolved state into the minimal canonical parameter map: empty
/// sets, domain-wide bounds, absent text, and default sort fields are
/// omitted entirely, so the default state yields an empty map.
///
/// Left inverse of [`decode`](crate::decode)'s canonicalization: for any
/// reachable state, decoding the encoded map reproduces the state and the
/// map itself.
#[must_use]
pub fn encode(filters: &FilterState, sort: SortState, config: &CatalogConfig) -> RawParams {
    let mut params = RawParams::new();

    emit_set(&mut params, keys::FLAVOR, &filters.flavors);
    emit_set(&mut params, keys::PROTEIN_TYPE, &filters.protein_types);
    emit_set(&mut params, keys::FORM, &filters.forms);
    emit_set(&mut params, keys::PACKAGE, &filters.package_types);

    emit_range(
        &mut params,
        keys::PROTEIN_MIN,
        keys::PROTEIN_MAX,
        filters.protein,
        config.protein,
    );
    emit_range(
        &mut params,
        keys::CALORIE_MIN,
        keys::CALORIE_MAX,
        filters.calories,
        config.calories,
    );
    emit_range(
        &mut params,
        keys::CARB_MIN,
        keys::CARB_MAX,
        filters.carbs,
        config.carbs,
    );
    emit_range(
        &mut params,
        keys::SUGAR_MIN,
        keys::SUGAR_MAX,
        filters.sugar,
        config.sugar,
    );

    if let Some(query) = &filters.search_query {
        params.insert(keys::QUERY.to_string(), ParamValue::Single(query.clone()));
    }

    let default = SortState::default();
    if sort.by != default.by {
        params.insert(
            keys::SORT.to_string(),
            ParamValue::Single(sort.by.as_str().into()),
        );
    }
    if sort.order != default.order {
        params.insert(
            keys::ORDER.to_string(),
            ParamValue::Single(sort.order.as_str().into()),
        );
    }

    params
}

fn emit_set(params: &mut RawParams, key: &str, set: &BTreeSet<String>) {
    if let Some(value) = ParamValue::from_codes(set.iter().cloned()) {
        params.insert(key.to_string(), value);
    }
}

fn emit_range(
    params: &mut RawParams,
    min_key: &str,
    max_key: &str,
    range: RangeFilter,
    domain: RangeDomain,
) {
    if range.min != domain.min {
        params.insert(
            min_key.to_string(),
            ParamValue::Single(range.min.to_string()),
        );
    }
    if range.max != domain.max {
        params.insert(
            max_key.to_string(),
            ParamValue::Single(range.max.to_string()),
        );
    }
}
