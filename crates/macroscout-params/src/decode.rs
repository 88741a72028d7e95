// SPDX-License-Identifier: Apache-2.0

use crate::keys;
use crate::sanitize::sanitize_search_query;
use crate::value::{ParamValue, RawParams};
use macroscout_model::{
    CatalogConfig, FilterState, RangeDomain, RangeFilter, SortKey, SortOrder, SortState,
    POWDER_FORM,
};
use std::collections::BTreeSet;

/// Result of decoding a raw parameter map.
///
/// Caller contract: when `has_invalid_params` is true, replace the current
/// location with one built from `cleaned_params` (or with no parameters if
/// the map is empty) before rendering, using a non-pushing navigation.
/// Re-decoding `cleaned_params` always reports `has_invalid_params ==
/// false`, so the corrective redirect cannot loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    pub filters: FilterState,
    pub sort: SortState,
    pub has_invalid_params: bool,
    pub cleaned_params: RawParams,
}

/// Decodes a raw parameter map into fully resolved filter/sort state.
///
/// Total over arbitrary input: invalid vocabulary elements are dropped,
/// out-of-domain or unparsable bounds revert to the domain default, markup
/// is stripped from the text query, and unknown sort values fall back to the
/// default sort. Every repair sets `has_invalid_params`.
#[must_use]
pub fn decode(raw: &RawParams, config: &CatalogConfig) -> DecodedQuery {
    let mut invalid = false;
    let mut cleaned = RawParams::new();

    let flavors = decode_multi(raw.get(keys::FLAVOR), |c| config.is_flavor(c), &mut invalid);
    let protein_types = decode_multi(
        raw.get(keys::PROTEIN_TYPE),
        |c| config.is_protein_type(c),
        &mut invalid,
    );
    let forms = decode_multi(raw.get(keys::FORM), |c| config.is_form(c), &mut invalid);

    // Dependent field: package codes are only meaningful while the powder
    // form is selected. Anything arriving without it is rejected input, the
    // same rule FilterState::with_forms enforces on mutation.
    let package_types = if forms.contains(POWDER_FORM) {
        decode_multi(
            raw.get(keys::PACKAGE),
            |c| config.is_package_type(c),
            &mut invalid,
        )
    } else {
        if raw.contains_key(keys::PACKAGE) {
            invalid = true;
        }
        BTreeSet::new()
    };

    emit_multi(&mut cleaned, keys::FLAVOR, &flavors);
    emit_multi(&mut cleaned, keys::PROTEIN_TYPE, &protein_types);
    emit_multi(&mut cleaned, keys::FORM, &forms);
    emit_multi(&mut cleaned, keys::PACKAGE, &package_types);

    let protein = decode_range(
        raw,
        keys::PROTEIN_MIN,
        keys::PROTEIN_MAX,
        config.protein,
        &mut invalid,
        &mut cleaned,
    );
    let calories = decode_range(
        raw,
        keys::CALORIE_MIN,
        keys::CALORIE_MAX,
        config.calories,
        &mut invalid,
        &mut cleaned,
    );
    let carbs = decode_range(
        raw,
        keys::CARB_MIN,
        keys::CARB_MAX,
        config.carbs,
        &mut invalid,
        &mut cleaned,
    );
    let sugar = decode_range(
        raw,
        keys::SUGAR_MIN,
        keys::SUGAR_MAX,
        config.sugar,
        &mut invalid,
        &mut cleaned,
    );

    let search_query = decode_query_text(raw.get(keys::QUERY), &mut invalid, &mut cleaned);
    let sort = decode_sort(raw, &mut invalid, &mut cleaned);

    DecodedQuery {
        filters: FilterState {
            flavors,
            protein_types,
            forms,
            package_types,
            protein,
            calories,
            carbs,
            sugar,
            search_query,
        },
        sort,
        has_invalid_params: invalid,
        cleaned_params: cleaned,
    }
}

/// Accepts a single value or a repeated key; keeps elements the vocabulary
/// knows, drops the rest. Duplicates collapse silently.
fn decode_multi<F>(raw: Option<&ParamValue>, is_valid: F, invalid: &mut bool) -> BTreeSet<String>
where
    F: Fn(&str) -> bool,
{
    let Some(param) = raw else {
        return BTreeSet::new();
    };
    let mut kept = BTreeSet::new();
    let mut saw_value = false;
    for value in param.values() {
        saw_value = true;
        if is_valid(value) {
            kept.insert(value.to_string());
        } else {
            *invalid = true;
        }
    }
    if !saw_value {
        // A present key with no values has no canonical form.
        *invalid = true;
    }
    kept
}

fn emit_multi(cleaned: &mut RawParams, key: &str, kept: &BTreeSet<String>) {
    if let Some(value) = ParamValue::from_codes(kept.iter().cloned()) {
        cleaned.insert(key.to_string(), value);
    }
}

fn decode_range(
    raw: &RawParams,
    min_key: &str,
    max_key: &str,
    domain: RangeDomain,
    invalid: &mut bool,
    cleaned: &mut RawParams,
) -> RangeFilter {
    let (min, min_echo) = decode_bound(raw.get(min_key), domain.min, domain, invalid);
    let (max, max_echo) = decode_bound(raw.get(max_key), domain.max, domain, invalid);

    // Bounds that are individually in-domain can still describe an inverted
    // interval; the pair is malformed input and reverts whole.
    if min > max {
        *invalid = true;
        return domain.full();
    }
    if let Some(echo) = min_echo {
        cleaned.insert(min_key.to_string(), ParamValue::Single(echo));
    }
    if let Some(echo) = max_echo {
        cleaned.insert(max_key.to_string(), ParamValue::Single(echo));
    }
    RangeFilter { min, max }
}

/// Resolves one bound. Returns the resolved value plus the raw string to
/// echo into the cleaned map, `None` when the bound equals the domain
/// default (default bounds stay invisible).
fn decode_bound(
    raw: Option<&ParamValue>,
    default: u32,
    domain: RangeDomain,
    invalid: &mut bool,
) -> (u32, Option<String>) {
    let Some(param) = raw else {
        return (default, None);
    };
    let ParamValue::Single(raw_str) = param else {
        *invalid = true;
        return (default, None);
    };
    match raw_str.parse::<u32>() {
        Ok(value) if domain.contains(value) => {
            if value == default {
                (value, None)
            } else {
                (value, Some(raw_str.clone()))
            }
        }
        _ => {
            *invalid = true;
            (default, None)
        }
    }
}

fn decode_query_text(
    raw: Option<&ParamValue>,
    invalid: &mut bool,
    cleaned: &mut RawParams,
) -> Option<String> {
    let param = raw?;
    let raw_text = match param {
        ParamValue::Single(text) => text.as_str(),
        ParamValue::Many(values) => {
            *invalid = true;
            values.first().map_or("", String::as_str)
        }
    };
    let cleaned_text = sanitize_search_query(raw_text);
    if cleaned_text.as_deref() != Some(raw_text) {
        *invalid = true;
    }
    if let Some(text) = &cleaned_text {
        cleaned.insert(keys::QUERY.to_string(), ParamValue::Single(text.clone()));
    }
    cleaned_text
}

fn decode_sort(raw: &RawParams, invalid: &mut bool, cleaned: &mut RawParams) -> SortState {
    let default = SortState::default();

    let by = decode_enum(raw.get(keys::SORT), SortKey::parse, default.by, invalid);
    let order = decode_enum(
        raw.get(keys::ORDER),
        SortOrder::parse,
        default.order,
        invalid,
    );

    if by != default.by {
        cleaned.insert(keys::SORT.to_string(), ParamValue::Single(by.as_str().into()));
    }
    if order != default.order {
        cleaned.insert(
            keys::ORDER.to_string(),
            ParamValue::Single(order.as_str().into()),
        );
    }
    SortState { by, order }
}

fn decode_enum<T, F>(raw: Option<&ParamValue>, parse: F, default: T, invalid: &mut bool) -> T
where
    T: Copy,
    F: Fn(&str) -> Option<T>,
{
    let Some(param) = raw else {
        return default;
    };
    let ParamValue::Single(raw_str) = param else {
        *invalid = true;
        return default;
    };
    match parse(raw_str) {
        Some(value) => value,
        None => {
            *invalid = true;
            default
        }
    }
}
