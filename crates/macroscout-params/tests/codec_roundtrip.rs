use macroscout_model::{CatalogConfig, FilterState, SortKey, SortOrder, SortState};
use macroscout_params::{decode, encode};

fn narrowed_state(config: &CatalogConfig) -> FilterState {
    let mut filters = FilterState::default_for(config);
    filters.flavors.insert("chocolate".to_string());
    filters.flavors.insert("vanilla".to_string());
    filters.protein_types.insert("wpi".to_string());
    filters.forms.insert("powder".to_string());
    filters.package_types.insert("pouch".to_string());
    filters.protein.min = 20;
    filters.calories.max = 200;
    filters.search_query = Some("gold standard".to_string());
    filters
}

#[test]
fn default_state_encodes_to_empty_map() {
    let config = CatalogConfig::default();
    let filters = FilterState::default_for(&config);
    let params = encode(&filters, SortState::default(), &config);
    assert!(params.is_empty());
}

#[test]
fn narrowed_state_round_trips_exactly() {
    let config = CatalogConfig::default();
    let filters = narrowed_state(&config);
    let sort = SortState {
        by: SortKey::Protein,
        order: SortOrder::Asc,
    };

    let params = encode(&filters, sort, &config);
    let decoded = decode(&params, &config);

    assert!(!decoded.has_invalid_params);
    assert_eq!(decoded.filters, filters);
    assert_eq!(decoded.sort, sort);
}

#[test]
fn encode_is_left_inverse_of_canonicalization() {
    let config = CatalogConfig::default();
    let filters = narrowed_state(&config);
    let sort = SortState {
        by: SortKey::Calories,
        order: SortOrder::Desc,
    };

    let params = encode(&filters, sort, &config);
    let decoded = decode(&params, &config);
    assert_eq!(decoded.cleaned_params, params);
}

#[test]
fn non_default_sort_appears_in_encoding() {
    let config = CatalogConfig::default();
    let filters = FilterState::default_for(&config);
    let sort = SortState {
        by: SortKey::Name,
        order: SortOrder::Asc,
    };

    let params = encode(&filters, sort, &config);
    assert_eq!(params.len(), 2);
    assert!(params.contains_key("sort"));
    assert!(params.contains_key("order"));
}
