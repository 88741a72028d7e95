use macroscout_model::CatalogConfig;
use macroscout_params::{decode, ParamValue, RawParams};
use proptest::prelude::*;

fn arb_param_value() -> impl Strategy<Value = ParamValue> {
    prop_oneof![
        ".{0,40}".prop_map(ParamValue::Single),
        proptest::collection::vec(".{0,20}", 0..4).prop_map(ParamValue::Many),
    ]
}

fn arb_raw_params() -> impl Strategy<Value = RawParams> {
    let key = prop_oneof![
        Just("flavor".to_string()),
        Just("type".to_string()),
        Just("form".to_string()),
        Just("package".to_string()),
        Just("protein_min".to_string()),
        Just("protein_max".to_string()),
        Just("calorie_min".to_string()),
        Just("calorie_max".to_string()),
        Just("carb_min".to_string()),
        Just("carb_max".to_string()),
        Just("sugar_min".to_string()),
        Just("sugar_max".to_string()),
        Just("q".to_string()),
        Just("sort".to_string()),
        Just("order".to_string()),
        ".{1,12}",
    ];
    proptest::collection::btree_map(key, arb_param_value(), 0..8)
}

proptest! {
    #[test]
    fn decode_never_panics(raw in arb_raw_params()) {
        let config = CatalogConfig::default();
        let _ = decode(&raw, &config);
    }

    #[test]
    fn canonicalization_is_idempotent(raw in arb_raw_params()) {
        let config = CatalogConfig::default();
        let first = decode(&raw, &config);
        let second = decode(&first.cleaned_params, &config);

        prop_assert!(!second.has_invalid_params);
        prop_assert_eq!(&second.cleaned_params, &first.cleaned_params);
        prop_assert_eq!(&second.filters, &first.filters);
        prop_assert_eq!(second.sort, first.sort);
    }
}
