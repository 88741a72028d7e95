use criterion::{criterion_group, criterion_main, Criterion};
use macroscout_model::CatalogConfig;
use macroscout_params::{decode, keys, ParamValue, RawParams};

fn representative_params() -> RawParams {
    let mut raw = RawParams::new();
    raw.insert(
        keys::FLAVOR.to_string(),
        ParamValue::Many(vec!["chocolate".to_string(), "bogus".to_string()]),
    );
    raw.insert(keys::FORM.to_string(), ParamValue::Single("powder".into()));
    raw.insert(keys::PACKAGE.to_string(), ParamValue::Single("pouch".into()));
    raw.insert(keys::PROTEIN_MIN.to_string(), ParamValue::Single("20".into()));
    raw.insert(keys::PROTEIN_MAX.to_string(), ParamValue::Single("999".into()));
    raw.insert(
        keys::QUERY.to_string(),
        ParamValue::Single("iso <b>whey</b> gold".into()),
    );
    raw.insert(keys::SORT.to_string(), ParamValue::Single("protein".into()));
    raw
}

fn bench_decode(c: &mut Criterion) {
    let config = CatalogConfig::default();
    let raw = representative_params();

    c.bench_function("params.decode.mixed_validity", |b| {
        b.iter(|| decode(&raw, &config))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
