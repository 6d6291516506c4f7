use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(lookup_from(&[]));
    assert_eq!(config, Config::default());
    assert_eq!(config.rounding, Rounding::HalfAwayFromZero);
    assert_eq!(config.precision, DEFAULT_PRECISION);
}

#[test]
fn reads_rounding_and_precision() {
    let config = Config::from_lookup(lookup_from(&[
        ("SASS_ROUNDING", "half-even"),
        ("SASS_PRECISION", " 5 "),
    ]));
    assert_eq!(config.rounding, Rounding::HalfEven);
    assert_eq!(config.precision, 5);
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config::from_lookup(lookup_from(&[
        ("SASS_ROUNDING", "truncate"),
        ("SASS_PRECISION", "-2"),
    ]));
    assert_eq!(config, Config::default());
}

#[test]
fn precision_is_capped() {
    let config = Config::from_lookup(lookup_from(&[("SASS_PRECISION", "40")]));
    assert_eq!(config.precision, 10);
}
