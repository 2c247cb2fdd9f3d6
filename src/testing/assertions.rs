//! Assertion functions for emitted mappings.

use std::collections::HashMap;
use std::fmt::Debug;

/// Assert that two mappings hold the same keys and equal values.
///
/// Key order is irrelevant. On failure the panic message lists the missing
/// and extra keys, or the first differing value.
///
/// # Panics
///
/// Panics if the mappings differ.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use keymin::testing::assert_maps_equal;
///
/// let actual = HashMap::from([("a".to_string(), 1)]);
/// let expected = HashMap::from([("a".to_string(), 1)]);
/// assert_maps_equal(&actual, &expected);
/// ```
pub fn assert_maps_equal<V: Debug + PartialEq>(
    actual: &HashMap<String, V>,
    expected: &HashMap<String, V>,
) {
    let missing: Vec<&String> = expected
        .keys()
        .filter(|k| !actual.contains_key(*k))
        .collect();
    let extra: Vec<&String> = actual
        .keys()
        .filter(|k| !expected.contains_key(*k))
        .collect();

    if !missing.is_empty() || !extra.is_empty() {
        panic!(
            "Mapping key mismatch:\n  Missing keys: {missing:?}\n  Extra keys: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }

    for (key, expected_value) in expected {
        let actual_value = &actual[key];
        assert_eq!(
            actual_value, expected_value,
            "Mapping value mismatch for key {key:?}:\n  Expected: {expected_value:?}\n  Actual: {actual_value:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a mapping holds exactly the given entries.
///
/// A shorthand for [`assert_maps_equal`] against a literal entry list.
///
/// # Panics
///
/// Panics if the mapping differs from the entry list.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use keymin::testing::assert_map_entries;
///
/// let actual = HashMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
/// assert_map_entries(&actual, &[("a", 1), ("b", 2)]);
/// ```
pub fn assert_map_entries<V: Debug + PartialEq + Copy>(
    actual: &HashMap<String, V>,
    expected: &[(&str, V)],
) {
    let expected: HashMap<String, V> = expected
        .iter()
        .map(|(k, v)| ((*k).to_owned(), *v))
        .collect();
    assert_maps_equal(actual, &expected);
}
