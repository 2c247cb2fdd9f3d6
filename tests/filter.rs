use std::collections::HashMap;

use keymin::testing::assert_map_entries;
use keymin::{KindMap, KindValue, ValueKind, filter_lower_than, retain_at_least};

#[test]
fn boundary_values_are_kept() {
    let map = HashMap::from([
        ("a".to_string(), 1i64),
        ("b".to_string(), 5),
        ("c".to_string(), 5),
    ]);

    let kept = filter_lower_than(map, 5);
    assert_map_entries(&kept, &[("b", 5), ("c", 5)]);
}

#[test]
fn in_place_variant_matches_the_owned_one() {
    let map = HashMap::from([("a".to_string(), -3i32), ("b".to_string(), 0)]);

    let mut in_place = map.clone();
    retain_at_least(&mut in_place, 0);
    assert_eq!(in_place, filter_lower_than(map, 0));
}

#[test]
fn nan_entries_survive_the_filter() {
    let map = HashMap::from([("a".to_string(), f64::NAN), ("b".to_string(), 1.0)]);

    let kept = filter_lower_than(map, 2.0);

    // NaN < threshold is false, so the NaN entry is not strictly below.
    assert!(kept["a"].is_nan());
    assert!(!kept.contains_key("b"));
}

#[test]
fn repeated_invocations_are_independent() {
    let map = HashMap::from([
        ("a".to_string(), 1i64),
        ("b".to_string(), 2),
        ("c".to_string(), 3),
    ]);

    let first = filter_lower_than(map.clone(), 3);
    let second = filter_lower_than(map.clone(), 2);
    let third = filter_lower_than(map, 3);

    assert_map_entries(&first, &[("c", 3)]);
    assert_map_entries(&second, &[("b", 2), ("c", 3)]);
    assert_eq!(first, third);
}

#[test]
fn kind_checked_filter_requires_a_matching_threshold() {
    let mut map = KindMap::from(HashMap::from([
        ("a".to_string(), 3i32),
        ("b".to_string(), 8),
    ]));

    let err = map.retain_at_least(KindValue::from(1.0f64)).unwrap_err();
    assert_eq!(err.expected, ValueKind::Int32);
    assert_eq!(err.found, ValueKind::Float64);
    assert_eq!(map.len(), 2); // untouched on mismatch

    map.retain_at_least(KindValue::from(5i32)).unwrap();
    let KindMap::Int32(kept) = map else {
        panic!("expected an int mapping");
    };
    assert_map_entries(&kept, &[("b", 8)]);
}
