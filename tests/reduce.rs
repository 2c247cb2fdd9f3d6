use keymin::testing::{FragmentBuilder, assert_map_entries};
use keymin::{Fragment, GroupMinReducer, ReduceFn, ValueKind};

#[test]
fn keeps_the_minimum_per_key() {
    let reducer = GroupMinReducer::<i64>::new();
    let mut acc = reducer.create();

    reducer.observe(
        &mut acc,
        &Fragment::from_values([("a".to_string(), 5), ("b".to_string(), 3)]),
    );
    reducer.observe(
        &mut acc,
        &Fragment::from_values([("a".to_string(), 2), ("b".to_string(), 9)]),
    );

    assert_map_entries(&reducer.finalize(acc), &[("a", 2), ("b", 3)]);
}

#[test]
fn null_entries_are_skipped() {
    let reducer = GroupMinReducer::<i32>::new();
    let mut acc = reducer.create();

    let frag = FragmentBuilder::new()
        .null_value("a")
        .kv("b", 2)
        .null_key(-10)
        .build();
    reducer.observe(&mut acc, &frag);

    // "a" never becomes a key, and the null-keyed -10 is not an observation.
    assert_map_entries(&reducer.finalize(acc), &[("b", 2)]);
}

#[test]
fn null_value_never_alters_an_existing_minimum() {
    let reducer = GroupMinReducer::<i32>::new();
    let mut acc = reducer.create();

    reducer.observe(&mut acc, &FragmentBuilder::new().kv("a", 4).build());
    reducer.observe(&mut acc, &FragmentBuilder::new().null_value("a").build());

    assert_eq!(acc.get("a"), Some(&4));
}

#[test]
fn observing_nothing_is_valid() {
    let reducer = GroupMinReducer::<f64>::new();
    let mut acc = reducer.create();

    reducer.observe(&mut acc, &Fragment::new());

    assert!(reducer.finalize(acc).is_empty());
}

#[test]
fn snapshot_is_a_partial_not_a_terminal() {
    let reducer = GroupMinReducer::<i64>::new();
    let mut acc = reducer.create();

    reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 5)]));
    let partial = reducer.snapshot(&acc);

    // Accumulation continues after the partial; the copy does not follow.
    reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 2)]));

    assert_map_entries(&partial, &[("a", 5)]);
    assert_map_entries(&reducer.finalize(acc), &[("a", 2)]);
}

#[test]
fn reset_reuses_the_accumulator_across_groups() {
    let reducer = GroupMinReducer::<i64>::new();
    let mut acc = reducer.create();

    reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 1)]));
    reducer.reset(&mut acc);
    assert!(acc.is_empty());

    reducer.observe(&mut acc, &Fragment::from_values([("b".to_string(), 2)]));
    assert_map_entries(&reducer.finalize(acc), &[("b", 2)]);
}

#[test]
fn nan_sticks_only_as_first_observation() {
    let reducer = GroupMinReducer::<f64>::new();
    let mut acc = reducer.create();

    // First observation for "a" is NaN: stored, and later values cannot
    // displace it because every strict comparison against NaN is false.
    reducer.observe(
        &mut acc,
        &Fragment::from_values([("a".to_string(), f64::NAN)]),
    );
    reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 1.0)]));

    // "b" already holds a value: a NaN observation never displaces it.
    reducer.observe(&mut acc, &Fragment::from_values([("b".to_string(), 2.0)]));
    reducer.observe(
        &mut acc,
        &Fragment::from_values([("b".to_string(), f64::NAN)]),
    );

    let out = reducer.finalize(acc);
    assert!(out["a"].is_nan());
    assert_eq!(out["b"], 2.0);
}

#[test]
fn float32_uses_the_same_rule() {
    let reducer = GroupMinReducer::<f32>::new();
    let mut acc = reducer.create();

    reducer.observe(
        &mut acc,
        &Fragment::from_values([("x".to_string(), 1.5f32), ("y".to_string(), -0.5)]),
    );
    reducer.observe(&mut acc, &Fragment::from_values([("x".to_string(), -1.5)]));

    assert_map_entries(&reducer.finalize(acc), &[("x", -1.5), ("y", -0.5)]);
}

#[test]
fn reducer_reports_its_kind() {
    assert_eq!(GroupMinReducer::<i32>::new().kind(), ValueKind::Int32);
    assert_eq!(GroupMinReducer::<i64>::new().kind(), ValueKind::Int64);
    assert_eq!(GroupMinReducer::<f32>::new().kind(), ValueKind::Float32);
    assert_eq!(GroupMinReducer::<f64>::new().kind(), ValueKind::Float64);
}
