//! End-to-end engine simulation: bind from a declared type, pre-aggregate on
//! several partitions, ship the partials as serialized bytes, merge them on a
//! final worker, then run the companion filter over the emitted mapping.

use anyhow::Result;
use keymin::{BoundReducer, Fragment, KindAccumulator, KindFragment, KindMap, KindValue};

fn partition_rows(partition: usize) -> Vec<KindFragment> {
    (0..20i64)
        .map(|row| {
            let base = (partition as i64) * 20 + row;
            KindFragment::from(Fragment::from_values([
                (format!("host{}", base % 6), base % 37 - 18),
                (format!("host{}", (base + 3) % 6), (base * 5) % 41 - 20),
            ]))
        })
        .collect()
}

#[test]
fn distributed_schedule_end_to_end() -> Result<()> {
    let reducer = BoundReducer::bind("map<string,bigint>")?;

    // Phase 1: local accumulation, one accumulator per partition.
    let mut shipped: Vec<Vec<u8>> = Vec::new();
    for partition in 0..4 {
        let mut acc = reducer.new_accumulator();
        for frag in partition_rows(partition) {
            reducer.observe(&mut acc, Some(&frag))?;
        }
        shipped.push(serde_json::to_vec(&acc)?);
    }

    // Phase 2: the final worker has no shared memory with the partitions;
    // partials arrive as bytes and merge in arrival order.
    let mut acc = reducer.new_accumulator();
    for bytes in &shipped {
        let partial: KindAccumulator = serde_json::from_slice(bytes)?;
        reducer.merge(&mut acc, &partial)?;
    }

    // Same schedule, reversed arrival order: identical result.
    let mut reversed = reducer.new_accumulator();
    for bytes in shipped.iter().rev() {
        let partial: KindAccumulator = serde_json::from_slice(bytes)?;
        reducer.merge(&mut reversed, &partial)?;
    }
    assert_eq!(reducer.snapshot(&acc)?, reducer.snapshot(&reversed)?);

    // Baseline: every raw fragment observed into one accumulator.
    let mut baseline = reducer.new_accumulator();
    for partition in 0..4 {
        for frag in partition_rows(partition) {
            reducer.observe(&mut baseline, Some(&frag))?;
        }
    }
    assert_eq!(reducer.snapshot(&acc)?, reducer.snapshot(&baseline)?);

    // Phase 3: final emission, then the companion filter.
    let mut out = reducer.finalize(acc)?;
    assert_eq!(out.len(), 6);

    out.retain_at_least(KindValue::from(0i64))?;
    let KindMap::Int64(kept) = out else {
        panic!("expected a bigint mapping");
    };
    assert!(kept.values().all(|v| *v >= 0));
    Ok(())
}
