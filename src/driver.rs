//! Reference execution driver for the reduction protocol.
//!
//! The reducer core schedules nothing itself: it is a synchronous data
//! structure that some execution engine must drive through the three phases.
//! This module is that engine in miniature, and the contract it exercises is
//! the one any real engine relies on: the same multiset of fragments must
//! converge to the same result whether every fragment is observed into one
//! accumulator, or partitions are pre-aggregated and their partials merged
//! afterwards in any order and grouping.
//!
//! - [`fold_all`]: sequential observe-only fold, then finalize.
//! - [`fold_partitioned`] (feature `parallel`): chunk inputs into
//!   partitions, run each partition's local fold on a rayon worker with its
//!   own exclusively-owned accumulator, then merge the partials on the
//!   calling thread in rounds of at most `fanout` accumulators to bound
//!   merge breadth on wide inputs.
//!
//! ```
//! use keymin::{Fragment, driver::group_min_seq};
//!
//! let out = group_min_seq(vec![
//!     Fragment::from_values([("a".to_string(), 5i64), ("b".to_string(), 3)]),
//!     Fragment::from_values([("a".to_string(), 2), ("b".to_string(), 9)]),
//! ]);
//! assert_eq!(out["a"], 2);
//! assert_eq!(out["b"], 3);
//! ```

use std::collections::HashMap;

use crate::fragment::Fragment;
use crate::reduce::{GroupMinReducer, ReduceFn};
use crate::value::MinValue;

/// Fold every input into a single accumulator, then finalize.
///
/// Produces the empty output for empty input (by finalizing a fresh
/// accumulator).
pub fn fold_all<F, A, O, R>(reducer: &R, inputs: impl IntoIterator<Item = F>) -> O
where
    R: ReduceFn<F, A, O>,
{
    let mut acc = reducer.create();
    for input in inputs {
        reducer.observe(&mut acc, &input);
    }
    reducer.finalize(acc)
}

/// Partitioned fold: per-partition local accumulation, then a merge of the
/// partial results.
///
/// `partitions` defaults to twice the CPU count, as the sequential/parallel
/// split would on a local runner; `fanout`, when set, bounds how many
/// partials are merged per round (values below 2 are treated as 2).
/// Equivalent to [`fold_all`] over the same inputs for any choice of either
/// knob.
#[cfg(feature = "parallel")]
pub fn fold_partitioned<F, A, O, R>(
    reducer: &R,
    inputs: Vec<F>,
    partitions: Option<usize>,
    fanout: Option<usize>,
) -> O
where
    F: Send + Sync,
    A: Send,
    R: ReduceFn<F, A, O>,
{
    use rayon::prelude::*;

    let parts = partitions
        .unwrap_or_else(|| 2 * num_cpus::get().max(2))
        .clamp(1, inputs.len().max(1));
    let chunk = inputs.len().div_ceil(parts).max(1);

    // Local phase: one exclusively-owned accumulator per partition.
    let mut partials: Vec<A> = inputs
        .par_chunks(chunk)
        .map(|chunk| {
            let mut acc = reducer.create();
            for input in chunk {
                reducer.observe(&mut acc, input);
            }
            acc
        })
        .collect();

    // Merge phase: combine partials in rounds of at most `width`.
    let width = fanout.unwrap_or(usize::MAX).max(2);
    while partials.len() > 1 {
        let mut next: Vec<A> = Vec::with_capacity(partials.len().div_ceil(width));
        let mut it = partials.into_iter();
        while let Some(mut head) = it.next() {
            for other in it.by_ref().take(width - 1) {
                reducer.merge(&mut head, &other);
            }
            next.push(head);
        }
        partials = next;
    }

    let acc = partials
        .into_iter()
        .next()
        .unwrap_or_else(|| reducer.create());
    reducer.finalize(acc)
}

/// Sequential key-wise minimum of `fragments`.
pub fn group_min_seq<V: MinValue>(
    fragments: impl IntoIterator<Item = Fragment<V>>,
) -> HashMap<String, V> {
    fold_all(&GroupMinReducer::<V>::new(), fragments)
}

/// Partitioned key-wise minimum of `fragments`. See [`fold_partitioned`].
#[cfg(feature = "parallel")]
pub fn group_min_par<V: MinValue>(
    fragments: Vec<Fragment<V>>,
    partitions: Option<usize>,
    fanout: Option<usize>,
) -> HashMap<String, V> {
    fold_partitioned(&GroupMinReducer::<V>::new(), fragments, partitions, fanout)
}
