//! The three-phase reduction protocol and the key-wise minimum reducer.
//!
//! An external execution engine drives a reduction through three phases:
//! local accumulation ([`observe`](ReduceFn::observe)), partial-result
//! combination ([`merge`](ReduceFn::merge)), and result extraction
//! ([`snapshot`](ReduceFn::snapshot) / [`finalize`](ReduceFn::finalize)).
//! The engine decides when and where each phase runs; it may call `observe`
//! for every raw fragment with no intermediate merge, or pre-aggregate on
//! each partition and combine the partials through any number of `merge`
//! calls, in any order. The combine rule is commutative and associative, so
//! every such schedule converges to the same contents.
//!
//! [`GroupMinReducer`] is the production implementation: per-key minimum over
//! string-keyed numeric mappings, for any [`MinValue`] kind.
//!
//! ```
//! use keymin::{Fragment, GroupMinReducer, ReduceFn};
//!
//! let reducer = GroupMinReducer::<i64>::new();
//! let mut acc = reducer.create();
//!
//! reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 5), ("b".to_string(), 3)]));
//! reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 2), ("b".to_string(), 9)]));
//!
//! let out = reducer.finalize(acc);
//! assert_eq!(out["a"], 2);
//! assert_eq!(out["b"], 3);
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::accumulator::GroupAccumulator;
use crate::fragment::Fragment;
use crate::kind::ValueKind;
use crate::value::MinValue;

/// The aggregation protocol consumed by an external execution engine.
///
/// `F` is the per-row input, `A` the accumulator, `O` the emitted mapping.
///
/// Implementations must keep the combine commutative, associative, and
/// idempotent on merge: any sequence of `observe`/`merge` calls converging
/// the same multiset of contributions into one accumulator yields the same
/// final contents.
pub trait ReduceFn<F, A, O>: Send + Sync + 'static {
    /// Fresh, empty accumulator.
    fn create(&self) -> A;

    /// Clear `acc` in place. Equivalent to discarding it and calling
    /// [`create`](ReduceFn::create), without giving up the allocation.
    fn reset(&self, acc: &mut A);

    /// Fold one input into `acc`.
    fn observe(&self, acc: &mut A, input: &F);

    /// Combine another accumulator's contents into `acc`. `other` is not
    /// mutated and may be merged again elsewhere.
    fn merge(&self, acc: &mut A, other: &A);

    /// Immutable copy of the current contents, usable as a partial result or
    /// as the final emission. The accumulator may keep accumulating
    /// afterwards; the copy never aliases live state.
    fn snapshot(&self, acc: &A) -> O;

    /// Final emission for the group. Identical data to
    /// [`snapshot`](ReduceFn::snapshot); consumes the accumulator, so the
    /// terminal state cannot be observed again.
    fn finalize(&self, acc: A) -> O;
}

/// Key-wise minimum over string-keyed numeric mappings.
///
/// - Input: [`Fragment<V>`]
/// - Accumulator: [`GroupAccumulator<V>`]
/// - Output: `HashMap<String, V>`
///
/// Entries with a null key or null value are skipped, never counted as
/// observations. A stored value is replaced only when the incoming value is
/// strictly less under the kind's natural ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupMinReducer<V>(PhantomData<V>);

impl<V> GroupMinReducer<V> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<V: MinValue> GroupMinReducer<V> {
    /// The kind this reducer instance is configured for.
    pub fn kind(&self) -> ValueKind {
        V::KIND
    }
}

/// Per-key replace rule shared by `observe` and `merge`.
///
/// Each entry's effect is applied atomically with respect to its key: the
/// stored value either becomes `value` or stays as it was.
fn fold_min<V: MinValue>(map: &mut HashMap<String, V>, key: &str, value: V) {
    match map.get_mut(key) {
        Some(current) => {
            if value.replaces(*current) {
                *current = value;
            }
        }
        None => {
            map.insert(key.to_owned(), value);
        }
    }
}

impl<V: MinValue> ReduceFn<Fragment<V>, GroupAccumulator<V>, HashMap<String, V>>
    for GroupMinReducer<V>
{
    fn create(&self) -> GroupAccumulator<V> {
        GroupAccumulator::new()
    }

    fn reset(&self, acc: &mut GroupAccumulator<V>) {
        acc.clear();
    }

    fn observe(&self, acc: &mut GroupAccumulator<V>, input: &Fragment<V>) {
        for (key, value) in input.iter() {
            let (Some(key), Some(value)) = (key, value) else {
                continue;
            };
            fold_min(&mut acc.map, key, *value);
        }
    }

    fn merge(&self, acc: &mut GroupAccumulator<V>, other: &GroupAccumulator<V>) {
        for (key, value) in &other.map {
            fold_min(&mut acc.map, key, *value);
        }
    }

    fn snapshot(&self, acc: &GroupAccumulator<V>) -> HashMap<String, V> {
        acc.map.clone()
    }

    fn finalize(&self, acc: GroupAccumulator<V>) -> HashMap<String, V> {
        acc.map
    }
}
