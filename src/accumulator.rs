//! Per-group accumulator state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mutable state owned by one reduction instance for one group's aggregation.
///
/// Holds the current per-key minimums. Every key present has at least one
/// contributing non-null observation. The accumulator is a plain state
/// holder; the combine rule lives in
/// [`GroupMinReducer`](crate::reduce::GroupMinReducer).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupAccumulator<V> {
    pub(crate) map: HashMap<String, V>,
}

impl<V> GroupAccumulator<V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Number of keys observed so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Current minimum for `key`, if any observation has been folded for it.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    /// Clear in place, keeping the allocation for reuse across groups.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<V> Default for GroupAccumulator<V> {
    fn default() -> Self {
        Self::new()
    }
}
