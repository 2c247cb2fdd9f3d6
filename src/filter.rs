//! Elementwise threshold filtering of emitted mappings.
//!
//! The companion operation to the reduction: given a mapping and a scalar
//! threshold of the same kind, keep only the entries whose value is **not**
//! strictly less than the threshold. Entries equal to the threshold are
//! kept. Stateless across invocations; scratch state is per call, never
//! shared.
//!
//! ```
//! use std::collections::HashMap;
//! use keymin::filter_lower_than;
//!
//! let map = HashMap::from([
//!     ("a".to_string(), 1i64),
//!     ("b".to_string(), 5),
//!     ("c".to_string(), 5),
//! ]);
//! let kept = filter_lower_than(map, 5);
//! assert_eq!(kept.len(), 2);
//! assert!(!kept.contains_key("a"));
//! ```

use std::collections::HashMap;

use crate::bind::{KindMap, KindValue};
use crate::kind::KindMismatch;
use crate::value::MinValue;

/// Drop entries whose value is strictly less than `threshold`, in place.
///
/// Boundary values are kept. For the float kinds a NaN entry is kept, since
/// `NaN < threshold` is false under the kind's ordering.
pub fn retain_at_least<V: MinValue>(map: &mut HashMap<String, V>, threshold: V) {
    map.retain(|_, value| !value.replaces(threshold));
}

/// Owned variant of [`retain_at_least`].
pub fn filter_lower_than<V: MinValue>(
    mut map: HashMap<String, V>,
    threshold: V,
) -> HashMap<String, V> {
    retain_at_least(&mut map, threshold);
    map
}

impl KindMap {
    /// Kind-checked [`retain_at_least`] over an erased mapping.
    ///
    /// Fails fast if `threshold` is not of this mapping's kind; the mapping
    /// is left untouched in that case.
    pub fn retain_at_least(&mut self, threshold: KindValue) -> Result<(), KindMismatch> {
        match (self, threshold) {
            (KindMap::Int32(m), KindValue::Int32(t)) => retain_at_least(m, t),
            (KindMap::Int64(m), KindValue::Int64(t)) => retain_at_least(m, t),
            (KindMap::Float32(m), KindValue::Float32(t)) => retain_at_least(m, t),
            (KindMap::Float64(m), KindValue::Float64(t)) => retain_at_least(m, t),
            (map, threshold) => {
                return Err(KindMismatch {
                    expected: map.kind(),
                    found: threshold.kind(),
                });
            }
        }
        Ok(())
    }
}
