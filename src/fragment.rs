//! Input fragments: one row's mapping contribution.
//!
//! A [`Fragment`] is the mapping a single row contributes to its group's
//! aggregation. Entries may carry a null key or a null value; the fold skips
//! such entries without counting them as observations, so they can neither
//! create a key nor change a stored minimum.
//!
//! ```
//! use keymin::Fragment;
//!
//! let mut frag = Fragment::from_values([("a".to_string(), 5i64)]);
//! frag.push(Some("b".to_string()), None); // skipped by the fold
//! assert_eq!(frag.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One input mapping contributed by a single row's evaluation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fragment<V> {
    entries: Vec<(Option<String>, Option<V>)>,
}

impl<V> Fragment<V> {
    /// An empty fragment. Observing it is a no-op.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from entries that may contain null keys or values.
    pub fn from_entries(entries: Vec<(Option<String>, Option<V>)>) -> Self {
        Self { entries }
    }

    /// Build from fully populated key–value pairs.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (String, V)>,
    {
        Self {
            entries: values
                .into_iter()
                .map(|(k, v)| (Some(k), Some(v)))
                .collect(),
        }
    }

    /// Append one entry; either side may be null.
    pub fn push(&mut self, key: Option<String>, value: Option<V>) {
        self.entries.push((key, value));
    }

    /// Number of entries, null entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as borrowed optionals.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, Option<&V>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_deref(), v.as_ref()))
    }
}

impl<V> Default for Fragment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<HashMap<String, V>> for Fragment<V> {
    fn from(map: HashMap<String, V>) -> Self {
        Self::from_values(map)
    }
}

impl<V> FromIterator<(String, V)> for Fragment<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
