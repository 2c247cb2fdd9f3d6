//! Fluent builders for input fragments.

use crate::fragment::Fragment;

/// A fluent builder for a [`Fragment`], null entries included.
///
/// # Example
///
/// ```
/// use keymin::testing::FragmentBuilder;
///
/// let frag = FragmentBuilder::new()
///     .kv("a", 1i64)
///     .null_value("b")
///     .null_key(7)
///     .build();
///
/// assert_eq!(frag.len(), 3);
/// ```
pub struct FragmentBuilder<V> {
    entries: Vec<(Option<String>, Option<V>)>,
}

impl<V> FragmentBuilder<V> {
    /// Create a new empty fragment builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a fully populated entry.
    #[must_use]
    pub fn kv(mut self, key: &str, value: V) -> Self {
        self.entries.push((Some(key.to_owned()), Some(value)));
        self
    }

    /// Add an entry whose value is null.
    #[must_use]
    pub fn null_value(mut self, key: &str) -> Self {
        self.entries.push((Some(key.to_owned()), None));
        self
    }

    /// Add an entry whose key is null.
    #[must_use]
    pub fn null_key(mut self, value: V) -> Self {
        self.entries.push((None, Some(value)));
        self
    }

    /// Build the fragment.
    #[must_use]
    pub fn build(self) -> Fragment<V> {
        Fragment::from_entries(self.entries)
    }
}

impl<V> Default for FragmentBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
