//! The diff result store: change records partitioned by leaf value type.
//!
//! A [`DiffReport`] holds four path-keyed partitions, one per leaf kind --
//! strings, numbers, booleans, and array membership counts. It is assembled
//! incrementally by a [`DiffBuilder`] during a single traversal and is
//! immutable once built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::DiffItem;

/// The result of diffing two documents: every leaf-level difference, keyed
/// by dotted path and partitioned by value type.
///
/// A given path appears in at most one partition per diff run (the engine
/// rejects documents where a path changes kind between the two sides), so
/// [`len`] is the total number of differing paths. Lookups return `None`
/// for paths with no recorded change of that type, which is distinct from
/// a present record whose `left` or `right` side is absent.
///
/// [`len`]: DiffReport::len
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// String-valued changes.
    strings: BTreeMap<String, DiffItem<String>>,
    /// Number-valued changes (all JSON numbers are read as `f64`).
    numbers: BTreeMap<String, DiffItem<f64>>,
    /// Boolean-valued changes.
    bools: BTreeMap<String, DiffItem<bool>>,
    /// Array membership deltas: `left` is minus the removed-element count,
    /// `right` the added-element count.
    counts: BTreeMap<String, DiffItem<i64>>,
}

impl DiffReport {
    /// Create a builder to incrementally assemble a report.
    pub fn builder() -> DiffBuilder {
        DiffBuilder::default()
    }

    /// Total number of change records across all partitions.
    pub fn len(&self) -> usize {
        self.strings.len() + self.numbers.len() + self.bools.len() + self.counts.len()
    }

    /// Returns `true` if no differences were recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The string change at `key`, if one was recorded.
    pub fn string_diff(&self, key: &str) -> Option<&DiffItem<String>> {
        self.strings.get(key)
    }

    /// The number change at `key`, if one was recorded.
    pub fn number_diff(&self, key: &str) -> Option<&DiffItem<f64>> {
        self.numbers.get(key)
    }

    /// The boolean change at `key`, if one was recorded.
    pub fn bool_diff(&self, key: &str) -> Option<&DiffItem<bool>> {
        self.bools.get(key)
    }

    /// The array membership delta at `key`, if one was recorded.
    pub fn count_diff(&self, key: &str) -> Option<&DiffItem<i64>> {
        self.counts.get(key)
    }

    /// All string changes, keyed by path.
    pub fn strings(&self) -> &BTreeMap<String, DiffItem<String>> {
        &self.strings
    }

    /// All number changes, keyed by path.
    pub fn numbers(&self) -> &BTreeMap<String, DiffItem<f64>> {
        &self.numbers
    }

    /// All boolean changes, keyed by path.
    pub fn bools(&self) -> &BTreeMap<String, DiffItem<bool>> {
        &self.bools
    }

    /// All array membership deltas, keyed by path.
    pub fn counts(&self) -> &BTreeMap<String, DiffItem<i64>> {
        &self.counts
    }
}

/// Incrementally assembles a [`DiffReport`].
///
/// One `put_*` method per supported leaf type; a repeated put at the same
/// key overwrites the earlier record for that type. The builder is owned
/// by a single traversal and handed off by move into the finished report.
#[derive(Debug, Default)]
pub struct DiffBuilder {
    strings: BTreeMap<String, DiffItem<String>>,
    numbers: BTreeMap<String, DiffItem<f64>>,
    bools: BTreeMap<String, DiffItem<bool>>,
    counts: BTreeMap<String, DiffItem<i64>>,
}

impl DiffBuilder {
    /// Record a string change.
    pub fn put_string(
        &mut self,
        key: impl Into<String>,
        left: Option<String>,
        right: Option<String>,
    ) -> &mut Self {
        let key = key.into();
        self.strings.insert(key.clone(), DiffItem::new(key, left, right));
        self
    }

    /// Record a number change.
    pub fn put_number(
        &mut self,
        key: impl Into<String>,
        left: Option<f64>,
        right: Option<f64>,
    ) -> &mut Self {
        let key = key.into();
        self.numbers.insert(key.clone(), DiffItem::new(key, left, right));
        self
    }

    /// Record a boolean change.
    pub fn put_bool(
        &mut self,
        key: impl Into<String>,
        left: Option<bool>,
        right: Option<bool>,
    ) -> &mut Self {
        let key = key.into();
        self.bools.insert(key.clone(), DiffItem::new(key, left, right));
        self
    }

    /// Record an array membership delta.
    pub fn put_count(
        &mut self,
        key: impl Into<String>,
        left: Option<i64>,
        right: Option<i64>,
    ) -> &mut Self {
        let key = key.into();
        self.counts.insert(key.clone(), DiffItem::new(key, left, right));
        self
    }

    /// Finalize the accumulated records into an immutable report.
    pub fn build(self) -> DiffReport {
        DiffReport {
            strings: self.strings,
            numbers: self.numbers,
            bools: self.bools,
            counts: self.counts,
        }
    }
}
