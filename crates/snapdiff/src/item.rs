//! The change record: one leaf-level difference between two documents.

use serde::{Deserialize, Serialize};

/// A single typed change at one path in the document tree.
///
/// `left` holds the before-side value and `right` the after-side value. A
/// side is `None` when the path was absent (or explicitly null) on that
/// side, so an addition is `{left: None, right: Some(_)}` and a removal is
/// the mirror. The engine only constructs an item when the two sides
/// genuinely differ.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffItem<T> {
    /// Dotted path identifying the changed leaf (or array).
    pub key: String,
    /// The before-side value, if present.
    pub left: Option<T>,
    /// The after-side value, if present.
    pub right: Option<T>,
}

impl<T> DiffItem<T> {
    /// Create a new change record.
    pub fn new(key: impl Into<String>, left: Option<T>, right: Option<T>) -> Self {
        Self {
            key: key.into(),
            left,
            right,
        }
    }
}
