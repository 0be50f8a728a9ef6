//! Structural diff engine for schema-aligned JSON documents.
//!
//! Compares two snapshots of the same logical record and reports every
//! leaf-level difference as a typed change record keyed by its dotted path.
//! Nested objects flatten into `parent.child` keys, arrays reconcile by bag
//! membership into element-count deltas, and a missing key is equivalent to
//! an explicit null. A path holding irreconcilable kinds on the two sides
//! fails the whole diff.
//!
//! # Key Types
//!
//! - [`diff_documents`] / [`diff_snapshots`] -- Entry points over parsed trees and serializable values
//! - [`DiffReport`] / [`DiffBuilder`] -- Per-kind partitions of change records, and their accumulator
//! - [`DiffItem`] -- One change record (key, left, right)
//! - [`DiffError`] -- Kind conflicts, non-object roots, serialization failures

pub mod diff;
pub mod error;
pub mod item;
pub mod report;

pub use diff::{diff_documents, diff_snapshots};
pub use error::{DiffError, DiffResult};
pub use item::DiffItem;
pub use report::{DiffBuilder, DiffReport};
