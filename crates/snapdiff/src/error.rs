//! Error types for the diff crate.

use serde_json::Value;

/// Errors that can occur while diffing two documents.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DiffError {
    /// The same path held values of incompatible kinds on the two sides.
    ///
    /// A conflict anywhere voids the entire diff; there is no partial
    /// result. The offending path and both values are carried for
    /// diagnostics.
    #[error("value kinds conflict at {key}: {left} vs {right}")]
    TypeConflict {
        key: String,
        left: Value,
        right: Value,
    },

    /// A snapshot serialized to something other than an object at the root.
    #[error("snapshot root must be a JSON object, got {kind}")]
    RootNotAnObject { kind: String },

    /// Serializing a snapshot into the tree model failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
