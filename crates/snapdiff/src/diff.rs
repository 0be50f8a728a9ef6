//! The diff engine: a recursive walker over two schema-aligned documents.
//!
//! [`diff_documents`] descends matching object keys, resolving arrays and
//! primitives into a single record per differing path and recursing into
//! nested objects with a dotted key prefix. Absence and explicit null are
//! equivalent: a key missing on one side diffs as if it were null, and a
//! null-to-absent transition is no change at all. Arrays reconcile by bag
//! membership (deep value equality with numbers as doubles, order
//! insensitive), not by position; the record for a differing array is a
//! pair of element counts.
//!
//! A path whose two sides hold irreconcilable kinds (object vs non-object,
//! array vs non-array, mismatched primitive kinds) aborts the whole diff
//! with [`DiffError::TypeConflict`]; there is no partial result.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DiffError, DiffResult};
use crate::report::{DiffBuilder, DiffReport};

/// Compare two documents and report every leaf-level difference.
///
/// Both documents are expected to be schema-aligned: the same path should
/// hold the same kind of value on both sides, enforced dynamically by the
/// kind-conflict check. The walk is synchronous and bounded by the nesting
/// depth of the inputs.
pub fn diff_documents(
    before: &Map<String, Value>,
    after: &Map<String, Value>,
) -> DiffResult<DiffReport> {
    let mut builder = DiffReport::builder();
    walk(&mut builder, before, after, "")?;
    let report = builder.build();
    debug!(changes = report.len(), "diffed documents");
    Ok(report)
}

/// Serialize two snapshots of the same logical record and diff the results.
///
/// Convenience wrapper over [`diff_documents`] for callers holding typed
/// values rather than already-parsed trees. Each snapshot must serialize
/// to a JSON object at the root.
pub fn diff_snapshots<T: Serialize>(before: &T, after: &T) -> DiffResult<DiffReport> {
    let before_doc = into_document(to_tree(before)?)?;
    let after_doc = into_document(to_tree(after)?)?;
    diff_documents(&before_doc, &after_doc)
}

fn to_tree<T: Serialize>(snapshot: &T) -> DiffResult<Value> {
    serde_json::to_value(snapshot).map_err(|e| DiffError::Serialization(e.to_string()))
}

fn into_document(value: Value) -> DiffResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DiffError::RootNotAnObject {
            kind: kind_name(&other).to_string(),
        }),
    }
}

/// One recursion level: reconcile the entries of two objects under `prefix`.
fn walk(
    builder: &mut DiffBuilder,
    before: &Map<String, Value>,
    after: &Map<String, Value>,
    prefix: &str,
) -> DiffResult<()> {
    for (key, after_val) in after {
        let full_key = format!("{prefix}{key}");
        match before.get(key) {
            Some(before_val) => match (before_val, after_val) {
                // Null is compatible with every kind; the other side diffs
                // against absence.
                (Value::Null, _) => record_added(builder, &full_key, after_val),
                (_, Value::Null) => record_removed(builder, &full_key, before_val),
                (Value::Array(before_items), Value::Array(after_items)) => {
                    record_array_delta(builder, &full_key, before_items, after_items);
                }
                (Value::Object(before_obj), Value::Object(after_obj)) => {
                    walk(builder, before_obj, after_obj, &format!("{full_key}."))?;
                }
                (Value::Bool(before_flag), Value::Bool(after_flag)) => {
                    if before_flag != after_flag {
                        builder.put_bool(full_key, Some(*before_flag), Some(*after_flag));
                    }
                }
                (Value::Number(before_num), Value::Number(after_num)) => {
                    // Numbers compare as doubles, so integral and fractional
                    // spellings of the same value are equal.
                    let left = before_num.as_f64();
                    let right = after_num.as_f64();
                    if left != right {
                        builder.put_number(full_key, left, right);
                    }
                }
                (Value::String(before_str), Value::String(after_str)) => {
                    if before_str != after_str {
                        builder.put_string(
                            full_key,
                            Some(before_str.clone()),
                            Some(after_str.clone()),
                        );
                    }
                }
                // Every remaining pair puts two irreconcilable kinds at the
                // same path.
                (left, right) => {
                    return Err(DiffError::TypeConflict {
                        key: full_key,
                        left: left.clone(),
                        right: right.clone(),
                    });
                }
            },
            None => record_added(builder, &full_key, after_val),
        }
    }

    // Entries only the before side has were removed.
    for (key, before_val) in before {
        if !after.contains_key(key) {
            let full_key = format!("{prefix}{key}");
            record_removed(builder, &full_key, before_val);
        }
    }

    Ok(())
}

/// Emit "added" records for every leaf under `value`.
///
/// Arrays collapse to a single count record (an empty array is a
/// non-change), objects recurse per entry, and a null leaf is absence and
/// emits nothing.
fn record_added(builder: &mut DiffBuilder, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            builder.put_bool(key, None, Some(*flag));
        }
        Value::Number(num) => {
            builder.put_number(key, None, num.as_f64());
        }
        Value::String(text) => {
            builder.put_string(key, None, Some(text.clone()));
        }
        Value::Array(items) => {
            if !items.is_empty() {
                builder.put_count(key, Some(0), Some(items.len() as i64));
            }
        }
        Value::Object(entries) => {
            for (subkey, subvalue) in entries {
                record_added(builder, &format!("{key}.{subkey}"), subvalue);
            }
        }
    }
}

/// Emit "removed" records for every leaf under `value`: the mirror of
/// [`record_added`] with the sides swapped and the array delta negated.
fn record_removed(builder: &mut DiffBuilder, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            builder.put_bool(key, Some(*flag), None);
        }
        Value::Number(num) => {
            builder.put_number(key, num.as_f64(), None);
        }
        Value::String(text) => {
            builder.put_string(key, Some(text.clone()), None);
        }
        Value::Array(items) => {
            if !items.is_empty() {
                builder.put_count(key, Some(-(items.len() as i64)), Some(0));
            }
        }
        Value::Object(entries) => {
            for (subkey, subvalue) in entries {
                record_removed(builder, &format!("{key}.{subkey}"), subvalue);
            }
        }
    }
}

/// Record the bag difference between two arrays as one count record.
///
/// An element counts as added when no element of the before array equals
/// it, and as removed when no element of the after array equals it, so
/// duplicate counts of an already-present value are not differences.
/// Equal bags produce no record.
fn record_array_delta(
    builder: &mut DiffBuilder,
    key: &str,
    before_items: &[Value],
    after_items: &[Value],
) {
    let added = after_items
        .iter()
        .filter(|item| !contains_value(before_items, item))
        .count() as i64;
    let removed = before_items
        .iter()
        .filter(|item| !contains_value(after_items, item))
        .count() as i64;
    if added != 0 || removed != 0 {
        builder.put_count(key, Some(-removed), Some(added));
    }
}

/// Whether `items` holds an element equal to `value`.
fn contains_value(items: &[Value], value: &Value) -> bool {
    items.iter().any(|item| values_equal(item, value))
}

/// Deep value equality under the double-precision number model.
///
/// Plain `Value` equality distinguishes integral from fractional spellings
/// of the same number, which would make array membership disagree with the
/// leaf comparison. Numbers compare as doubles here at any nesting depth;
/// every other kind compares structurally.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left_num), Value::Number(right_num)) => {
            left_num.as_f64() == right_num.as_f64()
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            left_items.len() == right_items.len()
                && left_items
                    .iter()
                    .zip(right_items)
                    .all(|(left_item, right_item)| values_equal(left_item, right_item))
        }
        (Value::Object(left_obj), Value::Object(right_obj)) => {
            left_obj.len() == right_obj.len()
                && left_obj.iter().all(|(key, left_value)| {
                    right_obj
                        .get(key)
                        .is_some_and(|right_value| values_equal(left_value, right_value))
                })
        }
        _ => left == right,
    }
}

/// Human-readable name of a value's kind, for error reporting.
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
