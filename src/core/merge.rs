//! # Merge
//!
//! Structural merge of two JSON values.
//!
//! `difference(a, b)` walks both trees at once and returns a single merged
//! tree. Wherever the two sides agree the merged tree holds the shared
//! structure; wherever they diverge it holds a [`Divergence`] carrying
//! whatever each side had at that point.
//!
//! Policy, evaluated in order at every node:
//!
//! 1. only A present → divergence with A
//! 2. only B present → divergence with B
//! 3. different kinds → divergence with both
//! 4. both objects → recurse over the union of keys
//! 5. both arrays → recurse positionally up to the longer length
//! 6. same-kind scalars → shared value if equal, divergence otherwise
//!
//! Absence is tracked with `Option`, so a JSON `null` is an ordinary
//! scalar and never mistaken for a missing key.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Key used for the A-side value when a divergence is rendered as JSON
pub const A_SIDE: &str = "A_SIDE";

/// Key used for the B-side value when a divergence is rendered as JSON
pub const B_SIDE: &str = "B_SIDE";

/// Runtime shape of a JSON value
///
/// Integers and floats share `Number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

/// The two sides at a point where they disagree
///
/// At least one side is always present.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Divergence {
    #[serde(rename = "A_SIDE", skip_serializing_if = "Option::is_none")]
    pub a: Option<Value>,

    #[serde(rename = "B_SIDE", skip_serializing_if = "Option::is_none")]
    pub b: Option<Value>,
}

impl Divergence {
    /// Present on A only
    pub fn only_a(a: Value) -> Self {
        Self { a: Some(a), b: None }
    }

    /// Present on B only
    pub fn only_b(b: Value) -> Self {
        Self { a: None, b: Some(b) }
    }

    /// Present on both sides with different content
    pub fn both(a: Value, b: Value) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }

    /// Render as a `{A_SIDE, B_SIDE}` object, omitting absent sides
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(a) = &self.a {
            map.insert(A_SIDE.to_string(), a.clone());
        }
        if let Some(b) = &self.b {
            map.insert(B_SIDE.to_string(), b.clone());
        }
        Value::Object(map)
    }
}

/// Merged tree produced by [`difference`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Diff {
    /// Both sides hold this exact subtree
    Same(Value),

    /// Both sides are objects; one entry per key in either
    Object(BTreeMap<String, Diff>),

    /// Both sides are arrays; one entry per position in the longer one
    Array(Vec<Diff>),

    /// The sides disagree here
    Divergence(Divergence),
}

impl Diff {
    /// Render the merged tree as plain JSON
    ///
    /// Divergences become `{"A_SIDE": .., "B_SIDE": ..}` objects. Inside the
    /// crate they stay a distinct variant, so input data that already uses
    /// those key names is never confused with a divergence.
    pub fn to_value(&self) -> Value {
        match self {
            Diff::Same(value) => value.clone(),
            Diff::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_value()))
                    .collect(),
            ),
            Diff::Array(items) => Value::Array(items.iter().map(Diff::to_value).collect()),
            Diff::Divergence(divergence) => divergence.to_value(),
        }
    }

    /// True if no divergence exists anywhere in the tree
    pub fn is_identical(&self) -> bool {
        self.divergence_count() == 0
    }

    /// Number of divergence nodes in the tree
    pub fn divergence_count(&self) -> usize {
        match self {
            Diff::Same(_) => 0,
            Diff::Object(entries) => entries.values().map(Diff::divergence_count).sum(),
            Diff::Array(items) => items.iter().map(Diff::divergence_count).sum(),
            Diff::Divergence(_) => 1,
        }
    }
}

/// Merge two JSON values, marking every point of divergence
///
/// Pure and total: never fails and never mutates its inputs.
///
/// # Example
/// ```
/// use jsondiff_skmeans::core::merge::difference;
/// use serde_json::json;
///
/// let diff = difference(&json!([1, 2, 3]), &json!([1, 2]));
/// assert_eq!(diff.to_value(), json!([1, 2, {"A_SIDE": 3}]));
/// ```
pub fn difference(a: &Value, b: &Value) -> Diff {
    difference_opt(Some(a), Some(b))
}

/// [`difference`] with explicit presence on each side
///
/// `None` means the value is absent (missing key or list position).
/// Both sides absent cannot arise from the recursion; if a caller passes
/// it anyway the result is `Same(Null)`.
pub fn difference_opt(a: Option<&Value>, b: Option<&Value>) -> Diff {
    let (a, b) = match (a, b) {
        (Some(a), None) => return Diff::Divergence(Divergence::only_a(a.clone())),
        (None, Some(b)) => return Diff::Divergence(Divergence::only_b(b.clone())),
        (None, None) => return Diff::Same(Value::Null),
        (Some(a), Some(b)) => (a, b),
    };

    if Kind::of(a) != Kind::of(b) {
        return Diff::Divergence(Divergence::both(a.clone(), b.clone()));
    }

    match (a, b) {
        (Value::Object(map_a), Value::Object(map_b)) => {
            let keys: BTreeSet<&String> = map_a.keys().chain(map_b.keys()).collect();
            Diff::Object(
                keys.into_iter()
                    .map(|key| (key.clone(), difference_opt(map_a.get(key), map_b.get(key))))
                    .collect(),
            )
        }
        (Value::Array(list_a), Value::Array(list_b)) => {
            let len = list_a.len().max(list_b.len());
            Diff::Array(
                (0..len)
                    .map(|i| difference_opt(list_a.get(i), list_b.get(i)))
                    .collect(),
            )
        }
        _ if scalars_equal(a, b) => Diff::Same(a.clone()),
        _ => Diff::Divergence(Divergence::both(a.clone(), b.clone())),
    }
}

/// Equality for same-kind scalars
fn scalars_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

/// Numeric equality across the integer and float representations
///
/// Exact for two integers; by `f64` value otherwise, so `1 == 1.0`.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
