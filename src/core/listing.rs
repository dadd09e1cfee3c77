//! # Listing
//!
//! Flattens a merged tree into one row per divergence.
//!
//! Traversal is depth-first in key order. A divergence emits its row and
//! is not descended into; shared subtrees emit nothing.

use serde_json::Value;

use super::breadcrumb::{Breadcrumb, Segment};
use super::config::ListingConfig;
use super::merge::Diff;

/// One divergence, located by its path
///
/// Columns follow the listing format: path, then B, then A.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffRow {
    pub path: Breadcrumb,
    pub b: Option<Value>,
    pub a: Option<Value>,
}

impl DiffRow {
    /// Render as `path<TAB>b<TAB>a`
    ///
    /// Strings are written without quotes, other values as compact JSON,
    /// absent sides as `config.absent`.
    pub fn to_line(&self, config: &ListingConfig) -> String {
        format!(
            "{}\t{}\t{}",
            self.path.join(&config.separator),
            cell(self.b.as_ref(), config),
            cell(self.a.as_ref(), config),
        )
    }
}

fn cell(value: Option<&Value>, config: &ListingConfig) -> String {
    match value {
        None => config.absent.clone(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Collect every divergence in `diff` with its breadcrumb
pub fn flatten_differences(diff: &Diff) -> Vec<DiffRow> {
    let mut rows = Vec::new();
    let mut path = Breadcrumb::new();
    walk(diff, &mut path, &mut rows);
    rows
}

fn walk(diff: &Diff, path: &mut Breadcrumb, rows: &mut Vec<DiffRow>) {
    match diff {
        Diff::Same(_) => {}
        Diff::Divergence(divergence) => rows.push(DiffRow {
            path: path.clone(),
            b: divergence.b.clone(),
            a: divergence.a.clone(),
        }),
        Diff::Object(entries) => {
            for (key, child) in entries {
                path.push(Segment::Key(key.clone()));
                walk(child, path, rows);
                path.pop();
            }
        }
        Diff::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                path.push(Segment::Index(i));
                walk(child, path, rows);
                path.pop();
            }
        }
    }
}
