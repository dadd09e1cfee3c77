//! Property-based tests for the structural diff.

use jsondiff_skmeans::core::merge::{difference, Diff};
use jsondiff_skmeans::core::{flatten_differences, Breadcrumb, Segment};
use proptest::prelude::*;
use serde_json::{json, Value};

// =============================================================================
// Test helpers
// =============================================================================

/// Generate an arbitrary JSON value a few levels deep
fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Paths of every divergence node, found by walking the tree directly
fn divergence_paths(diff: &Diff, path: &mut Breadcrumb, out: &mut Vec<Breadcrumb>) {
    match diff {
        Diff::Same(_) => {}
        Diff::Divergence(_) => out.push(path.clone()),
        Diff::Object(entries) => {
            for (key, child) in entries {
                path.push(Segment::Key(key.clone()));
                divergence_paths(child, path, out);
                path.pop();
            }
        }
        Diff::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                path.push(Segment::Index(i));
                divergence_paths(child, path, out);
                path.pop();
            }
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn diff_with_self_is_identity(value in arbitrary_json()) {
        let diff = difference(&value, &value);
        prop_assert!(diff.is_identical());
        prop_assert_eq!(diff.to_value(), value);
    }

    #[test]
    fn one_row_per_divergence(a in arbitrary_json(), b in arbitrary_json()) {
        let diff = difference(&a, &b);
        let rows = flatten_differences(&diff);

        let mut expected = Vec::new();
        divergence_paths(&diff, &mut Breadcrumb::new(), &mut expected);

        let paths: Vec<Breadcrumb> = rows.iter().map(|r| r.path.clone()).collect();
        prop_assert_eq!(&paths, &expected);
        prop_assert_eq!(rows.len(), diff.divergence_count());

        // Nothing below a divergence is reported
        for outer in &paths {
            prop_assert!(!paths.iter().any(|inner| outer.is_ancestor_of(inner)));
        }
    }

    #[test]
    fn swapping_sides_swaps_columns(a in arbitrary_json(), b in arbitrary_json()) {
        let forward = flatten_differences(&difference(&a, &b));
        let backward = flatten_differences(&difference(&b, &a));

        prop_assert_eq!(forward.len(), backward.len());
        for (f, r) in forward.iter().zip(&backward) {
            prop_assert_eq!(&f.path, &r.path);
            prop_assert_eq!(&f.a, &r.b);
            prop_assert_eq!(&f.b, &r.a);
        }
    }

    #[test]
    fn extra_key_is_a_single_b_row(
        base in prop::collection::btree_map("[a-z]{1,4}", arbitrary_json(), 0..5),
        extra in arbitrary_json(),
    ) {
        let a = Value::Object(base.clone().into_iter().collect());
        let mut with_extra = base;
        with_extra.insert("zz_extra".to_string(), extra.clone());
        let b = Value::Object(with_extra.into_iter().collect());

        let rows = flatten_differences(&difference(&a, &b));
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].path.to_string(), "zz_extra");
        prop_assert_eq!(rows[0].a.clone(), None);
        prop_assert_eq!(rows[0].b.clone(), Some(extra));
    }
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn disjoint_keys() {
    let diff = difference(&json!({"x": 1}), &json!({"y": 2}));
    assert_eq!(diff.to_value(), json!({"x": {"A_SIDE": 1}, "y": {"B_SIDE": 2}}));
}

#[test]
fn shorter_b_list() {
    let diff = difference(&json!([1, 2, 3]), &json!([1, 2]));
    assert_eq!(diff.to_value(), json!([1, 2, {"A_SIDE": 3}]));
}

#[test]
fn nested_list_listing() {
    let diff = difference(&json!({"a": [1, 2]}), &json!({"a": [1, 3]}));
    assert_eq!(diff.to_value(), json!({"a": [1, {"A_SIDE": 2, "B_SIDE": 3}]}));

    let rows = flatten_differences(&diff);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].path.to_string(), "a:List[1]");
    assert_eq!(rows[0].b, Some(json!(3)));
    assert_eq!(rows[0].a, Some(json!(2)));
}

#[test]
fn number_versus_string() {
    let diff = difference(&json!(5), &json!("5"));
    assert_eq!(diff.to_value(), json!({"A_SIDE": 5, "B_SIDE": "5"}));
}
