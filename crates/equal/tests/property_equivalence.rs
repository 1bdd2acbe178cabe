//! Property tests over generated value trees: reflexivity, symmetry, and
//! the ordered-implies-unordered relationship between the two policies.

use proptest::prelude::*;
use valeq_equal::{deep_equal, deep_equal_unordered};
use valeq_value::Value;

/// Opaque-free value trees. Floats are drawn from a finite range, since a
/// generated NaN would break reflexivity by IEEE rules rather than by a
/// comparator defect.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        (-1.0e9f64..1.0e9f64).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::Str),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            prop::collection::vec((inner.clone(), inner.clone()), 0..4).prop_map(Value::Map),
            (inner.clone(), inner).prop_map(|(left, right)| {
                Value::record("pair", vec![("left", left), ("right", right)])
            }),
        ]
    })
}

proptest! {
    #[test]
    fn reflexive_under_both_policies(v in value_strategy()) {
        prop_assert_eq!(deep_equal(&v, &v), Ok(true));
        prop_assert_eq!(deep_equal_unordered(&v, &v), Ok(true));
    }

    #[test]
    fn reflexive_across_clones(v in value_strategy()) {
        let w = v.clone();
        prop_assert_eq!(deep_equal(&v, &w), Ok(true));
        prop_assert_eq!(deep_equal_unordered(&v, &w), Ok(true));
    }

    #[test]
    fn symmetric_under_both_policies(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
        prop_assert_eq!(deep_equal_unordered(&a, &b), deep_equal_unordered(&b, &a));
    }

    #[test]
    fn positional_equality_implies_bag_equality(a in value_strategy(), b in value_strategy()) {
        if deep_equal(&a, &b) == Ok(true) {
            prop_assert_eq!(deep_equal_unordered(&a, &b), Ok(true));
        }
    }

    #[test]
    fn reversing_a_sequence_never_changes_bag_equality(
        items in prop::collection::vec(value_strategy(), 0..6)
    ) {
        let forward = Value::Seq(items.clone());
        let mut reversed_items = items;
        reversed_items.reverse();
        let reversed = Value::Seq(reversed_items);
        prop_assert_eq!(deep_equal_unordered(&forward, &reversed), Ok(true));
    }
}
