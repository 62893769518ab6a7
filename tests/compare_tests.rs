//! Tests for comparator builders, including sort-equivalence properties.

#![cfg(feature = "compare")]

use fnkit::compare::{boolean_comparator, comparator, numeric, numerically};
use proptest::prelude::*;
use rstest::rstest;
use std::cmp::Ordering;

const UNSORTED: [i32; 8] = [2, 3, -1, -6, 0, -108, 42, 10];
const SORTED: [i32; 8] = [-108, -6, -1, 0, 2, 3, 10, 42];

// =============================================================================
// Sorting the fixture three ways
// =============================================================================

#[rstest]
fn test_sort_numerically() {
    let mut values = UNSORTED.to_vec();
    values.sort_by(numerically);
    assert_eq!(values, SORTED);
}

#[rstest]
fn test_sort_with_boolean_numeric() {
    let mut values = UNSORTED.to_vec();
    values.sort_by(boolean_comparator(numeric));
    assert_eq!(values, SORTED);
}

#[rstest]
fn test_sort_with_less_or_equal_comparator() {
    let mut values = UNSORTED.to_vec();
    values.sort_by(comparator(|x: &i32, y: &i32| x <= y));
    assert_eq!(values, SORTED);
}

// =============================================================================
// Known quirk: comparator never reports Equal
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(-5, -5)]
#[case(42, 42)]
fn test_comparator_reports_less_for_equal_values(#[case] left: i32, #[case] right: i32) {
    let compare = comparator(|x: &i32, y: &i32| x <= y);
    assert_eq!(compare(&left, &right), Ordering::Less);
    assert_eq!(compare(&right, &left), Ordering::Less);
}

#[rstest]
fn test_numerically_reports_equal_for_equal_values() {
    assert_eq!(numerically(&7, &7), Ordering::Equal);
}

// =============================================================================
// Properties over distinct inputs
// =============================================================================

// Distinct values keep the predicate-built orders total.
fn distinct_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(any::<i32>(), 0..16)
        .prop_map(|set| set.into_iter().rev().collect())
}

proptest! {
    /// All three comparators agree with the standard ascending sort
    #[test]
    fn prop_comparators_agree_with_sort(values in distinct_values()) {
        let mut expected = values.clone();
        expected.sort_unstable();

        let mut by_ordering = values.clone();
        by_ordering.sort_by(numerically);

        let mut by_boolean = values.clone();
        by_boolean.sort_by(boolean_comparator(numeric));

        let mut by_predicate = values;
        by_predicate.sort_by(comparator(|x: &i32, y: &i32| x <= y));

        prop_assert_eq!(&by_ordering, &expected);
        prop_assert_eq!(&by_boolean, &expected);
        prop_assert_eq!(&by_predicate, &expected);
    }

    /// numerically is antisymmetric
    #[test]
    fn prop_numerically_antisymmetric(left in any::<i64>(), right in any::<i64>()) {
        prop_assert_eq!(numerically(&left, &right), numerically(&right, &left).reverse());
    }

    /// numeric is the negation of "less than"
    #[test]
    fn prop_numeric_is_not_less(left in any::<i64>(), right in any::<i64>()) {
        prop_assert_eq!(numeric(&left, &right), left >= right);
    }
}
