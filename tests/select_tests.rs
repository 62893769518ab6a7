//! Tests for extremum selection by left fold.

#![cfg(feature = "select")]

use fnkit::select::{best, best_by, max};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: &'static str,
    age: u32,
}

fn age_greater(x: &Person, y: &Person) -> bool {
    x.age > y.age
}

// =============================================================================
// max
// =============================================================================

#[rstest]
fn test_max_with_greater() {
    assert_eq!(max(|x: &i32, y: &i32| x > y, [1, 2, 3, 4, 5]), Some(5));
}

#[rstest]
fn test_max_with_less_finds_minimum() {
    assert_eq!(max(|x: &i32, y: &i32| x < y, [1, 2, 3, 4, 5]), Some(1));
}

#[rstest]
fn test_max_of_empty_is_none() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(max(|x: &i32, y: &i32| x > y, empty), None);
}

// =============================================================================
// best
// =============================================================================

#[rstest]
fn test_best_keeps_older_record() {
    let people = vec![
        Person { name: "Ann", age: 65 },
        Person { name: "Tim", age: 36 },
    ];
    assert_eq!(
        best(age_greater, people),
        Some(Person { name: "Ann", age: 65 })
    );
}

#[rstest]
fn test_best_borrowing_records() {
    let people = [
        Person { name: "Tim", age: 36 },
        Person { name: "Ann", age: 65 },
    ];
    let oldest = best(|x: &&Person, y: &&Person| age_greater(x, y), &people);
    assert_eq!(oldest.map(|person| person.name), Some("Ann"));
}

#[rstest]
fn test_best_of_empty_is_none() {
    assert_eq!(best(|_: &u8, _: &u8| true, []), None);
}

// =============================================================================
// best_by
// =============================================================================

#[rstest]
fn test_best_by_derived_value() {
    let people = [
        Person { name: "Tim", age: 36 },
        Person { name: "Ann", age: 65 },
        Person { name: "Sue", age: 22 },
    ];
    let youngest = best_by(|person: &Person| person.age, std::cmp::min, people.clone());
    let oldest = best_by(|person: &Person| person.age, std::cmp::max, people);
    assert_eq!(youngest.map(|person| person.name), Some("Sue"));
    assert_eq!(oldest.map(|person| person.name), Some("Ann"));
}

#[rstest]
fn test_best_by_tie_keeps_first() {
    let people = [
        Person { name: "Bob", age: 40 },
        Person { name: "Eve", age: 40 },
    ];
    let oldest = best_by(|person: &Person| person.age, std::cmp::max, people);
    assert_eq!(oldest.map(|person| person.name), Some("Bob"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// max with ">" agrees with Iterator::max
    #[test]
    fn prop_max_agrees_with_iterator(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let expected = values.iter().copied().max();
        prop_assert_eq!(max(|x: &i32, y: &i32| x > y, values), expected);
    }

    /// best with "<" agrees with Iterator::min
    #[test]
    fn prop_best_less_agrees_with_min(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let expected = values.iter().copied().min();
        prop_assert_eq!(best(|x: &i32, y: &i32| x < y, values), expected);
    }

    /// best_by returns the first element holding the extreme derived value
    #[test]
    fn prop_best_by_first_wins(values in prop::collection::vec((0u8..4, any::<u16>()), 1..32)) {
        let selected = best_by(|pair: &(u8, u16)| pair.0, std::cmp::max, values.clone());
        let extreme = values.iter().map(|pair| pair.0).max();
        let first = values.iter().copied().find(|pair| Some(pair.0) == extreme);
        prop_assert_eq!(selected, first);
    }
}
