//! Unit tests for existence predicates and conditional execution.

#![cfg(all(feature = "predicate", feature = "value"))]

use fnkit::predicate::{Presence, call_if, call_if_value, existy, truthy};
use fnkit::value::Value;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// existy / truthy
// =============================================================================

#[rstest]
fn test_absent_values_are_not_existy() {
    assert!(!existy(&Value::Null));
    assert!(!existy(&Value::Undefined));
    assert!(!existy(&None::<i32>));
}

#[rstest]
fn test_zero_is_existy() {
    assert!(existy(&0));
    assert!(existy(&Value::from(0)));
}

#[rstest]
fn test_false_is_existy_but_not_truthy() {
    assert!(existy(&false));
    assert!(!truthy(&false));
    assert!(!truthy(&Value::Bool(false)));
}

#[rstest]
fn test_zero_is_truthy() {
    assert!(truthy(&0));
    assert!(truthy(&Value::from(0)));
}

#[rstest]
fn test_truthy_implies_existy() {
    let samples = [
        Value::Null,
        Value::Undefined,
        Value::Bool(false),
        Value::Bool(true),
        Value::from(0),
        Value::from(""),
        Value::from(vec![Value::Null]),
    ];
    for sample in &samples {
        if truthy(sample) {
            assert!(existy(sample), "{sample} is truthy but not existy");
        }
    }
}

#[rstest]
fn test_custom_type_presence() {
    struct Flag(bool);

    impl Presence for Flag {
        fn is_truthy(&self) -> bool {
            self.0
        }
    }

    assert!(existy(&Flag(false)));
    assert!(!truthy(&Flag(false)));
    assert!(truthy(&Some(Flag(true))));
}

// =============================================================================
// call_if
// =============================================================================

#[rstest]
fn test_call_if_runs_for_truthy_condition() {
    assert_eq!(call_if(&Value::from(0), || 1 + 1), Some(2));
}

#[rstest]
#[case(Value::Null)]
#[case(Value::Undefined)]
#[case(Value::Bool(false))]
fn test_call_if_skips_for_falsy_condition(#[case] condition: Value) {
    let calls = Cell::new(0);
    let result = call_if(&condition, || calls.set(calls.get() + 1));
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_call_if_value_reports_missing_as_null() {
    assert_eq!(call_if_value(&false, || "skipped"), Value::Null);
    assert_eq!(call_if_value(&true, || "ran"), Value::from("ran"));
}
