//! Comparator builders.
//!
//! Sorting in Rust takes a three-way comparison returning
//! [`Ordering`]. This module builds such comparisons from orderings and
//! from boolean predicates:
//!
//! - [`numerically`]: three-way comparison by natural order
//! - [`numeric`]: boolean "not less than" predicate
//! - [`boolean_comparator`]: sorts by a boolean "should come after" predicate
//! - [`comparator`]: builds a three-way comparison from a "less or equal" predicate
//!
//! # Examples
//!
//! ```
//! use fnkit::compare::{boolean_comparator, comparator, numeric, numerically};
//!
//! let expected = vec![-108, -6, -1, 0, 2, 3, 10, 42];
//!
//! let mut values = vec![2, 3, -1, -6, 0, -108, 42, 10];
//! values.sort_by(numerically);
//! assert_eq!(values, expected);
//!
//! let mut values = vec![2, 3, -1, -6, 0, -108, 42, 10];
//! values.sort_by(boolean_comparator(numeric));
//! assert_eq!(values, expected);
//!
//! let mut values = vec![2, 3, -1, -6, 0, -108, 42, 10];
//! values.sort_by(comparator(|left: &i32, right: &i32| left <= right));
//! assert_eq!(values, expected);
//! ```
//!
//! # Caveat
//!
//! [`comparator`] never reports [`Ordering::Equal`]. Equal elements compare
//! as `Less` in both directions, which is not a total order, so stability
//! is not guaranteed for inputs containing duplicates.

use std::cmp::Ordering;

/// Compares two values by their natural order.
///
/// Pairs without an order (such as a NaN) compare as [`Ordering::Equal`].
/// The ordering converts to the signals `-1`, `0` and `1` with `as i8`.
///
/// # Examples
///
/// ```
/// use fnkit::compare::numerically;
/// use std::cmp::Ordering;
///
/// assert_eq!(numerically(&1, &2), Ordering::Less);
/// assert_eq!(numerically(&2.5, &2.5) as i8, 0);
/// assert_eq!(numerically(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn numerically<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

/// Returns `true` if `left` is not less than `right`.
///
/// # Examples
///
/// ```
/// use fnkit::compare::numeric;
///
/// assert!(numeric(&3, &2));
/// assert!(numeric(&2, &2));
/// assert!(!numeric(&1, &2));
/// ```
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn numeric<T: PartialOrd>(left: &T, right: &T) -> bool {
    !(left < right)
}

/// Turns a boolean predicate into a three-way comparison the way sort
/// routines that accept boolean comparators read them.
///
/// A `true` result places `left` after `right` ([`Ordering::Greater`]);
/// `false` places it before ([`Ordering::Less`]).
///
/// # Examples
///
/// ```
/// use fnkit::compare::{boolean_comparator, numeric};
///
/// let mut values = vec![3, 1, 2];
/// values.sort_by(boolean_comparator(numeric));
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn boolean_comparator<T, P>(predicate: P) -> impl Fn(&T, &T) -> Ordering
where
    P: Fn(&T, &T) -> bool,
{
    move |left: &T, right: &T| {
        if predicate(left, right) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

/// Builds a three-way comparison from a "less or equal" predicate.
///
/// Returns [`Ordering::Less`] when `predicate(left, right)` holds and
/// [`Ordering::Greater`] otherwise. [`Ordering::Equal`] is never returned.
///
/// # Examples
///
/// ```
/// use fnkit::compare::comparator;
/// use std::cmp::Ordering;
///
/// let less_or_equal = comparator(|left: &i32, right: &i32| left <= right);
/// assert_eq!(less_or_equal(&1, &2), Ordering::Less);
/// assert_eq!(less_or_equal(&2, &1), Ordering::Greater);
/// assert_eq!(less_or_equal(&2, &2), Ordering::Less);
/// ```
pub fn comparator<T, P>(predicate: P) -> impl Fn(&T, &T) -> Ordering
where
    P: Fn(&T, &T) -> bool,
{
    move |left: &T, right: &T| {
        if predicate(left, right) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
