//! Extremum selection by left fold.
//!
//! Each selector folds a sequence pairwise from the left, keeping one of
//! the two candidates at every step. None of them has a seed, so an empty
//! sequence yields `None`.
//!
//! - [`max`]: keeps the running element while `is_greater(running, next)` holds
//! - [`best`]: keeps the running element while `better(running, next)` holds
//! - [`best_by`]: compares derived values with a "pick one of two" function
//!
//! # Examples
//!
//! ```
//! use fnkit::select::{best, best_by, max};
//!
//! let numbers = [1, 2, 3, 4, 5];
//! assert_eq!(max(|x: &i32, y: &i32| x > y, numbers), Some(5));
//! assert_eq!(max(|x: &i32, y: &i32| x < y, numbers), Some(1));
//!
//! let words = ["fig", "banana", "kiwi"];
//! assert_eq!(best(|x: &&str, y: &&str| x.len() > y.len(), words), Some("banana"));
//!
//! let shortest = best_by(|word: &&str| word.len(), std::cmp::min, words);
//! assert_eq!(shortest, Some("fig"));
//! ```

/// Returns the element preferred by `is_greater` under a left fold.
///
/// At each step the running element `x` is kept when `is_greater(&x, &y)`
/// holds and replaced by the next element `y` otherwise. Returns `None` for
/// an empty sequence.
///
/// # Examples
///
/// ```
/// use fnkit::select::max;
///
/// assert_eq!(max(|x: &i32, y: &i32| x > y, vec![3, 9, 4]), Some(9));
/// assert_eq!(max(|x: &i32, y: &i32| x > y, Vec::new()), None);
/// ```
pub fn max<T, I, P>(is_greater: P, sequence: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: Fn(&T, &T) -> bool,
{
    best(is_greater, sequence)
}

/// Returns the element that `better` prefers under a left fold.
///
/// `better(&x, &y)` returns `true` when `x` should be kept over `y`.
/// Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use fnkit::select::best;
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     age: u32,
/// }
///
/// let people = vec![Person { age: 65 }, Person { age: 36 }];
/// let oldest = best(|x: &Person, y: &Person| x.age > y.age, people);
/// assert_eq!(oldest, Some(Person { age: 65 }));
/// ```
pub fn best<T, I, P>(better: P, sequence: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: Fn(&T, &T) -> bool,
{
    sequence
        .into_iter()
        .reduce(|kept, candidate| if better(&kept, &candidate) { kept } else { candidate })
}

/// Returns the element whose derived value `better_of_two` selects.
///
/// Each element is mapped through `value_of`, and `better_of_two` picks one
/// of the two derived values (for example [`std::cmp::max`] or [`f64::min`]).
/// The running element is kept whenever its derived value equals the
/// selected one, so ties resolve to the earliest element.
///
/// Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use fnkit::select::best_by;
///
/// let people = [("Alice", 36), ("Bob", 65), ("Carol", 65)];
/// let oldest = best_by(|person: &(&str, u32)| person.1, std::cmp::max, people);
/// assert_eq!(oldest, Some(("Bob", 65)));
///
/// let lightest = best_by(|weight: &f64| *weight, f64::min, [2.5, 0.5, 1.0]);
/// assert_eq!(lightest, Some(0.5));
/// ```
pub fn best_by<T, V, I, M, B>(value_of: M, better_of_two: B, sequence: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    M: Fn(&T) -> V,
    B: Fn(V, V) -> V,
    V: PartialEq + Clone,
{
    sequence.into_iter().reduce(|kept, candidate| {
        let kept_value = value_of(&kept);
        let selected = better_of_two(kept_value.clone(), value_of(&candidate));
        if kept_value == selected { kept } else { candidate }
    })
}
