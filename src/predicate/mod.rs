//! Existence predicates and conditional execution.
//!
//! Two notions of "there is something here":
//!
//! - **existy**: the value is not absent. `None`, [`Value::Null`] and
//!   [`Value::Undefined`] are absent; everything else, including `0`,
//!   `false` and `""`, exists.
//! - **truthy**: the value is existy and is not the boolean `false`.
//!
//! [`call_if`] runs an action only when its condition is truthy.
//!
//! # Examples
//!
//! ```
//! use fnkit::predicate::{call_if, existy, truthy};
//!
//! assert!(!existy(&None::<i32>));
//! assert!(existy(&0));
//! assert!(!truthy(&false));
//! assert!(truthy(&0));
//!
//! assert_eq!(call_if(&Some(1), || "ran"), Some("ran"));
//! assert_eq!(call_if(&false, || "ran"), None);
//! ```
//!
//! [`Value::Null`]: crate::value::Value::Null
//! [`Value::Undefined`]: crate::value::Value::Undefined

use std::collections::VecDeque;

#[cfg(feature = "value")]
use crate::value::Value;

/// Types that can be asked whether they hold something.
///
/// Both methods default to "present", so plain data types implement the
/// trait with an empty `impl` block.
///
/// # Examples
///
/// ```
/// use fnkit::predicate::Presence;
///
/// struct Record {
///     age: u32,
/// }
///
/// impl Presence for Record {}
///
/// assert!(Record { age: 65 }.is_truthy());
/// assert!(!Some(false).is_truthy());
/// assert!(Some(false).is_existy());
/// ```
pub trait Presence {
    /// Returns `true` unless the value is absent.
    fn is_existy(&self) -> bool {
        true
    }

    /// Returns `true` if the value is existy and not the boolean `false`.
    fn is_truthy(&self) -> bool {
        self.is_existy()
    }
}

macro_rules! impl_presence_for_plain {
    ($($plain:ty),* $(,)?) => {
        $(
            impl Presence for $plain {}
        )*
    };
}

impl_presence_for_plain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, str, String,
);

impl<T> Presence for Vec<T> {}

impl<T> Presence for VecDeque<T> {}

impl<T> Presence for [T] {}

impl<T, const N: usize> Presence for [T; N] {}

impl Presence for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Presence> Presence for Option<T> {
    #[inline]
    fn is_existy(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_existy)
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_truthy)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    #[inline]
    fn is_existy(&self) -> bool {
        (**self).is_existy()
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    #[inline]
    fn is_existy(&self) -> bool {
        (**self).is_existy()
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(feature = "value")]
impl Presence for Value {
    #[inline]
    fn is_existy(&self) -> bool {
        !self.is_absent()
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_existy() && *self != Self::Bool(false)
    }
}

/// Returns `true` unless `value` is absent.
#[inline]
pub fn existy<T: Presence + ?Sized>(value: &T) -> bool {
    value.is_existy()
}

/// Returns `true` if `value` is existy and not the boolean `false`.
#[inline]
pub fn truthy<T: Presence + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

/// Runs `action` only if `condition` is truthy.
///
/// Returns `Some` with the action's result, or `None` without running the
/// action at all.
///
/// # Examples
///
/// ```
/// use fnkit::predicate::call_if;
///
/// let mut calls = 0;
/// assert_eq!(call_if(&None::<u8>, || { calls += 1; calls }), None);
/// assert_eq!(call_if(&0, || { calls += 1; calls }), Some(1));
/// assert_eq!(calls, 1);
/// ```
pub fn call_if<C, R, F>(condition: &C, action: F) -> Option<R>
where
    C: Presence + ?Sized,
    F: FnOnce() -> R,
{
    if truthy(condition) {
        Some(action())
    } else {
        None
    }
}

/// Like [`call_if`], but reports a skipped action as [`Value::Null`].
///
/// # Examples
///
/// ```
/// use fnkit::predicate::call_if_value;
/// use fnkit::value::Value;
///
/// assert_eq!(call_if_value(&Value::Undefined, || 42), Value::Null);
/// assert_eq!(call_if_value(&Value::from("yes"), || 42), Value::from(42));
/// ```
#[cfg(feature = "value")]
pub fn call_if_value<C, R, F>(condition: &C, action: F) -> Value
where
    C: Presence + ?Sized,
    F: FnOnce() -> R,
    R: Into<Value>,
{
    call_if(condition, action).map_or(Value::Null, Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, false, false)]
    #[case(Some(false), true, false)]
    #[case(Some(true), true, true)]
    fn test_optional_booleans(
        #[case] value: Option<bool>,
        #[case] is_existy: bool,
        #[case] is_truthy: bool,
    ) {
        assert_eq!(existy(&value), is_existy);
        assert_eq!(truthy(&value), is_truthy);
    }

    #[rstest]
    fn test_plain_values_are_truthy() {
        assert!(truthy(&0));
        assert!(truthy(&0.0));
        assert!(truthy(""));
        assert!(truthy(&String::new()));
        assert!(truthy(&Vec::<i32>::new()));
        assert!(truthy(&[0u8; 0]));
    }

    #[rstest]
    fn test_nested_absence_is_absent() {
        let nested: Option<Option<i32>> = Some(None);
        assert!(!existy(&nested));
    }

    #[cfg(feature = "value")]
    #[rstest]
    #[case(Value::Null, false, false)]
    #[case(Value::Undefined, false, false)]
    #[case(Value::Bool(false), true, false)]
    #[case(Value::Bool(true), true, true)]
    #[case(Value::from(0), true, true)]
    #[case(Value::from(""), true, true)]
    #[case(Value::from(Vec::<Value>::new()), true, true)]
    fn test_value_presence(#[case] value: Value, #[case] is_existy: bool, #[case] is_truthy: bool) {
        assert_eq!(existy(&value), is_existy);
        assert_eq!(truthy(&value), is_truthy);
    }

    #[rstest]
    fn test_call_if_has_no_side_effect_when_falsy() {
        let mut log = Vec::new();
        let result = call_if(&Some(false), || log.push("ran"));
        assert_eq!(result, None);
        assert!(log.is_empty());
    }

    #[rstest]
    fn test_call_if_through_reference() {
        let condition = &&Some(3);
        assert_eq!(call_if(condition, || 3 * 2), Some(6));
    }
}
