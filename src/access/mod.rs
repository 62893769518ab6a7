//! Bounds- and type-checked positional access.
//!
//! Two flavours are provided:
//!
//! - Typed: [`nth`] and [`second`] over anything implementing [`Indexed`].
//!   The index is a `usize`, so only the bounds can be wrong.
//! - Dynamic: [`nth_value`] and [`second_value`] over [`Value`](crate::value::Value),
//!   where the index may not be a number and the target may not be indexed
//!   at all. [`is_indexed`] is the capability check.
//!
//! Both accept the position equal to the length and report it as an absent
//! element rather than an error.
//!
//! # Examples
//!
//! ```
//! use fnkit::access::{nth, nth_value};
//! use fnkit::value::Value;
//! use fnkit::Error;
//!
//! assert_eq!(nth(&[1, 2, 3], 0), Ok(Some(&1)));
//!
//! let result = nth_value(&Value::from(1000), &Value::from(1));
//! assert_eq!(result, Err(Error::UnsupportedOperand));
//! ```

mod dynamic;
mod indexed;

pub use dynamic::{is_indexed, nth_value, second_value};
pub use indexed::{Indexed, nth, second};
