//! A small dynamic value model.
//!
//! Several idioms in this crate are capability checks over values whose
//! kind is only known at run time: "is this indexable?", "is this present?".
//! Instead of probing ad hoc properties, the kind of a [`Value`] is an
//! explicit tag, and [`Value::kind`] classifies it into the three cases the
//! rest of the crate cares about.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::value::{Value, ValueKind};
//!
//! let word = Value::from("abc");
//! assert_eq!(word.kind(), ValueKind::Text);
//! assert!(word.is_indexed());
//!
//! let number = Value::from(1000);
//! assert_eq!(number.kind(), ValueKind::Other);
//! assert!(!number.is_indexed());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dynamically typed value.
///
/// `Null` and `Undefined` are kept apart because indexed access one past
/// the end yields `Undefined` while "no result" yields `Null`; every
/// existence check treats them identically.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    /// An explicitly missing value.
    #[default]
    Null,
    /// A value that was never assigned.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number. Integers are represented exactly up to 2^53.
    Number(f64),
    /// A string of characters.
    Text(String),
    /// An ordered sequence of values.
    Sequence(Vec<Self>),
}

/// Capability classification of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Supports positional access to its elements.
    Sequence,
    /// Supports positional access to its characters.
    Text,
    /// Anything else.
    Other,
}

impl Value {
    /// Classifies this value by capability.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Text(_) => ValueKind::Text,
            _ => ValueKind::Other,
        }
    }

    /// Returns `true` if the value supports integer-position access.
    #[inline]
    pub const fn is_indexed(&self) -> bool {
        !matches!(self.kind(), ValueKind::Other)
    }

    /// Returns `true` for `Null` and `Undefined`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Number of elements (or characters) of an indexed value.
    ///
    /// ```rust
    /// use fnkit::value::Value;
    ///
    /// assert_eq!(Value::from("héllo").indexed_len(), Some(5));
    /// assert_eq!(Value::from(vec![1, 2]).indexed_len(), Some(2));
    /// assert_eq!(Value::Null.indexed_len(), None);
    /// ```
    pub fn indexed_len(&self) -> Option<usize> {
        match self {
            Self::Sequence(elements) => Some(elements.len()),
            Self::Text(text) => Some(text.chars().count()),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Sequence`.
    ///
    /// ```rust
    /// use fnkit::value::Value;
    ///
    /// let pair = Value::from(vec![1, 2]);
    /// assert_eq!(pair.as_sequence(), Some(&[Value::from(1), Value::from(2)][..]));
    /// assert_eq!(Value::from("12").as_sequence(), None);
    /// ```
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Undefined => formatter.write_str("undefined"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::Sequence(elements) => {
                formatter.write_str("[")?;
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
        }
    }
}

// Integral numbers print without a fractional part.
#[allow(clippy::cast_possible_truncation)]
fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        write!(formatter, "{}", number as i64)
    } else {
        write!(formatter, "{number}")
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(number: $integer) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::Text(character.to_string())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::Sequence(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
