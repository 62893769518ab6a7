//! Typed positional access.

use std::collections::VecDeque;

use crate::Error;

/// A type supporting integer-position access to its elements.
///
/// Sequences yield references to their elements; text yields `char`s, so
/// positions count characters rather than bytes.
///
/// # Examples
///
/// ```
/// use fnkit::access::Indexed;
///
/// let letters = "abc";
/// assert_eq!(letters.length(), 3);
/// assert_eq!(letters.element_at(1), Some('b'));
///
/// let numbers = vec![10, 20];
/// assert_eq!(numbers.element_at(0), Some(&10));
/// assert_eq!(numbers.element_at(2), None);
/// ```
pub trait Indexed {
    /// The element produced by positional access.
    type Element<'a>
    where
        Self: 'a;

    /// Number of addressable positions.
    fn length(&self) -> usize;

    /// Returns the element at `index`, or `None` past the end.
    fn element_at(&self, index: usize) -> Option<Self::Element<'_>>;
}

impl<T> Indexed for [T] {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn length(&self) -> usize {
        N
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Indexed for Vec<T> {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Indexed for VecDeque<T> {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl Indexed for str {
    type Element<'a> = char;

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn element_at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }
}

impl Indexed for String {
    type Element<'a> = char;

    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn element_at(&self, index: usize) -> Option<char> {
        self.as_str().element_at(index)
    }
}

/// Returns the element of `sequence` at `index`.
///
/// Positions `0..length` yield `Ok(Some(element))`. The position equal to
/// the length is accepted and yields `Ok(None)`; anything beyond it fails.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when `index` is greater than the length.
///
/// # Examples
///
/// ```
/// use fnkit::Error;
/// use fnkit::access::nth;
///
/// let letters = ['a', 'b', 'c'];
/// assert_eq!(nth(&letters, 1), Ok(Some(&'b')));
/// assert_eq!(nth(&letters, 3), Ok(None));
/// assert_eq!(nth(&letters, 4), Err(Error::OutOfRange { index: 4, length: 3 }));
///
/// assert_eq!(nth("abc", 2), Ok(Some('c')));
/// ```
pub fn nth<S>(sequence: &S, index: usize) -> Result<Option<S::Element<'_>>, Error>
where
    S: Indexed + ?Sized,
{
    let length = sequence.length();
    if index > length {
        tracing::debug!(index, length, "index value out of bounds");
        return Err(Error::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            length,
        });
    }
    Ok(sequence.element_at(index))
}

/// Returns the element at position 1. Same failure modes as [`nth`].
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for sequences shorter than one element.
///
/// # Examples
///
/// ```
/// use fnkit::access::second;
///
/// assert_eq!(second(&["a", "b"]), Ok(Some(&"b")));
/// assert_eq!(second("fo"), Ok(Some('o')));
/// assert!(second::<[i32]>(&[]).is_err());
/// ```
#[inline]
pub fn second<S>(sequence: &S) -> Result<Option<S::Element<'_>>, Error>
where
    S: Indexed + ?Sized,
{
    nth(sequence, 1)
}
