//! Error type shared by every fallible operation in the crate.
//!
//! All failures are precondition violations: the caller supplied a value of
//! the wrong kind, a value without the required capability, or an index
//! outside the valid range. There is no recovery inside the library and no
//! partial result is ever returned.

use thiserror::Error;

/// Precondition violations reported by indexed access and parsing.
///
/// # Examples
///
/// ```rust
/// use fnkit::Error;
///
/// let error = Error::OutOfRange { index: 7, length: 3 };
/// assert_eq!(error.to_string(), "index value out of bounds");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A value of the wrong kind was supplied, such as a non-numeric index.
    #[error("{0}")]
    InvalidArgumentType(&'static str),
    /// The operand lacks the required capability, such as indexing a number.
    #[error("not supported on non-indexed types")]
    UnsupportedOperand,
    /// The index lies outside the valid range of the sequence.
    #[error("index value out of bounds")]
    OutOfRange {
        /// The rejected index.
        index: i64,
        /// Length of the sequence that was indexed.
        length: usize,
    },
}

impl Error {
    /// The error raised for an index that is not an integer.
    pub const NON_INTEGER_INDEX: Self = Self::InvalidArgumentType("index should be an integer");

    /// The error raised when text input was expected.
    pub const EXPECTED_TEXT: Self = Self::InvalidArgumentType("expected text input");
}

static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
