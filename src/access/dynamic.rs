//! Positional access over dynamic [`Value`]s.

use crate::Error;
use crate::value::Value;

/// Returns `true` if `value` is a sequence or text.
///
/// ```
/// use fnkit::access::is_indexed;
/// use fnkit::value::Value;
///
/// assert!(is_indexed(&Value::from("text")));
/// assert!(is_indexed(&Value::from(vec![1, 2])));
/// assert!(!is_indexed(&Value::from(1000)));
/// assert!(!is_indexed(&Value::Null));
/// ```
#[inline]
pub const fn is_indexed(value: &Value) -> bool {
    value.is_indexed()
}

/// Returns the element of a dynamic `sequence` at a dynamic `index`.
///
/// Checks run in order: the index must be an integral number, the sequence
/// must be indexed, and the index must lie in `0..=length`. The position
/// equal to the length yields [`Value::Undefined`]. Text yields one-character
/// text values.
///
/// # Errors
///
/// - [`Error::InvalidArgumentType`] if `index` is not an integral number
/// - [`Error::UnsupportedOperand`] if `sequence` is neither a sequence nor text
/// - [`Error::OutOfRange`] if `index` is negative or greater than the length
///
/// # Examples
///
/// ```
/// use fnkit::Error;
/// use fnkit::access::nth_value;
/// use fnkit::value::Value;
///
/// let letters = Value::from("abc");
/// assert_eq!(nth_value(&letters, &Value::from(1)), Ok(Value::from("b")));
/// assert_eq!(nth_value(&letters, &Value::from(3)), Ok(Value::Undefined));
///
/// assert_eq!(
///     nth_value(&Value::from(1000), &Value::from(1)),
///     Err(Error::UnsupportedOperand)
/// );
/// assert_eq!(
///     nth_value(&letters, &Value::from("x")),
///     Err(Error::NON_INTEGER_INDEX)
/// );
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn nth_value(sequence: &Value, index: &Value) -> Result<Value, Error> {
    let Some(position) = index.as_number().filter(|number| number.fract() == 0.0) else {
        tracing::debug!(%index, "index should be an integer");
        return Err(Error::NON_INTEGER_INDEX);
    };

    let Some(length) = sequence.indexed_len() else {
        tracing::debug!(kind = ?sequence.kind(), "not supported on non-indexed types");
        return Err(Error::UnsupportedOperand);
    };

    if position < 0.0 || position > length as f64 {
        tracing::debug!(position, length, "index value out of bounds");
        return Err(Error::OutOfRange {
            index: position as i64,
            length,
        });
    }

    let position = position as usize;
    let element = sequence.as_sequence().map_or_else(
        || {
            sequence
                .as_text()
                .and_then(|text| text.chars().nth(position))
                .map(Value::from)
        },
        |elements| elements.get(position).cloned(),
    );
    Ok(element.unwrap_or(Value::Undefined))
}

/// Returns the element at position 1. Same failure modes as [`nth_value`].
///
/// # Errors
///
/// See [`nth_value`].
#[inline]
pub fn second_value(sequence: &Value) -> Result<Value, Error> {
    nth_value(sequence, &Value::Number(1.0))
}
