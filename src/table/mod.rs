//! A deliberately minimal CSV reader and column selectors.
//!
//! [`parse`] splits text on `\n` into rows and each row on `,` into fields.
//! There is no quoting, escaping or trimming: the format is exactly "lines
//! of comma-separated fields" and nothing more.
//!
//! # Examples
//!
//! ```
//! use fnkit::table::{column, merge_columns, parse};
//!
//! let table = parse("name,age,hair\nMerble,35,red\nBob,64,blonde");
//! assert_eq!(table[0], vec!["name", "age", "hair"]);
//!
//! let names = column(&table, 0);
//! let ages = column(&table, 1);
//! assert_eq!(names, vec![Some("Merble"), Some("Bob")]);
//! assert_eq!(
//!     merge_columns(names, ages),
//!     vec![(Some("Merble"), Some("35")), (Some("Bob"), Some("64"))]
//! );
//! ```

use crate::Error;
use crate::value::Value;

/// One line of fields.
pub type Row = Vec<String>;

/// An ordered sequence of rows. The first row is conventionally the header.
pub type Table = Vec<Row>;

/// Parses newline-separated rows of comma-separated fields.
///
/// Every input produces at least one row; the empty string parses to a
/// single row holding one empty field.
///
/// # Examples
///
/// ```
/// use fnkit::table::parse;
///
/// assert_eq!(
///     parse("NAME,AGE\nBob,64"),
///     vec![vec!["NAME", "AGE"], vec!["Bob", "64"]]
/// );
/// assert_eq!(parse(""), vec![vec![""]]);
/// assert_eq!(parse("a, b"), vec![vec!["a", " b"]]);
/// ```
pub fn parse(text: &str) -> Table {
    let table: Table = text
        .split('\n')
        .map(|line| line.split(',').map(str::to_owned).collect())
        .collect();
    tracing::trace!(rows = table.len(), "parsed table");
    table
}

/// Parses a dynamic value, which must be text.
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentType`] if `value` is not [`Value::Text`].
///
/// # Examples
///
/// ```
/// use fnkit::Error;
/// use fnkit::table::parse_value;
/// use fnkit::value::Value;
///
/// assert_eq!(parse_value(&Value::from("a,b")), Ok(vec![vec!["a".to_owned(), "b".to_owned()]]));
/// assert_eq!(parse_value(&Value::from(42)), Err(Error::EXPECTED_TEXT));
/// ```
pub fn parse_value(value: &Value) -> Result<Table, Error> {
    value.as_text().map(parse).ok_or_else(|| {
        tracing::debug!(kind = ?value.kind(), "expected text input");
        Error::EXPECTED_TEXT
    })
}

/// Selects field `index` from every row after the header.
///
/// The result holds one entry per data row, so columns taken from the same
/// table stay aligned. Rows with fewer than `index + 1` fields yield `None`.
///
/// # Examples
///
/// ```
/// use fnkit::table::{column, parse};
///
/// let table = parse("name,age\nBob\nAlice,30");
/// assert_eq!(column(&table, 0), vec![Some("Bob"), Some("Alice")]);
/// assert_eq!(column(&table, 1), vec![None, Some("30")]);
/// ```
pub fn column(table: &[Row], index: usize) -> Vec<Option<&str>> {
    table
        .iter()
        .skip(1)
        .map(|row| row.get(index).map(String::as_str))
        .collect()
}

/// Pairs up two columns element by element, stopping at the shorter one.
pub fn merge_columns<A, B>(first: Vec<A>, second: Vec<B>) -> Vec<(A, B)> {
    first.into_iter().zip(second).collect()
}
