//! # fnkit
//!
//! Small functional programming idioms for Rust.
//!
//! ## Overview
//!
//! Each module is a handful of pure functions that compose by direct
//! application:
//!
//! - **Adapters**: [`splat`](adapt::splat) spreads one sequence argument
//!   into positional arguments, [`unsplat!`] collects positional arguments
//!   into one array argument
//! - **Indexed access**: [`nth`](access::nth) and [`second`](access::second)
//!   with bounds checks, plus dynamic variants with type checks
//! - **Comparators**: three-way comparisons built from orderings and
//!   boolean predicates
//! - **Table**: a minimal comma/newline parser and column selectors
//! - **Predicates**: [`existy`](predicate::existy), [`truthy`](predicate::truthy)
//!   and [`call_if`](predicate::call_if)
//! - **Selection**: [`max`](select::max), [`best`](select::best) and
//!   [`best_by`](select::best_by) by left fold
//! - **Value**: a dynamic value model for the duck-typed operations
//!
//! ## Feature Flags
//!
//! - `adapt`: Argument adapters
//! - `access`: Indexed access (enables `value`)
//! - `compare`: Comparator builders
//! - `table`: Minimal CSV parsing (enables `value`)
//! - `predicate`: Existence predicates
//! - `select`: Extremum selection
//! - `value`: Dynamic value model
//! - `serde`: `Serialize`/`Deserialize` for [`Value`](value::Value)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let mut values = vec![2, 3, -1, -6, 0, -108, 42, 10];
//! values.sort_by(numerically);
//! assert_eq!(nth(&values, 0), Ok(Some(&-108)));
//!
//! let oldest = best(|x: &u32, y: &u32| x > y, [36, 65]);
//! assert_eq!(call_if(&oldest, || "found"), Some("found"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Error;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;

    #[cfg(feature = "access")]
    pub use crate::access::*;

    #[cfg(feature = "compare")]
    pub use crate::compare::*;

    #[cfg(feature = "table")]
    pub use crate::table::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "select")]
    pub use crate::select::*;

    #[cfg(feature = "value")]
    pub use crate::value::*;
}

mod error;

pub use error::Error;

#[cfg(feature = "adapt")]
pub mod adapt;

#[cfg(feature = "access")]
pub mod access;

#[cfg(feature = "compare")]
pub mod compare;

#[cfg(feature = "table")]
pub mod table;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "select")]
pub mod select;

#[cfg(feature = "value")]
pub mod value;
