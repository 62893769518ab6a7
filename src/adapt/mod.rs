//! Argument adapters.
//!
//! Two adapters convert between a function taking positional arguments and
//! a function taking a single sequence of arguments:
//!
//! - [`splat`]: spreads one sequence argument into positional arguments
//! - [`unsplat!`]: collects positional arguments into one array argument
//!
//! # Examples
//!
//! ```
//! use fnkit::adapt::splat;
//! use fnkit::unsplat;
//!
//! let add = |first: i32, second: i32| first + second;
//!
//! // splat(f)(args) = f(args...)
//! assert_eq!(splat(add)([1, 2]), 3);
//!
//! // unsplat!(f, a, b)(x, y) = f([x, y])
//! let joined = unsplat!(|words: [&str; 2]| words.join(" "), first, second);
//! assert_eq!(joined("chunky", "bacon"), "chunky bacon");
//! ```
//!
//! # Laws
//!
//! - **Spread equivalence**: `splat(f)((a, b)) == f(a, b)`
//! - **Collection equivalence**: `unsplat!(f, a, b)(x, y) == f([x, y])`

mod spread;
mod unsplat_macro;

pub use spread::{Spread, splat};

// Re-export macros (already at crate root via #[macro_export])
pub use crate::unsplat;
