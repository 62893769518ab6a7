//! The `unsplat!` macro for collecting positional arguments.

/// Collects positional arguments into a single array argument.
///
/// `unsplat!(f, a, b, c)` expands to a closure `|a, b, c| f([a, b, c])`.
/// The listed identifiers name the parameters of the produced closure and
/// fix its arity; each may carry a type ascription.
///
/// This is the inverse of [`splat`](crate::adapt::splat):
///
/// - `unsplat!(splat(f), a, b)(x, y) == f(x, y)`
/// - `splat(unsplat!(f, a, b))([x, y]) == f([x, y])`
///
/// # Examples
///
/// ```
/// use fnkit::unsplat;
///
/// let join_words = unsplat!(|words: [&str; 3]| words.join(" "), first, second, third);
/// assert_eq!(join_words("chunky", "bacon", "!"), "chunky bacon !");
/// ```
///
/// ## With type ascription
///
/// ```
/// use fnkit::unsplat;
///
/// fn total(values: [i32; 2]) -> i32 { values.iter().sum() }
///
/// let add = unsplat!(total, left: i32, right: i32);
/// assert_eq!(add(40, 2), 42);
/// ```
///
/// ## Round trip with `splat`
///
/// ```
/// use fnkit::adapt::splat;
/// use fnkit::unsplat;
///
/// let multiply = |left: i32, right: i32| left * right;
/// let round_trip = unsplat!(splat(multiply), left: i32, right: i32);
/// assert_eq!(round_trip(6, 7), multiply(6, 7));
/// ```
#[macro_export]
macro_rules! unsplat {
    ($function:expr $(, $argument:ident $(: $argument_type:ty)?)*) => {{
        let function = $function;
        move |$($argument $(: $argument_type)?),*| function([$($argument),*])
    }};
}
