//! Spreading a single sequence argument into positional arguments.
//!
//! Rust has no spread syntax, so [`splat`] expresses "call `f` with the
//! elements of this sequence as its arguments" through the [`Spread`] trait,
//! implemented for tuples and arrays of up to eight elements.

/// A sequence whose elements can be passed to `F` as positional arguments.
///
/// Implemented for tuples `(A, B, ...)` where `F: Fn(A, B, ...) -> R`, and
/// for arrays `[T; N]` where `F` takes `N` arguments of type `T`.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::Spread;
///
/// let add = |first: i32, second: i32| first + second;
/// assert_eq!((1, 2).spread_into(&add), 3);
/// assert_eq!([1, 2].spread_into(&add), 3);
/// ```
pub trait Spread<F> {
    /// The result of calling the function.
    type Output;

    /// Calls `function` with the elements of `self` as positional arguments.
    fn spread_into(self, function: &F) -> Self::Output;
}

macro_rules! impl_spread_for_tuple {
    ($($binding:ident: $element:ident),*) => {
        impl<F, R, $($element),*> Spread<F> for ($($element,)*)
        where
            F: Fn($($element),*) -> R,
        {
            type Output = R;

            #[inline]
            fn spread_into(self, function: &F) -> R {
                let ($($binding,)*) = self;
                function($($binding),*)
            }
        }
    };
}

impl_spread_for_tuple!();
impl_spread_for_tuple!(a: A);
impl_spread_for_tuple!(a: A, b: B);
impl_spread_for_tuple!(a: A, b: B, c: C);
impl_spread_for_tuple!(a: A, b: B, c: C, d: D);
impl_spread_for_tuple!(a: A, b: B, c: C, d: D, e: E);
impl_spread_for_tuple!(a: A, b: B, c: C, d: D, e: E, f: G);
impl_spread_for_tuple!(a: A, b: B, c: C, d: D, e: E, f: G, g: H);
impl_spread_for_tuple!(a: A, b: B, c: C, d: D, e: E, f: G, g: H, h: I);

macro_rules! impl_spread_for_array {
    ($length:literal; $($binding:ident),*) => {
        impl<F, R, T> Spread<F> for [T; $length]
        where
            F: Fn($(impl_spread_for_array!(@element $binding)),*) -> R,
        {
            type Output = R;

            #[inline]
            fn spread_into(self, function: &F) -> R {
                let [$($binding),*] = self;
                function($($binding),*)
            }
        }
    };
    (@element $binding:ident) => {
        T
    };
}

impl_spread_for_array!(0;);
impl_spread_for_array!(1; a);
impl_spread_for_array!(2; a, b);
impl_spread_for_array!(3; a, b, c);
impl_spread_for_array!(4; a, b, c, d);
impl_spread_for_array!(5; a, b, c, d, e);
impl_spread_for_array!(6; a, b, c, d, e, f);
impl_spread_for_array!(7; a, b, c, d, e, f, g);
impl_spread_for_array!(8; a, b, c, d, e, f, g, h);

/// Adapts `function` to take its arguments as one sequence.
///
/// `splat(f)(args)` is equivalent to calling `f` with the elements of
/// `args` as positional arguments. The sequence is a tuple (for mixed
/// argument types) or an array (for uniform argument types).
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::splat;
///
/// let add_all = splat(|first: i32, second: i32| first + second);
/// assert_eq!(add_all([1, 2]), 3);
///
/// let describe = splat(|name: &str, age: u32| format!("{name} is {age}"));
/// assert_eq!(describe(("Bob", 64)), "Bob is 64");
/// ```
pub fn splat<F, Args>(function: F) -> impl Fn(Args) -> <Args as Spread<F>>::Output
where
    Args: Spread<F>,
{
    move |arguments: Args| arguments.spread_into(&function)
}
