//! Small combinators that fit into container pipelines.
//!
//! - [`identity`]: the unit of composition (I combinator)
//! - [`constant`]: ignores its input (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose!(identity, f)` and `compose!(f, identity)` behave like `f`.
///
/// # Examples
///
/// ```
/// use chaincollections::compose::identity;
/// use chaincollections::prelude::*;
///
/// let list = ChainList::from(vec![1, 2, 3]);
/// assert_eq!(list.clone().map(identity), list);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use chaincollections::compose::constant;
/// use chaincollections::prelude::*;
///
/// let zeros = ChainList::from(vec!["a", "b"]).map(constant(0));
/// assert_eq!(zeros, vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// Folding with a function whose accumulator comes second:
///
/// ```
/// use chaincollections::compose::flip;
/// use chaincollections::prelude::*;
///
/// fn push_front(value: i32, mut acc: Vec<i32>) -> Vec<i32> {
///     acc.insert(0, value);
///     acc
/// }
///
/// let reversed = ChainList::from(vec![1, 2, 3]).fold(Vec::new(), flip(push_front));
/// assert_eq!(reversed, vec![3, 2, 1]);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
