//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(h, g, f)(x)`.
///
/// Each function is called exactly once, so [`FnOnce`] is enough; this lets
/// consuming container methods and closures that move their captures take
/// part in a pipeline.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use chaincollections::pipe;
/// use chaincollections::prelude::*;
///
/// fn words(text: &str) -> ChainList<String> {
///     text.split_whitespace().map(str::to_owned).collect()
/// }
///
/// fn lengths(list: ChainList<String>) -> ChainList<usize> {
///     list.map(|word| word.len())
/// }
///
/// let result = pipe!("a chain of words", words, lengths);
/// assert_eq!(result, vec![1, 5, 2, 5]);
/// ```
///
/// Closures work the same way:
///
/// ```
/// use chaincollections::pipe;
/// use chaincollections::prelude::*;
///
/// let grouped = pipe!(
///     crange(0..6),
///     |list: ChainList<i64>| list.map(|value| value * 3),
///     |list: ChainList<i64>| list.count_by(|value| value % 2 == 0)
/// );
/// assert_eq!(grouped.get(&true), Some(&3));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
