//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function runs first, as in mathematical notation.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use chaincollections::compose;
/// use chaincollections::prelude::*;
///
/// let distinct_sorted = compose!(
///     |list: ChainList<i32>| list.sort(),
///     |list: ChainList<i32>| list.unique()
/// );
///
/// assert_eq!(distinct_sorted(ChainList::from(vec![3, 1, 3, 2, 1])), vec![1, 2, 3]);
/// ```
///
/// The composed function is an ordinary closure and can be passed to
/// container methods:
///
/// ```
/// use chaincollections::compose;
/// use chaincollections::prelude::*;
///
/// let describe = compose!(|length: usize| format!("{length} items"), |row: Vec<i32>| row.len());
/// let rows = ChainList::from(vec![vec![1, 2], vec![3]]).map(describe);
/// assert_eq!(rows, vec!["2 items".to_owned(), "1 items".to_owned()]);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
