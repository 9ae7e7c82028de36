//! Function composition for container pipelines.
//!
//! Chainable containers already read left to right through method calls.
//! These helpers cover the remaining gaps: feeding a container through
//! free functions, and building reusable transformations out of smaller
//! ones.
//!
//! - [`pipe!`]: apply functions to a value left to right
//! - [`compose!`]: build a function that applies its arguments right to left
//! - [`identity`], [`constant`], [`flip`]: small combinators
//!
//! # Examples
//!
//! ```
//! use chaincollections::prelude::*;
//!
//! fn evens(list: ChainList<i32>) -> ChainList<i32> {
//!     list.filter(|value| value % 2 == 0)
//! }
//!
//! fn total(list: ChainList<i32>) -> i32 {
//!     list.fold(0, |sum, value| sum + value)
//! }
//!
//! let summed = pipe!(ChainList::from(vec![1, 2, 3, 4]), evens, total);
//! assert_eq!(summed, 6);
//!
//! let even_total = compose!(total, evens);
//! assert_eq!(even_total(ChainList::from(vec![10, 11, 12])), 22);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe and compose**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Double flip**: `flip(flip(f)) == f`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::pipe;
