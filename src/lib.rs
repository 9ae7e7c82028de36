//! # chaincollections
//!
//! Chainable collection wrappers for Rust: eager lists, lazy sequences,
//! insertion-ordered maps and sets that expose a shared vocabulary of
//! fluent, consuming operations.
//!
//! ## Overview
//!
//! - **Containers**: [`ChainList`], [`ChainIter`], [`ChainMap`], [`ChainSet`]
//! - **Sequence operations**: partitioning, grouping, windows, joins,
//!   accumulation and more, shared by every sequence-shaped container
//! - **Dispatch rule**: each operation returns a predictable container kind,
//!   described by [`Operation`] and [`ContainerKind`]
//! - **Recursive wrapping**: nested lists and maps inside a flagged
//!   container come back as flagged containers themselves
//! - **Coercion**: [`chain`] wraps standard collections in their matching
//!   container
//!
//! ## Feature Flags
//!
//! - `compose` (default): `pipe!`, `compose!` and small combinators
//! - `dynamic` (default): the `Value` type, runtime coercion and nested access
//! - `serde`: `Serialize`/`Deserialize` for the eager containers and `Value`
//! - `fxhash`: hash maps and sets with `rustc-hash`
//! - `ahash`: hash maps and sets with `ahash`
//! - `full`: Enable all features except the hasher switches
//!
//! ## Example
//!
//! ```rust
//! use chaincollections::prelude::*;
//!
//! let parity = crange(0..10).group_by(|value| if value % 2 == 0 { "even" } else { "odd" });
//! assert_eq!(parity["even"], vec![0, 2, 4, 6, 8]);
//!
//! let windows = ChainList::from(vec![1, 2, 3, 4]).sliding_window(2).to_vec();
//! assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the coercion entry points and the error type.
///
/// # Usage
///
/// ```rust
/// use chaincollections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{
        ChainIter, ChainList, ChainMap, ChainSet, Container, ContainerKind, IntoChain, Operation,
        OperationCategory, WrapMode, chain, chain_recursive, crange, crange_step, cxrange,
        cxrange_step,
    };
    pub use crate::error::ChainError;

    #[cfg(feature = "dynamic")]
    pub use crate::container::{Chained, Wrapped};
    #[cfg(feature = "dynamic")]
    pub use crate::value::Value;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod compat;
pub mod container;
pub mod error;
pub mod hashing;
pub mod sequence;

#[cfg(feature = "dynamic")]
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

pub use container::{ChainIter, ChainList, ChainMap, ChainSet, ContainerKind, Operation, chain};
pub use error::{ChainError, Result};
