//! Chainable containers.
//!
//! Four container kinds wrap ordinary Rust collections and expose fluent,
//! consuming methods so that transformations read left to right:
//!
//! - [`ChainList`]: eager, ordered, indexable (`Vec`-backed)
//! - [`ChainIter`]: deferred, single-pass (boxed iterator with a shared buffer)
//! - [`ChainMap`]: key to value store in insertion order (`IndexMap`-backed)
//! - [`ChainSet`]: unique elements in insertion order (`IndexSet`-backed)
//!
//! Which kind each method returns is fixed by the dispatch rule in [`kind`]:
//! kind-preserving methods return the receiver's kind, grouping methods
//! return a [`ChainMap`], set algebra returns a [`ChainSet`], windows are
//! always lazy and scalar methods return plain values.
//!
//! # Examples
//!
//! ```rust
//! use chaincollections::prelude::*;
//!
//! let evens = ChainList::from(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|value| value % 2 == 0)
//!     .map(|value| value * 10);
//! assert_eq!(evens, vec![20, 40, 60]);
//!
//! let first_squares = ChainIter::new(1_u64..)
//!     .map(|value| value * value)
//!     .take(4)
//!     .to_vec();
//! assert_eq!(first_squares, vec![1, 4, 9, 16]);
//! ```

pub mod coerce;
pub mod kind;
mod lazy;
mod list;
mod map;
mod range;
mod set;
pub mod wrap;

use std::rc::Rc;

/// Shared-ownership pointer used by lazy sources.
pub(crate) type ReferenceCounter<T> = Rc<T>;

pub use coerce::{IntoChain, chain, chain_recursive};
#[cfg(feature = "dynamic")]
pub use coerce::Chained;
pub use kind::{Container, ContainerKind, Operation, OperationCategory};
pub use lazy::{ChainIter, Drain};
pub use list::ChainList;
pub use map::ChainMap;
pub use range::{StepRange, crange, crange_step, cxrange, cxrange_step};
pub use set::ChainSet;
pub use wrap::WrapMode;
#[cfg(feature = "dynamic")]
pub use wrap::Wrapped;

static_assertions::assert_impl_all!(ChainList<i32>: Send, Sync);
static_assertions::assert_impl_all!(ChainMap<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(ChainSet<i32>: Send, Sync);
