//! Iterator combinators behind the chainable containers.
//!
//! Everything in this module works on plain [`Iterator`]s and knows nothing
//! about container kinds. The containers in [`crate::container`] delegate to
//! these functions and adapters and then rebuild a container of the kind
//! prescribed by the dispatch rule.
//!
//! - Chunking: [`Chunks`], [`PartitionBy`]
//! - Windows: [`SlidingWindow`]
//! - Combining: [`Interpose`], [`Accumulate`], [`Join`], [`interleave`],
//!   [`zip_with`], [`diff`]
//! - Grouping: [`group_by`], [`reduce_by`], [`count_by`], [`frequencies`]
//! - Selection: [`unique_by`], [`top_k_by`], [`tail`], [`nth`], [`pluck`],
//!   [`is_distinct`]
//!
//! # Examples
//!
//! ```rust
//! use chaincollections::sequence::{Chunks, SlidingWindow};
//!
//! let chunks: Vec<Vec<i32>> = Chunks::exact(0..7, 3).collect();
//! assert_eq!(chunks, vec![vec![0, 1, 2], vec![3, 4, 5]]);
//!
//! let windows: Vec<Vec<i32>> = SlidingWindow::new(0..4, 2).collect();
//! assert_eq!(windows, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
//! ```

mod chunks;
mod combine;
mod grouping;
mod select;
mod window;

pub use chunks::{Chunks, PartitionBy};
pub use combine::{Accumulate, Interpose, Join, diff, interleave, zip_with};
pub use grouping::{count_by, frequencies, group_by, reduce_by};
pub use select::{is_distinct, nth, pluck, tail, top_k_by, unique_by};
pub use window::SlidingWindow;
