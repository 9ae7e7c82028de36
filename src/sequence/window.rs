//! Overlapping windows over a stream.

use std::collections::VecDeque;
use std::iter::Fuse;

/// Yields every run of `size` consecutive elements, advancing by one.
///
/// Only `size` elements are buffered at any time, so the adapter works on
/// unbounded sources. A source shorter than `size` yields nothing.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::SlidingWindow;
///
/// let windows: Vec<Vec<i32>> = SlidingWindow::new(0..5, 3).collect();
/// assert_eq!(windows, vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindow<I: Iterator> {
    iterator: Fuse<I>,
    size: usize,
    window: VecDeque<I::Item>,
}

impl<I: Iterator> SlidingWindow<I> {
    /// Creates a window adapter of width `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(iterator: I, size: usize) -> Self {
        assert!(size != 0, "window size must be non-zero");
        Self {
            iterator: iterator.fuse(),
            size,
            window: VecDeque::with_capacity(size),
        }
    }
}

impl<I> Iterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.window.len() == self.size {
            self.window.pop_front();
        }
        while self.window.len() < self.size {
            self.window.push_back(self.iterator.next()?);
        }
        Some(self.window.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_window_shorter_source_yields_nothing() {
        let mut windows = SlidingWindow::new(0..2, 3);
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);
    }

    #[rstest]
    fn test_window_of_one() {
        let windows: Vec<Vec<char>> = SlidingWindow::new("abc".chars(), 1).collect();
        assert_eq!(windows, vec![vec!['a'], vec!['b'], vec!['c']]);
    }

    #[rstest]
    fn test_window_over_infinite_source() {
        let windows: Vec<Vec<u32>> = SlidingWindow::new(1_u32.., 2).take(2).collect();
        assert_eq!(windows, vec![vec![1, 2], vec![2, 3]]);
    }

    #[rstest]
    #[should_panic(expected = "window size must be non-zero")]
    fn test_window_zero_size_panics() {
        let _ = SlidingWindow::new(0..3, 0);
    }
}
