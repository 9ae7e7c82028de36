//! Integer ranges as chainable containers.

use super::{ChainIter, ChainList};

/// Half-open integer range with an arbitrary non-zero step.
///
/// Positive steps count up towards `stop`, negative steps count down
/// towards it. Iteration ends early instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use chaincollections::container::StepRange;
///
/// let down: Vec<i64> = StepRange::new(10, 0, -3).collect();
/// assert_eq!(down, vec![10, 7, 4, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange {
    current: Option<i64>,
    stop: i64,
    step: i64,
}

impl StepRange {
    /// Creates a range from `start` (inclusive) to `stop` (exclusive).
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[must_use]
    pub fn new(start: i64, stop: i64, step: i64) -> Self {
        assert!(step != 0, "range step must be non-zero");
        Self {
            current: Some(start),
            stop,
            step,
        }
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let within = if self.step > 0 {
            current < self.stop
        } else {
            current > self.stop
        };
        if !within {
            self.current = None;
            return None;
        }
        self.current = current.checked_add(self.step);
        Some(current)
    }
}

impl std::iter::FusedIterator for StepRange {}

impl ChainIter<i64> {
    /// Lazy half-open range with a step, like `range(start, stop, step)`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let odds = ChainIter::range(1, 10, 2).to_vec();
    /// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    /// ```
    #[must_use]
    pub fn range(start: i64, stop: i64, step: i64) -> Self {
        Self::new(StepRange::new(start, stop, step))
    }
}

/// Eager range.
///
/// # Examples
///
/// ```rust
/// use chaincollections::container::crange;
///
/// assert_eq!(crange(0..4), vec![0, 1, 2, 3]);
/// ```
pub fn crange(range: std::ops::Range<i64>) -> ChainList<i64> {
    range.collect()
}

/// Eager range with a step.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn crange_step(start: i64, stop: i64, step: i64) -> ChainList<i64> {
    StepRange::new(start, stop, step).collect()
}

/// Lazy range.
pub fn cxrange(range: std::ops::Range<i64>) -> ChainIter<i64> {
    ChainIter::new(range)
}

/// Lazy range with a step.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn cxrange_step(start: i64, stop: i64, step: i64) -> ChainIter<i64> {
    ChainIter::range(start, stop, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 1, vec![0, 1, 2, 3, 4])]
    #[case(0, 10, 4, vec![0, 4, 8])]
    #[case(5, 0, -2, vec![5, 3, 1])]
    #[case(3, 3, 1, vec![])]
    #[case(0, 5, -1, vec![])]
    fn test_step_range(
        #[case] start: i64,
        #[case] stop: i64,
        #[case] step: i64,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(StepRange::new(start, stop, step).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_step_range_stops_before_overflow() {
        let tail: Vec<i64> = StepRange::new(i64::MAX - 1, i64::MAX, 5).collect();
        assert_eq!(tail, vec![i64::MAX - 1]);
    }

    #[rstest]
    #[should_panic(expected = "range step must be non-zero")]
    fn test_zero_step_panics() {
        let _ = StepRange::new(0, 1, 0);
    }

    #[rstest]
    fn test_eager_and_lazy_agree() {
        assert_eq!(crange_step(0, 9, 3).to_vec(), cxrange_step(0, 9, 3).to_vec());
        assert_eq!(crange(2..5).to_vec(), cxrange(2..5).to_vec());
    }
}
