//! Integration tests for `ChainIter`.
//!
//! Tests cover:
//! - Deferred evaluation over infinite sources
//! - One-shot exhaustion shared between clones
//! - Buffered positional access that does not lose elements
//! - Realization events emitted through `tracing`

use chaincollections::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

fn counted(limit: Option<u64>) -> (ChainIter<u64>, Rc<Cell<u64>>) {
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let lazy = ChainIter::from_fn(move || {
        let next = counter.get();
        if limit.is_some_and(|limit| next >= limit) {
            return None;
        }
        counter.set(next + 1);
        Some(next)
    });
    (lazy, pulled)
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn test_infinite_pipeline_takes_five() {
    let (numbers, pulled) = counted(None);

    let pipeline = numbers
        .map(|value| value * value)
        .filter(|value| value % 2 == 1)
        .take(5);
    assert_eq!(pulled.get(), 0);

    assert_eq!(pipeline.to_vec(), vec![1, 9, 25, 49, 81]);
    assert_eq!(pulled.get(), 10);
}

#[rstest]
fn test_sliding_window_on_infinite_source() {
    let windows = ChainIter::new(1_u32..).sliding_window(3).take(2).to_vec();
    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
}

#[rstest]
fn test_grouping_operations_force_the_source() {
    let (numbers, pulled) = counted(Some(6));
    let parity = numbers.count_by(|value| value % 2 == 0);

    assert_eq!(pulled.get(), 6);
    assert_eq!(parity.get(&true), Some(&3));
}

#[rstest]
fn test_tail_is_deferred_until_pulled() {
    let (numbers, pulled) = counted(Some(10));
    let last_two = numbers.tail(2);
    assert_eq!(pulled.get(), 0);
    assert_eq!(last_two.to_vec(), vec![8, 9]);
}

// =============================================================================
// One-shot exhaustion
// =============================================================================

#[rstest]
fn test_second_iteration_is_empty() {
    let lazy = ChainIter::new(vec![1, 2, 3]);
    let alias = lazy.clone();

    assert_eq!(lazy.to_vec(), vec![1, 2, 3]);
    assert!(alias.is_empty());
    assert_eq!(alias.to_vec(), Vec::<i32>::new());
}

#[rstest]
fn test_clones_share_progress() {
    let lazy = ChainIter::new(0..6);
    let other = lazy.clone();

    let head: Vec<i32> = (&lazy).into_iter().take(2).collect();
    assert_eq!(head, vec![0, 1]);
    assert_eq!(other.to_vec(), vec![2, 3, 4, 5]);
    assert!(lazy.is_exhausted());
}

// =============================================================================
// Buffered access
// =============================================================================

#[rstest]
fn test_indexing_buffers_without_losing_elements() {
    let (numbers, pulled) = counted(Some(100));

    assert_eq!(numbers.nth(3), Ok(3));
    assert_eq!(pulled.get(), 4);
    assert_eq!(numbers.first(), Ok(0));
    assert_eq!(numbers.second(), Ok(1));
    assert_eq!(numbers.peek(), Some(0));
    assert_eq!(pulled.get(), 4);

    assert_eq!(numbers.take(6).to_vec(), vec![0, 1, 2, 3, 4, 5]);
}

#[rstest]
#[case(vec![], 0, ChainError::EmptySequence { operation: "nth" })]
#[case(vec![7, 8], 5, ChainError::IndexOutOfRange { index: 5, length: 2 })]
fn test_nth_errors(#[case] elements: Vec<i32>, #[case] index: usize, #[case] expected: ChainError) {
    assert_eq!(ChainIter::new(elements).nth(index), Err(expected));
}

#[rstest]
fn test_last_and_len_realize_the_source() {
    let (numbers, pulled) = counted(Some(5));
    assert_eq!(numbers.len(), 5);
    assert_eq!(pulled.get(), 5);
    assert_eq!(numbers.last(), Ok(4));
    assert!(numbers.contains(&2));
}

// =============================================================================
// Sequence round trip
// =============================================================================

#[rstest]
fn test_sequence_to_lazy_to_sequence_reproduces_original() {
    let original = ChainList::from(vec![4, 8, 15, 16, 23, 42]);
    let round_trip = original.clone().to_iter().to_list();
    assert_eq!(round_trip, original);
}

// =============================================================================
// Tracing
// =============================================================================

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|bytes| bytes.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn test_realization_is_traced() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let lazy = ChainIter::new(0..4);
        assert_eq!(lazy.len(), 4);
        assert_eq!(lazy.last(), Ok(3));
    });

    let logged = output.contents();
    assert!(logged.contains("realized lazy source"), "missing event in {logged:?}");
    assert!(logged.contains("buffered=4"), "missing field in {logged:?}");
    assert_eq!(logged.matches("realized lazy source").count(), 1);
}

#[rstest]
fn test_unforced_pipeline_emits_nothing() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _pipeline = ChainIter::new(0..4).map(|value| value + 1);
    });

    assert!(output.contents().is_empty());
}
