//! The dispatch rule: which container kind an operation returns.
//!
//! Every chainable method belongs to exactly one [`OperationCategory`]. The
//! category, together with the kind of the receiver, fixes the kind of the
//! result:
//!
//! | Category        | Result kind                         |
//! |-----------------|-------------------------------------|
//! | KindPreserving  | same as the receiver                |
//! | AlwaysMapping   | [`ContainerKind::Mapping`]          |
//! | AlwaysSet       | [`ContainerKind::Set`]              |
//! | AlwaysLazy      | [`ContainerKind::LazySequence`]     |
//! | Scalar          | not a container                     |
//! | Opaque          | whatever the supplied function returns |
//!
//! Container methods follow this table. [`Operation::result_kind`] exposes it
//! so callers and tests can check the kind of any result against it.

use std::fmt;

// =============================================================================
// ContainerKind
// =============================================================================

/// The four chainable container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Eager, ordered, indexable ([`ChainList`](crate::container::ChainList)).
    Sequence,
    /// Deferred, single-pass ([`ChainIter`](crate::container::ChainIter)).
    LazySequence,
    /// Key to value store ([`ChainMap`](crate::container::ChainMap)).
    Mapping,
    /// Unique elements ([`ChainSet`](crate::container::ChainSet)).
    Set,
}

impl ContainerKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Sequence,
        Self::LazySequence,
        Self::Mapping,
        Self::Set,
    ];
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequence => "sequence",
            Self::LazySequence => "lazy sequence",
            Self::Mapping => "mapping",
            Self::Set => "set",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// Container
// =============================================================================

/// Implemented by every chainable container.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
///
/// let list = ChainList::from(vec![1, 2, 3]);
/// assert_eq!(list.kind(), ContainerKind::Sequence);
///
/// let windows = list.sliding_window(2);
/// assert_eq!(windows.kind(), ContainerKind::LazySequence);
/// ```
pub trait Container {
    /// The kind of every value of this type.
    const KIND: ContainerKind;

    /// Returns the kind of this container.
    fn kind(&self) -> ContainerKind {
        Self::KIND
    }

    /// Returns whether nested values are wrapped on access.
    ///
    /// Kinds that never carry the flag report [`WrapMode::Plain`].
    ///
    /// [`WrapMode::Plain`]: crate::container::WrapMode::Plain
    fn wrap_mode(&self) -> crate::container::WrapMode {
        crate::container::WrapMode::Plain
    }
}

// =============================================================================
// OperationCategory
// =============================================================================

/// How an operation chooses the kind of its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationCategory {
    /// Returns the receiver's kind.
    KindPreserving,
    /// Always returns a Mapping.
    AlwaysMapping,
    /// Always returns a Set.
    AlwaysSet,
    /// Always returns a LazySequence.
    AlwaysLazy,
    /// Returns a plain value.
    Scalar,
    /// Returns whatever a caller-supplied function returns.
    Opaque,
}

// =============================================================================
// Operation
// =============================================================================

/// Every chainable operation, by name.
///
/// Each variant is named after the container method it describes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Map,
    Filter,
    Remove,
    Reduce,
    Fold,
    Concat,
    Flatten,
    Mapcat,
    Take,
    Drop,
    TakeWhile,
    DropWhile,
    Tail,
    Partition,
    PartitionAll,
    Chunk,
    PartitionBy,
    First,
    Second,
    Last,
    Nth,
    Peek,
    Find,
    AnyMatch,
    AllMatch,
    IsDistinct,
    GroupBy,
    ReduceBy,
    CountBy,
    Frequencies,
    Unique,
    UniqueBy,
    TopK,
    TopKBy,
    SlidingWindow,
    StrideBy,
    Interleave,
    Interpose,
    Join,
    Pluck,
    PluckMany,
    Pipe,
    PipeMap,
    Enumerate,
    ZipWith,
    Diff,
    Accumulate,
    AccumulateFrom,
    Tap,
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 53] = [
        Self::Map,
        Self::Filter,
        Self::Remove,
        Self::Reduce,
        Self::Fold,
        Self::Concat,
        Self::Flatten,
        Self::Mapcat,
        Self::Take,
        Self::Drop,
        Self::TakeWhile,
        Self::DropWhile,
        Self::Tail,
        Self::Partition,
        Self::PartitionAll,
        Self::Chunk,
        Self::PartitionBy,
        Self::First,
        Self::Second,
        Self::Last,
        Self::Nth,
        Self::Peek,
        Self::Find,
        Self::AnyMatch,
        Self::AllMatch,
        Self::IsDistinct,
        Self::GroupBy,
        Self::ReduceBy,
        Self::CountBy,
        Self::Frequencies,
        Self::Unique,
        Self::UniqueBy,
        Self::TopK,
        Self::TopKBy,
        Self::SlidingWindow,
        Self::StrideBy,
        Self::Interleave,
        Self::Interpose,
        Self::Join,
        Self::Pluck,
        Self::PluckMany,
        Self::Pipe,
        Self::PipeMap,
        Self::Enumerate,
        Self::ZipWith,
        Self::Diff,
        Self::Accumulate,
        Self::AccumulateFrom,
        Self::Tap,
        Self::Union,
        Self::Intersection,
        Self::Difference,
        Self::SymmetricDifference,
    ];

    /// Returns the dispatch category of this operation.
    #[must_use]
    pub const fn category(self) -> OperationCategory {
        match self {
            Self::GroupBy | Self::ReduceBy | Self::CountBy | Self::Frequencies => {
                OperationCategory::AlwaysMapping
            }
            Self::Union | Self::Intersection | Self::Difference | Self::SymmetricDifference => {
                OperationCategory::AlwaysSet
            }
            Self::SlidingWindow => OperationCategory::AlwaysLazy,
            Self::Reduce
            | Self::Fold
            | Self::First
            | Self::Second
            | Self::Last
            | Self::Nth
            | Self::Peek
            | Self::Find
            | Self::AnyMatch
            | Self::AllMatch
            | Self::IsDistinct => OperationCategory::Scalar,
            Self::Pipe => OperationCategory::Opaque,
            _ => OperationCategory::KindPreserving,
        }
    }

    /// Returns `true` if `receiver` offers this operation.
    ///
    /// Mappings expose only the pair-shaped subset, set algebra is specific
    /// to sets and `peek` is specific to lazy sequences.
    #[must_use]
    pub const fn supported_by(self, receiver: ContainerKind) -> bool {
        match self {
            Self::Union | Self::Intersection | Self::Difference | Self::SymmetricDifference => {
                matches!(receiver, ContainerKind::Set)
            }
            Self::Peek => matches!(receiver, ContainerKind::LazySequence),
            Self::Map
            | Self::Filter
            | Self::Take
            | Self::Drop
            | Self::Find
            | Self::AnyMatch
            | Self::AllMatch
            | Self::Fold
            | Self::Tap
            | Self::Pipe => true,
            _ => !matches!(receiver, ContainerKind::Mapping),
        }
    }

    /// Returns the kind produced by applying this operation to `receiver`.
    ///
    /// `None` means the result is not a container: the operation is scalar,
    /// opaque, or not offered by `receiver`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::container::{ContainerKind, Operation};
    ///
    /// assert_eq!(
    ///     Operation::Map.result_kind(ContainerKind::Set),
    ///     Some(ContainerKind::Set)
    /// );
    /// assert_eq!(
    ///     Operation::GroupBy.result_kind(ContainerKind::LazySequence),
    ///     Some(ContainerKind::Mapping)
    /// );
    /// assert_eq!(
    ///     Operation::SlidingWindow.result_kind(ContainerKind::Sequence),
    ///     Some(ContainerKind::LazySequence)
    /// );
    /// assert_eq!(Operation::First.result_kind(ContainerKind::Sequence), None);
    /// ```
    #[must_use]
    pub const fn result_kind(self, receiver: ContainerKind) -> Option<ContainerKind> {
        if !self.supported_by(receiver) {
            return None;
        }
        match self.category() {
            OperationCategory::KindPreserving => Some(receiver),
            OperationCategory::AlwaysMapping => Some(ContainerKind::Mapping),
            OperationCategory::AlwaysSet => Some(ContainerKind::Set),
            OperationCategory::AlwaysLazy => Some(ContainerKind::LazySequence),
            OperationCategory::Scalar | OperationCategory::Opaque => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_all_operations_are_distinct() {
        let distinct: std::collections::HashSet<Operation> = Operation::ALL.into_iter().collect();
        assert_eq!(distinct.len(), Operation::ALL.len());
    }

    #[rstest]
    #[case(ContainerKind::Sequence)]
    #[case(ContainerKind::LazySequence)]
    #[case(ContainerKind::Mapping)]
    #[case(ContainerKind::Set)]
    fn test_kind_preserving_keeps_receiver(#[case] receiver: ContainerKind) {
        for operation in Operation::ALL {
            if operation.category() == OperationCategory::KindPreserving
                && operation.supported_by(receiver)
            {
                assert_eq!(operation.result_kind(receiver), Some(receiver), "{operation:?}");
            }
        }
    }

    #[rstest]
    fn test_scalars_never_produce_containers() {
        for operation in Operation::ALL {
            if operation.category() == OperationCategory::Scalar {
                for receiver in ContainerKind::ALL {
                    assert_eq!(operation.result_kind(receiver), None);
                }
            }
        }
    }

    #[rstest]
    fn test_set_algebra_only_on_sets() {
        assert_eq!(
            Operation::Union.result_kind(ContainerKind::Set),
            Some(ContainerKind::Set)
        );
        assert_eq!(Operation::Union.result_kind(ContainerKind::Sequence), None);
    }

    #[rstest]
    fn test_mapping_exposes_pair_subset() {
        assert!(Operation::Map.supported_by(ContainerKind::Mapping));
        assert!(!Operation::Partition.supported_by(ContainerKind::Mapping));
        assert!(!Operation::SlidingWindow.supported_by(ContainerKind::Mapping));
    }

    #[rstest]
    #[case(ContainerKind::LazySequence, "lazy sequence")]
    #[case(ContainerKind::Mapping, "mapping")]
    fn test_kind_display(#[case] kind: ContainerKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
