//! Recursive wrapping of nested values.
//!
//! A `ChainList` or `ChainMap` carries a [`WrapMode`]. In
//! [`WrapMode::Recursive`] nested lists and maps reached through
//! `nested` come back as flagged containers of their own, so chaining
//! continues at any depth. In [`WrapMode::Plain`] they come back as raw
//! values. The flag is copied onto the results of kind-preserving
//! operations and never attached to sets, lazy sequences or scalars.

/// Whether a container wraps its nested values on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    /// Nested values are returned as they are.
    #[default]
    Plain,
    /// Nested lists and maps are returned as flagged containers.
    Recursive,
}

impl WrapMode {
    /// Returns `true` for [`WrapMode::Recursive`].
    #[inline]
    #[must_use]
    pub const fn is_recursive(self) -> bool {
        matches!(self, Self::Recursive)
    }
}

#[cfg(feature = "dynamic")]
pub use dynamic::Wrapped;

#[cfg(feature = "dynamic")]
mod dynamic {
    use super::WrapMode;
    use crate::container::{ChainList, ChainMap, ContainerKind};
    use crate::value::Value;

    /// A nested value as seen through a container's `nested` accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let rows = ChainList::from(vec![Value::list([1, 2]), Value::from(3)]).recursive();
    ///
    /// let Some(Wrapped::Sequence(inner)) = rows.nested(0) else {
    ///     panic!("expected a wrapped sequence");
    /// };
    /// assert!(inner.wrap_mode().is_recursive());
    ///
    /// assert_eq!(rows.nested(1), Some(Wrapped::Plain(Value::from(3))));
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Wrapped {
        /// A nested list, wrapped and flagged.
        Sequence(ChainList<Value>),
        /// A nested map, wrapped and flagged.
        Mapping(ChainMap<Value, Value>),
        /// Anything else, or any value reached in plain mode.
        Plain(Value),
    }

    impl Wrapped {
        /// Wraps `value` according to `mode`.
        pub(crate) fn from_value(value: &Value, mode: WrapMode) -> Self {
            match (mode, value) {
                (WrapMode::Recursive, Value::List(elements)) => {
                    Self::Sequence(ChainList::from(elements.clone()).with_mode(mode))
                }
                (WrapMode::Recursive, Value::Map(entries)) => {
                    Self::Mapping(ChainMap::from(entries.clone()).with_mode(mode))
                }
                _ => Self::Plain(value.clone()),
            }
        }

        /// Returns the container kind, or `None` for plain values.
        #[must_use]
        pub const fn kind(&self) -> Option<ContainerKind> {
            match self {
                Self::Sequence(_) => Some(ContainerKind::Sequence),
                Self::Mapping(_) => Some(ContainerKind::Mapping),
                Self::Plain(_) => None,
            }
        }

        /// Converts back into a raw value.
        #[must_use]
        pub fn into_value(self) -> Value {
            match self {
                Self::Sequence(list) => Value::List(list.to_vec()),
                Self::Mapping(map) => Value::Map(map.into_inner()),
                Self::Plain(value) => value,
            }
        }
    }
}
