//! Dynamic values for heterogeneous nested data.
//!
//! [`Value`] models the loosely typed documents that recursive wrapping,
//! path lookups and dynamic coercion operate on: scalars, lists, maps and
//! sets nested to any depth.
//!
//! `Value` is `Eq + Hash` so it can be a map key or a set element. Floats
//! compare and hash by bit pattern, which makes `NaN` equal to itself and
//! keeps `0.0` and `-0.0` apart. Maps and sets hash by length only, because
//! their equality ignores order.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::container::{ChainList, ChainMap, ChainSet};
use crate::hashing::{OrderedMap, OrderedSet};

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed value.
///
/// # Examples
///
/// ```rust
/// use chaincollections::value::Value;
///
/// let document = Value::map([
///     ("name", Value::from("widget")),
///     ("sizes", Value::list([1, 2, 3])),
/// ]);
///
/// assert_eq!(document.type_name(), "map");
/// assert_eq!(document.to_string(), r#"{"name": "widget", "sizes": [1, 2, 3]}"#);
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    Text(String),
    /// An ordered list.
    List(Vec<Value>),
    /// An insertion-ordered map.
    Map(OrderedMap<Value, Value>),
    /// An insertion-ordered set.
    Set(OrderedSet<Value>),
}

impl Value {
    /// Builds a list from anything convertible into values.
    pub fn list<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::List(elements.into_iter().map(Into::into).collect())
    }

    /// Builds a map from key-value pairs; later duplicates win.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a set; duplicates collapse.
    pub fn set<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Set(elements.into_iter().map(Into::into).collect())
    }

    /// Short lowercase name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Set(_) => "set",
        }
    }

    /// `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for lists, maps and sets.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_) | Self::Set(_))
    }

    /// The integer, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The string, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&OrderedMap<Self, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Map(left), Self::Map(right)) => left == right,
            (Self::Set(left), Self::Set(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(value) => value.hash(state),
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Text(text) => text.hash(state),
            Self::List(elements) => elements.hash(state),
            Self::Map(entries) => entries.len().hash(state),
            Self::Set(elements) => elements.len().hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("Null"),
            Self::Bool(value) => write!(formatter, "Bool({value})"),
            Self::Integer(value) => write!(formatter, "Integer({value})"),
            Self::Float(value) => write!(formatter, "Float({value:?})"),
            Self::Text(text) => write!(formatter, "Text({text:?})"),
            Self::List(elements) => formatter.debug_list().entries(elements).finish(),
            Self::Map(entries) => formatter.debug_map().entries(entries).finish(),
            Self::Set(elements) => formatter.debug_set().entries(elements).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::List(elements) => {
                write!(formatter, "[")?;
                write_separated(formatter, elements.iter())?;
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (position, (key, value)) in entries.iter().enumerate() {
                    if position > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
            Self::Set(elements) => {
                write!(formatter, "#{{")?;
                write_separated(formatter, elements.iter())?;
                write!(formatter, "}}")
            }
        }
    }
}

fn write_separated<'a, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: Iterator<Item = &'a Value>,
{
    for (position, element) in elements.enumerate() {
        if position > 0 {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    Ok(())
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                fn from(value: $integer) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<V: Into<Self>> From<Vec<V>> for Value {
    fn from(elements: Vec<V>) -> Self {
        Self::list(elements)
    }
}

impl From<ChainList<Self>> for Value {
    fn from(list: ChainList<Self>) -> Self {
        Self::List(list.to_vec())
    }
}

impl From<ChainMap<Self, Self>> for Value {
    fn from(map: ChainMap<Self, Self>) -> Self {
        Self::Map(map.into_inner())
    }
}

impl From<ChainSet<Self>> for Value {
    fn from(set: ChainSet<Self>) -> Self {
        Self::Set(set.into_iter().collect())
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::List(elements) => serializer.collect_seq(elements),
            Self::Map(entries) => serializer.collect_map(entries),
            Self::Set(elements) => serializer.collect_seq(elements),
        }
    }
}

/// Upper bound on elements reserved up front from an untrusted length hint.
#[cfg(feature = "serde")]
const PREALLOCATION_LIMIT: usize = 4096;

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any value")
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
        Ok(Value::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value).map(Value::Integer).map_err(|_| {
            E::invalid_value(
                serde::de::Unexpected::Unsigned(value),
                &"an integer no larger than i64::MAX",
            )
        })
    }

    fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, text: &str) -> std::result::Result<Self::Value, E> {
        Ok(Value::from(text))
    }

    fn visit_string<E>(self, text: String) -> std::result::Result<Self::Value, E> {
        Ok(Value::Text(text))
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(PREALLOCATION_LIMIT));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Value::List(elements))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = OrderedMap::default();
        while let Some((key, value)) = access.next_entry()? {
            entries.insert(key, value);
        }
        Ok(Value::Map(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
