//! Dynamic structured values.
//!
//! [`Value`] is the structure optics and validators operate on when the shape
//! of the data is only known at run time: records whose fields may be missing
//! or unset, nested arbitrarily.
//!
//! A key that holds [`Value::Null`] is considered *unset*. Prisms report such
//! keys as absent, while lenses treat them as present (the key exists).
//!
//! # Ordering
//!
//! `Value` has a total order used as the default ordering strategy:
//!
//! ```text
//! Null < Bool < Integer/Float < String < List < Map
//! ```
//!
//! Numbers compare numerically; an `Integer` sorts before a `Float` of the same
//! magnitude. Lists compare lexicographically and maps by their ordered entries.
//! Equality agrees with this order, so `NaN == NaN`.
//!
//! # Examples
//!
//! ```rust
//! use optival::record;
//! use optival::value::Value;
//!
//! let user = record! {
//!     "name" => "Alice",
//!     "age" => 30,
//!     "email" => Value::Null,
//! };
//!
//! assert_eq!(user.get("name"), Some(&Value::from("Alice")));
//! assert!(user.get("email").is_some_and(Value::is_null));
//! assert_eq!(user.get("phone"), None);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed, immutable-by-convention structured value.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The unset value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A record keyed by field name.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Builds a [`Value::Map`] from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optival::value::Value;
    ///
    /// let point = Value::map([("x", 1), ("y", 2)]);
    /// assert_eq!(point.get("x"), Some(&Value::Integer(1)));
    /// ```
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns an empty record.
    #[must_use]
    pub const fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Returns the name of this value's variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for numbers (`Integer` or `Float`).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Integer` or `Float`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Map`.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a field of a `Map`. Returns `None` for missing keys and non-maps.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
            Self::List(_) => 4,
            Self::Map(_) => 5,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compare_numbers(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => left.cmp(right),
        (Value::Float(left), Value::Float(right)) => left.total_cmp(right),
        (Value::Integer(left), Value::Float(right)) => {
            (*left as f64).total_cmp(right).then(Ordering::Less)
        }
        (Value::Float(left), Value::Integer(right)) => {
            left.total_cmp(&(*right as f64)).then(Ordering::Greater)
        }
        _ => Ordering::Equal,
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::String(left), Self::String(right)) => left.cmp(right),
            (Self::List(left), Self::List(right)) => left.cmp(right),
            (Self::Map(left), Self::Map(right)) => left.cmp(right),
            (left, right) if left.is_number() && right.is_number() => {
                compare_numbers(left, right)
            }
            (left, right) => left.rank().cmp(&right.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),+) => {
        $(
            impl From<$integer> for Value {
                fn from(number: $integer) -> Self {
                    Self::Integer(i64::from(number))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Builds a [`Value::Map`] record from `key => value` pairs.
///
/// Values may be anything convertible into [`Value`], including nested
/// `record!` invocations.
///
/// # Example
///
/// ```rust
/// use optival::record;
/// use optival::value::Value;
///
/// let order = record! {
///     "id" => 7,
///     "customer" => record! { "name" => "Bob" },
/// };
///
/// assert_eq!(
///     order.get("customer").and_then(|customer| customer.get("name")),
///     Some(&Value::from("Bob"))
/// );
///
/// assert_eq!(record! {}, Value::empty_map());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::value::Value::empty_map()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = ::std::collections::BTreeMap::new();
        $(
            entries.insert(
                ::std::string::String::from($key),
                $crate::value::Value::from($value),
            );
        )+
        $crate::value::Value::Map(entries)
    }};
}
