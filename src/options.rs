//! String-keyed maps passed to projections and validators.
//!
//! [`Options`] configure a single validator (or custom projection) and are
//! fixed when a rule set is built. The [`Environment`] is supplied per run
//! and shared, read-only, by every validator invocation of that run.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::value::Value;

macro_rules! string_keyed_map {
    ($name:ident) => {
        impl $name {
            /// Creates an empty map.
            #[must_use]
            pub const fn new() -> Self {
                Self(BTreeMap::new())
            }

            /// Returns the map with `key` bound to `value`.
            #[must_use]
            pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
                self.0.insert(key.into(), value.into());
                self
            }

            /// Binds `key` to `value`, returning the previous binding.
            pub fn insert(
                &mut self,
                key: impl Into<String>,
                value: impl Into<Value>,
            ) -> Option<Value> {
                self.0.insert(key.into(), value.into())
            }

            /// Looks up `key`.
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }

            /// Returns `true` if `key` is bound.
            pub fn contains(&self, key: &str) -> bool {
                self.0.contains_key(key)
            }

            /// Returns the number of bindings.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns `true` if nothing is bound.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterates over the bindings in key order.
            pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
                self.0.iter()
            }

            /// Returns the bindings as a record value.
            pub fn to_value(&self) -> Value {
                Value::Map(self.0.clone())
            }
        }

        impl From<BTreeMap<String, Value>> for $name {
            fn from(entries: BTreeMap<String, Value>) -> Self {
                Self(entries)
            }
        }

        impl<K, V> FromIterator<(K, V)> for $name
        where
            K: Into<String>,
            V: Into<Value>,
        {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                Self(
                    iter.into_iter()
                        .map(|(key, value)| (key.into(), value.into()))
                        .collect(),
                )
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = (&'a String, &'a Value);
            type IntoIter = btree_map::Iter<'a, String, Value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Options of one validator or custom projection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Options(BTreeMap<String, Value>);

string_keyed_map!(Options);

impl Options {
    /// Returns the `message` option if it is a string, otherwise `default`.
    pub fn message(&self, default: &str) -> String {
        self.get("message")
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }
}

/// Read-only context shared by every validator in one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Environment(BTreeMap<String, Value>);

string_keyed_map!(Environment);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_message_override() {
        let options = Options::new().with("message", "too short");
        assert_eq!(options.message("is invalid"), "too short");
        assert_eq!(Options::new().message("is invalid"), "is invalid");
    }

    #[rstest]
    fn test_non_string_message_is_ignored() {
        let options = Options::new().with("message", 3);
        assert_eq!(options.message("is invalid"), "is invalid");
    }

    #[rstest]
    fn test_collect_environment() {
        let env: Environment = [("locale", "ja"), ("tenant", "acme")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("locale"), Some(&Value::from("ja")));
        assert!(!env.contains("region"));
    }
}
