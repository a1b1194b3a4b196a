//! Field optics over dynamic [`Value`] records.
//!
//! - [`KeyLens`] asserts that every key on its path exists. A missing key is
//!   a [`OpticError::MissingKey`]. A key holding `Null` is present.
//! - [`KeyPrism`] treats a missing key, a key holding `Null`, and a `Null`
//!   intermediate record as absence.
//!
//! Both raise [`OpticError::NotAStructure`] when a key is read from a value
//! that is not a record (and, for the prism, not `Null`).
//!
//! # Examples
//!
//! ```
//! use optival::optics::{lens, prism, Lens, OpticError, Prism};
//! use optival::record;
//! use optival::value::Value;
//!
//! let user = record! { "profile" => record! { "age" => 30, "nickname" => Value::Null } };
//!
//! let age = lens::path(["profile", "age"]);
//! assert_eq!(age.get(&user), Ok(&Value::from(30)));
//! assert!(matches!(
//!     lens::path(["profile", "email"]).get(&user),
//!     Err(OpticError::MissingKey { .. })
//! ));
//!
//! let nickname = prism::path(["profile", "nickname"]);
//! assert_eq!(nickname.preview(&user), Ok(None));
//! assert_eq!(prism::path(["account", "id"]).preview(&user), Ok(None));
//! ```

use smallvec::SmallVec;

use super::OpticError;
use super::lens::Lens;
use super::prism::{Prism, Review};
use crate::value::Value;

type KeyPath = SmallVec<[String; 4]>;

fn collect_path<K, I>(keys: I) -> KeyPath
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    keys.into_iter().map(Into::into).collect()
}

fn nest(path: &[String], value: Value) -> Value {
    path.iter()
        .rev()
        .fold(value, |inner, key| Value::map([(key.clone(), inner)]))
}

/// A total accessor for a record field, or a path of nested fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyLens {
    path: KeyPath,
}

impl KeyLens {
    /// Focuses on a single field.
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            path: collect_path([name]),
        }
    }

    /// Focuses on a nested field, one key per level.
    ///
    /// An empty path focuses on the whole value.
    pub fn path<K, I>(keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        Self {
            path: collect_path(keys),
        }
    }

    /// Returns the keys walked by this lens.
    pub fn keys(&self) -> &[String] {
        &self.path
    }

    fn set_at(&self, source: Value, depth: usize, value: Value) -> Result<Value, OpticError> {
        let Some(key) = self.path.get(depth) else {
            return Ok(value);
        };

        match source {
            Value::Map(mut entries) => {
                let updated = if depth + 1 == self.path.len() {
                    value
                } else {
                    let child = entries
                        .remove(key)
                        .ok_or_else(|| OpticError::missing_key(key, &self.path[..=depth]))?;
                    self.set_at(child, depth + 1, value)?
                };
                entries.insert(key.clone(), updated);
                Ok(Value::Map(entries))
            }
            other => Err(OpticError::not_a_structure(key, other.kind())),
        }
    }
}

impl Lens<Value, Value> for KeyLens {
    fn get<'a>(&self, source: &'a Value) -> Result<&'a Value, OpticError> {
        let mut current = source;
        for (depth, key) in self.path.iter().enumerate() {
            let entries = current
                .as_map()
                .ok_or_else(|| OpticError::not_a_structure(key, current.kind()))?;
            current = entries
                .get(key)
                .ok_or_else(|| OpticError::missing_key(key, &self.path[..=depth]))?;
        }
        Ok(current)
    }

    fn set(&self, source: Value, value: Value) -> Result<Value, OpticError> {
        self.set_at(source, 0, value)
    }
}

impl Review<Value, Value> for KeyLens {
    fn review(&self, value: Value) -> Value {
        nest(&self.path, value)
    }
}

/// A partial accessor for a record field, or a path of nested fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPrism {
    path: KeyPath,
}

impl KeyPrism {
    /// Focuses on a single, possibly unset, field.
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            path: collect_path([name]),
        }
    }

    /// Focuses on a nested field, short-circuiting to absence at the first
    /// missing link.
    pub fn path<K, I>(keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        Self {
            path: collect_path(keys),
        }
    }

    /// Returns the keys walked by this prism.
    pub fn keys(&self) -> &[String] {
        &self.path
    }

    fn set_at(&self, source: Value, depth: usize, value: Value) -> Result<Value, OpticError> {
        let Some(key) = self.path.get(depth) else {
            return Ok(value);
        };

        match source {
            Value::Map(mut entries) => {
                if depth + 1 == self.path.len() {
                    entries.insert(key.clone(), value);
                } else if let Some(child) = entries.remove(key) {
                    let updated = if child.is_null() {
                        child
                    } else {
                        self.set_at(child, depth + 1, value)?
                    };
                    entries.insert(key.clone(), updated);
                }
                Ok(Value::Map(entries))
            }
            Value::Null => Ok(Value::Null),
            other => Err(OpticError::not_a_structure(key, other.kind())),
        }
    }
}

impl Prism<Value, Value> for KeyPrism {
    fn preview<'a>(&self, source: &'a Value) -> Result<Option<&'a Value>, OpticError> {
        let mut current = source;
        for key in &self.path {
            current = match current {
                Value::Null => return Ok(None),
                Value::Map(entries) => match entries.get(key) {
                    Some(next) => next,
                    None => return Ok(None),
                },
                other => return Err(OpticError::not_a_structure(key, other.kind())),
            };
        }
        Ok(if current.is_null() { None } else { Some(current) })
    }

    fn set(&self, source: Value, value: Value) -> Result<Value, OpticError> {
        self.set_at(source, 0, value)
    }
}

impl Review<Value, Value> for KeyPrism {
    fn review(&self, value: Value) -> Value {
        nest(&self.path, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use rstest::rstest;

    fn sample() -> Value {
        record! {
            "name" => "Alice",
            "nickname" => Value::Null,
            "address" => record! { "city" => "Tokyo" },
        }
    }

    #[rstest]
    fn test_key_lens_reads_null_as_present() {
        assert_eq!(KeyLens::key("nickname").get(&sample()), Ok(&Value::Null));
    }

    #[rstest]
    fn test_key_lens_missing_key_is_an_error() {
        let error = KeyLens::path(["address", "zip"]).get(&sample()).unwrap_err();
        assert_eq!(
            error,
            OpticError::MissingKey {
                key: "zip".to_string(),
                path: "address.zip".to_string(),
            }
        );
    }

    #[rstest]
    fn test_key_lens_through_scalar_is_an_error() {
        let error = KeyLens::path(["name", "first"]).get(&sample()).unwrap_err();
        assert!(matches!(error, OpticError::NotAStructure { found: "string", .. }));
    }

    #[rstest]
    fn test_key_lens_set_nested() {
        let updated = KeyLens::path(["address", "city"])
            .set(sample(), Value::from("Osaka"))
            .unwrap();
        assert_eq!(
            updated.get("address").and_then(|address| address.get("city")),
            Some(&Value::from("Osaka"))
        );
        assert_eq!(updated.get("name"), Some(&Value::from("Alice")));
    }

    #[rstest]
    fn test_key_lens_set_requires_intermediate_records() {
        let result = KeyLens::path(["billing", "city"]).set(sample(), Value::from("Kyoto"));
        assert!(matches!(result, Err(OpticError::MissingKey { .. })));
    }

    #[rstest]
    #[case(&["nickname"][..])]
    #[case(&["phone"][..])]
    #[case(&["billing", "city"][..])]
    #[case(&["nickname", "first"][..])]
    fn test_key_prism_absent_cases(#[case] path: &[&str]) {
        assert_eq!(KeyPrism::path(path.iter().copied()).preview(&sample()), Ok(None));
    }

    #[rstest]
    fn test_key_prism_through_scalar_is_an_error() {
        let value = sample();
        let result = KeyPrism::path(["name", "first"]).preview(&value);
        assert!(matches!(result, Err(OpticError::NotAStructure { .. })));
    }

    #[rstest]
    fn test_key_prism_set_populates_unset_field() {
        let updated = KeyPrism::key("nickname")
            .set(sample(), Value::from("Al"))
            .unwrap();
        assert_eq!(updated.get("nickname"), Some(&Value::from("Al")));
    }

    #[rstest]
    fn test_key_prism_set_skips_absent_parent() {
        let original = sample();
        let updated = KeyPrism::path(["billing", "city"])
            .set(original.clone(), Value::from("Kyoto"))
            .unwrap();
        assert_eq!(updated, original);
    }

    #[rstest]
    fn test_review_builds_nested_records() {
        let built = KeyPrism::path(["a", "b"]).review(Value::from(1));
        assert_eq!(built, record! { "a" => record! { "b" => 1 } });
    }
}
