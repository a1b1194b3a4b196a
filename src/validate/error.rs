//! The accumulated failure of a validation run.

use thiserror::Error;

use crate::typeclass::{Monoid, Semigroup};

/// An ordered list of human-readable validation messages.
///
/// `ValidationError` is the accumulation monoid of the engine: combining two
/// errors concatenates their messages, left operand first, and the identity
/// is the error with no messages.
///
/// # Examples
///
/// ```
/// use optival::typeclass::{Monoid, Semigroup};
/// use optival::validate::ValidationError;
///
/// let merged = ValidationError::new("is required").combine(ValidationError::new("is too short"));
/// assert_eq!(merged.messages(), ["is required", "is too short"]);
/// assert_eq!(ValidationError::empty().combine(merged.clone()), merged);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{}", .errors.join(", "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// An error holding a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// An error holding every message of `messages`, in order.
    pub fn from_messages<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Concatenates `other` after `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.combine(other)
    }

    /// Returns the messages in order.
    pub fn messages(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the error, returning its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.errors
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Semigroup for ValidationError {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl Monoid for ValidationError {
    fn empty() -> Self {
        Self { errors: Vec::new() }
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Vec<String>> for ValidationError {
    fn from(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_merge_keeps_left_first() {
        let merged = ValidationError::from_messages(["a", "b"]).merge(ValidationError::new("c"));
        assert_eq!(merged.into_messages(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_combine_all_of_nothing_is_empty() {
        let merged = ValidationError::combine_all(Vec::new());
        assert!(merged.is_empty());
    }

    #[rstest]
    fn test_display_joins_messages() {
        let error = ValidationError::from_messages(["is required", "must be a valid email"]);
        assert_eq!(error.to_string(), "is required, must be a valid email");
    }
}
