//! Crate-level error types.
//!
//! Two failure families never surface as validation failures:
//!
//! - [`ConfigError`] is raised while a projection or a validation is being
//!   built. It is a programming mistake in the rule set.
//! - [`Error`] aborts a validation run: a lens lost its totality guarantee,
//!   a validator was wired without the options it needs, or the configured
//!   result shape asks for failures to be raised.

use thiserror::Error;

use crate::optics::OpticError;
#[cfg(feature = "validate")]
use crate::validate::ValidationError;

/// A construction-time error in a projection or a rule set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An explicit default was supplied for a projection that already
    /// carries one.
    #[error("redundant default: the projection already carries a default value")]
    RedundantDefault,
    /// A default was supplied for a lens, which is never absent.
    #[error("a default cannot be applied to a lens projection")]
    DefaultOnLens,
    /// A default was supplied for a traversal, which is multi-valued.
    #[error("a default cannot be applied to a traversal projection")]
    DefaultOnTraversal,
    /// A default was supplied for a plain function projection.
    #[error("a default cannot be applied to a function projection")]
    DefaultOnFunction,
    /// A default was supplied for a custom projection object.
    #[error("a default cannot be applied to a custom projection")]
    DefaultOnCustom,
    /// A default was supplied for a rule that checks the whole input.
    #[error("a default cannot be applied to a root rule")]
    DefaultOnRoot,
    /// A key path with no segments.
    #[error("a projection path needs at least one key")]
    EmptyPath,
    /// A key path containing an empty key.
    #[error("empty key at position {index} of a projection path")]
    EmptySegment {
        /// Position of the empty key.
        index: usize,
    },
    /// Two projections that cannot be composed.
    #[error("cannot compose a {outer} projection with a {inner} projection")]
    UnsupportedComposition {
        /// Kind of the outer projection.
        outer: &'static str,
        /// Kind of the inner projection.
        inner: &'static str,
    },
    /// A check whose options its validator rejects before any run.
    #[error("validator `{validator}` has invalid options: {reason}")]
    InvalidOptions {
        /// Name of the validator.
        validator: String,
        /// What is wrong with its options.
        reason: String,
    },
    /// An execution mode name that is neither `sequential` nor `parallel`.
    #[error("unknown execution mode `{0}`")]
    UnknownMode(String),
    /// A result shape name that is not `either`, `tuple` or `raise`.
    #[error("unknown result shape `{0}`")]
    UnknownShape(String),
}

/// A fatal error that aborts a validation run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A lens met a missing key or a non-record value.
    #[error("structural error: {0}")]
    Structural(#[from] OpticError),
    /// A rule set could not be built.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A validator was called without the options it needs.
    #[error("validator `{validator}` is misconfigured: {reason}")]
    Misconfigured {
        /// Name of the validator.
        validator: String,
        /// What is wrong with its options.
        reason: String,
    },
    /// Validation failed and the result shape raises failures.
    #[cfg(feature = "validate")]
    #[error("validation failed: {0}")]
    Invalid(ValidationError),
}

impl Error {
    /// Builds a [`Error::Misconfigured`].
    pub fn misconfigured(validator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Misconfigured {
            validator: validator.into(),
            reason: reason.into(),
        }
    }

    /// Returns the accumulated failures of an [`Error::Invalid`].
    #[cfg(feature = "validate")]
    pub const fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_optic_error_converts_with_question_mark() {
        fn read() -> Result<(), Error> {
            Err(OpticError::NotAStructure {
                key: "a".to_string(),
                found: "integer",
            })?;
            Ok(())
        }

        assert!(matches!(read(), Err(Error::Structural(_))));
    }

    #[rstest]
    #[case(ConfigError::EmptySegment { index: 2 }, "empty key at position 2 of a projection path")]
    #[case(
        ConfigError::UnsupportedComposition { outer: "traversal", inner: "prism" },
        "cannot compose a traversal projection with a prism projection"
    )]
    #[case(ConfigError::UnknownMode("fast".to_string()), "unknown execution mode `fast`")]
    fn test_config_error_messages(#[case] error: ConfigError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_misconfigured_message() {
        let error = Error::misconfigured("range", "expected `min` or `max`");
        assert_eq!(
            error.to_string(),
            "validator `range` is misconfigured: expected `min` or `max`"
        );
    }
}
