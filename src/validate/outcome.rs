//! The shapes a validator may return, and their normalization.

use crate::control::Either;
use crate::value::Value;

use super::ValidationError;

/// The raw result of one validator invocation.
///
/// Every shape normalizes to either a success carrying the (possibly
/// transformed) focus, or a failure.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Success with the given focus. `None` keeps the focus absent.
    Right(Option<Value>),
    /// Failure.
    Left(ValidationError),
    /// Success that leaves the focus unchanged.
    Ok,
    /// Success that replaces the focus.
    OkWith(Value),
    /// Failure, in the tagged-pair shape.
    Error(ValidationError),
}

impl Outcome {
    /// A failure with a single message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Left(ValidationError::new(message))
    }

    /// Returns `true` for every success shape.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Right(_) | Self::Ok | Self::OkWith(_))
    }

    /// Converts into the canonical success-or-failure form.
    ///
    /// `focus` is the value the validator was called with; [`Outcome::Ok`]
    /// passes it through.
    ///
    /// # Examples
    ///
    /// ```
    /// use optival::control::Either;
    /// use optival::validate::Outcome;
    /// use optival::value::Value;
    ///
    /// let focus = Value::from("a");
    /// assert_eq!(Outcome::Ok.normalize(Some(&focus)), Either::Right(Some(focus.clone())));
    /// assert_eq!(
    ///     Outcome::OkWith(Value::from("b")).normalize(Some(&focus)),
    ///     Either::Right(Some(Value::from("b")))
    /// );
    /// assert!(Outcome::fail("is invalid").normalize(Some(&focus)).is_left());
    /// ```
    pub fn normalize(self, focus: Option<&Value>) -> Either<ValidationError, Option<Value>> {
        match self {
            Self::Right(value) => Either::Right(value),
            Self::Ok => Either::Right(focus.cloned()),
            Self::OkWith(value) => Either::Right(Some(value)),
            Self::Left(error) | Self::Error(error) => Either::Left(error),
        }
    }
}

impl From<Either<ValidationError, Option<Value>>> for Outcome {
    fn from(either: Either<ValidationError, Option<Value>>) -> Self {
        match either {
            Either::Left(error) => Self::Left(error),
            Either::Right(value) => Self::Right(value),
        }
    }
}

impl From<Result<Value, ValidationError>> for Outcome {
    fn from(result: Result<Value, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::OkWith(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl From<Result<(), ValidationError>> for Outcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(error) => Self::Error(error),
        }
    }
}
