//! Execution strategy and result shape of a validation.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How the steps of a validation are evaluated.
///
/// Both modes produce identical results: the same messages in the same
/// order, and the same fatal error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Steps run one after another, in declaration order.
    #[default]
    Sequential,
    /// Steps run concurrently; results are reordered by declaration.
    Parallel,
}

/// How the final result of a run is surfaced.
///
/// The shape never changes how failures are accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResultShape {
    /// The canonical `Either`.
    #[default]
    Either,
    /// A plain `Result`.
    Tuple,
    /// Failures are raised as [`Error::Invalid`](crate::error::Error::Invalid).
    Raise,
}

impl ExecutionMode {
    /// Returns the lower-case name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl ResultShape {
    /// Returns the lower-case name of this shape.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Either => "either",
            Self::Tuple => "tuple",
            Self::Raise => "raise",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(ConfigError::UnknownMode(name.to_string())),
        }
    }
}

impl FromStr for ResultShape {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "either" => Ok(Self::Either),
            "tuple" => Ok(Self::Tuple),
            "raise" => Ok(Self::Raise),
            _ => Err(ConfigError::UnknownShape(name.to_string())),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Execution settings of a [`Validation`](super::Validation).
///
/// # Examples
///
/// ```
/// use optival::validate::{ExecutionMode, ResultShape, ValidationConfig};
///
/// let config = ValidationConfig::default().with_mode("parallel".parse().unwrap());
/// assert_eq!(config.mode, ExecutionMode::Parallel);
/// assert_eq!(config.shape, ResultShape::Either);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Evaluation strategy.
    pub mode: ExecutionMode,
    /// Surface of the final result.
    pub shape: ResultShape,
}

impl ValidationConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(mode: ExecutionMode, shape: ResultShape) -> Self {
        Self { mode, shape }
    }

    /// Replaces the execution mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the result shape.
    #[must_use]
    pub const fn with_shape(mut self, shape: ResultShape) -> Self {
        self.shape = shape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sequential", ExecutionMode::Sequential)]
    #[case(" Parallel ", ExecutionMode::Parallel)]
    fn test_parse_mode(#[case] name: &str, #[case] expected: ExecutionMode) {
        assert_eq!(name.parse::<ExecutionMode>(), Ok(expected));
    }

    #[rstest]
    fn test_unknown_names_are_config_errors() {
        assert_eq!(
            "eager".parse::<ExecutionMode>(),
            Err(ConfigError::UnknownMode("eager".to_string()))
        );
        assert_eq!(
            "panic".parse::<ResultShape>(),
            Err(ConfigError::UnknownShape("panic".to_string()))
        );
    }

    #[rstest]
    fn test_display_round_trips() {
        for shape in [ResultShape::Either, ResultShape::Tuple, ResultShape::Raise] {
            assert_eq!(shape.to_string().parse::<ResultShape>(), Ok(shape));
        }
    }
}
