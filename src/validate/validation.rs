//! The compiled, reusable validation.

use std::sync::Arc;

use crate::control::Either;
use crate::error::{ConfigError, Error};
use crate::options::Environment;
use crate::projection::Projection;
use crate::value::Value;

use super::compiler::compile;
use super::executor::execute;
use super::{Check, ExecutionMode, ResultShape, Rule, Step, ValidationConfig, ValidationError};

/// The result of [`Validation::validate`], in the configured shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// [`ResultShape::Either`].
    Either(Either<ValidationError, Value>),
    /// [`ResultShape::Tuple`].
    Tuple(Result<Value, ValidationError>),
    /// [`ResultShape::Raise`] when validation passed. A failure is returned
    /// as [`Error::Invalid`].
    Passed(Value),
}

impl Verdict {
    /// Returns `true` if validation passed.
    pub const fn is_valid(&self) -> bool {
        match self {
            Self::Either(either) => either.is_right(),
            Self::Tuple(result) => result.is_ok(),
            Self::Passed(_) => true,
        }
    }

    /// Converts back to the canonical `Either`.
    pub fn into_either(self) -> Either<ValidationError, Value> {
        match self {
            Self::Either(either) => either,
            Self::Tuple(result) => result.into(),
            Self::Passed(value) => Either::Right(value),
        }
    }
}

/// A compiled rule set.
///
/// A `Validation` is immutable, cheap to clone, and can be shared between
/// threads and reused for any number of runs.
///
/// # Examples
///
/// ```
/// use optival::control::Either;
/// use optival::options::Environment;
/// use optival::record;
/// use optival::validate::builtin::{Email, Required};
/// use optival::validate::{Check, Validation};
///
/// let signup = Validation::builder()
///     .at("name", [Check::new(Required)])
///     .at("email", [Check::new(Required), Check::new(Email)])
///     .build()
///     .unwrap();
///
/// let result = signup
///     .run(record! { "name" => "", "email" => "" }, &Environment::new())
///     .unwrap();
///
/// let messages = result.left().unwrap().into_messages();
/// assert_eq!(messages, ["is required", "is required", "must be a valid email"]);
/// ```
#[derive(Clone, Debug)]
pub struct Validation {
    steps: Arc<[Step]>,
    config: ValidationConfig,
}

impl Validation {
    /// Compiles `rules` with the given execution settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a default that a projection does not
    /// accept, or for options a validator rejects while preparing.
    pub fn compile<I>(rules: I, config: ValidationConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Rule>,
    {
        let steps: Arc<[Step]> = compile(rules)?.into();
        tracing::debug!(
            steps = steps.len(),
            mode = %config.mode,
            shape = %config.shape,
            "validation compiled"
        );
        Ok(Self { steps, config })
    }

    /// Compiles `rules` with the default settings.
    ///
    /// # Errors
    ///
    /// See [`Validation::compile`].
    pub fn new<I>(rules: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Rule>,
    {
        Self::compile(rules, ValidationConfig::default())
    }

    /// A validation with no rules. It accepts every input unchanged.
    pub fn empty() -> Self {
        Self {
            steps: Arc::from(Vec::new()),
            config: ValidationConfig::default(),
        }
    }

    /// Starts a builder.
    pub fn builder() -> ValidationBuilder {
        ValidationBuilder::default()
    }

    /// Returns the same steps with other execution settings.
    #[must_use]
    pub fn with_config(&self, config: ValidationConfig) -> Self {
        Self {
            steps: Arc::clone(&self.steps),
            config,
        }
    }

    /// Returns the compiled steps, in declaration order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the execution settings.
    pub const fn config(&self) -> ValidationConfig {
        self.config
    }

    /// Returns the execution mode.
    pub const fn mode(&self) -> ExecutionMode {
        self.config.mode
    }

    /// Returns the result shape.
    pub const fn shape(&self) -> ResultShape {
        self.config.shape
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step against `input`.
    ///
    /// Returns `Right(input)` when every step passes, otherwise `Left` with
    /// every message in step order, then check order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] when a lens cannot find its focus and
    /// [`Error::Misconfigured`] when a validator lacks required options.
    pub fn run(
        &self,
        input: Value,
        env: &Environment,
    ) -> Result<Either<ValidationError, Value>, Error> {
        execute(&self.steps, input, env, self.config.mode)
    }

    /// Runs every step and surfaces the result in the configured shape.
    ///
    /// # Errors
    ///
    /// The errors of [`Validation::run`], plus [`Error::Invalid`] when the
    /// shape is [`ResultShape::Raise`] and validation failed.
    pub fn validate(&self, input: Value, env: &Environment) -> Result<Verdict, Error> {
        let result = self.run(input, env)?;
        match self.config.shape {
            ResultShape::Either => Ok(Verdict::Either(result)),
            ResultShape::Tuple => Ok(Verdict::Tuple(result.into_result())),
            ResultShape::Raise => match result {
                Either::Right(value) => Ok(Verdict::Passed(value)),
                Either::Left(error) => Err(Error::Invalid(error)),
            },
        }
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds a [`Validation`] rule by rule.
#[derive(Clone, Debug, Default)]
pub struct ValidationBuilder {
    rules: Vec<Rule>,
    config: ValidationConfig,
}

impl ValidationBuilder {
    /// Adds checks over the whole input.
    #[must_use]
    pub fn root<I>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        self.rules.push(Rule::root(checks));
        self
    }

    /// Adds checks over the focus of `projection`.
    #[must_use]
    pub fn at<I>(mut self, projection: impl Into<Projection>, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        self.rules.push(Rule::at(projection, checks));
        self
    }

    /// Adds checks over the focus of `projection`, falling back to `default`
    /// when the focus is absent.
    #[must_use]
    pub fn at_with_default<I>(
        mut self,
        projection: impl Into<Projection>,
        default: impl Into<Value>,
        checks: I,
    ) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        self.rules.push(Rule::at(projection, checks).with_default(default));
        self
    }

    /// Adds a prepared rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the execution mode.
    #[must_use]
    pub const fn mode(mut self, mode: ExecutionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Sets the result shape.
    #[must_use]
    pub const fn shape(mut self, shape: ResultShape) -> Self {
        self.config.shape = shape;
        self
    }

    /// Replaces the execution settings.
    #[must_use]
    pub const fn config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Compiles the collected rules.
    ///
    /// # Errors
    ///
    /// See [`Validation::compile`].
    pub fn build(self) -> Result<Validation, ConfigError> {
        Validation::compile(self.rules, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::validate::builtin::{Positive, Required};
    use rstest::rstest;

    fn quantity() -> ValidationBuilder {
        Validation::builder().at("quantity", [Check::new(Required), Check::new(Positive)])
    }

    #[rstest]
    fn test_empty_validation_is_identity() {
        let input = record! { "anything" => 1 };
        assert_eq!(
            Validation::empty().run(input.clone(), &Environment::new()),
            Ok(Either::Right(input))
        );
    }

    #[rstest]
    fn test_tuple_shape() {
        let validation = quantity().shape(ResultShape::Tuple).build().unwrap();
        let verdict = validation
            .validate(record! { "quantity" => -1 }, &Environment::new())
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::Tuple(Err(ValidationError::new("must be positive")))
        );
        assert!(!verdict.is_valid());
    }

    #[rstest]
    fn test_raise_shape() {
        let validation = quantity().shape(ResultShape::Raise).build().unwrap();

        let error = validation
            .validate(record! {}, &Environment::new())
            .unwrap_err();
        assert_eq!(
            error.validation_error(),
            Some(&ValidationError::new("is required"))
        );

        let passed = validation
            .validate(record! { "quantity" => 2 }, &Environment::new())
            .unwrap();
        assert_eq!(passed, Verdict::Passed(record! { "quantity" => 2 }));
    }

    #[rstest]
    fn test_with_config_shares_steps() {
        let sequential = quantity().build().unwrap();
        let parallel =
            sequential.with_config(ValidationConfig::default().with_mode(ExecutionMode::Parallel));
        assert_eq!(parallel.len(), sequential.len());
        assert_eq!(parallel.mode(), ExecutionMode::Parallel);
    }
}
