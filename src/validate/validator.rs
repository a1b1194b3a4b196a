//! The validator calling convention.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::options::{Environment, Options};
use crate::value::Value;

use super::Outcome;

/// A shared, type-erased validator.
pub type DynValidator = Arc<dyn Validator>;

/// A leaf check applied to one focus.
///
/// Validators are called with the focus (`None` when absent), the options
/// they were declared with, and the environment of the run. They must not
/// keep state between calls: the same validator may run on several threads
/// at once.
///
/// A validation failure is an [`Outcome`]. An `Err` is reserved for
/// misconfiguration, such as a required option that is missing.
///
/// Apart from `Required`, validators treat an absent focus as a success.
pub trait Validator: Send + Sync {
    /// A short name used in diagnostics.
    fn name(&self) -> &str;

    /// Checks `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misconfigured`] when `options` do not make sense for
    /// this validator.
    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        env: &Environment,
    ) -> Result<Outcome, Error>;

    /// Binds the validator to the options of one check before any run.
    ///
    /// Returns `None` when there is nothing to prepare, in which case the
    /// validator itself is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misconfigured`] for options that can never work.
    fn prepare(&self, options: &Options) -> Result<Option<DynValidator>, Error> {
        let _ = options;
        Ok(None)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        env: &Environment,
    ) -> Result<Outcome, Error> {
        (**self).validate(value, options, env)
    }

    fn prepare(&self, options: &Options) -> Result<Option<DynValidator>, Error> {
        (**self).prepare(options)
    }
}

/// A closure over the full validator calling convention.
pub trait ValidatorFn:
    Fn(Option<&Value>, &Options, &Environment) -> Result<Outcome, Error> + Send + Sync
{
}

impl<F> ValidatorFn for F where
    F: Fn(Option<&Value>, &Options, &Environment) -> Result<Outcome, Error> + Send + Sync
{
}

/// A validator backed by a closure over the full calling convention.
#[derive(Clone)]
pub struct FnValidator<F> {
    name: String,
    function: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F: ValidatorFn> Validator for FnValidator<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        env: &Environment,
    ) -> Result<Outcome, Error> {
        (self.function)(value, options, env)
    }
}

/// A validator that only looks at the focus.
///
/// # Example
///
/// ```
/// use optival::validate::{from_fn, Outcome, Validator};
/// use optival::options::{Environment, Options};
/// use optival::value::Value;
///
/// let lowercase = from_fn("lowercase", |value| match value.and_then(Value::as_str) {
///     Some(text) => Outcome::OkWith(Value::from(text.to_lowercase())),
///     None => Outcome::Ok,
/// });
///
/// let outcome = lowercase
///     .validate(Some(&Value::from("MiXeD")), &Options::new(), &Environment::new())
///     .unwrap();
/// assert_eq!(outcome, Outcome::OkWith(Value::from("mixed")));
/// ```
pub fn from_fn<F>(
    name: impl Into<String>,
    function: F,
) -> FnValidator<impl ValidatorFn>
where
    F: Fn(Option<&Value>) -> Outcome + Send + Sync,
{
    FnValidator {
        name: name.into(),
        function: move |value: Option<&Value>, _: &Options, _: &Environment| {
            Ok::<_, Error>(function(value))
        },
    }
}

/// A validator that looks at the focus and its options.
pub fn from_fn_with_options<F>(
    name: impl Into<String>,
    function: F,
) -> FnValidator<impl ValidatorFn>
where
    F: Fn(Option<&Value>, &Options) -> Result<Outcome, Error> + Send + Sync,
{
    FnValidator {
        name: name.into(),
        function: move |value: Option<&Value>, options: &Options, _: &Environment| {
            function(value, options)
        },
    }
}

/// A validator that looks at the focus, its options and the environment.
pub fn from_fn_with_env<F>(name: impl Into<String>, function: F) -> FnValidator<F>
where
    F: Fn(Option<&Value>, &Options, &Environment) -> Result<Outcome, Error> + Send + Sync,
{
    FnValidator {
        name: name.into(),
        function,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_fn_with_env_reads_environment() {
        let matches_tenant = from_fn_with_env("tenant", |value, _options, env| {
            Ok(if value == env.get("tenant") {
                Outcome::Ok
            } else {
                Outcome::fail("belongs to another tenant")
            })
        });
        let env = Environment::new().with("tenant", "acme");

        let outcome = matches_tenant
            .validate(Some(&Value::from("acme")), &Options::new(), &env)
            .unwrap();
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(matches_tenant.name(), "tenant");
    }

    #[rstest]
    fn test_from_fn_with_options_can_report_misconfiguration() {
        let strict = from_fn_with_options("strict", |_value, options| {
            if options.contains("level") {
                Ok(Outcome::Ok)
            } else {
                Err(Error::misconfigured("strict", "expected a `level` option"))
            }
        });
        let result = strict.validate(None, &Options::new(), &Environment::new());
        assert!(matches!(result, Err(Error::Misconfigured { .. })));
    }

    #[rstest]
    fn test_shared_validator_delegates() {
        let shared: DynValidator = Arc::new(from_fn("always", |_| Outcome::Ok));
        assert_eq!(shared.name(), "always");
    }
}
