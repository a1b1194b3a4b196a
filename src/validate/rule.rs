//! Declarative rules and the steps they compile to.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::options::Options;
use crate::projection::Projection;
use crate::value::Value;

use super::{DynValidator, Validator};

/// A validator paired with its options.
#[derive(Clone)]
pub struct Check {
    validator: DynValidator,
    options: Options,
}

impl Check {
    /// A check with no options.
    pub fn new<V: Validator + 'static>(validator: V) -> Self {
        Self::with_options(validator, Options::new())
    }

    /// A check with the given options.
    pub fn with_options<V: Validator + 'static>(validator: V, options: Options) -> Self {
        Self {
            validator: Arc::new(validator),
            options,
        }
    }

    /// Returns the check with one more option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Returns the validator.
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    /// Returns the options.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Swaps in the validator prepared for these options, if any.
    pub(crate) fn prepared(self) -> Result<Self, Error> {
        Ok(match self.validator.prepare(&self.options)? {
            Some(validator) => Self {
                validator,
                options: self.options,
            },
            None => self,
        })
    }
}

impl<V: Validator + 'static> From<V> for Check {
    fn from(validator: V) -> Self {
        Self::new(validator)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Check")
            .field("validator", &self.validator.name())
            .field("options", &self.options)
            .finish()
    }
}

/// One declarative rule: a projection (or the whole input) and its checks.
///
/// # Examples
///
/// ```
/// use optival::validate::builtin::{Email, Length, Required};
/// use optival::validate::{Check, Rule};
///
/// let email = Rule::at("email", [Check::new(Required), Check::new(Email)]);
/// let nickname =
///     Rule::at("nickname", [Check::new(Length).option("max", 12)]).with_default("anonymous");
/// let whole = Rule::root([Check::new(Required)]);
///
/// assert_eq!(email.checks().len(), 2);
/// assert!(nickname.default_value().is_some());
/// assert!(whole.projection().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Rule {
    projection: Option<Projection>,
    checks: Vec<Check>,
    default: Option<Value>,
}

impl Rule {
    /// Checks the whole input.
    pub fn root<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        Self {
            projection: None,
            checks: checks.into_iter().collect(),
            default: None,
        }
    }

    /// Checks the focus of `projection`.
    pub fn at<I>(projection: impl Into<Projection>, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        Self {
            projection: Some(projection.into()),
            checks: checks.into_iter().collect(),
            default: None,
        }
    }

    /// Supplies a fallback for an absent focus.
    ///
    /// Whether the projection accepts a default is checked when the rule is
    /// compiled.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Returns the projection, `None` for a root rule.
    pub const fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    /// Returns the checks in declaration order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Returns the explicit default, if any.
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Option<Projection>, Vec<Check>, Option<Value>) {
        (self.projection, self.checks, self.default)
    }
}

/// A compiled, immutable unit of a validation run.
#[derive(Clone, Debug)]
pub struct Step {
    index: usize,
    projection: Option<Projection>,
    checks: Vec<Check>,
}

impl Step {
    pub(crate) const fn new(
        index: usize,
        projection: Option<Projection>,
        checks: Vec<Check>,
    ) -> Self {
        Self {
            index,
            projection,
            checks,
        }
    }

    /// Returns the declaration index of this step.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the projection, `None` when the step checks the whole input.
    pub const fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    /// Returns the checks in declaration order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Names the focus for diagnostics.
    pub fn focus_kind(&self) -> &'static str {
        self.projection.as_ref().map_or("root", Projection::kind)
    }
}
