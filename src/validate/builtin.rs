//! Built-in leaf validators.
//!
//! Only [`Required`] fails on an absent focus. Every other validator returns
//! `Outcome::Right(None)` for an absent focus before it looks at its
//! options, which makes every field optional unless it is required.
//!
//! Every validator replaces its default message with the `message` option
//! when one is given.
//!
//! | Validator    | Options                  | Default message                       |
//! |--------------|--------------------------|---------------------------------------|
//! | [`Required`] |                          | `is required`                         |
//! | [`Email`]    |                          | `must be a valid email`               |
//! | [`Pattern`]  | `regex`                  | `has invalid format`                  |
//! | [`Range`]    | `min`, `max`             | `must be greater than or equal to …`  |
//! | [`Length`]   | `min`, `max`, `is`       | `length must be at least …`           |
//! | [`Positive`] |                          | `must be positive`                    |
//! | [`Negative`] |                          | `must be negative`                    |
//! | [`Integer`]  |                          | `must be an integer`                  |
//! | [`OneOf`]    | `values`                 | `must be one of …`                    |
//! | [`NoneOf`]   | `values`                 | `must not be one of …`                |
//! | [`Equals`]   | `value` or `env_key`     | `must equal …`                        |

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::Error;
use crate::options::{Environment, Options};
use crate::value::Value;

use super::{DynValidator, Outcome, Validator};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
});

fn fail(options: &Options, default: &str) -> Outcome {
    Outcome::fail(options.message(default))
}

fn number_option(validator: &str, options: &Options, key: &str) -> Result<Option<f64>, Error> {
    match options.get(key) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            Error::misconfigured(validator, format!("option `{key}` must be a number"))
        }),
    }
}

fn length_option(validator: &str, options: &Options, key: &str) -> Result<Option<usize>, Error> {
    match options.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|length| usize::try_from(length).ok())
            .map(Some)
            .ok_or_else(|| {
                Error::misconfigured(
                    validator,
                    format!("option `{key}` must be a non-negative integer"),
                )
            }),
    }
}

fn list_option<'a>(validator: &str, options: &'a Options, key: &str) -> Result<&'a [Value], Error> {
    options
        .get(key)
        .and_then(Value::as_list)
        .ok_or_else(|| Error::misconfigured(validator, format!("expected a `{key}` list option")))
}

fn list_text(values: &[Value]) -> String {
    Value::List(values.to_vec()).to_string()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        _ => false,
    }
}

/// Fails on an absent focus, `Null`, an empty string, or an empty
/// collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct Required;

impl Validator for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        Ok(match value {
            Some(value) if !is_blank(value) => Outcome::Ok,
            _ => fail(options, "is required"),
        })
    }
}

/// Accepts strings shaped like `local@domain.tld`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Email;

impl Validator for Email {
    fn name(&self) -> &str {
        "email"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        Ok(match value.as_str() {
            Some(text) if EMAIL_PATTERN.is_match(text) => Outcome::Ok,
            _ => fail(options, "must be a valid email"),
        })
    }
}

/// Accepts strings matching the `regex` option.
///
/// A compiled validation builds the regex once, when the check is compiled.
/// Calling [`Validator::validate`] directly compiles it on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pattern;

impl Pattern {
    fn regex(options: &Options) -> Result<Regex, Error> {
        let source = options
            .get("regex")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::misconfigured("pattern", "expected a `regex` string option"))?;
        Regex::new(source).map_err(|error| Error::misconfigured("pattern", error.to_string()))
    }
}

fn match_pattern(pattern: &Regex, value: &Value, options: &Options) -> Outcome {
    match value.as_str() {
        Some(text) if pattern.is_match(text) => Outcome::Ok,
        _ => fail(options, "has invalid format"),
    }
}

impl Validator for Pattern {
    fn name(&self) -> &str {
        "pattern"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        Ok(match_pattern(&Self::regex(options)?, value, options))
    }

    fn prepare(&self, options: &Options) -> Result<Option<DynValidator>, Error> {
        let pattern = Self::regex(options)?;
        Ok(Some(Arc::new(CompiledPattern { pattern })))
    }
}

/// A [`Pattern`] bound to the regex of one check.
#[derive(Clone, Debug)]
struct CompiledPattern {
    pattern: Regex,
}

impl Validator for CompiledPattern {
    fn name(&self) -> &str {
        "pattern"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        Ok(value.map_or(Outcome::Right(None), |value| {
            match_pattern(&self.pattern, value, options)
        }))
    }
}

/// Accepts numbers within the inclusive `min` / `max` bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Range;

impl Validator for Range {
    fn name(&self) -> &str {
        "range"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        let min = number_option(self.name(), options, "min")?;
        let max = number_option(self.name(), options, "max")?;
        if min.is_none() && max.is_none() {
            return Err(Error::misconfigured(self.name(), "expected `min` or `max`"));
        }

        let Some(number) = value.as_f64() else {
            return Ok(fail(options, "must be a number"));
        };
        if let Some(min) = min.filter(|min| number < *min) {
            return Ok(fail(options, &format!("must be greater than or equal to {min}")));
        }
        if let Some(max) = max.filter(|max| number > *max) {
            return Ok(fail(options, &format!("must be less than or equal to {max}")));
        }
        Ok(Outcome::Ok)
    }
}

/// Checks the length of a string (in characters), a list, or a record.
#[derive(Clone, Copy, Debug, Default)]
pub struct Length;

impl Validator for Length {
    fn name(&self) -> &str {
        "length"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        let exact = length_option(self.name(), options, "is")?;
        let min = length_option(self.name(), options, "min")?;
        let max = length_option(self.name(), options, "max")?;
        if exact.is_none() && min.is_none() && max.is_none() {
            return Err(Error::misconfigured(self.name(), "expected `is`, `min` or `max`"));
        }

        let length = match value {
            Value::String(text) => text.chars().count(),
            Value::List(items) => items.len(),
            Value::Map(entries) => entries.len(),
            _ => return Ok(fail(options, "has no length")),
        };
        if let Some(exact) = exact.filter(|exact| length != *exact) {
            return Ok(fail(options, &format!("length must be exactly {exact}")));
        }
        if let Some(min) = min.filter(|min| length < *min) {
            return Ok(fail(options, &format!("length must be at least {min}")));
        }
        if let Some(max) = max.filter(|max| length > *max) {
            return Ok(fail(options, &format!("length must be at most {max}")));
        }
        Ok(Outcome::Ok)
    }
}

/// Accepts numbers greater than zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Positive;

impl Validator for Positive {
    fn name(&self) -> &str {
        "positive"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        Ok(match value.as_f64() {
            Some(number) if number > 0.0 => Outcome::Ok,
            Some(_) => fail(options, "must be positive"),
            None => fail(options, "must be a number"),
        })
    }
}

/// Accepts numbers less than zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Negative;

impl Validator for Negative {
    fn name(&self) -> &str {
        "negative"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        Ok(match value.as_f64() {
            Some(number) if number < 0.0 => Outcome::Ok,
            Some(_) => fail(options, "must be negative"),
            None => fail(options, "must be a number"),
        })
    }
}

/// Accepts integer values. Floats are rejected even when whole.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integer;

impl Validator for Integer {
    fn name(&self) -> &str {
        "integer"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        Ok(match value {
            Value::Integer(_) => Outcome::Ok,
            _ => fail(options, "must be an integer"),
        })
    }
}

/// Accepts values listed in the `values` option.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneOf;

impl Validator for OneOf {
    fn name(&self) -> &str {
        "one_of"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        let allowed = list_option(self.name(), options, "values")?;
        Ok(if allowed.contains(value) {
            Outcome::Ok
        } else {
            fail(options, &format!("must be one of {}", list_text(allowed)))
        })
    }
}

/// Rejects values listed in the `values` option.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoneOf;

impl Validator for NoneOf {
    fn name(&self) -> &str {
        "none_of"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        _: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        let rejected = list_option(self.name(), options, "values")?;
        Ok(if rejected.contains(value) {
            fail(options, &format!("must not be one of {}", list_text(rejected)))
        } else {
            Outcome::Ok
        })
    }
}

/// Accepts values equal to the `value` option, or to the environment entry
/// named by the `env_key` option.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equals;

impl Validator for Equals {
    fn name(&self) -> &str {
        "equals"
    }

    fn validate(
        &self,
        value: Option<&Value>,
        options: &Options,
        env: &Environment,
    ) -> Result<Outcome, Error> {
        let Some(value) = value else {
            return Ok(Outcome::Right(None));
        };
        let expected = match (options.get("value"), options.get("env_key")) {
            (Some(expected), _) => expected,
            (None, Some(key)) => {
                let key = key.as_str().ok_or_else(|| {
                    Error::misconfigured(self.name(), "option `env_key` must be a string")
                })?;
                env.get(key).ok_or_else(|| {
                    Error::misconfigured(self.name(), format!("environment has no `{key}` entry"))
                })?
            }
            (None, None) => {
                return Err(Error::misconfigured(self.name(), "expected `value` or `env_key`"));
            }
        };
        Ok(if value == expected {
            Outcome::Ok
        } else {
            fail(options, &format!("must equal {expected}"))
        })
    }
}
