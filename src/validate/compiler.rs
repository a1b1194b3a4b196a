//! Compiles declarative rules into steps.

use crate::error::{ConfigError, Error};

use super::{Check, Rule, Step};

/// Compiles `rules` into steps, in declaration order.
///
/// A rule default is folded into its projection here, and every check is
/// prepared for its options, so misconfigured defaults and options that can
/// never work are reported before anything runs.
pub(crate) fn compile<I>(rules: I) -> Result<Vec<Step>, ConfigError>
where
    I: IntoIterator<Item = Rule>,
{
    rules
        .into_iter()
        .enumerate()
        .map(|(index, rule)| compile_rule(index, rule))
        .collect()
}

fn compile_rule(index: usize, rule: Rule) -> Result<Step, ConfigError> {
    let (projection, checks, default) = rule.into_parts();
    let projection = match (projection, default) {
        (Some(projection), Some(default)) => Some(projection.with_default(default)?),
        (None, Some(_)) => return Err(ConfigError::DefaultOnRoot),
        (projection, None) => projection,
    };
    let checks = checks
        .into_iter()
        .map(prepare)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Step::new(index, projection, checks))
}

fn prepare(check: Check) -> Result<Check, ConfigError> {
    let name = check.validator().name().to_string();
    check.prepared().map_err(|error| match error {
        Error::Config(error) => error,
        Error::Misconfigured { validator, reason } => {
            ConfigError::InvalidOptions { validator, reason }
        }
        other => ConfigError::InvalidOptions {
            validator: name,
            reason: other.to_string(),
        },
    })
}
