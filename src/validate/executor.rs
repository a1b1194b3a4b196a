//! Runs compiled steps and merges their results.

use crate::control::Either;
use crate::error::Error;
use crate::options::Environment;
use crate::typeclass::Monoid;
use crate::value::Value;

use super::{ExecutionMode, Step, ValidationError};

type StepResult = Result<Either<ValidationError, Option<Value>>, Error>;

/// Runs every step against `input` and merges the results applicatively.
///
/// Returns `input` itself when every step passes; values transformed by
/// validators never leave their step.
pub(crate) fn execute(
    steps: &[Step],
    input: Value,
    env: &Environment,
    mode: ExecutionMode,
) -> Result<Either<ValidationError, Value>, Error> {
    let results = match mode {
        ExecutionMode::Sequential => run_sequential(steps, &input, env)?,
        ExecutionMode::Parallel => run_parallel(steps, &input, env)?,
    };

    let merged = Either::accumulate(results);
    tracing::debug!(
        mode = %mode,
        steps = steps.len(),
        errors = merged.left_ref().map_or(0, ValidationError::len),
        "validation run finished"
    );
    Ok(merged.map(|_| input))
}

/// Runs the checks of one step, threading the focus through them.
///
/// Every check runs even after a failure. A check that succeeds hands its
/// (possibly transformed) focus to the next one; a failing check leaves the
/// focus as it was.
fn run_step(step: &Step, input: &Value, env: &Environment) -> StepResult {
    let mut focus = match step.projection() {
        None => Some(input.clone()),
        Some(projection) => projection.resolve(input)?,
    };

    let mut failures = Vec::new();
    for check in step.checks() {
        let outcome = check
            .validator()
            .validate(focus.as_ref(), check.options(), env)?;
        match outcome.normalize(focus.as_ref()) {
            Either::Right(next) => focus = next,
            Either::Left(error) => failures.push(error),
        }
    }

    tracing::trace!(
        step = step.index(),
        focus = step.focus_kind(),
        checks = step.checks().len(),
        failed = failures.len(),
        "validation step evaluated"
    );

    Ok(if failures.is_empty() {
        Either::Right(focus)
    } else {
        Either::Left(ValidationError::combine_all(failures))
    })
}

fn run_sequential(
    steps: &[Step],
    input: &Value,
    env: &Environment,
) -> Result<Vec<Either<ValidationError, Option<Value>>>, Error> {
    steps
        .iter()
        .map(|step| run_step(step, input, env))
        .collect()
}

/// Runs every step to completion, then restores declaration order. The
/// fatal error of the earliest declared step wins.
fn run_parallel(
    steps: &[Step],
    input: &Value,
    env: &Environment,
) -> Result<Vec<Either<ValidationError, Option<Value>>>, Error> {
    let mut tagged = dispatch(steps, input, env);
    tagged.sort_by_key(|(index, _)| *index);
    tagged.into_iter().map(|(_, result)| result).collect()
}

#[cfg(feature = "rayon")]
fn dispatch(steps: &[Step], input: &Value, env: &Environment) -> Vec<(usize, StepResult)> {
    use rayon::prelude::*;

    steps
        .par_iter()
        .map(|step| (step.index(), run_step(step, input, env)))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn dispatch(steps: &[Step], input: &Value, env: &Environment) -> Vec<(usize, StepResult)> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = steps
            .iter()
            .map(|step| scope.spawn(move || (step.index(), run_step(step, input, env))))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    })
}
