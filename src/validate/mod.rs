//! Validation engine built on optics.
//!
//! A validation is a list of rules. Each rule names a projection (or the
//! whole input) and the checks to run on its focus. Rules compile into
//! immutable [`Step`]s; a run evaluates every step and accumulates *all*
//! failures instead of stopping at the first one.
//!
//! - Every field is optional unless it is `Required`: other validators pass
//!   an absent focus through.
//! - Within a step every check runs. A check may transform the focus for the
//!   checks after it, but never the final result: a passing run returns the
//!   original input.
//! - Steps run sequentially or in parallel. Both modes return the same
//!   messages, ordered by step declaration and then check declaration.
//!
//! # Examples
//!
//! ```
//! use optival::control::Either;
//! use optival::optics::prism;
//! use optival::options::Environment;
//! use optival::record;
//! use optival::validate::builtin::{Length, Range, Required};
//! use optival::validate::{Check, ExecutionMode, Validation};
//!
//! let profile = Validation::builder()
//!     .mode(ExecutionMode::Parallel)
//!     .at("name", [Check::new(Required), Check::new(Length).option("max", 8)])
//!     .at(prism::path(["address", "zip"]), [Check::new(Length).option("is", 5)])
//!     .at_with_default("age", 18, [Check::new(Range).option("min", 18)])
//!     .build()
//!     .unwrap();
//!
//! let input = record! { "name" => "Grace" };
//! assert_eq!(profile.run(input.clone(), &Environment::new()), Ok(Either::Right(input)));
//!
//! let input = record! { "name" => "Grace Hopper", "age" => 12 };
//! let messages = profile
//!     .run(input, &Environment::new())
//!     .unwrap()
//!     .left()
//!     .unwrap()
//!     .into_messages();
//! assert_eq!(messages, ["length must be at most 8", "must be greater than or equal to 18"]);
//! ```

pub mod builtin;
mod compiler;
mod config;
mod error;
mod executor;
mod outcome;
mod rule;
mod validation;
mod validator;

pub use config::{ExecutionMode, ResultShape, ValidationConfig};
pub use error::ValidationError;
pub use outcome::Outcome;
pub use rule::{Check, Rule, Step};
pub use validation::{Validation, ValidationBuilder, Verdict};
pub use validator::{
    DynValidator, FnValidator, Validator, ValidatorFn, from_fn, from_fn_with_env,
    from_fn_with_options,
};

pub use crate::options::{Environment, Options};
