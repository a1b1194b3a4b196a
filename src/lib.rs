//! # optival
//!
//! Composable optics and an error-accumulating validation engine built on
//! them.
//!
//! ## Overview
//!
//! - **Optics**: [`Lens`](optics::Lens) (total), [`Prism`](optics::Prism)
//!   (partial) and [`Traversal`](optics::Traversal) (fixed multi-focus)
//!   accessors for immutable data, with associative, weakest-link
//!   composition.
//! - **Projections**: one [`Projection`](projection::Projection) type for
//!   field names, key paths, optics, defaulted prisms, traversals and plain
//!   functions.
//! - **Comparison**: equality and ordering strategies derived from
//!   projections.
//! - **Validation**: rules compiled into steps and run sequentially or in
//!   parallel, accumulating every failure.
//!
//! Structures are modelled by the dynamic [`Value`](value::Value) type.
//! Typed structs and enums get optics from the [`lens!`] and [`prism!`]
//! macros.
//!
//! ## Feature Flags
//!
//! - `optics`: Optics, projections and comparison strategies
//! - `validate`: The validation engine and built-in validators (implies `optics`)
//! - `rayon`: Parallel mode runs on the rayon thread pool
//! - `serde`: `Serialize` / `Deserialize` for values and configuration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optival::prelude::*;
//! use optival::record;
//! use optival::validate::builtin::{Email, Required};
//!
//! let signup = Validation::builder()
//!     .at("name", [Check::new(Required)])
//!     .at("email", [Check::new(Required), Check::new(Email)])
//!     .build()
//!     .unwrap();
//!
//! let input = record! { "name" => "Ada", "email" => "ada@example.com" };
//! assert_eq!(signup.run(input.clone(), &Environment::new()), Ok(Either::Right(input)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optival::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::typeclass::*;
    pub use crate::value::Value;

    #[cfg(feature = "optics")]
    pub use crate::compare::{Comparison, Equality, Structural, contramap, contramap_with};
    #[cfg(feature = "optics")]
    pub use crate::optics::*;
    #[cfg(feature = "optics")]
    pub use crate::options::{Environment, Options};
    #[cfg(feature = "optics")]
    pub use crate::projection::Projection;

    #[cfg(feature = "validate")]
    pub use crate::validate::{
        Check, ExecutionMode, Outcome, ResultShape, Rule, Validation, ValidationConfig,
        ValidationError, Validator, Verdict,
    };
}

pub mod control;
pub mod typeclass;
pub mod value;

#[cfg(feature = "optics")]
pub mod compare;
#[cfg(feature = "optics")]
pub mod error;
#[cfg(feature = "optics")]
pub mod optics;
#[cfg(feature = "optics")]
pub mod options;
#[cfg(feature = "optics")]
pub mod projection;

#[cfg(feature = "validate")]
pub mod validate;

static_assertions::assert_impl_all!(value::Value: Send, Sync);
#[cfg(feature = "optics")]
static_assertions::assert_impl_all!(projection::Projection: Send, Sync);
#[cfg(feature = "validate")]
static_assertions::assert_impl_all!(validate::Validation: Send, Sync);
