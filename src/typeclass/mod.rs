//! Algebraic type classes used for error accumulation.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! The validation engine merges failures through these traits, so any error
//! type with a lawful `Semigroup` instance can be accumulated by
//! [`Either::validate`](crate::control::Either::validate).
//!
//! # Examples
//!
//! ```rust
//! use optival::typeclass::{Monoid, Semigroup};
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
