//! Control structures for success/failure computations.
//!
//! - [`Either`]: A value that is either a failure (`Left`) or a success
//!   (`Right`), with applicative error accumulation.
//!
//! The optional-value collaborator is the standard [`Option`]: `Some` is a
//! present focus, `None` an absent one, and `map`/`and_then` are its map and
//! bind.
//!
//! # Examples
//!
//! ```rust
//! use optival::control::Either;
//!
//! let result: Either<Vec<String>, i32> = Either::Right(20);
//! let doubled = result.map(|n| n * 2).fold(|_| 0, |n| n + 2);
//! assert_eq!(doubled, 42);
//! ```

mod either;

pub use either::Either;
