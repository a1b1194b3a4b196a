//! Either type - the success/failure carrier of the validation engine.
//!
//! `Either<L, R>` is `Left(L)` (failure) or `Right(R)` (success). Besides the
//! usual mapping and binding operations it provides the applicative
//! combinators the validation engine is built on:
//!
//! - [`Either::validate`] runs several checks against one value and
//!   accumulates every `Left` instead of stopping at the first.
//! - [`Either::accumulate`] merges a sequence of independent results,
//!   keeping all successes in order or all failures in order.
//!
//! # Examples
//!
//! ```rust
//! use optival::control::Either;
//!
//! fn non_empty(name: &String) -> Either<Vec<String>, ()> {
//!     if name.is_empty() {
//!         Either::Left(vec!["is required".to_string()])
//!     } else {
//!         Either::Right(())
//!     }
//! }
//!
//! fn short(name: &String) -> Either<Vec<String>, ()> {
//!     if name.len() > 3 {
//!         Either::Left(vec!["is too long".to_string()])
//!     } else {
//!         Either::Right(())
//!     }
//! }
//!
//! let checks: [fn(&String) -> Either<Vec<String>, ()>; 2] = [non_empty, short];
//! let result = Either::validate(String::from("Alice"), checks);
//! assert_eq!(result, Either::Left(vec!["is too long".to_string()]));
//! ```

use std::fmt;

use crate::typeclass::Semigroup;

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - The type of the left (failure) value
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use optival::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optival::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps the failure value, leaving a success untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation that may itself fail (monadic bind).
    ///
    /// The first `Left` short-circuits the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optival::control::Either;
    ///
    /// let parse = |text: &str| -> Either<String, i32> {
    ///     text.parse::<i32>().map_err(|_| format!("{text} is not a number")).into()
    /// };
    ///
    /// let doubled = parse("21").flat_map(|n| Either::Right(n * 2));
    /// assert_eq!(doubled, Either::Right(42));
    ///
    /// let failed = parse("x").flat_map(|n| Either::Right(n * 2));
    /// assert_eq!(failed, Either::Left("x is not a number".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Eliminates the Either by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Converts into a `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<L: Semigroup, R> Either<L, R> {
    /// Runs every check against `value`, accumulating all failures.
    ///
    /// Each check sees the same, unmodified value. Returns `Right(value)` when
    /// every check succeeds, otherwise `Left` with the failures merged in
    /// check order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optival::control::Either;
    ///
    /// fn positive(n: &i32) -> Either<Vec<&'static str>, ()> {
    ///     if *n > 0 { Either::Right(()) } else { Either::Left(vec!["not positive"]) }
    /// }
    /// fn even(n: &i32) -> Either<Vec<&'static str>, ()> {
    ///     if n % 2 == 0 { Either::Right(()) } else { Either::Left(vec!["not even"]) }
    /// }
    /// let checks: [fn(&i32) -> Either<Vec<&'static str>, ()>; 2] = [positive, even];
    ///
    /// assert_eq!(Either::validate(4, checks), Either::Right(4));
    /// assert_eq!(
    ///     Either::validate(-3, checks),
    ///     Either::Left(vec!["not positive", "not even"])
    /// );
    /// ```
    pub fn validate<T, F, I>(value: R, checks: I) -> Self
    where
        F: FnOnce(&R) -> Either<L, T>,
        I: IntoIterator<Item = F>,
    {
        let failure = checks
            .into_iter()
            .filter_map(|check| check(&value).left())
            .reduce(Semigroup::combine);

        match failure {
            Some(errors) => Self::Left(errors),
            None => Self::Right(value),
        }
    }

    /// Merges independent results applicatively.
    ///
    /// Returns `Right` with every success in order when all results succeed,
    /// otherwise `Left` with every failure merged in order. No result is
    /// skipped after a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optival::control::Either;
    ///
    /// let results: Vec<Either<Vec<&str>, i32>> = vec![
    ///     Either::Right(1),
    ///     Either::Left(vec!["a"]),
    ///     Either::Right(3),
    ///     Either::Left(vec!["b"]),
    /// ];
    /// assert_eq!(Either::accumulate(results), Either::Left(vec!["a", "b"]));
    ///
    /// let results: Vec<Either<Vec<&str>, i32>> = vec![Either::Right(1), Either::Right(2)];
    /// assert_eq!(Either::accumulate(results), Either::Right(vec![1, 2]));
    /// ```
    pub fn accumulate<I>(results: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<L> = None;

        for result in results {
            match result {
                Self::Right(value) => successes.push(value),
                Self::Left(errors) => {
                    failure = Some(match failure {
                        Some(accumulated) => accumulated.combine(errors),
                        None => errors,
                    });
                }
            }
        }

        match failure {
            Some(errors) => Either::Left(errors),
            None => Either::Right(successes),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
