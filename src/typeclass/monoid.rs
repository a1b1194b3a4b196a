//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optival::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//! assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// - `Self::empty().combine(a) == a`
/// - `a.combine(Self::empty()) == a`
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from [`Monoid::empty`].
    ///
    /// Unlike [`Semigroup::reduce_all`], this returns the identity element for
    /// an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optival::typeclass::Monoid;
    ///
    /// let empty: Vec<Vec<i32>> = vec![];
    /// assert!(Vec::<i32>::combine_all(empty).is_empty());
    /// assert_eq!(Vec::combine_all(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}
