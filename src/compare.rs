//! Pluggable equality and ordering strategies.
//!
//! A strategy is a value passed explicitly to the code that needs it. The
//! default strategy, [`Structural`], uses `PartialEq` / `PartialOrd`.
//!
//! [`contramap`] turns a projection into a strategy over whole records that
//! compares their projected foci:
//!
//! - An absent focus equals another absent focus and orders before any
//!   present focus.
//! - A traversal relates two records only when both resolve every focus.
//!   Otherwise they are neither equal nor ordered, even when both sides are
//!   absent.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use optival::compare::{contramap, Comparison, Equality};
//! use optival::record;
//!
//! let by_score = contramap("score");
//!
//! let unscored = record! {};
//! let scored = record! { "score" => 5 };
//!
//! assert_eq!(by_score.compare(&unscored, &scored), Ok(Some(Ordering::Less)));
//! assert_eq!(by_score.equal(&unscored, &record! {}), Ok(true));
//! assert_eq!(by_score.lt(&unscored, &scored), Ok(true));
//! ```

use std::cmp::Ordering;

use crate::optics::{OpticError, Traversal};
use crate::projection::Projection;
use crate::value::Value;

/// An equality strategy.
pub trait Equality<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equal under this strategy.
    ///
    /// # Errors
    ///
    /// Propagates structural errors met while projecting either side.
    fn equal(&self, left: &T, right: &T) -> Result<bool, OpticError>;

    /// Negation of [`Equality::equal`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Equality::equal`].
    fn not_equal(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        self.equal(left, right).map(|equal| !equal)
    }
}

/// An ordering strategy.
///
/// `compare` returns `None` when the two values are unrelated. Every
/// predicate is `false` for unrelated values.
pub trait Comparison<T: ?Sized> {
    /// Orders `left` relative to `right`.
    ///
    /// # Errors
    ///
    /// Propagates structural errors met while projecting either side.
    fn compare(&self, left: &T, right: &T) -> Result<Option<Ordering>, OpticError>;

    /// `left < right`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Comparison::compare`].
    fn lt(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        Ok(self.compare(left, right)? == Some(Ordering::Less))
    }

    /// `left <= right`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Comparison::compare`].
    fn le(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        Ok(matches!(
            self.compare(left, right)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    /// `left > right`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Comparison::compare`].
    fn gt(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        Ok(self.compare(left, right)? == Some(Ordering::Greater))
    }

    /// `left >= right`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Comparison::compare`].
    fn ge(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        Ok(matches!(
            self.compare(left, right)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /// Inverts this ordering.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }

    /// Breaks ties of this ordering with `next`.
    fn then<C>(self, next: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Comparison<T>,
    {
        Then { first: self, next }
    }
}

/// The default strategy: `PartialEq` and `PartialOrd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Structural;

impl<T: PartialEq + ?Sized> Equality<T> for Structural {
    fn equal(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        Ok(left == right)
    }
}

impl<T: PartialOrd + ?Sized> Comparison<T> for Structural {
    fn compare(&self, left: &T, right: &T) -> Result<Option<Ordering>, OpticError> {
        Ok(left.partial_cmp(right))
    }
}

/// An ordering with its direction flipped.
#[derive(Clone, Copy, Debug)]
pub struct Reversed<C>(C);

impl<T: ?Sized, C: Comparison<T>> Comparison<T> for Reversed<C> {
    fn compare(&self, left: &T, right: &T) -> Result<Option<Ordering>, OpticError> {
        Ok(self.0.compare(left, right)?.map(Ordering::reverse))
    }
}

impl<T: ?Sized, C: Equality<T>> Equality<T> for Reversed<C> {
    fn equal(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        self.0.equal(left, right)
    }
}

/// Two orderings applied lexicographically.
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    next: B,
}

impl<T: ?Sized, A: Comparison<T>, B: Comparison<T>> Comparison<T> for Then<A, B> {
    fn compare(&self, left: &T, right: &T) -> Result<Option<Ordering>, OpticError> {
        match self.first.compare(left, right)? {
            Some(Ordering::Equal) => self.next.compare(left, right),
            other => Ok(other),
        }
    }
}

impl<T: ?Sized, A: Equality<T>, B: Equality<T>> Equality<T> for Then<A, B> {
    fn equal(&self, left: &T, right: &T) -> Result<bool, OpticError> {
        Ok(self.first.equal(left, right)? && self.next.equal(left, right)?)
    }
}

/// A strategy over records that compares their projected foci with `inner`.
#[derive(Clone, Debug)]
pub struct Projected<C> {
    projection: Projection,
    inner: C,
}

/// Compares records by the focus of `projection`, structurally.
pub fn contramap(projection: impl Into<Projection>) -> Projected<Structural> {
    contramap_with(projection, Structural)
}

/// Compares records by the focus of `projection`, using `inner` on the foci.
pub fn contramap_with<C>(projection: impl Into<Projection>, inner: C) -> Projected<C> {
    Projected {
        projection: projection.into(),
        inner,
    }
}

impl<C> Projected<C> {
    /// Returns the projection used on both sides.
    pub const fn projection(&self) -> &Projection {
        &self.projection
    }
}

fn both_complete<'a>(
    traversal: &Traversal<Value, Value>,
    left: &'a Value,
    right: &'a Value,
) -> Result<Option<(Vec<&'a Value>, Vec<&'a Value>)>, OpticError> {
    let left_foci = traversal.to_list_maybe(left)?;
    let right_foci = traversal.to_list_maybe(right)?;
    Ok(left_foci.zip(right_foci))
}

impl<C: Equality<Value>> Equality<Value> for Projected<C> {
    fn equal(&self, left: &Value, right: &Value) -> Result<bool, OpticError> {
        if let Projection::Traversal(traversal) = &self.projection {
            let Some((left_foci, right_foci)) = both_complete(traversal, left, right)? else {
                return Ok(false);
            };
            for (left_focus, right_focus) in left_foci.into_iter().zip(right_foci) {
                if !self.inner.equal(left_focus, right_focus)? {
                    return Ok(false);
                }
            }
            return Ok(true);
        }

        match (
            self.projection.resolve(left)?,
            self.projection.resolve(right)?,
        ) {
            (None, None) => Ok(true),
            (Some(left_focus), Some(right_focus)) => self.inner.equal(&left_focus, &right_focus),
            _ => Ok(false),
        }
    }
}

impl<C: Comparison<Value>> Comparison<Value> for Projected<C> {
    fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>, OpticError> {
        if let Projection::Traversal(traversal) = &self.projection {
            let Some((left_foci, right_foci)) = both_complete(traversal, left, right)? else {
                return Ok(None);
            };
            for (left_focus, right_focus) in left_foci.into_iter().zip(right_foci) {
                match self.inner.compare(left_focus, right_focus)? {
                    Some(Ordering::Equal) => {}
                    other => return Ok(other),
                }
            }
            return Ok(Some(Ordering::Equal));
        }

        match (
            self.projection.resolve(left)?,
            self.projection.resolve(right)?,
        ) {
            (None, None) => Ok(Some(Ordering::Equal)),
            (None, Some(_)) => Ok(Some(Ordering::Less)),
            (Some(_), None) => Ok(Some(Ordering::Greater)),
            (Some(left_focus), Some(right_focus)) => self.inner.compare(&left_focus, &right_focus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{Focus, lens, prism};
    use crate::record;
    use rstest::rstest;

    fn coordinates() -> Projected<Structural> {
        contramap(Traversal::combine([
            Focus::from(prism::key("x")),
            Focus::from(prism::key("y")),
        ]))
    }

    #[rstest]
    fn test_structural_defaults() {
        assert_eq!(Structural.equal(&1, &1), Ok(true));
        assert_eq!(Structural.compare(&1, &2), Ok(Some(Ordering::Less)));
        assert_eq!(Structural.compare(&f64::NAN, &1.0), Ok(None));
        assert_eq!(Structural.le(&f64::NAN, &1.0), Ok(false));
    }

    #[rstest]
    fn test_absent_sides_are_equal_for_prisms() {
        assert_eq!(contramap("score").compare(&record! {}, &record! {}), Ok(Some(Ordering::Equal)));
        assert_eq!(
            contramap("score").compare(&record! { "score" => 1 }, &record! {}),
            Ok(Some(Ordering::Greater))
        );
    }

    #[rstest]
    #[case(record! { "x" => 1 }, record! { "x" => 1 })]
    #[case(record! {}, record! {})]
    #[case(record! { "x" => 1, "y" => 2 }, record! { "x" => 1 })]
    fn test_traversal_requires_every_focus(#[case] left: Value, #[case] right: Value) {
        assert_eq!(coordinates().equal(&left, &right), Ok(false));
        assert_eq!(coordinates().compare(&left, &right), Ok(None));
    }

    #[rstest]
    fn test_traversal_orders_lexicographically() {
        let left = record! { "x" => 1, "y" => 9 };
        let right = record! { "x" => 2, "y" => 0 };
        assert_eq!(coordinates().lt(&left, &right), Ok(true));
        assert_eq!(coordinates().equal(&left, &left), Ok(true));
    }

    #[rstest]
    fn test_reversed_then() {
        let by_age_desc_then_name = contramap("age").reversed().then(contramap("name"));
        let older = record! { "age" => 40, "name" => "b" };
        let younger = record! { "age" => 30, "name" => "a" };
        let twin = record! { "age" => 40, "name" => "c" };
        assert_eq!(by_age_desc_then_name.lt(&older, &younger), Ok(true));
        assert_eq!(by_age_desc_then_name.lt(&older, &twin), Ok(true));
    }

    #[rstest]
    fn test_lens_failure_propagates() {
        let strict = contramap(lens::key("id"));
        assert!(strict.equal(&record! {}, &record! { "id" => 1 }).is_err());
    }
}
