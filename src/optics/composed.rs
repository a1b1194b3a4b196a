//! Mixed compositions of lenses and prisms.
//!
//! Composition follows the weakest link: as soon as a prism takes part, the
//! composed focus becomes optional and the result is a [`Prism`].
//!
//! ```text
//! Lens  ∘ Lens  = Lens   (ComposedLens)
//! Lens  ∘ Prism = Prism  (LensThenPrism)
//! Prism ∘ Lens  = Prism  (PrismThenLens)
//! Prism ∘ Prism = Prism  (ComposedPrism)
//! ```
//!
//! # Examples
//!
//! ```
//! use optival::optics::{Lens, Prism};
//! use optival::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Contact { Email(String), Phone(String) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { contact: Contact }
//!
//! let email = lens!(User, contact).compose_prism(prism!(Contact, Email));
//!
//! let user = User { contact: Contact::Email("a@b.c".to_string()) };
//! assert_eq!(email.preview(&user).unwrap().map(String::as_str), Some("a@b.c"));
//!
//! let user = User { contact: Contact::Phone("555".to_string()) };
//! assert_eq!(email.preview(&user), Ok(None));
//! ```

use std::marker::PhantomData;

use super::OpticError;
use super::lens::Lens;
use super::prism::{Prism, Review};

/// A lens followed by a prism.
///
/// A structural failure of the lens propagates; absence of the prism focus
/// makes the whole focus absent.
pub struct LensThenPrism<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<L, P, A> LensThenPrism<L, P, A> {
    /// Creates a new lens-then-prism composition.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Prism<S, B> for LensThenPrism<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
    A: Clone + 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a B>, OpticError> {
        self.prism.preview(self.lens.get(source)?)
    }

    fn set(&self, source: S, value: B) -> Result<S, OpticError> {
        let intermediate = self.lens.get(&source)?.clone();
        let updated = self.prism.set(intermediate, value)?;
        self.lens.set(source, updated)
    }
}

impl<S, A, B, L, P> Review<S, B> for LensThenPrism<L, P, A>
where
    L: Review<S, A>,
    P: Review<A, B>,
{
    fn review(&self, value: B) -> S {
        self.lens.review(self.prism.review(value))
    }
}

impl<L: Clone, P: Clone, A> Clone for LensThenPrism<L, P, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.prism.clone())
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensThenPrism<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensThenPrism")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// A prism followed by a lens.
///
/// When the prism focus is absent the whole focus is absent and the lens is
/// never consulted. When it is present, the lens asserts totality below it.
pub struct PrismThenLens<P, L, A> {
    prism: P,
    lens: L,
    _marker: PhantomData<fn() -> A>,
}

impl<P, L, A> PrismThenLens<P, L, A> {
    /// Creates a new prism-then-lens composition.
    #[must_use]
    pub const fn new(prism: P, lens: L) -> Self {
        Self {
            prism,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, L> Prism<S, B> for PrismThenLens<P, L, A>
where
    P: Prism<S, A>,
    L: Lens<A, B>,
    A: Clone + 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a B>, OpticError> {
        match self.prism.preview(source)? {
            Some(intermediate) => self.lens.get(intermediate).map(Some),
            None => Ok(None),
        }
    }

    fn set(&self, source: S, value: B) -> Result<S, OpticError> {
        match self.prism.preview(&source)?.cloned() {
            Some(intermediate) => {
                let updated = self.lens.set(intermediate, value)?;
                self.prism.set(source, updated)
            }
            None => Ok(source),
        }
    }
}

impl<S, A, B, P, L> Review<S, B> for PrismThenLens<P, L, A>
where
    P: Review<S, A>,
    L: Review<A, B>,
{
    fn review(&self, value: B) -> S {
        self.prism.review(self.lens.review(value))
    }
}

impl<P: Clone, L: Clone, A> Clone for PrismThenLens<P, L, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone(), self.lens.clone())
    }
}

impl<P: std::fmt::Debug, L: std::fmt::Debug, A> std::fmt::Debug for PrismThenLens<P, L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismThenLens")
            .field("prism", &self.prism)
            .field("lens", &self.lens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::optics::{Lens, Prism};
    use crate::{lens, prism};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Dimensions {
        width: u32,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Item {
        Boxed(Dimensions),
        Loose,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Parcel {
        item: Item,
    }

    #[rstest]
    fn test_lens_prism_lens_chain() {
        let width = lens!(Parcel, item)
            .compose_prism(prism!(Item, Boxed))
            .compose_lens(lens!(Dimensions, width));

        let boxed = Parcel {
            item: Item::Boxed(Dimensions { width: 3 }),
        };
        let loose = Parcel { item: Item::Loose };

        assert_eq!(width.preview(&boxed), Ok(Some(&3)));
        assert_eq!(width.preview(&loose), Ok(None));

        let widened = width.set(boxed, 9).unwrap();
        assert_eq!(widened.item, Item::Boxed(Dimensions { width: 9 }));
        assert_eq!(width.set(loose.clone(), 9), Ok(loose));
    }
}
