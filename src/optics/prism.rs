//! Prism optics: partial accessors.
//!
//! A Prism focuses on a part of a structure that may not be there: a record
//! field that is unset, or one variant of an enum. Absence is reported as
//! `Ok(None)`, never as an error. Errors are reserved for malformed input,
//! such as projecting a field off a value that is not a record.
//!
//! Composition short-circuits on the first absent link.
//!
//! # Laws
//!
//! For prisms that can rebuild their source ([`Review`]):
//!
//! 1. **PreviewReview Law**: Reviewing then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.review(value))? == Some(&value)
//!    ```
//!
//! 2. **ReviewPreview Law**: If preview succeeds, reviewing the result yields the original.
//!    ```text
//!    if let Some(value) = prism.preview(&source)? then
//!        prism.review(value.clone()) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use optival::optics::{Prism, Review};
//! use optival::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Ok(Some(&5.0)));
//! assert_eq!(circle_prism.preview(&Shape::Rectangle(3.0, 4.0)), Ok(None));
//! assert_eq!(circle_prism.review(10.0), Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::OpticError;
use super::composed::PrismThenLens;
use super::defaulted::Defaulted;
use super::key::KeyPrism;
use super::lens::Lens;

/// A shared, type-erased prism.
pub type DynPrism<S, A> = Arc<dyn Prism<S, A> + Send + Sync>;

/// A Prism focuses on a part of a structure that may be absent.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
pub trait Prism<S, A> {
    /// Attempts to read the focus.
    ///
    /// Returns `Ok(None)` when the focus is absent.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the source is malformed, for example a
    /// field projected off a non-record value.
    fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a A>, OpticError>;

    /// Writes the focus if the structure around it is populated.
    ///
    /// When the focus cannot be reached (an intermediate link is absent, or
    /// an enum holds another variant) the source is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the source is malformed.
    fn set(&self, source: S, value: A) -> Result<S, OpticError>;

    /// Returns `true` if the focus is present.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Prism::preview`].
    fn is_present(&self, source: &S) -> Result<bool, OpticError> {
        self.preview(source).map(|focus| focus.is_some())
    }

    /// Applies `function` to the focus when it is present; otherwise returns
    /// the source unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Prism::preview`] and [`Prism::set`].
    ///
    /// # Example
    ///
    /// ```
    /// use optival::optics::Prism;
    /// use optival::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle);
    /// assert_eq!(circle.modify(Shape::Circle(1.0), |r| r * 2.0), Ok(Shape::Circle(2.0)));
    /// assert_eq!(circle.modify(Shape::Square(1.0), |r| r * 2.0), Ok(Shape::Square(1.0)));
    /// ```
    fn modify<F>(&self, source: S, function: F) -> Result<S, OpticError>
    where
        Self: Sized,
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.preview(&source)?.cloned() {
            Some(current) => self.set(source, function(current)),
            None => Ok(source),
        }
    }

    /// Composes this prism with another prism.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens. The result is still a prism.
    fn compose_lens<B, L>(self, lens: L) -> PrismThenLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        PrismThenLens::new(self, lens)
    }

    /// Pairs this prism with a fallback used whenever the focus is absent.
    fn with_default(self, default: A) -> Defaulted<Self, A>
    where
        Self: Sized,
    {
        Defaulted::new(self, default)
    }

    /// Erases the concrete type, producing a shareable [`DynPrism`].
    fn into_dyn(self) -> DynPrism<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

/// Optics that can rebuild a whole source from a focus alone.
///
/// A record-field prism reviews into a record holding just that field; an
/// enum-variant prism reviews into that variant.
pub trait Review<S, A> {
    /// Builds a source whose focus is `value`.
    fn review(&self, value: A) -> S;
}

impl<S, A, P> Prism<S, A> for Arc<P>
where
    P: Prism<S, A> + ?Sized,
{
    fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a A>, OpticError> {
        (**self).preview(source)
    }

    fn set(&self, source: S, value: A) -> Result<S, OpticError> {
        (**self).set(source, value)
    }
}

impl<S, A, R> Review<S, A> for Arc<R>
where
    R: Review<S, A> + ?Sized,
{
    fn review(&self, value: A) -> S {
        (**self).review(value)
    }
}

/// A prism over a statically typed enum variant, built from a preview and a
/// review function.
///
/// The `prism!` macro generates a `FunctionPrism`.
///
/// # Example
///
/// ```
/// use optival::optics::{FunctionPrism, Prism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape { Circle(f64), Rectangle(f64, f64) }
///
/// let circle_prism = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Circle(radius) => Some(radius),
///         _ => None,
///     },
///     Shape::Circle,
/// );
///
/// assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Ok(Some(&5.0)));
/// ```
pub struct FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
{
    preview_function: Pr,
    review_function: Re,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Pr, Re> FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from preview and review functions.
    #[must_use]
    pub const fn new(preview_function: Pr, review_function: Re) -> Self {
        Self {
            preview_function,
            review_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re> Prism<S, A> for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
{
    fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a A>, OpticError> {
        Ok((self.preview_function)(source))
    }

    fn set(&self, source: S, value: A) -> Result<S, OpticError> {
        if (self.preview_function)(&source).is_some() {
            Ok((self.review_function)(value))
        } else {
            Ok(source)
        }
    }
}

impl<S, A, Pr, Re> Review<S, A> for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
{
    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }
}

impl<S, A, Pr, Re> Clone for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<&A> + Clone,
    Re: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.preview_function.clone(), self.review_function.clone())
    }
}

impl<S, A, Pr, Re> std::fmt::Debug for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// Two prisms composed into one.
///
/// The focus is present only when both links are present.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
    A: Clone + 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a B>, OpticError> {
        match self.first.preview(source)? {
            Some(intermediate) => self.second.preview(intermediate),
            None => Ok(None),
        }
    }

    fn set(&self, source: S, value: B) -> Result<S, OpticError> {
        match self.first.preview(&source)?.cloned() {
            Some(intermediate) => {
                let updated = self.second.set(intermediate, value)?;
                self.first.set(source, updated)
            }
            None => Ok(source),
        }
    }
}

impl<S, A, B, P1, P2> Review<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Review<S, A>,
    P2: Review<A, B>,
{
    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a prism over a single, possibly unset, record field of a
/// [`Value`](crate::value::Value).
///
/// A missing key and a key holding `Null` are both absent.
pub fn key(name: impl Into<String>) -> KeyPrism {
    KeyPrism::key(name)
}

/// Creates a prism over a nested record field. Any absent link makes the
/// whole focus absent.
///
/// # Example
///
/// ```
/// use optival::optics::{prism, Prism};
/// use optival::record;
/// use optival::value::Value;
///
/// let city = prism::path(["address", "city"]);
/// let user = record! { "address" => record! { "city" => "Tokyo" } };
/// assert_eq!(city.preview(&user), Ok(Some(&Value::from("Tokyo"))));
/// assert_eq!(city.preview(&record! { "address" => Value::Null }), Ok(None));
/// ```
pub fn path<K, I>(keys: I) -> KeyPrism
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    KeyPrism::path(keys)
}

/// Creates a prism for an enum variant holding a single value.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use optival::optics::{Prism, Review};
/// use optival::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Payment { Card(String), Cash(u32) }
///
/// let cash = prism!(Payment, Cash);
/// assert_eq!(cash.preview(&Payment::Cash(20)), Ok(Some(&20)));
/// assert_eq!(cash.preview(&Payment::Card("visa".into())), Ok(None));
/// assert_eq!(cash.review(5), Payment::Cash(5));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                $enum_type::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match *source {
                $enum_type::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
}
