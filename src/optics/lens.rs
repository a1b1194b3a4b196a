//! Lens optics: total accessors.
//!
//! A Lens asserts that its focus always exists. Reading through a lens that
//! meets a missing field is a programming mistake, reported as an
//! [`OpticError`] rather than as absence.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws (for sources where `get` succeeds):
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source)?.clone())? == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)?)? == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1)?, v2)? == lens.set(source, v2)?
//!    ```
//!
//! # Examples
//!
//! ```
//! use optival::optics::Lens;
//! use optival::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), Ok(&10));
//!
//! let updated = x_lens.set(point, 100).unwrap();
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::OpticError;
use super::composed::LensThenPrism;
use super::key::KeyLens;
use super::prism::Prism;

/// A shared, type-erased lens.
pub type DynLens<S, A> = Arc<dyn Lens<S, A> + Send + Sync>;

/// A Lens focuses on exactly one part of a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part)
pub trait Lens<S, A> {
    /// Gets a reference to the focus.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the structure does not contain the
    /// focus the lens asserts exists.
    fn get<'a>(&self, source: &'a S) -> Result<&'a A, OpticError>;

    /// Replaces the focus, returning the new structure.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the path to the focus is not a structure.
    fn set(&self, source: S, value: A) -> Result<S, OpticError>;

    /// Replaces the focus with `function` applied to the current focus.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Lens::get`] and [`Lens::set`].
    ///
    /// # Example
    ///
    /// ```
    /// use optival::optics::Lens;
    /// use optival::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2).unwrap();
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> Result<S, OpticError>
    where
        Self: Sized,
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source)?.clone();
        self.set(source, function(current))
    }

    /// Composes this lens with another lens. The result is a lens.
    ///
    /// # Example
    ///
    /// ```
    /// use optival::optics::Lens;
    /// use optival::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { address: Address }
    ///
    /// let person_city = lens!(Person, address).compose(lens!(Address, city));
    ///
    /// let person = Person { address: Address { city: "Tokyo".to_string() } };
    /// assert_eq!(person_city.get(&person).map(String::as_str), Ok("Tokyo"));
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism. The result is a prism: the focus
    /// becomes optional.
    fn compose_prism<B, P>(self, prism: P) -> LensThenPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensThenPrism::new(self, prism)
    }

    /// Erases the concrete type, producing a shareable [`DynLens`].
    fn into_dyn(self) -> DynLens<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<S, A, L> Lens<S, A> for Arc<L>
where
    L: Lens<S, A> + ?Sized,
{
    fn get<'a>(&self, source: &'a S) -> Result<&'a A, OpticError> {
        (**self).get(source)
    }

    fn set(&self, source: S, value: A) -> Result<S, OpticError> {
        (**self).set(source, value)
    }
}

/// A lens over a statically typed field, built from a getter and a setter.
///
/// The `lens!` macro generates a `FunctionLens`. Since the field is part of
/// the type, such a lens never fails.
///
/// # Example
///
/// ```
/// use optival::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x_lens.get(&Point { x: 10, y: 20 }), Ok(&10));
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> Result<&'a A, OpticError> {
        Ok((self.getter)(source))
    }

    fn set(&self, source: S, value: A) -> Result<S, OpticError> {
        Ok((self.setter)(source, value))
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses composed into one.
///
/// A failure of either lens propagates: the composition is total only when
/// both links are.
///
/// # Type Parameters
///
/// - `L1`: The outer lens
/// - `L2`: The inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> Result<&'a B, OpticError> {
        let intermediate = self.first.get(source)?;
        self.second.get(intermediate)
    }

    fn set(&self, source: S, value: B) -> Result<S, OpticError> {
        let intermediate = self.first.get(&source)?.clone();
        let updated = self.second.set(intermediate, value)?;
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens over a single record field of a [`Value`](crate::value::Value).
///
/// # Example
///
/// ```
/// use optival::optics::{lens, Lens};
/// use optival::record;
/// use optival::value::Value;
///
/// let name = lens::key("name");
/// assert_eq!(name.get(&record! { "name" => "Ada" }), Ok(&Value::from("Ada")));
/// assert!(name.get(&record! {}).is_err());
/// ```
pub fn key(name: impl Into<String>) -> KeyLens {
    KeyLens::key(name)
}

/// Creates a lens over a nested record field, one key per level.
pub fn path<K, I>(keys: I) -> KeyLens
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    KeyLens::path(keys)
}

/// Creates a lens for a struct field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optival::optics::Lens;
/// use optival::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = lens!(Point, y);
/// let updated = y_lens.set(Point { x: 1, y: 2 }, 20).unwrap();
/// assert_eq!(updated, Point { x: 1, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
