//! Traversals over a fixed list of foci.
//!
//! A [`Traversal`] combines several lenses and prisms over the same source
//! into one multi-valued accessor. The foci are known when the traversal is
//! built; a traversal does not iterate over collections.
//!
//! A traversal is *fully present* only when every focus is present. An empty
//! traversal is never fully present.
//!
//! # Laws
//!
//! 1. **Modify Identity Law**: Applying the identity function yields the original.
//!    ```text
//!    traversal.modify_all(source, |x| x)? == source
//!    ```
//!
//! 2. **Modify Composition Law**: Consecutive `modify_all` calls equal a single
//!    composed call, provided the foci are distinct.
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f)?, g)?
//!        == traversal.modify_all(source, |x| g(f(x)))?
//!    ```
//!
//! # Examples
//!
//! ```
//! use optival::optics::{lens, prism, Focus, Traversal};
//! use optival::record;
//! use optival::value::Value;
//!
//! let span = Traversal::combine([
//!     Focus::from(lens::key("start")),
//!     Focus::from(prism::key("end")),
//! ]);
//!
//! let open = record! { "start" => 1, "end" => Value::Null };
//! assert_eq!(span.focus_all(&open).unwrap(), vec![Some(&Value::from(1)), None]);
//! assert_eq!(span.to_list_maybe(&open), Ok(None));
//!
//! let closed = record! { "start" => 1, "end" => 4 };
//! assert_eq!(
//!     span.to_list_maybe(&closed),
//!     Ok(Some(vec![&Value::from(1), &Value::from(4)]))
//! );
//! ```

use std::fmt;

use super::OpticError;
use super::key::{KeyLens, KeyPrism};
use super::lens::{DynLens, Lens};
use super::prism::{DynPrism, Prism};
use crate::value::Value;

/// One focus of a [`Traversal`]: a shared lens or prism.
pub enum Focus<S, A> {
    /// A focus that must exist.
    Lens(DynLens<S, A>),
    /// A focus that may be absent.
    Prism(DynPrism<S, A>),
}

impl<S, A> Focus<S, A> {
    /// Wraps a lens.
    pub fn lens<L>(lens: L) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
    {
        Self::Lens(lens.into_dyn())
    }

    /// Wraps a prism.
    pub fn prism<P>(prism: P) -> Self
    where
        P: Prism<S, A> + Send + Sync + 'static,
    {
        Self::Prism(prism.into_dyn())
    }

    /// Reads this focus. A lens focus is always present or an error.
    ///
    /// # Errors
    ///
    /// Propagates the structural errors of the wrapped optic.
    pub fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a A>, OpticError> {
        match self {
            Self::Lens(lens) => lens.get(source).map(Some),
            Self::Prism(prism) => prism.preview(source),
        }
    }

    /// Writes this focus. A prism focus is written only when reachable.
    ///
    /// # Errors
    ///
    /// Propagates the structural errors of the wrapped optic.
    pub fn set(&self, source: S, value: A) -> Result<S, OpticError> {
        match self {
            Self::Lens(lens) => lens.set(source, value),
            Self::Prism(prism) => prism.set(source, value),
        }
    }

    /// Returns `"lens"` or `"prism"`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lens(_) => "lens",
            Self::Prism(_) => "prism",
        }
    }
}

impl<S, A> Clone for Focus<S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Lens(lens) => Self::Lens(lens.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
        }
    }
}

impl<S, A> fmt::Debug for Focus<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Focus").field(&self.kind()).finish()
    }
}

impl From<KeyLens> for Focus<Value, Value> {
    fn from(lens: KeyLens) -> Self {
        Self::lens(lens)
    }
}

impl From<KeyPrism> for Focus<Value, Value> {
    fn from(prism: KeyPrism) -> Self {
        Self::prism(prism)
    }
}

/// A fixed, ordered sequence of foci over the same source.
pub struct Traversal<S, A> {
    foci: Vec<Focus<S, A>>,
}

impl<S, A> Traversal<S, A> {
    /// Builds a traversal from its foci, in order.
    pub fn combine<I>(foci: I) -> Self
    where
        I: IntoIterator<Item = Focus<S, A>>,
    {
        Self {
            foci: foci.into_iter().collect(),
        }
    }

    /// Returns the foci in declaration order.
    pub fn foci(&self) -> &[Focus<S, A>] {
        &self.foci
    }

    /// Returns the number of foci.
    pub fn len(&self) -> usize {
        self.foci.len()
    }

    /// Returns `true` if the traversal has no foci.
    pub fn is_empty(&self) -> bool {
        self.foci.is_empty()
    }

    /// Reads every focus, keeping absence per focus.
    ///
    /// # Errors
    ///
    /// Returns the first structural error, in focus order.
    pub fn focus_all<'a>(&self, source: &'a S) -> Result<Vec<Option<&'a A>>, OpticError> {
        self.foci.iter().map(|focus| focus.preview(source)).collect()
    }

    /// Reads the present foci, skipping absent ones.
    ///
    /// # Errors
    ///
    /// Returns the first structural error, in focus order.
    pub fn to_list<'a>(&self, source: &'a S) -> Result<Vec<&'a A>, OpticError> {
        Ok(self.focus_all(source)?.into_iter().flatten().collect())
    }

    /// Reads every focus, or nothing.
    ///
    /// Returns `None` when any focus is absent, or when the traversal is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns the first structural error, in focus order.
    pub fn to_list_maybe<'a>(&self, source: &'a S) -> Result<Option<Vec<&'a A>>, OpticError> {
        if self.foci.is_empty() {
            return Ok(None);
        }
        Ok(self.focus_all(source)?.into_iter().collect())
    }

    /// Reads the first present focus.
    ///
    /// # Errors
    ///
    /// Returns a structural error met before the first present focus.
    pub fn preview<'a>(&self, source: &'a S) -> Result<Option<&'a A>, OpticError> {
        for focus in &self.foci {
            if let Some(value) = focus.preview(source)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Returns `true` if any focus is present.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Traversal::preview`].
    pub fn has(&self, source: &S) -> Result<bool, OpticError> {
        self.preview(source).map(|focus| focus.is_some())
    }

    /// Applies `function` to every present focus, in order.
    ///
    /// # Errors
    ///
    /// Returns the first structural error, in focus order.
    pub fn modify_all<F>(&self, source: S, mut function: F) -> Result<S, OpticError>
    where
        F: FnMut(A) -> A,
        A: Clone,
    {
        self.foci.iter().try_fold(source, |current, focus| {
            match focus.preview(&current)?.cloned() {
                Some(value) => focus.set(current, function(value)),
                None => Ok(current),
            }
        })
    }
}

impl<S, A> Clone for Traversal<S, A> {
    fn clone(&self) -> Self {
        Self {
            foci: self.foci.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Traversal<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("foci", &self.foci)
            .finish()
    }
}

impl<S, A> FromIterator<Focus<S, A>> for Traversal<S, A> {
    fn from_iter<I: IntoIterator<Item = Focus<S, A>>>(iter: I) -> Self {
        Self::combine(iter)
    }
}
