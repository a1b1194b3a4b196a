//! Projections: every way of focusing on part of a [`Value`].
//!
//! A [`Projection`] normalizes field names, key paths, lenses, prisms,
//! defaulted prisms, traversals, plain functions and reusable projection
//! objects into one operation, [`Projection::resolve`], which returns the
//! focus tagged with its presence.
//!
//! Bare field names are partial: `Projection::from("email")` behaves like
//! `prism::key("email")`. Totality must be asked for with a lens.
//!
//! # Examples
//!
//! ```
//! use optival::optics::{lens, prism, Prism};
//! use optival::projection::Projection;
//! use optival::record;
//! use optival::value::Value;
//!
//! let user = record! { "name" => "Ada", "age" => Value::Null };
//!
//! assert_eq!(Projection::from("age").resolve(&user), Ok(None));
//! assert_eq!(
//!     Projection::from(prism::key("age").with_default(Value::from(18))).resolve(&user),
//!     Ok(Some(Value::from(18)))
//! );
//! assert!(Projection::from(lens::key("email")).resolve(&user).is_err());
//!
//! let initial = Projection::function(|user: &Value| {
//!     user.get("name")
//!         .and_then(Value::as_str)
//!         .and_then(|name| name.chars().next())
//!         .map(String::from)
//!         .into()
//! });
//! assert_eq!(initial.resolve(&user), Ok(Some(Value::from("A"))));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::optics::{
    Defaulted, DynLens, DynPrism, KeyLens, KeyPrism, Lens, OpticError, Prism, Traversal,
};
use crate::options::Options;
use crate::value::Value;

/// A plain function used as a projection. Its result is always present.
pub type ProjectionFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A reusable projection object.
///
/// The result of [`Project::project`] is used as-is and is always present.
pub trait Project: Send + Sync {
    /// Projects `source`, configured by the options the projection was
    /// declared with.
    fn project(&self, source: &Value, options: &Options) -> Value;
}

impl<F> Project for F
where
    F: Fn(&Value, &Options) -> Value + Send + Sync,
{
    fn project(&self, source: &Value, options: &Options) -> Value {
        self(source, options)
    }
}

/// Every supported projection shape.
#[derive(Clone)]
pub enum Projection {
    /// A total accessor. A missing focus is a structural error.
    Lens(DynLens<Value, Value>),
    /// A partial accessor.
    Prism(DynPrism<Value, Value>),
    /// A partial accessor with a fallback. Never absent.
    Defaulted(Defaulted<DynPrism<Value, Value>, Value>),
    /// A fixed list of foci, present only when every focus is present.
    Traversal(Traversal<Value, Value>),
    /// A plain function. Always present.
    Function(ProjectionFn),
    /// A reusable projection object and its options. Always present.
    Custom(Arc<dyn Project>, Options),
}

impl Projection {
    /// Wraps a lens over [`Value`].
    pub fn lens<L>(lens: L) -> Self
    where
        L: Lens<Value, Value> + Send + Sync + 'static,
    {
        Self::Lens(lens.into_dyn())
    }

    /// Wraps a prism over [`Value`].
    pub fn prism<P>(prism: P) -> Self
    where
        P: Prism<Value, Value> + Send + Sync + 'static,
    {
        Self::Prism(prism.into_dyn())
    }

    /// Pairs a prism with a fallback value.
    pub fn defaulted<P>(prism: P, default: impl Into<Value>) -> Self
    where
        P: Prism<Value, Value> + Send + Sync + 'static,
    {
        Self::Defaulted(Defaulted::new(prism.into_dyn(), default.into()))
    }

    /// Wraps a traversal.
    pub const fn traversal(traversal: Traversal<Value, Value>) -> Self {
        Self::Traversal(traversal)
    }

    /// Wraps a plain function.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::Function(Arc::new(function))
    }

    /// Wraps a reusable projection object.
    pub fn custom<P>(project: P, options: Options) -> Self
    where
        P: Project + 'static,
    {
        Self::Custom(Arc::new(project), options)
    }

    /// A partial projection of a single field.
    pub fn key(name: impl Into<String>) -> Self {
        Self::prism(KeyPrism::key(name))
    }

    /// A partial projection of a nested field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPath`] when `segments` is empty and
    /// [`ConfigError::EmptySegment`] when one of the keys is empty.
    pub fn path<K, I>(segments: I) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<String> = segments.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        if let Some(index) = keys.iter().position(String::is_empty) {
            return Err(ConfigError::EmptySegment { index });
        }
        Ok(Self::prism(KeyPrism::path(keys)))
    }

    /// Names the shape of this projection.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lens(_) => "lens",
            Self::Prism(_) => "prism",
            Self::Defaulted(_) => "defaulted",
            Self::Traversal(_) => "traversal",
            Self::Function(_) => "function",
            Self::Custom(..) => "custom",
        }
    }

    /// Returns `true` if this projection can report absence.
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Prism(_) | Self::Traversal(_))
    }

    /// Resolves the focus of `source`.
    ///
    /// A traversal resolves to a list of its foci, in order, only when every
    /// focus is present.
    ///
    /// # Errors
    ///
    /// Propagates structural errors of lenses, and of prisms applied to
    /// malformed input.
    pub fn resolve(&self, source: &Value) -> Result<Option<Value>, OpticError> {
        match self {
            Self::Lens(lens) => lens.get(source).map(|focus| Some(focus.clone())),
            Self::Prism(prism) => Ok(prism.preview(source)?.cloned()),
            Self::Defaulted(defaulted) => defaulted.resolve(source).map(Some),
            Self::Traversal(traversal) => Ok(traversal
                .to_list_maybe(source)?
                .map(|foci| foci.into_iter().cloned().collect())),
            Self::Function(function) => Ok(Some(function(source))),
            Self::Custom(project, options) => Ok(Some(project.project(source, options))),
        }
    }

    /// Composes this projection with `inner`, following the weakest link.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedComposition`] unless both sides are
    /// lenses or prisms.
    pub fn compose(self, inner: Self) -> Result<Self, ConfigError> {
        match (self, inner) {
            (Self::Lens(outer), Self::Lens(inner)) => Ok(Self::lens(outer.compose(inner))),
            (Self::Lens(outer), Self::Prism(inner)) => {
                Ok(Self::prism(outer.compose_prism(inner)))
            }
            (Self::Prism(outer), Self::Lens(inner)) => Ok(Self::prism(outer.compose_lens(inner))),
            (Self::Prism(outer), Self::Prism(inner)) => Ok(Self::prism(outer.compose(inner))),
            (outer, inner) => Err(ConfigError::UnsupportedComposition {
                outer: outer.kind(),
                inner: inner.kind(),
            }),
        }
    }

    /// Attaches a fallback used when the focus is absent.
    ///
    /// Only a bare prism accepts a default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RedundantDefault`] for a projection that already
    /// carries a default, and a `DefaultOn*` error for every other shape.
    pub fn with_default(self, default: impl Into<Value>) -> Result<Self, ConfigError> {
        match self {
            Self::Prism(prism) => Ok(Self::Defaulted(Defaulted::new(prism, default.into()))),
            Self::Defaulted(_) => Err(ConfigError::RedundantDefault),
            Self::Lens(_) => Err(ConfigError::DefaultOnLens),
            Self::Traversal(_) => Err(ConfigError::DefaultOnTraversal),
            Self::Function(_) => Err(ConfigError::DefaultOnFunction),
            Self::Custom(..) => Err(ConfigError::DefaultOnCustom),
        }
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lens(_) => formatter.write_str("Lens"),
            Self::Prism(_) => formatter.write_str("Prism"),
            Self::Defaulted(defaulted) => formatter
                .debug_tuple("Defaulted")
                .field(defaulted.default_value())
                .finish(),
            Self::Traversal(traversal) => formatter
                .debug_tuple("Traversal")
                .field(&traversal.len())
                .finish(),
            Self::Function(_) => formatter.write_str("Function"),
            Self::Custom(_, options) => formatter.debug_tuple("Custom").field(options).finish(),
        }
    }
}

impl From<&str> for Projection {
    fn from(name: &str) -> Self {
        Self::key(name)
    }
}

impl From<String> for Projection {
    fn from(name: String) -> Self {
        Self::key(name)
    }
}

impl From<KeyLens> for Projection {
    fn from(lens: KeyLens) -> Self {
        Self::lens(lens)
    }
}

impl From<KeyPrism> for Projection {
    fn from(prism: KeyPrism) -> Self {
        Self::prism(prism)
    }
}

impl<P> From<Defaulted<P, Value>> for Projection
where
    P: Prism<Value, Value> + Send + Sync + 'static,
{
    fn from(defaulted: Defaulted<P, Value>) -> Self {
        let (prism, default) = defaulted.into_parts();
        Self::defaulted(prism, default)
    }
}

impl From<Traversal<Value, Value>> for Projection {
    fn from(traversal: Traversal<Value, Value>) -> Self {
        Self::Traversal(traversal)
    }
}
