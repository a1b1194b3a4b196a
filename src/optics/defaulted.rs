//! A prism paired with a fallback value.

use super::OpticError;
use super::prism::Prism;

/// A prism that resolves to `default` whenever its focus is absent.
///
/// A `Defaulted` optic never reports absence. Structural errors of the
/// underlying prism still propagate.
///
/// # Example
///
/// ```
/// use optival::optics::{prism, Prism};
/// use optival::record;
/// use optival::value::Value;
///
/// let retries = prism::key("retries").with_default(Value::from(3));
///
/// assert_eq!(retries.resolve(&record! { "retries" => 5 }), Ok(Value::from(5)));
/// assert_eq!(retries.resolve(&record! {}), Ok(Value::from(3)));
/// ```
#[derive(Clone, Debug)]
pub struct Defaulted<P, A> {
    prism: P,
    default: A,
}

impl<P, A> Defaulted<P, A> {
    /// Pairs `prism` with `default`.
    #[must_use]
    pub const fn new(prism: P, default: A) -> Self {
        Self { prism, default }
    }

    /// Returns the underlying prism.
    pub const fn prism(&self) -> &P {
        &self.prism
    }

    /// Returns the fallback value.
    pub const fn default_value(&self) -> &A {
        &self.default
    }

    /// Splits into the prism and the fallback.
    pub fn into_parts(self) -> (P, A) {
        (self.prism, self.default)
    }

    /// Reads the focus, falling back to the default when it is absent.
    ///
    /// # Errors
    ///
    /// Propagates structural errors of the underlying prism.
    pub fn resolve<S>(&self, source: &S) -> Result<A, OpticError>
    where
        P: Prism<S, A>,
        A: Clone,
    {
        Ok(self
            .prism
            .preview(source)?
            .map_or_else(|| self.default.clone(), Clone::clone))
    }
}
