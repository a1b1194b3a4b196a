//! Structural errors raised by optics.

use thiserror::Error;

/// A structural failure while focusing into a value.
///
/// Lenses raise [`OpticError::MissingKey`] when the field they assert exists
/// is missing. Both lenses and prisms raise [`OpticError::NotAStructure`] when
/// asked to project a field off something that is not a record. Absence of a
/// prism focus is never an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OpticError {
    /// A lens expected `key` to exist, but the record does not contain it.
    #[error("missing key `{key}` (path `{path}`)")]
    MissingKey {
        /// The missing key.
        key: String,
        /// The full key path up to and including `key`, dot separated.
        path: String,
    },
    /// A field was projected off a value that is not a record.
    #[error("cannot read key `{key}` from a value of kind {found}")]
    NotAStructure {
        /// The key that was requested.
        key: String,
        /// The kind of value that was found instead of a record.
        found: &'static str,
    },
}

impl OpticError {
    pub(crate) fn missing_key(key: &str, path: &[String]) -> Self {
        Self::MissingKey {
            key: key.to_string(),
            path: path.join("."),
        }
    }

    pub(crate) fn not_a_structure(key: &str, found: &'static str) -> Self {
        Self::NotAStructure {
            key: key.to_string(),
            found,
        }
    }
}
