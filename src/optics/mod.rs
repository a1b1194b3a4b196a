//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors for reading and updating parts of an
//! immutable structure without hand-written pattern matching.
//!
//! # Available Optics
//!
//! - [`Lens`]: a total accessor. Its focus always exists; a missing field is
//!   an [`OpticError`].
//! - [`Prism`]: a partial accessor. Its focus may be absent, reported as
//!   `Ok(None)`.
//! - [`Traversal`]: a fixed list of lens and prism foci over one source.
//! - [`Defaulted`]: a prism paired with a fallback, never absent.
//!
//! Typed structs and enums get optics from the [`lens!`](crate::lens) and
//! [`prism!`](crate::prism) macros. Dynamic [`Value`](crate::value::Value)
//! records get them from [`lens::key`], [`lens::path`], [`prism::key`] and
//! [`prism::path`].
//!
//! # Composition
//!
//! Composition is associative and follows the weakest link:
//!
//! ```text
//! Lens  ∘ Lens  = Lens
//! Lens  ∘ Prism = Prism
//! Prism ∘ Lens  = Prism
//! Prism ∘ Prism = Prism
//! ```
//!
//! # Example with Lens
//!
//! ```
//! use optival::optics::Lens;
//! use optival::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person).map(String::as_str), Ok("Main St"));
//!
//! let updated = person_street.set(person, "Oak Ave".to_string()).unwrap();
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with key optics
//!
//! ```
//! use optival::optics::{lens, prism, Lens, Prism};
//! use optival::record;
//! use optival::value::Value;
//!
//! let order = record! { "customer" => record! { "name" => "Bo", "phone" => Value::Null } };
//!
//! let phone = lens::key("customer").compose_prism(prism::key("phone"));
//! assert_eq!(phone.preview(&order), Ok(None));
//!
//! let name = lens::key("customer").compose(lens::key("name"));
//! assert_eq!(name.get(&order), Ok(&Value::from("Bo")));
//! ```

mod composed;
mod defaulted;
mod error;
mod key;
pub mod lens;
pub mod prism;
mod traversal;

pub use composed::{LensThenPrism, PrismThenLens};
pub use defaulted::Defaulted;
pub use error::OpticError;
pub use key::{KeyLens, KeyPrism};
pub use lens::{ComposedLens, DynLens, FunctionLens, Lens};
pub use prism::{ComposedPrism, DynPrism, FunctionPrism, Prism, Review};
pub use traversal::{Focus, Traversal};
