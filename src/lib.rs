//! # sovran-typedict
//!
//! A scoped, type-safe heterogeneous dictionary, plus a handful of small
//! ergonomics helpers.
//!
//! `sovran-typedict` stores values of different types in a single container
//! keyed by name. Each key carries two compile-time tags: the *scope* it
//! belongs to and the *value type* it addresses. Neither tag exists at
//! runtime, so a key is just its name, yet the compiler keeps keys out of
//! dictionaries of other scopes and hands values back with their real type.
//!
//! ## Key Features
//!
//! - **Scoped**: `TypedDictionary<S>` only accepts `Key<S, _>`
//! - **Type-safe reads**: values come back as `Option<&V>` through a checked downcast
//! - **Total**: reading through a key of the wrong value type yields `None`, never a panic
//! - **Zero-cost keys**: keys are `const`-constructible and the size of a name
//! - **Literal construction**: `typed_dict! { KEY => value, ... }`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_typedict::{Key, TypedDictionary};
//!
//! // A scope is any type; an empty marker struct is typical.
//! struct Profile;
//!
//! const NAME: Key<Profile, String> = Key::new("name");
//! const AGE: Key<Profile, i64> = Key::new("age");
//!
//! let mut profile = TypedDictionary::<Profile>::new();
//! profile.set(&NAME, "Ann".to_string());
//!
//! assert_eq!(profile.get(&NAME).map(String::as_str), Some("Ann"));
//! assert_eq!(profile.get(&AGE), None);
//!
//! profile.set(&AGE, 30);
//! assert_eq!(profile.get(&AGE), Some(&30));
//!
//! // Assigning `None` clears the slot.
//! profile.set(&NAME, None);
//! assert_eq!(profile.get(&NAME), None);
//! assert_eq!(profile.get(&AGE), Some(&30));
//! ```
//!
//! ### Declaring Keys on the Scope
//!
//! ```rust
//! use sovran_typedict::{scope_keys, typed_dict, TypedDictionary};
//!
//! struct Request;
//!
//! scope_keys! {
//!     Request {
//!         pub PATH: String = "path";
//!         pub RETRIES: u8 = "retries";
//!     }
//! }
//!
//! let mut request: TypedDictionary<Request> = typed_dict! {
//!     Request::PATH => "/health".to_string(),
//! };
//!
//! if let Some(retries) = request.get_mut(&Request::RETRIES) {
//!     *retries += 1;
//! } else {
//!     request.set(&Request::RETRIES, 1);
//! }
//! assert_eq!(request.get(&Request::RETRIES), Some(&1));
//! ```
//!
//! ### Mismatched Value Types
//!
//! Keys are identified by name alone. Two keys that share a name but
//! declare different value types address the same slot, and a read through
//! the wrong one finds nothing:
//!
//! ```rust
//! use sovran_typedict::{Key, TypedDictionary};
//!
//! struct Profile;
//!
//! const X_AS_INT: Key<Profile, i32> = Key::new("x");
//! const X_AS_TEXT: Key<Profile, String> = Key::new("x");
//!
//! let mut profile = TypedDictionary::<Profile>::new();
//! profile.set(&X_AS_INT, 5);
//!
//! assert_eq!(profile.get(&X_AS_TEXT), None);
//! assert_eq!(profile.get(&X_AS_INT), Some(&5));
//! ```
//!
//! ### Construction Errors
//!
//! Bulk construction requires distinct names. `from_entries` and
//! `typed_dict!` panic on a duplicate; `try_from_entries` reports it:
//!
//! ```rust
//! use sovran_typedict::{DictionaryError, Key, TypedDictionary};
//!
//! struct Profile;
//!
//! const NAME: Key<Profile, String> = Key::new("name");
//!
//! let result = TypedDictionary::try_from_entries([
//!     NAME.entry("Ann".to_string()),
//!     NAME.entry("Bea".to_string()),
//! ]);
//!
//! match result {
//!     Ok(_) => println!("built"),
//!     Err(DictionaryError::DuplicateKey(name)) => println!("{} given twice", name),
//! }
//! ```

mod clamp;
mod dictionary;
mod erased;
mod error;
mod key;
mod macros;
mod pipe;
mod require;

pub use clamp::{Clamp, ClampRange, Predecessor};
pub use dictionary::{Entry, TypedDictionary};
pub use erased::ErasedValue;
pub use error::DictionaryError;
pub use key::{Key, RawKey, ScopedKey};
pub use pipe::{identity, Pipe, PipeOption};
pub use require::{ensure, ensure_none, require, require_or, require_with};
