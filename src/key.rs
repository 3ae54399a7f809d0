use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::dictionary::Entry;

/// The unscoped identity of a property: nothing but its raw name.
///
/// Equality, ordering and hashing delegate to the name, so a `RawKey` hashes
/// exactly like the `str` it wraps and can be looked up by `&str`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawKey {
    raw: Cow<'static, str>,
}

impl RawKey {
    /// Creates a key from a static name. Usable in `const` position.
    pub const fn new(raw: &'static str) -> Self {
        Self {
            raw: Cow::Borrowed(raw),
        }
    }

    /// Creates a key from a name built at runtime.
    pub fn from_string(raw: String) -> Self {
        Self {
            raw: Cow::Owned(raw),
        }
    }

    /// Returns the backing name.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }
}

impl Borrow<str> for RawKey {
    fn borrow(&self) -> &str {
        &self.raw
    }
}

impl fmt::Debug for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawKey").field(&self.raw_value()).finish()
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A raw name bound to the namespace `S`.
///
/// `S` only exists at compile time; a `ScopedKey` is the same size as a
/// [`RawKey`].
pub struct ScopedKey<S> {
    raw: Cow<'static, str>,
    _scope: PhantomData<fn() -> S>,
}

impl<S> ScopedKey<S> {
    const fn from_cow(raw: Cow<'static, str>) -> Self {
        Self {
            raw,
            _scope: PhantomData,
        }
    }

    /// Creates a scoped key from a static name. Usable in `const` position.
    pub const fn new(raw: &'static str) -> Self {
        Self::from_cow(Cow::Borrowed(raw))
    }

    /// Creates a scoped key from a name built at runtime.
    pub fn from_string(raw: String) -> Self {
        Self::from_cow(Cow::Owned(raw))
    }

    /// Returns the backing name.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// Drops the scope, keeping only the name.
    pub fn erase(&self) -> RawKey {
        RawKey {
            raw: self.raw.clone(),
        }
    }

    /// Attaches a value type to this name.
    ///
    /// Nothing ties the chosen `V` to values already stored under the same
    /// name; reads through a mismatched key come back empty.
    pub fn typed<V>(&self) -> Key<S, V> {
        Key::from_cow(self.raw.clone())
    }
}

/// A raw name bound to the namespace `S` and to the value type `V`.
///
/// This is the key a [`TypedDictionary`](crate::TypedDictionary) is indexed
/// with. Keys are usually declared once as constants:
///
/// ```
/// use sovran_typedict::Key;
///
/// struct Profile;
///
/// const NAME: Key<Profile, String> = Key::new("name");
/// const AGE: Key<Profile, u32> = Key::new("age");
///
/// assert_eq!(NAME.raw_value(), "name");
/// assert_eq!(AGE.to_string(), "age");
/// ```
///
/// Two keys with the same name are equal even when their value types differ
/// (see [`Key::erase`]); pick names so that does not happen inside one scope.
pub struct Key<S, V> {
    raw: Cow<'static, str>,
    _marker: PhantomData<fn() -> (S, V)>,
}

impl<S, V> Key<S, V> {
    const fn from_cow(raw: Cow<'static, str>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Creates a typed key from a static name. Usable in `const` position.
    pub const fn new(raw: &'static str) -> Self {
        Self::from_cow(Cow::Borrowed(raw))
    }

    /// Creates a typed key from a name built at runtime.
    pub fn from_string(raw: String) -> Self {
        Self::from_cow(Cow::Owned(raw))
    }

    /// Returns the backing name.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// Forgets the value type.
    pub fn scoped(&self) -> ScopedKey<S> {
        ScopedKey::from_cow(self.raw.clone())
    }

    /// Forgets both the value type and the scope.
    pub fn erase(&self) -> RawKey {
        RawKey {
            raw: self.raw.clone(),
        }
    }

    /// Pairs this key with a value for bulk construction.
    pub fn entry(&self, value: V) -> Entry<S>
    where
        V: Send + Sync + 'static,
    {
        Entry::new(self, value)
    }
}

// Hand-written impls: deriving would demand `S: Clone`, `V: Eq` and so on,
// while only the name takes part.
macro_rules! impl_name_identity {
    ($ty:ident < $($param:ident),+ >) => {
        impl<$($param),+> Clone for $ty<$($param),+> {
            fn clone(&self) -> Self {
                Self::from_cow(self.raw.clone())
            }
        }

        impl<$($param),+> PartialEq for $ty<$($param),+> {
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl<$($param),+> Eq for $ty<$($param),+> {}

        impl<$($param),+> PartialOrd for $ty<$($param),+> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<$($param),+> Ord for $ty<$($param),+> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.raw.cmp(&other.raw)
            }
        }

        impl<$($param),+> Hash for $ty<$($param),+> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.raw.hash(state);
            }
        }

        impl<$($param),+> fmt::Debug for $ty<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.raw_value()).finish()
            }
        }

        impl<$($param),+> fmt::Display for $ty<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.raw)
            }
        }
    };
}

impl_name_identity!(ScopedKey<S>);
impl_name_identity!(Key<S, V>);

impl<S, V> From<Key<S, V>> for ScopedKey<S> {
    fn from(key: Key<S, V>) -> Self {
        ScopedKey::from_cow(key.raw)
    }
}

impl<S, V> From<Key<S, V>> for RawKey {
    fn from(key: Key<S, V>) -> Self {
        RawKey { raw: key.raw }
    }
}

impl<S> From<ScopedKey<S>> for RawKey {
    fn from(key: ScopedKey<S>) -> Self {
        RawKey { raw: key.raw }
    }
}
