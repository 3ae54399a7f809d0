use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::marker::PhantomData;

use tracing::{error, trace};

use crate::erased::ErasedValue;
use crate::error::DictionaryError;
use crate::key::{Key, RawKey, ScopedKey};

/// One initializer pair for bulk construction: a raw name and an erased value.
///
/// Build it from a typed key with [`Entry::new`] (or [`Key::entry`]) so the
/// value type is checked by the compiler, or from a scoped key and an already
/// erased payload with [`Entry::erased`].
pub struct Entry<S> {
    key: RawKey,
    value: ErasedValue,
    _scope: PhantomData<fn() -> S>,
}

impl<S> Entry<S> {
    /// Pairs a typed key with a value of its declared type.
    pub fn new<V: Send + Sync + 'static>(key: &Key<S, V>, value: V) -> Self {
        Self {
            key: key.erase(),
            value: ErasedValue::new(value),
            _scope: PhantomData,
        }
    }

    /// Pairs a scoped key with an erased payload of any type.
    pub fn erased(key: ScopedKey<S>, value: ErasedValue) -> Self {
        Self {
            key: key.into(),
            value,
            _scope: PhantomData,
        }
    }

    /// The raw name this entry will be stored under.
    pub fn raw_value(&self) -> &str {
        self.key.raw_value()
    }
}

impl<S> fmt::Debug for Entry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key.raw_value())
            .field("value", &self.value)
            .finish()
    }
}

/// A heterogeneous dictionary bound to the scope `S`.
///
/// Values of any `'static + Send + Sync` type are stored under the raw name of
/// a [`Key<S, V>`]. The scope keeps keys from other namespaces out, and the
/// key's value type is used to recover the payload on read.
///
/// A read through a key whose value type does not match what is stored under
/// that name behaves exactly as if nothing were stored: it returns `None`.
///
/// # Examples
///
/// ```
/// use sovran_typedict::{Key, TypedDictionary};
///
/// struct Profile;
///
/// const NAME: Key<Profile, String> = Key::new("name");
/// const AGE: Key<Profile, u32> = Key::new("age");
///
/// let mut profile = TypedDictionary::<Profile>::new();
/// profile.set(&NAME, "Ann".to_string());
///
/// assert_eq!(profile.get(&NAME).map(String::as_str), Some("Ann"));
/// assert_eq!(profile.get(&AGE), None);
///
/// profile.set(&AGE, 30);
/// profile.set(&NAME, None);
///
/// assert_eq!(profile.get(&NAME), None);
/// assert_eq!(profile.get(&AGE), Some(&30));
/// ```
///
/// Keys from another scope are rejected at compile time:
///
/// ```compile_fail
/// use sovran_typedict::{Key, TypedDictionary};
///
/// struct Profile;
/// struct Settings;
///
/// const THEME: Key<Settings, String> = Key::new("theme");
///
/// let profile = TypedDictionary::<Profile>::new();
/// profile.get(&THEME);
/// ```
///
/// The dictionary is not synchronized. Move it between threads freely, but
/// wrap it in a `Mutex` (or similar) before mutating it from several threads.
pub struct TypedDictionary<S> {
    store: HashMap<RawKey, ErasedValue>,
    _scope: PhantomData<fn() -> S>,
}

impl<S> TypedDictionary<S> {
    /// Creates a new, empty dictionary
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            _scope: PhantomData,
        }
    }

    /// Creates an empty dictionary with room for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: HashMap::with_capacity(capacity),
            _scope: PhantomData,
        }
    }

    /// Builds a dictionary from initializer entries whose raw names are all
    /// distinct.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::DuplicateKey` naming the first raw name that
    /// appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_typedict::{DictionaryError, Key, TypedDictionary};
    ///
    /// struct Profile;
    ///
    /// const NAME: Key<Profile, &'static str> = Key::new("name");
    /// const NICKNAME: Key<Profile, &'static str> = Key::new("name");
    ///
    /// let result = TypedDictionary::try_from_entries([
    ///     NAME.entry("Ann"),
    ///     NICKNAME.entry("Annie"),
    /// ]);
    /// assert_eq!(result.err(), Some(DictionaryError::DuplicateKey("name".to_string())));
    /// ```
    pub fn try_from_entries<I>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = Entry<S>>,
    {
        let entries = entries.into_iter();
        let mut dictionary = Self::with_capacity(entries.size_hint().0);
        for entry in entries {
            match dictionary.store.entry(entry.key) {
                hash_map::Entry::Occupied(occupied) => {
                    return Err(DictionaryError::DuplicateKey(
                        occupied.key().raw_value().to_string(),
                    ));
                }
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(entry.value);
                }
            }
        }
        Ok(dictionary)
    }

    /// Builds a dictionary from initializer entries whose raw names are all
    /// distinct.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a raw name. Duplicate initializer names are
    /// a programming error; use [`try_from_entries`](Self::try_from_entries)
    /// when the entries are not known statically.
    #[track_caller]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<S>>,
    {
        match Self::try_from_entries(entries) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                error!(error = %err, "refusing to build dictionary");
                panic!("{}", err)
            }
        }
    }

    /// Returns a reference to the value stored under `key`, if it is a `V`
    pub fn get<V: 'static>(&self, key: &Key<S, V>) -> Option<&V> {
        self.store
            .get(key.raw_value())
            .and_then(ErasedValue::downcast_ref::<V>)
    }

    /// Returns a mutable reference to the value stored under `key`, if it is a `V`
    pub fn get_mut<V: 'static>(&mut self, key: &Key<S, V>) -> Option<&mut V> {
        self.store
            .get_mut(key.raw_value())
            .and_then(ErasedValue::downcast_mut::<V>)
    }

    /// Returns a clone of the value stored under `key`, if it is a `V`
    pub fn get_cloned<V: Clone + 'static>(&self, key: &Key<S, V>) -> Option<V> {
        self.get(key).cloned()
    }

    /// Stores `value` under `key`, or clears the slot when given `None`.
    ///
    /// Whatever was stored under the same raw name before is dropped,
    /// regardless of its type.
    ///
    /// ```
    /// use sovran_typedict::{Key, TypedDictionary};
    ///
    /// struct Session;
    /// const USER_ID: Key<Session, u64> = Key::new("user_id");
    ///
    /// let mut session = TypedDictionary::<Session>::new();
    /// session.set(&USER_ID, 7);
    /// session.set(&USER_ID, None);
    /// assert!(session.is_empty());
    /// ```
    pub fn set<V>(&mut self, key: &Key<S, V>, value: impl Into<Option<V>>)
    where
        V: Send + Sync + 'static,
    {
        match value.into() {
            Some(value) => {
                trace!(key = key.raw_value(), "set");
                self.store.insert(key.erase(), ErasedValue::new(value));
            }
            None => {
                trace!(key = key.raw_value(), "clear");
                self.store.remove(key.raw_value());
            }
        }
    }

    /// Stores `value` under `key`, returning the previous value if it was a `V`
    pub fn insert<V>(&mut self, key: &Key<S, V>, value: V) -> Option<V>
    where
        V: Send + Sync + 'static,
    {
        trace!(key = key.raw_value(), "insert");
        self.store
            .insert(key.erase(), ErasedValue::new(value))
            .and_then(|previous| previous.downcast::<V>().ok())
    }

    /// Removes the entry stored under `key`'s raw name.
    ///
    /// The entry goes away whatever its type; the value is only handed back
    /// when it was a `V`.
    pub fn remove<V: 'static>(&mut self, key: &Key<S, V>) -> Option<V> {
        trace!(key = key.raw_value(), "remove");
        self.store
            .remove(key.raw_value())
            .and_then(|previous| previous.downcast::<V>().ok())
    }

    /// Returns true if anything is stored under the key's raw name
    pub fn contains(&self, key: &ScopedKey<S>) -> bool {
        self.store.contains_key(key.raw_value())
    }

    /// Returns true if a `V` is stored under `key`
    pub fn contains_key<V: 'static>(&self, key: &Key<S, V>) -> bool {
        self.store
            .get(key.raw_value())
            .is_some_and(ErasedValue::is::<V>)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the dictionary holds no entries
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates over the raw names of all entries, in arbitrary order
    pub fn raw_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.store.keys().map(RawKey::raw_value)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

impl<S> Default for TypedDictionary<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for TypedDictionary<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.store
                    .iter()
                    .map(|(key, value)| (key.raw_value(), value.type_name())),
            )
            .finish()
    }
}

/// Collects initializer entries.
///
/// # Panics
///
/// Panics on duplicate raw names, like [`TypedDictionary::from_entries`].
impl<S> FromIterator<Entry<S>> for TypedDictionary<S> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = Entry<S>>>(entries: I) -> Self {
        Self::from_entries(entries)
    }
}

impl<S, const N: usize> From<[Entry<S>; N]> for TypedDictionary<S> {
    #[track_caller]
    fn from(entries: [Entry<S>; N]) -> Self {
        Self::from_entries(entries)
    }
}

/// Writes each entry like [`TypedDictionary::set`] does: later names win.
impl<S> Extend<Entry<S>> for TypedDictionary<S> {
    fn extend<I: IntoIterator<Item = Entry<S>>>(&mut self, entries: I) {
        for entry in entries {
            trace!(key = entry.key.raw_value(), "set");
            self.store.insert(entry.key, entry.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Profile;

    const NAME: Key<Profile, String> = Key::new("name");
    const AGE: Key<Profile, i64> = Key::new("age");
    const TAGS: Key<Profile, Vec<String>> = Key::new("tags");

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut profile = TypedDictionary::<Profile>::new();
        profile.set(&TAGS, vec!["admin".to_string()]);

        profile
            .get_mut(&TAGS)
            .expect("tags were just set")
            .push("owner".to_string());

        assert_eq!(
            profile.get_cloned(&TAGS),
            Some(vec!["admin".to_string(), "owner".to_string()])
        );
    }

    #[test]
    fn test_insert_returns_previous_of_same_type() {
        let mut profile = TypedDictionary::<Profile>::new();

        assert_eq!(profile.insert(&AGE, 30), None);
        assert_eq!(profile.insert(&AGE, 31), Some(30));

        // Previous entry under "age" was an i64, not a String.
        let age_as_text: Key<Profile, String> = Key::new("age");
        assert_eq!(profile.insert(&age_as_text, "thirty-one".to_string()), None);
        assert_eq!(profile.get(&AGE), None);
    }

    #[test]
    fn test_remove_drops_entry_of_any_type() {
        let mut profile = TypedDictionary::<Profile>::new();
        profile.set(&NAME, "Ann".to_string());

        let name_as_number: Key<Profile, i64> = Key::new("name");
        assert_eq!(profile.remove(&name_as_number), None);
        assert!(!profile.contains(&NAME.scoped()));
        assert!(profile.is_empty());
    }

    #[test]
    fn test_contains_checks_type() {
        let mut profile = TypedDictionary::<Profile>::new();
        profile.set(&AGE, 42);

        let age_as_text: Key<Profile, String> = Key::new("age");
        assert!(profile.contains(&AGE.scoped()));
        assert!(profile.contains_key(&AGE));
        assert!(!profile.contains_key(&age_as_text));
    }

    #[test]
    fn test_extend_overwrites() {
        let mut profile =
            TypedDictionary::<Profile>::from_entries([NAME.entry("Ann".to_string())]);
        profile.extend([NAME.entry("Bea".to_string()), AGE.entry(20)]);

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get(&NAME).map(String::as_str), Some("Bea"));
    }

    #[test]
    fn test_erased_entries() {
        let profile = TypedDictionary::<Profile>::from_entries([Entry::erased(
            ScopedKey::new("age"),
            ErasedValue::new(55i64),
        )]);
        assert_eq!(profile.get(&AGE), Some(&55));
    }

    #[test]
    fn test_from_array() {
        let entry = NAME.entry("Ann".to_string());
        assert_eq!(entry.raw_value(), "name");

        let profile: TypedDictionary<Profile> = [entry, AGE.entry(3)].into();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get(&AGE), Some(&3));
    }

    #[test]
    fn test_debug_lists_names_and_types() {
        let profile = TypedDictionary::<Profile>::from_entries([AGE.entry(1)]);
        assert_eq!(format!("{:?}", profile), "{\"age\": \"i64\"}");
    }

    #[test]
    #[should_panic(expected = "duplicate key in dictionary initializer: name")]
    fn test_from_iterator_rejects_duplicates() {
        let _: TypedDictionary<Profile> = vec![
            NAME.entry("Ann".to_string()),
            Key::<Profile, i64>::new("name").entry(1),
        ]
        .into_iter()
        .collect();
    }
}
