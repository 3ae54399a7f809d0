/// Builds a [`TypedDictionary`](crate::TypedDictionary) from `key => value`
/// pairs.
///
/// Each key must be a [`Key`](crate::Key) of the same scope, and each value
/// must have that key's value type.
///
/// # Panics
///
/// Panics if two pairs share a raw name.
///
/// # Examples
///
/// ```
/// use sovran_typedict::{typed_dict, Key, TypedDictionary};
///
/// struct Profile;
///
/// const NAME: Key<Profile, String> = Key::new("name");
/// const AGE: Key<Profile, u32> = Key::new("age");
///
/// let profile: TypedDictionary<Profile> = typed_dict! {
///     NAME => "Ann".to_string(),
///     AGE => 30,
/// };
/// assert_eq!(profile.get(&AGE), Some(&30));
///
/// let empty: TypedDictionary<Profile> = typed_dict! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! typed_dict {
    () => {
        $crate::TypedDictionary::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::TypedDictionary::from_entries([
            $($crate::Entry::new(&$key, $value)),+
        ])
    };
}

/// Declares keys as associated constants of a scope type.
///
/// ```
/// use sovran_typedict::{scope_keys, TypedDictionary};
///
/// pub struct Profile;
///
/// scope_keys! {
///     Profile {
///         pub NAME: String = "name";
///         pub AGE: u32 = "age";
///         SECRET: Vec<u8> = "secret";
///     }
/// }
///
/// let mut profile = TypedDictionary::<Profile>::new();
/// profile.set(&Profile::AGE, 41);
/// assert_eq!(profile.get(&Profile::AGE), Some(&41));
/// assert_eq!(Profile::NAME.raw_value(), "name");
/// assert_eq!(Profile::SECRET.raw_value(), "secret");
/// ```
#[macro_export]
macro_rules! scope_keys {
    ($scope:ty { $($vis:vis $name:ident : $value:ty = $raw:expr;)* }) => {
        impl $scope {
            $(
                $vis const $name: $crate::Key<$scope, $value> = $crate::Key::new($raw);
            )*
        }
    };
}
