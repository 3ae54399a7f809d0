use sovran_typedict::{
    scope_keys, typed_dict, DictionaryError, Entry, ErasedValue, Key, ScopedKey, TypedDictionary,
};
use std::panic;
use std::sync::{Arc, Mutex};
use std::thread;

struct Profile;

scope_keys! {
    Profile {
        NAME: String = "name";
        AGE: i64 = "age";
        EMAILS: Vec<String> = "emails";
    }
}

struct Settings;

const THEME: Key<Settings, String> = Key::new("theme");
const FONT_SIZE: Key<Settings, f32> = Key::new("font_size");

#[test]
fn test_profile_scenario() {
    let mut profile: TypedDictionary<Profile> = typed_dict! {
        Profile::NAME => "Ann".to_string(),
    };

    assert_eq!(profile.get(&Profile::NAME).map(String::as_str), Some("Ann"));
    assert_eq!(profile.get(&Profile::AGE), None);

    profile.set(&Profile::AGE, 30);
    assert_eq!(profile.get(&Profile::AGE), Some(&30));

    profile.set(&Profile::NAME, None);
    assert_eq!(profile.get(&Profile::NAME), None);
    assert_eq!(profile.get(&Profile::AGE), Some(&30));
    assert_eq!(profile.len(), 1);
}

#[test]
fn test_same_name_different_type_reads_none() {
    let k1: Key<Profile, i64> = Key::new("x");
    let k2: Key<Profile, String> = Key::new("x");

    let mut profile = TypedDictionary::<Profile>::new();
    profile.set(&k1, 5);

    assert_eq!(profile.get(&k2), None);
    assert_eq!(profile.get_cloned(&k2), None);
    assert_eq!(profile.get(&k1), Some(&5));

    // The slot is shared, so writing through k2 replaces k1's value.
    profile.set(&k2, "five".to_string());
    assert_eq!(profile.get(&k1), None);
    assert_eq!(profile.get(&k2).map(String::as_str), Some("five"));
    assert_eq!(profile.len(), 1);
}

#[test]
fn test_fresh_dictionary_is_empty() {
    let profile = TypedDictionary::<Profile>::default();

    assert!(profile.is_empty());
    assert_eq!(profile.get(&Profile::NAME), None);
    assert_eq!(profile.get(&Profile::EMAILS), None);
    assert!(!profile.contains(&Profile::AGE.scoped()));
    assert_eq!(profile.raw_names().count(), 0);
}

#[test]
fn test_overwrite_and_clear() {
    let mut settings = TypedDictionary::<Settings>::new();

    settings.set(&THEME, "light".to_string());
    settings.set(&THEME, "dark".to_string());
    assert_eq!(settings.get(&THEME).map(String::as_str), Some("dark"));

    settings.set(&FONT_SIZE, 12.5);
    settings.set(&FONT_SIZE, None);
    assert_eq!(settings.get(&FONT_SIZE), None);

    let mut names: Vec<&str> = settings.raw_names().collect();
    names.sort();
    assert_eq!(names, vec!["theme"]);

    settings.clear();
    assert!(settings.is_empty());
}

#[test]
fn test_runtime_names() {
    let mut profile = TypedDictionary::<Profile>::new();

    for i in 0..3 {
        let key: Key<Profile, usize> = Key::from_string(format!("slot-{}", i));
        profile.set(&key, i * 10);
    }

    let slot_two = ScopedKey::<Profile>::new("slot-2").typed::<usize>();
    assert_eq!(profile.get(&slot_two), Some(&20));
    assert_eq!(profile.len(), 3);
}

#[test]
fn test_try_from_entries_reports_duplicates() {
    let result = TypedDictionary::<Profile>::try_from_entries([
        Profile::AGE.entry(1),
        Entry::erased(ScopedKey::new("age"), ErasedValue::new("one")),
    ]);

    match result {
        Err(DictionaryError::DuplicateKey(name)) => assert_eq!(name, "age"),
        Ok(_) => panic!("duplicate names must be rejected"),
    }
}

#[test]
fn test_literal_with_duplicates_panics() {
    let result = panic::catch_unwind(|| {
        let _: TypedDictionary<Profile> = typed_dict! {
            Profile::NAME => "Ann".to_string(),
            Key::<Profile, bool>::new("name") => true,
        };
    });
    assert!(result.is_err());
}

#[test]
fn test_error_display() {
    let err = DictionaryError::DuplicateKey("name".to_string());
    assert_eq!(err.to_string(), "duplicate key in dictionary initializer: name");
}

#[test]
fn test_move_between_threads() {
    let mut profile = TypedDictionary::<Profile>::new();
    profile.set(&Profile::AGE, 1);

    let profile = thread::spawn(move || {
        profile.set(&Profile::AGE, 2);
        profile
    })
    .join()
    .unwrap();

    assert_eq!(profile.get(&Profile::AGE), Some(&2));
}

#[test]
fn test_shared_behind_mutex() {
    let profile = Arc::new(Mutex::new(TypedDictionary::<Profile>::new()));
    profile.lock().unwrap().set(&Profile::AGE, 0);

    let mut handles = vec![];
    for _ in 0..10 {
        let profile = Arc::clone(&profile);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let mut profile = profile.lock().unwrap();
                if let Some(age) = profile.get_mut(&Profile::AGE) {
                    *age += 1;
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(profile.lock().unwrap().get(&Profile::AGE), Some(&1000));
}

#[test]
fn test_email_list_edits() {
    let mut profile = TypedDictionary::<Profile>::new();

    if profile.get(&Profile::EMAILS).is_none() {
        profile.set(&Profile::EMAILS, Vec::new());
    }
    if let Some(emails) = profile.get_mut(&Profile::EMAILS) {
        emails.push("ann@example.com".to_string());
        emails.push("ann@work.example".to_string());
    }

    assert_eq!(profile.get(&Profile::EMAILS).map(Vec::len), Some(2));
    assert_eq!(
        profile.remove(&Profile::EMAILS),
        Some(vec![
            "ann@example.com".to_string(),
            "ann@work.example".to_string()
        ])
    );
    assert!(!profile.contains_key(&Profile::EMAILS));
}
