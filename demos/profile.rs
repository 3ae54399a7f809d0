//! Walks through reading and writing a profile through typed keys.
//!
//! Run with: cargo run --example profile

use sovran_typedict::{scope_keys, typed_dict, DictionaryError, Key, TypedDictionary};

struct Profile;

scope_keys! {
    Profile {
        NAME: String = "name";
        AGE: u32 = "age";
        LANGUAGES: Vec<String> = "languages";
    }
}

fn main() -> Result<(), DictionaryError> {
    // Build from a literal
    let mut profile: TypedDictionary<Profile> = typed_dict! {
        Profile::NAME => "Ann".to_string(),
        Profile::LANGUAGES => vec!["en".to_string()],
    };
    print_profile(&profile);

    // Add and edit values
    profile.set(&Profile::AGE, 30);
    if let Some(languages) = profile.get_mut(&Profile::LANGUAGES) {
        languages.push("fr".to_string());
    }
    print_profile(&profile);

    // A key that reuses a name with another type sees nothing
    let age_as_text: Key<Profile, String> = Key::new("age");
    println!("age read as text: {:?}", profile.get(&age_as_text));

    // Clearing a value
    profile.set(&Profile::NAME, None);
    print_profile(&profile);

    // Bulk construction reports duplicate names
    match TypedDictionary::<Profile>::try_from_entries([
        Profile::AGE.entry(1),
        Profile::AGE.entry(2),
    ]) {
        Ok(_) => println!("This shouldn't happen - names were duplicated"),
        Err(e) => println!("Correctly rejected: {}", e),
    }

    let rebuilt = TypedDictionary::<Profile>::try_from_entries([
        Profile::NAME.entry("Bea".to_string()),
        Profile::AGE.entry(25),
    ])?;
    println!("Rebuilt: {:?}", rebuilt);

    Ok(())
}

fn print_profile(profile: &TypedDictionary<Profile>) {
    println!(
        "name: {:?}, age: {:?}, languages: {:?}",
        profile.get(&Profile::NAME),
        profile.get(&Profile::AGE),
        profile.get(&Profile::LANGUAGES),
    );
}
