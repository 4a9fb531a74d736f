//! Conversion of flat and nested (non-inlined) records.

use recmap::{Map, Value, from_map, to_map};

use crate::helpers::{Address, Contact, Person, map_of};

fn sample_person() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 30,
        email: "alice@example.com".to_string(),
        active: true,
        score: 4.5,
        tags: vec!["admin".to_string(), "ops".to_string()],
        password: "hunter2".to_string(),
        note: "untagged".to_string(),
    }
}

#[test]
fn test_to_map_uses_tag_names() {
    let map = to_map(&sample_person()).unwrap();

    assert_eq!(map["name"], "Alice");
    assert_eq!(map["age"], Value::Int(30));
    assert_eq!(map["active"], true);
    assert_eq!(map["score"], Value::Float(4.5));
    assert_eq!(
        map["tags"],
        Value::List(vec![Value::from("admin"), Value::from("ops")])
    );
}

#[test]
fn test_empty_tag_name_falls_back_to_field_name() {
    let map = to_map(&sample_person()).unwrap();
    assert_eq!(map["email"], "alice@example.com");
}

#[test]
fn test_excluded_and_untagged_fields_are_skipped() {
    let map = to_map(&sample_person()).unwrap();

    assert!(!map.contains_key("password"));
    assert!(!map.contains_key("-"));
    assert!(!map.contains_key("note"));
    assert_eq!(map.len(), 6);
}

#[test]
fn test_omitempty_skips_zero_values() {
    let person = Person {
        name: "Bob".to_string(),
        ..Default::default()
    };
    let map = to_map(&person).unwrap();

    assert!(!map.contains_key("age"));
    assert!(!map.contains_key("email"));
    // Zero values without the flag are still written
    assert_eq!(map["active"], false);
    assert_eq!(map["tags"], Value::List(vec![]));
}

#[test]
fn test_omitempty_zero_destination_field_is_not_mapped() {
    // Mappings reflect the destination's current values, so a zero field
    // tagged omitempty has no entry to receive the key
    let mut person = Person::default();
    from_map(map_of([("age", Value::Int(30))]), &mut person).unwrap();
    assert_eq!(person.age, 0);

    let mut person = Person {
        age: 1,
        ..Default::default()
    };
    from_map(map_of([("age", Value::Int(30))]), &mut person).unwrap();
    assert_eq!(person.age, 30);
}

#[test]
fn test_round_trip() {
    let person = sample_person();
    let map = to_map(&person).unwrap();

    let mut copy = Person::default();
    from_map(map, &mut copy).unwrap();

    assert_eq!(copy.name, person.name);
    assert_eq!(copy.tags, person.tags);
    assert_eq!(copy.score, person.score);
    assert!(copy.active);
    // Excluded and untagged fields are never written
    assert_eq!(copy.password, "");
    assert_eq!(copy.note, "");
}

#[test]
fn test_from_map_leaves_missing_fields_alone() {
    let mut person = sample_person();
    from_map(map_of([("name", Value::from("Carol"))]), &mut person).unwrap();

    assert_eq!(person.name, "Carol");
    assert_eq!(person.score, 4.5);
    assert_eq!(person.tags.len(), 2);
}

#[test]
fn test_from_map_ignores_excluded_key() {
    let mut person = Person::default();
    from_map(map_of([("password", Value::from("leak"))]), &mut person).unwrap();
    assert_eq!(person.password, "");
}

#[test]
fn test_from_map_empty_map_is_noop() {
    let mut person = sample_person();
    from_map(Map::new(), &mut person).unwrap();
    assert_eq!(person, sample_person());
}

#[test]
fn test_nested_record_becomes_nested_map() {
    let contact = Contact {
        name: "Dee".to_string(),
        address: Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
        },
        billing: None,
    };
    let map = to_map(&contact).unwrap();

    let address = map["address"].as_map().unwrap();
    assert_eq!(address["city"], "Springfield");
    assert_eq!(address["street"], "1 Main St");
    assert!(map["billing"].is_null());
    assert!(!map.contains_key("city"));
}

#[test]
fn test_nested_record_round_trip() {
    let contact = Contact {
        name: "Eve".to_string(),
        address: Address {
            street: "2 Side St".to_string(),
            city: "Shelbyville".to_string(),
        },
        billing: Some(Box::new(Address {
            street: "PO Box 9".to_string(),
            city: "Capital City".to_string(),
        })),
    };

    let mut copy = Contact::default();
    from_map(to_map(&contact).unwrap(), &mut copy).unwrap();
    assert_eq!(copy, contact);
}

#[test]
fn test_null_clears_pointer() {
    let mut contact = Contact {
        billing: Some(Box::default()),
        ..Default::default()
    };
    from_map(map_of([("billing", Value::Null)]), &mut contact).unwrap();
    assert!(contact.billing.is_none());
}

#[test]
fn test_kind_mismatch_is_ignored_by_default() {
    let mut person = sample_person();
    from_map(
        map_of([("score", Value::from("high")), ("name", Value::from("Fay"))]),
        &mut person,
    )
    .unwrap();

    assert_eq!(person.score, 4.5);
    assert_eq!(person.name, "Fay");
}

#[test]
fn test_list_with_mismatched_element_is_rejected_whole() {
    let mut person = sample_person();
    let tags = Value::List(vec![Value::from("ok"), Value::Int(1)]);
    from_map(map_of([("tags", tags)]), &mut person).unwrap();

    assert_eq!(person.tags, vec!["admin".to_string(), "ops".to_string()]);
}

#[test]
fn test_unknown_keys_are_dropped_without_catch_all() {
    let mut person = Person::default();
    from_map(
        map_of([("name", Value::from("Gus")), ("unknown", Value::Int(1))]),
        &mut person,
    )
    .unwrap();
    assert_eq!(person.name, "Gus");
}
