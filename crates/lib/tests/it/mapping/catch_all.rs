use recmap::{Map, MapError, Mapper, MapperConfig, Mode, Value, from_map, to_map};

use crate::helpers::{Event, map_of, strict_mapper};

recmap::record! {
    #[derive(Debug, Default)]
    pub struct Sparse {
        pub name: String => [map = "name"],
        pub extra: Option<Map> => [map = ",inline"],
    }
}

recmap::record! {
    #[derive(Debug, Default)]
    pub struct TwoBags {
        pub first: Map => [map = ",inline"],
        pub second: Map => [map = ",inline"],
    }
}

recmap::record! {
    #[derive(Debug, Default)]
    pub struct Inner {
        pub a: i64 => [map = "a"],
        pub rest: Map => [map = ",inline"],
    }
}

recmap::record! {
    #[derive(Debug, Default)]
    pub struct Envelope {
        pub extra: Map => [map = ",inline"],
        pub inner: Inner => [map = ",inline"],
    }
}

recmap::record! {
    #[derive(Debug, Default)]
    pub struct Outer {
        pub id: i64 => [map = "id"],
        pub inner: Inner => [map = ",inline"],
    }
}

#[test]
fn test_catch_all_absorbs_unmatched_keys() {
    let mut event = Event::default();
    from_map(
        map_of([
            ("kind", Value::from("click")),
            ("x", Value::Int(10)),
            ("y", Value::Int(20)),
        ]),
        &mut event,
    )
    .unwrap();

    assert_eq!(event.kind, "click");
    assert_eq!(event.extra.len(), 2);
    assert_eq!(event.extra["x"], Value::Int(10));
    assert_eq!(event.extra["y"], Value::Int(20));
}

#[test]
fn test_catch_all_entries_merge_into_output() {
    let mut extra = Map::new();
    extra.insert("source".to_string(), Value::from("web"));
    let event = Event {
        kind: "view".to_string(),
        extra,
    };

    let map = to_map(&event).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["kind"], "view");
    assert_eq!(map["source"], "web");
    assert!(!map.contains_key("extra"));
}

#[test]
fn test_catch_all_overrides_mapped_key_in_output() {
    let mut extra = Map::new();
    extra.insert("kind".to_string(), Value::from("from-extra"));
    let event = Event {
        kind: "from-field".to_string(),
        extra,
    };

    let map = to_map(&event).unwrap();
    assert_eq!(map["kind"], "from-extra");
}

#[test]
fn test_catch_all_round_trip() {
    let source = map_of([
        ("kind", Value::from("scroll")),
        ("depth", Value::Float(0.75)),
        ("meta", Value::Map(map_of([("k", Value::Bool(true))]))),
    ]);

    let mut event = Event::default();
    from_map(source.clone(), &mut event).unwrap();
    assert_eq!(to_map(&event).unwrap(), source);
}

#[test]
fn test_catch_all_keys_and_index() {
    let mut event = Event::default();
    event.extra.insert("a".to_string(), Value::Int(1));

    let mappings = Mapper::default().mappings(&event).unwrap();
    let extra = mappings.extra().unwrap();

    assert_eq!(extra.field_name(), "extra");
    assert!(!extra.is_lazy());
    assert_eq!(extra.keys(&event), vec!["a".to_string()]);
    assert_eq!(extra.index(&event, "a"), Some(Value::Int(1)));
    assert_eq!(extra.index(&event, "b"), None);
    assert!(!mappings.contains("extra"));
}

#[test]
fn test_absent_catch_all_is_allocated_on_first_key() {
    let mut sparse = Sparse::default();
    from_map(map_of([("name", Value::from("n"))]), &mut sparse).unwrap();
    assert!(sparse.extra.is_none());

    from_map(map_of([("other", Value::Int(3))]), &mut sparse).unwrap();
    let extra = sparse.extra.unwrap();
    assert_eq!(extra.len(), 1);
    assert_eq!(extra["other"], Value::Int(3));
}

#[test]
fn test_empty_catch_all_is_lazy() {
    let sparse = Sparse::default();
    let mappings = Mapper::default().mappings(&sparse).unwrap();
    let extra = mappings.extra().unwrap();

    assert!(extra.is_lazy());
    assert!(extra.keys(&sparse).is_empty());
}

#[test]
fn test_second_catch_all_replaces_first() {
    let mut bags = TwoBags::default();
    from_map(map_of([("k", Value::Int(1))]), &mut bags).unwrap();

    assert!(bags.first.is_empty());
    assert_eq!(bags.second["k"], Value::Int(1));
}

#[test]
fn test_second_catch_all_strict() {
    let err = strict_mapper().to_map(&TwoBags::default()).unwrap_err();

    assert!(matches!(
        err.as_map_error(),
        Some(MapError::CatchAllOverwritten { field, previous })
            if field == "second" && previous == "first"
    ));
}

#[test]
fn test_parent_catch_all_keeps_unmatched_keys() {
    let mut envelope = Envelope::default();
    from_map(
        map_of([("a", Value::Int(2)), ("zzz", Value::from("spill"))]),
        &mut envelope,
    )
    .unwrap();

    assert_eq!(envelope.inner.a, 2);
    assert_eq!(envelope.extra["zzz"], "spill");
    assert!(envelope.inner.rest.is_empty());
}

#[test]
fn test_nested_catch_all_does_not_conflict_in_strict_mode() {
    let mappings = strict_mapper().mappings(&Envelope::default()).unwrap();
    assert_eq!(mappings.extra().unwrap().field_name(), "extra");

    let mut envelope = Envelope::default();
    strict_mapper()
        .from_map(map_of([("zzz", Value::Int(1))]), &mut envelope)
        .unwrap();
    assert_eq!(envelope.extra["zzz"], Value::Int(1));
}

#[test]
fn test_nested_catch_all_is_not_used_by_parent() {
    let mut outer = Outer::default();
    from_map(
        map_of([
            ("id", Value::Int(1)),
            ("a", Value::Int(2)),
            ("unknown", Value::Int(3)),
        ]),
        &mut outer,
    )
    .unwrap();

    assert_eq!(outer.id, 1);
    assert_eq!(outer.inner.a, 2);
    assert!(outer.inner.rest.is_empty());

    let err = strict_mapper()
        .from_map(map_of([("unknown", Value::Int(3))]), &mut Outer::default())
        .unwrap_err();
    assert_eq!(err.as_map_error().and_then(MapError::key), Some("unknown"));
}

#[test]
fn test_nested_catch_all_entries_stay_out_of_output() {
    let mut outer = Outer::default();
    outer.inner.a = 2;
    outer.inner.rest.insert("hidden".to_string(), Value::Bool(true));

    let map = to_map(&outer).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], Value::Int(2));
    assert!(!map.contains_key("hidden"));
}

#[test]
fn test_catch_all_accepts_unmatched_keys_in_strict_mode() {
    let mapper = Mapper::new(MapperConfig::default().with_mode(Mode::Strict));
    let mut event = Event::default();
    mapper
        .from_map(map_of([("anything", Value::Null)]), &mut event)
        .unwrap();

    assert!(event.extra["anything"].is_null());
}
