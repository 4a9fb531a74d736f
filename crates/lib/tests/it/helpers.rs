//! Shared record fixtures and helpers for the integration tests.

use recmap::{Map, Mapper, MapperConfig, Mode, Value};

recmap::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Address {
        pub street: String => [map = "street"],
        pub city: String => [map = "city"],
    }
}

recmap::record! {
    /// A flat record exercising naming, exclusion and omission.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Person {
        pub name: String => [map = "name"],
        pub age: i64 => [map = "age,omitempty"],
        pub email: String => [map = ",omitempty"],
        pub active: bool => [map = "active"],
        pub score: f64 => [map = "score"],
        pub tags: Vec<String> => [map = "tags"],
        pub password: String => [map = "-"],
        pub note: String,
    }
}

recmap::record! {
    /// Nested records held by value and by pointer, not inlined.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Contact {
        pub name: String => [map = "name"],
        pub address: Address => [map = "address"],
        pub billing: Option<Box<Address>> => [map = "billing"],
    }
}

recmap::record! {
    /// A nested record inlined by value.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Customer {
        pub name: String => [map = "name"],
        pub address: Address => [map = ",inline"],
    }
}

recmap::record! {
    /// A nested record inlined through an optional pointer.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Shipment {
        pub id: i64 => [map = "id"],
        pub destination: Option<Box<Address>> => [map = ",inline"],
    }
}

recmap::record! {
    /// A record with a catch-all map.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Event {
        pub kind: String => [map = "kind"],
        pub extra: Map => [map = ",inline"],
    }
}

/// Builds a map from `(key, value)` pairs.
pub fn map_of<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// A mapper with the default tag scheme in strict mode.
pub fn strict_mapper() -> Mapper {
    Mapper::new(MapperConfig::default().with_mode(Mode::Strict))
}
