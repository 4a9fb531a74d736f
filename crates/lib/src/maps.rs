//! Helpers for flat maps.
//!
//! These operate on top-level keys only and know nothing about records. They
//! are typically applied to the output of [`crate::to_map`] or to a map before
//! it is handed to [`crate::from_map`].

use std::collections::HashMap;

use crate::Map;

/// Renames top-level keys according to `renames` (old key to new key).
///
/// Keys without an entry in `renames` are kept as they are. When a renamed key
/// lands on an existing one, which of the two values survives is unspecified.
pub fn rename_keys(map: &Map, renames: &HashMap<String, String>) -> Map {
    map.iter()
        .map(|(key, value)| {
            let key = renames.get(key).unwrap_or(key);
            (key.clone(), value.clone())
        })
        .collect()
}

/// Shallow merge of two maps; `right` wins on key collisions.
pub fn join(left: &Map, right: &Map) -> Map {
    let mut joined = left.clone();
    joined.extend(right.iter().map(|(key, value)| (key.clone(), value.clone())));
    joined
}

/// Keeps only the entries whose keys appear in `allowed`.
pub fn filter_keys<S: AsRef<str>>(map: &Map, allowed: &[S]) -> Map {
    allowed
        .iter()
        .filter_map(|key| {
            let key = key.as_ref();
            map.get(key).map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}
