//! The catch-all map of a record.
//!
//! A record may declare one inline map field. During conversion from a map it
//! absorbs every key that matches no mapped field, and during conversion to a
//! map its entries are merged into the output.

use super::route::Route;
use crate::{MapError, Record, Result, Value};

/// Accessor for the inline map field that stores unrecognized keys.
#[derive(Debug, Clone)]
pub struct CatchAll {
    field: &'static str,
    route: Route,
}

impl CatchAll {
    pub(crate) fn new(field: &'static str, route: Route) -> Self {
        Self { field, route }
    }

    /// Declared name of the map field.
    pub fn field_name(&self) -> &'static str {
        self.field
    }

    /// Returns true if the map has not been allocated into its field yet.
    pub fn is_lazy(&self) -> bool {
        self.route.is_lazy()
    }

    /// Keys currently stored in the map, in no particular order.
    pub fn keys(&self, record: &dyn Record) -> Vec<String> {
        self.route
            .read(record, |field| {
                field
                    .slot()
                    .entries()
                    .map(|entries| entries.keys().cloned().collect())
            })
            .flatten()
            .unwrap_or_default()
    }

    pub fn index(&self, record: &dyn Record, key: &str) -> Option<Value> {
        self.route
            .read(record, |field| {
                field
                    .slot()
                    .entries()
                    .and_then(|entries| entries.get(key).cloned())
            })
            .flatten()
    }

    /// Stores `value` under `key`, allocating the map on first use.
    pub fn set_index(&self, record: &mut dyn Record, key: String, value: Value) -> Result<()> {
        let field = self.field;
        self.route.write(record, move |mut slot| {
            if !slot.is_exported() {
                return Err(MapError::FieldNotSettable {
                    field: field.to_string(),
                });
            }

            match slot.slot_mut().entries_mut() {
                Some(entries) => {
                    entries.insert(key, value);
                    Ok(())
                }
                None => Err(MapError::FieldUnreachable {
                    field: field.to_string(),
                }),
            }
        })??;
        Ok(())
    }
}
