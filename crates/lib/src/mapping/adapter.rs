//! Accessor for a mapped field, possibly several inline levels deep.

use super::route::Route;
use crate::{Kind, Mapper, Record, Result, Value};

/// A mapped field, addressed relative to the record the mappings were built
/// from.
///
/// Adapters do not borrow the record: every operation takes it explicitly, and
/// must be given the same record instance the mappings were built for.
#[derive(Debug, Clone)]
pub struct FieldAdapter {
    route: Route,
}

impl FieldAdapter {
    pub(crate) fn new(route: Route) -> Self {
        Self { route }
    }

    pub(crate) fn into_route(self) -> Route {
        self.route
    }

    /// Returns true if writing through this adapter installs a container
    /// that has not been allocated yet.
    pub fn is_lazy(&self) -> bool {
        self.route.is_lazy()
    }

    /// Declared name of the underlying field.
    pub fn field_name(&self, record: &dyn Record) -> Option<&'static str> {
        self.route.read(record, |field| field.name())
    }

    pub fn kind(&self, record: &dyn Record) -> Option<Kind> {
        self.route.read(record, |field| field.kind())
    }

    /// Reads the field's current value; `Null` when a container on the way is
    /// absent.
    pub fn value(&self, record: &dyn Record, mapper: &Mapper) -> Result<Value> {
        self.route
            .read(record, |field| field.value(mapper))
            .unwrap_or(Ok(Value::Null))
    }

    /// Assigns `value` to the field, installing lazy containers on the way.
    pub fn set(&self, record: &mut dyn Record, value: Value, mapper: &Mapper) -> Result<()> {
        self.route
            .write(record, |mut field| field.set(value, mapper))?
    }
}
