//! Resolution of a record's fields into a flat name table.
//!
//! [`Mappings::build`] walks a record's fields in declaration order and decides,
//! from each field's tag, whether the field is mapped under a name, omitted, or
//! inlined. Inlining a nested record merges its mapped fields into the parent's
//! table; inlining a map makes it the record's [`CatchAll`].
//!
//! Mappings are built per conversion and tied to the record instance they were
//! built from. Fields of containers that were not allocated at build time are
//! reached through a shared [`FieldInitializer`], which allocates the container
//! on the first write.
//!
//! ```
//! recmap::record! {
//!     #[derive(Debug, Default)]
//!     pub struct Address {
//!         pub city: String => [map = "city"],
//!     }
//! }
//!
//! recmap::record! {
//!     #[derive(Debug, Default)]
//!     pub struct Person {
//!         pub name: String => [map = "name"],
//!         pub address: Option<Box<Address>> => [map = ",inline"],
//!     }
//! }
//!
//! let mapper = recmap::Mapper::default();
//! let mut person = Person::default();
//! let mappings = mapper.mappings(&person).unwrap();
//! assert!(mappings.get("city").unwrap().is_lazy());
//!
//! mappings
//!     .get("city")
//!     .unwrap()
//!     .set(&mut person, "Paris".into(), &mapper)
//!     .unwrap();
//! assert_eq!(person.address.unwrap().city, "Paris");
//! ```

use std::{collections::HashMap, sync::Arc};

use tracing::{trace, warn};

use crate::{Field, Kind, MapError, Mapper, Record, Result, constants::EXCLUDE};

mod adapter;
mod catch_all;
pub mod errors;
mod initializer;
mod route;
pub mod tag;

pub use adapter::FieldAdapter;
pub use catch_all::CatchAll;
pub use initializer::FieldInitializer;
use route::Route;

/// The flat field table of one record, plus its optional catch-all.
#[derive(Debug, Default)]
pub struct Mappings {
    fields: HashMap<String, FieldAdapter>,
    extra: Option<CatchAll>,
}

impl Mappings {
    /// Resolves the mapped fields of `record` under the mapper's tag schemes.
    pub fn build(record: &dyn Record, mapper: &Mapper) -> Result<Self> {
        Self::build_at(record, mapper, 0)
    }

    fn build_at(record: &dyn Record, mapper: &Mapper, depth: usize) -> Result<Self> {
        let config = mapper.config();
        let (name_tag, filter_tag) = (config.name_tag(), config.filter_tag());
        let mut mappings = Mappings::default();

        for (index, field) in record.fields().into_iter().enumerate() {
            if !field.has_tag(filter_tag) {
                continue;
            }

            let (name, flags) = tag::parse_name_and_flags(&field, name_tag);
            if name == EXCLUDE {
                trace!(field = field.name(), "Field excluded");
                continue;
            }

            if flags.is_empty() {
                mappings.insert(name, Route::field(index));
            } else if flags.omit_empty() && field.is_zero() {
                trace!(field = field.name(), "Zero field omitted");
            } else if flags.inline() {
                mappings.inline(index, field, mapper, depth)?;
            } else {
                mappings.insert(name, Route::field(index));
            }
        }

        Ok(mappings)
    }

    fn inline(
        &mut self,
        index: usize,
        field: Field<'_>,
        mapper: &Mapper,
        depth: usize,
    ) -> Result<()> {
        let kind = field.kind();
        if !kind.is_inlinable() {
            return mapper.tolerate(MapError::InlineUnsupported {
                field: field.name().to_string(),
                kind,
            });
        }

        let initializer = if field.is_zero() {
            field
                .slot()
                .fresh()
                .map(|instance| Arc::new(FieldInitializer::new(field.desc(), instance)))
        } else {
            None
        };

        if kind == Kind::Map {
            let extra = CatchAll::new(field.name(), Route::through(index, initializer, None));
            return self.set_extra(extra, mapper);
        }

        let limit = mapper.config().max_inline_depth;
        if depth >= limit {
            return Err(MapError::InlineDepthExceeded {
                field: field.name().to_string(),
                limit,
            }
            .into());
        }

        let build = |nested: &dyn Record| Self::build_at(nested, mapper, depth + 1);
        let nested = match &initializer {
            Some(initializer) => initializer
                .with_instance(|_, instance| instance.record().map(build))
                .flatten(),
            None => field.slot().record().map(build),
        };
        let Some(nested) = nested.transpose()? else {
            return Ok(());
        };

        // Only named fields are merged; a nested catch-all stays with its record
        if let Some(extra) = &nested.extra {
            trace!(
                field = field.name(),
                nested = extra.field_name(),
                "Nested catch-all not lifted into parent"
            );
        }

        for (name, adapter) in nested.fields {
            let route = Route::through(index, initializer.clone(), Some(adapter.into_route()));
            self.insert(name, route);
        }

        Ok(())
    }

    fn insert(&mut self, name: String, route: Route) {
        if self.fields.contains_key(&name) {
            trace!(name = %name, "Later field replaces earlier mapping");
        }
        self.fields.insert(name, FieldAdapter::new(route));
    }

    fn set_extra(&mut self, extra: CatchAll, mapper: &Mapper) -> Result<()> {
        if let Some(previous) = &self.extra {
            warn!(
                field = extra.field_name(),
                previous = previous.field_name(),
                "Catch-all field overshadows an earlier one"
            );
            mapper.tolerate(MapError::CatchAllOverwritten {
                field: extra.field_name().to_string(),
                previous: previous.field_name().to_string(),
            })?;
        }
        self.extra = Some(extra);
        Ok(())
    }

    /// Looks up the adapter mapped under `name`.
    pub fn get(&self, name: &str) -> Option<&FieldAdapter> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Mapped names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldAdapter)> {
        self.fields
            .iter()
            .map(|(name, adapter)| (name.as_str(), adapter))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The catch-all map, if the record declares one.
    pub fn extra(&self) -> Option<&CatchAll> {
        self.extra.as_ref()
    }
}
