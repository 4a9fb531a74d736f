//! Conversion between records and maps.
//!
//! The free functions cover the common cases: [`to_map`] / [`from_map`] read
//! the default `map` tag scheme, and [`tagged_to_map`] / [`tagged_from_map`]
//! select the naming and filtering schemes explicitly, so one record type can be
//! projected under several views. A [`Mapper`] carries a full
//! [`MapperConfig`] for anything else, such as strict mode.
//!
//! Nested records that are not inlined convert to and from nested maps with
//! the same mapper, so a tagged view applies its schemes at every depth rather
//! than falling back to the default `map` scheme below the top level.
//!
//! ```
//! recmap::record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct P {
//!         pub name: String => [map = "name"],
//!         pub extra: recmap::Map => [map = ",inline"],
//!     }
//! }
//!
//! let source: recmap::Map =
//!     serde_json::from_str(r#"{"name": "a", "x": 1}"#).unwrap();
//!
//! let mut p = P::default();
//! recmap::from_map(source, &mut p).unwrap();
//!
//! assert_eq!(p.name, "a");
//! assert_eq!(p.extra["x"], recmap::Value::Int(1));
//! ```

use tracing::debug;

use crate::{Error, Map, MapError, MapperConfig, Mappings, Record, Result};

/// Converts records to and from maps under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Mapper reading names from `name_tag` and selecting fields by
    /// `filter_tag` (empty means `name_tag`).
    pub fn tagged(name_tag: &str, filter_tag: &str) -> Self {
        Self::new(MapperConfig::tagged(name_tag, filter_tag))
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Builds the field mappings of `record`.
    pub fn mappings(&self, record: &dyn Record) -> Result<Mappings> {
        Mappings::build(record, self)
    }

    /// Converts `record` into a flat map.
    ///
    /// Nested records become nested maps. Catch-all entries are merged last and
    /// replace mapped fields with the same key.
    pub fn to_map(&self, record: &dyn Record) -> Result<Map> {
        let mappings = self.mappings(record)?;
        let mut map = Map::with_capacity(mappings.len());

        for (name, adapter) in mappings.iter() {
            map.insert(name.to_string(), adapter.value(record, self)?);
        }

        if let Some(extra) = mappings.extra() {
            for key in extra.keys(record) {
                let Some(value) = extra.index(record, &key) else {
                    continue;
                };
                if map.contains_key(&key) {
                    debug!(key = %key, "Catch-all entry replaces mapped field");
                }
                map.insert(key, value);
            }
        }

        Ok(map)
    }

    /// Assigns the entries of `map` to the fields of `dest`.
    ///
    /// Keys without a mapped field are stored in the catch-all map, or dropped
    /// when the record has none.
    pub fn from_map(&self, map: Map, dest: &mut dyn Record) -> Result<()> {
        let mappings = self.mappings(&*dest)?;

        for (key, value) in map {
            if let Some(adapter) = mappings.get(&key) {
                if let Err(err) = adapter.set(dest, value, self) {
                    self.tolerate(err)?;
                }
                continue;
            }

            match mappings.extra() {
                Some(extra) => {
                    if let Err(err) = extra.set_index(dest, key, value) {
                        self.tolerate(err)?;
                    }
                }
                None => self.tolerate(MapError::UnmatchedKey { key })?,
            }
        }

        Ok(())
    }

    /// Swallows recoverable mapping errors unless running in strict mode.
    pub(crate) fn tolerate(&self, err: impl Into<Error>) -> Result<()> {
        match err.into() {
            Error::Map(err) if err.is_recoverable() && !self.config.is_strict() => {
                debug!(error = %err, "Ignoring mapping error");
                Ok(())
            }
            err => Err(err),
        }
    }
}

/// Converts `record` into a map using the default `map` tag scheme.
pub fn to_map<R: Record>(record: &R) -> Result<Map> {
    Mapper::default().to_map(record)
}

/// Fills `dest` from `map` using the default `map` tag scheme.
pub fn from_map<R: Record>(map: Map, dest: &mut R) -> Result<()> {
    Mapper::default().from_map(map, dest)
}

/// Converts `record` into a map, naming fields by `name_tag` and selecting
/// them by `filter_tag`.
pub fn tagged_to_map<R: Record>(record: &R, name_tag: &str, filter_tag: &str) -> Result<Map> {
    Mapper::tagged(name_tag, filter_tag).to_map(record)
}

/// Fills `dest` from `map`, naming fields by `name_tag` and selecting them by
/// `filter_tag`.
pub fn tagged_from_map<R: Record>(
    map: Map,
    dest: &mut R,
    name_tag: &str,
    filter_tag: &str,
) -> Result<()> {
    Mapper::tagged(name_tag, filter_tag).from_map(map, dest)
}
