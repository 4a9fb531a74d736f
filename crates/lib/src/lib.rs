//!
//! recmap: tag-driven conversion between typed records and dynamic maps.
//!
//! ## Core Concepts
//!
//! * **Records (`record::Record`)**: Structs whose fields can be enumerated with their tags. The
//!   [`record!`] macro implements the trait for a struct declaration.
//! * **Values (`value::Value`)**: The loosely-typed side of a conversion; a [`Map`] is a flat
//!   string-keyed table of values.
//! * **Tags**: Per-field strings of the form `name[,flag]*`, keyed by a tag scheme (`map` by
//!   default). The name renames the field (`-` excludes it), `omitempty` skips zero values and
//!   `inline` flattens nested records and maps into the parent.
//! * **Mappings (`mapping::Mappings`)**: The flat name table of one record, built per conversion,
//!   including the optional catch-all map that absorbs unrecognized keys.
//! * **Mapper (`convert::Mapper`)**: Drives conversions in both directions under a
//!   [`MapperConfig`].
//!
//! ```
//! recmap::record! {
//!     #[derive(Debug, Default, Clone, PartialEq)]
//!     pub struct Address {
//!         pub city: String => [map = "city"],
//!     }
//! }
//!
//! recmap::record! {
//!     #[derive(Debug, Default, Clone, PartialEq)]
//!     pub struct User {
//!         pub name: String => [map = "name"],
//!         pub address: Address => [map = ",inline"],
//!         pub internal: i64 => [map = "-"],
//!     }
//! }
//!
//! let user = User {
//!     name: "Ada".to_string(),
//!     address: Address { city: "London".to_string() },
//!     internal: 7,
//! };
//!
//! let map = recmap::to_map(&user).unwrap();
//! assert_eq!(map["city"], "London");
//! assert!(!map.contains_key("internal"));
//!
//! let mut copy = User::default();
//! recmap::from_map(map, &mut copy).unwrap();
//! assert_eq!(copy.address, user.address);
//! ```

pub mod config;
pub mod constants;
pub mod convert;
pub mod mapping;
pub mod maps;
pub mod record;
pub mod value;

pub use config::{MapperConfig, Mode};
pub use convert::{Mapper, from_map, tagged_from_map, tagged_to_map, to_map};
pub use mapping::{CatchAll, FieldAdapter, FieldInitializer, Mappings, errors::MapError};
pub use record::{Field, FieldDesc, FieldMut, FieldType, Kind, Record, Slot};
pub use value::{Map, Value};

/// Result type used throughout the recmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the recmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured mapping errors from the mapping module
    #[error(transparent)]
    Map(MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "mapping",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is mapping-related.
    pub fn is_map_error(&self) -> bool {
        matches!(self, Error::Map(_))
    }

    /// Check if this error was raised by a rejected field write.
    pub fn is_write_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_write_error(),
            _ => false,
        }
    }

    /// Check if this error is a kind mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Get the structured mapping error, if this is one.
    pub fn as_map_error(&self) -> Option<&MapError> {
        match self {
            Error::Map(map_err) => Some(map_err),
            _ => None,
        }
    }
}
