//! Field introspection for typed records.
//!
//! A record exposes its fields through the [`Record`] trait: an ordered list of
//! [`Field`] accessors, each pairing a static [`FieldDesc`] (declared name, tag
//! table, visibility) with a type-erased [`Slot`] over the field's storage.
//!
//! Field types implement [`FieldType`], which describes how a value of that type
//! is read into and assigned from a [`Value`]. Every `FieldType` is usable as a
//! [`Slot`] through a blanket implementation, so accessors can work with
//! heterogeneous fields through one object-safe interface.
//!
//! The [`record!`](crate::record!) macro derives both traits for a struct:
//!
//! ```
//! recmap::record! {
//!     #[derive(Debug, Default, Clone, PartialEq)]
//!     pub struct Person {
//!         pub name: String => [map = "name"],
//!         pub age: i64 => [map = "age,omitempty"],
//!     }
//! }
//!
//! let person = Person { name: "Alice".to_string(), age: 0 };
//! let map = recmap::to_map(&person).unwrap();
//!
//! assert_eq!(map["name"], "Alice");
//! assert!(!map.contains_key("age"));
//! ```

use std::any::Any;

use crate::{Map, Mapper, Result, Value};

pub mod field;
mod types;

pub use field::{Field, FieldDesc, FieldMut};

/// Coarse category of a field type.
///
/// The mapping builder only cares about this level of detail: whether a field
/// can be inlined (records, record pointers and maps) and whether it holds a
/// nested record that should be converted recursively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Scalars: `bool`, `i64`, `f64`, `String`
    Primitive,
    /// `Vec<T>`
    List,
    /// `Map` or `Option<Map>`
    Map,
    /// A nested record held by value
    Record,
    /// `Option<Box<R>>` over a record
    Pointer,
    /// A `Value` field that accepts anything
    Dynamic,
}

impl Kind {
    /// Returns true for the kinds the `inline` flag applies to
    pub fn is_inlinable(self) -> bool {
        matches!(self, Kind::Map | Kind::Record | Kind::Pointer)
    }

    /// Returns the kind name as a string
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Primitive => "primitive",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::Pointer => "pointer",
            Kind::Dynamic => "dynamic",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-shape type whose fields can be enumerated.
///
/// Implementations must return fields in declaration order, and `fields` and
/// `fields_mut` must agree on order and descriptors: the mapping builder
/// records field positions from one and writes through the other.
pub trait Record: Send + 'static {
    /// Read accessors for every field, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Write accessors for every field, in declaration order.
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;

    /// Returns true when every field holds its zero value.
    fn is_zero(&self) -> bool {
        self.fields().iter().all(Field::is_zero)
    }
}

/// A type that can be stored in a record field.
pub trait FieldType: Any + Send + Sized {
    /// Coarse category of this type.
    const KIND: Kind;

    /// Returns true when the value equals the type's zero value.
    fn is_zero(&self) -> bool;

    /// Reads the value into its dynamic form.
    fn to_value(&self, mapper: &Mapper) -> Result<Value>;

    /// Builds a value of this type from its dynamic form.
    ///
    /// Returns `Ok(None)` when the dynamic value's kind does not fit this type.
    fn from_value(value: Value, mapper: &Mapper) -> Result<Option<Self>>;

    /// The nested record, for record and non-empty pointer types.
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// Mutable access to the nested record.
    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// The entries of a map-kind value.
    fn entries(&self) -> Option<&Map> {
        None
    }

    /// Mutable access to the entries of a map-kind value.
    fn entries_mut(&mut self) -> Option<&mut Map> {
        None
    }

    /// A freshly constructed, non-zero-container instance for lazy inlining.
    ///
    /// Only the inlinable kinds return `Some`.
    fn fresh() -> Option<Self> {
        None
    }
}

/// Object-safe view of a field's storage.
///
/// Implemented for every [`FieldType`]; accessors and adapters only ever see
/// `dyn Slot`.
pub trait Slot: Any + Send {
    fn kind(&self) -> Kind;

    fn type_name(&self) -> &'static str;

    fn is_zero(&self) -> bool;

    fn value(&self, mapper: &Mapper) -> Result<Value>;

    /// Assigns `value`, returning `Ok(false)` and leaving the slot untouched
    /// when the value's kind does not fit.
    fn assign(&mut self, value: Value, mapper: &Mapper) -> Result<bool>;

    fn record(&self) -> Option<&dyn Record>;

    fn record_mut(&mut self) -> Option<&mut dyn Record>;

    fn entries(&self) -> Option<&Map>;

    fn entries_mut(&mut self) -> Option<&mut Map>;

    /// A fresh instance of the same type, boxed for a lazy initializer.
    fn fresh(&self) -> Option<Box<dyn Slot>>;

    /// Replaces the slot's value with `instance`.
    ///
    /// Returns false when `instance` holds a different type.
    fn install(&mut self, instance: Box<dyn Slot>) -> bool;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: FieldType> Slot for T {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn is_zero(&self) -> bool {
        FieldType::is_zero(self)
    }

    fn value(&self, mapper: &Mapper) -> Result<Value> {
        self.to_value(mapper)
    }

    fn assign(&mut self, value: Value, mapper: &Mapper) -> Result<bool> {
        match T::from_value(value, mapper)? {
            Some(next) => {
                *self = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn record(&self) -> Option<&dyn Record> {
        self.as_record()
    }

    fn record_mut(&mut self) -> Option<&mut dyn Record> {
        self.as_record_mut()
    }

    fn entries(&self) -> Option<&Map> {
        FieldType::entries(self)
    }

    fn entries_mut(&mut self) -> Option<&mut Map> {
        FieldType::entries_mut(self)
    }

    fn fresh(&self) -> Option<Box<dyn Slot>> {
        <T as FieldType>::fresh().map(|instance| Box::new(instance) as Box<dyn Slot>)
    }

    fn install(&mut self, instance: Box<dyn Slot>) -> bool {
        match instance.into_any().downcast::<T>() {
            Ok(instance) => {
                *self = *instance;
                true
            }
            Err(_) => false,
        }
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// `FieldType::to_value` for record types: the record's map form.
pub fn record_to_value<R: Record>(record: &R, mapper: &Mapper) -> Result<Value> {
    mapper.to_map(record).map(Value::Map)
}

/// `FieldType::from_value` for record types: decodes a map into a fresh record.
pub fn record_from_value<R: Record + Default>(value: Value, mapper: &Mapper) -> Result<Option<R>> {
    match value {
        Value::Map(map) => {
            let mut record = R::default();
            mapper.from_map(map, &mut record)?;
            Ok(Some(record))
        }
        _ => Ok(None),
    }
}

/// Declares a struct and implements [`Record`] and [`FieldType`] for it.
///
/// Each field may carry a tag table after `=>`, mapping a tag scheme to a tag
/// string in the `name[,flag]*` grammar. Fields declared without a visibility
/// qualifier are readable but never written by conversions. The struct must
/// implement `Default`.
///
/// ```
/// recmap::record! {
///     #[derive(Debug, Default)]
///     pub struct Account {
///         pub id: i64 => [map = "id", json = "accountId"],
///         pub extra: recmap::Map => [map = ",inline"],
///         secret: String,
///     }
/// }
/// # let _ = Account::default().secret;
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> [$($scheme:ident = $tag:literal),* $(,)?])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![$(
                    $crate::Field::new(
                        $crate::FieldDesc::new(
                            ::core::stringify!($field),
                            &[$($((::core::stringify!($scheme), $tag)),*)?],
                            !::core::stringify!($fvis).is_empty(),
                        ),
                        &self.$field,
                    )
                ),*]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                ::std::vec![$(
                    $crate::FieldMut::new(
                        $crate::FieldDesc::new(
                            ::core::stringify!($field),
                            &[$($((::core::stringify!($scheme), $tag)),*)?],
                            !::core::stringify!($fvis).is_empty(),
                        ),
                        &mut self.$field,
                    )
                ),*]
            }
        }

        impl $crate::FieldType for $name {
            const KIND: $crate::Kind = $crate::Kind::Record;

            fn is_zero(&self) -> bool {
                <Self as $crate::Record>::is_zero(self)
            }

            fn to_value(&self, mapper: &$crate::Mapper) -> $crate::Result<$crate::Value> {
                $crate::record::record_to_value(self, mapper)
            }

            fn from_value(
                value: $crate::Value,
                mapper: &$crate::Mapper,
            ) -> $crate::Result<::core::option::Option<Self>> {
                $crate::record::record_from_value(value, mapper)
            }

            fn as_record(&self) -> ::core::option::Option<&dyn $crate::Record> {
                ::core::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Record> {
                ::core::option::Option::Some(self)
            }

            fn fresh() -> ::core::option::Option<Self> {
                ::core::option::Option::Some(<Self as ::core::default::Default>::default())
            }
        }
    };
}
