//! `FieldType` implementations for the supported field types.

use super::{FieldType, Kind, Record};
use crate::{Map, Mapper, Result, Value};

macro_rules! primitive_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl FieldType for $ty {
            const KIND: Kind = Kind::Primitive;

            fn is_zero(&self) -> bool {
                *self == <$ty>::default()
            }

            fn to_value(&self, _mapper: &Mapper) -> Result<Value> {
                Ok(Value::$variant(self.clone()))
            }

            fn from_value(value: Value, _mapper: &Mapper) -> Result<Option<Self>> {
                Ok(match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                })
            }
        }
    )*};
}

primitive_field!(bool => Bool, i64 => Int, f64 => Float, String => Text);

impl FieldType for Value {
    const KIND: Kind = Kind::Dynamic;

    fn is_zero(&self) -> bool {
        self.is_null()
    }

    fn to_value(&self, _mapper: &Mapper) -> Result<Value> {
        Ok(self.clone())
    }

    fn from_value(value: Value, _mapper: &Mapper) -> Result<Option<Self>> {
        Ok(Some(value))
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    const KIND: Kind = Kind::List;

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self, mapper: &Mapper) -> Result<Value> {
        self.iter()
            .map(|item| item.to_value(mapper))
            .collect::<Result<Vec<_>>>()
            .map(Value::List)
    }

    // Every element has to fit, otherwise the whole list is a mismatch.
    fn from_value(value: Value, mapper: &Mapper) -> Result<Option<Self>> {
        let Value::List(items) = value else {
            return Ok(None);
        };

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match T::from_value(item, mapper)? {
                Some(item) => out.push(item),
                None => return Ok(None),
            }
        }
        Ok(Some(out))
    }
}

impl FieldType for Map {
    const KIND: Kind = Kind::Map;

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_value(&self, _mapper: &Mapper) -> Result<Value> {
        Ok(Value::Map(self.clone()))
    }

    fn from_value(value: Value, _mapper: &Mapper) -> Result<Option<Self>> {
        Ok(value.into_map())
    }

    fn entries(&self) -> Option<&Map> {
        Some(self)
    }

    fn entries_mut(&mut self) -> Option<&mut Map> {
        Some(self)
    }

    fn fresh() -> Option<Self> {
        Some(Map::new())
    }
}

impl FieldType for Option<Map> {
    const KIND: Kind = Kind::Map;

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn to_value(&self, _mapper: &Mapper) -> Result<Value> {
        Ok(self.clone().map_or(Value::Null, Value::Map))
    }

    fn from_value(value: Value, _mapper: &Mapper) -> Result<Option<Self>> {
        Ok(match value {
            Value::Null => Some(None),
            Value::Map(map) => Some(Some(map)),
            _ => None,
        })
    }

    fn entries(&self) -> Option<&Map> {
        self.as_ref()
    }

    fn entries_mut(&mut self) -> Option<&mut Map> {
        self.as_mut()
    }

    fn fresh() -> Option<Self> {
        Some(Some(Map::new()))
    }
}

impl<R: Record + Default> FieldType for Option<Box<R>> {
    const KIND: Kind = Kind::Pointer;

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn to_value(&self, mapper: &Mapper) -> Result<Value> {
        match self {
            Some(record) => mapper.to_map(&**record).map(Value::Map),
            None => Ok(Value::Null),
        }
    }

    fn from_value(value: Value, mapper: &Mapper) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(Some(None)),
            Value::Map(map) => {
                let mut record = Box::<R>::default();
                mapper.from_map(map, &mut *record)?;
                Ok(Some(Some(record)))
            }
            _ => Ok(None),
        }
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_deref().map(|record| record as &dyn Record)
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        self.as_deref_mut().map(|record| record as &mut dyn Record)
    }

    fn fresh() -> Option<Self> {
        Some(Some(Box::default()))
    }
}
