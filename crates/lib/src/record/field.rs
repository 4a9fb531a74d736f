//! Accessors over a single field of a single record instance.

use std::fmt;

use super::{Kind, Slot};
use crate::{MapError, Mapper, Result, Value};

/// Static description of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDesc {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    exported: bool,
}

impl FieldDesc {
    /// Describes a field by its declared name, its `scheme -> tag` table, and
    /// whether it is visible outside its module.
    pub const fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        exported: bool,
    ) -> Self {
        Self {
            name,
            tags,
            exported,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Looks up the tag string for `scheme`.
    pub fn lookup(&self, scheme: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(candidate, _)| *candidate == scheme)
            .map(|(_, tag)| *tag)
    }
}

/// Read accessor for one field.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    desc: FieldDesc,
    slot: &'a dyn Slot,
}

impl<'a> Field<'a> {
    pub fn new(desc: FieldDesc, slot: &'a dyn Slot) -> Self {
        Self { desc, slot }
    }

    pub fn desc(&self) -> FieldDesc {
        self.desc
    }

    /// Declared field name.
    pub fn name(&self) -> &'static str {
        self.desc.name
    }

    pub fn has_tag(&self, scheme: &str) -> bool {
        self.desc.lookup(scheme).is_some()
    }

    /// Raw tag string for `scheme`, empty when the field has none.
    pub fn tag(&self, scheme: &str) -> &'static str {
        self.desc.lookup(scheme).unwrap_or_default()
    }

    pub fn is_exported(&self) -> bool {
        self.desc.exported
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn is_zero(&self) -> bool {
        self.slot.is_zero()
    }

    pub fn value(&self, mapper: &Mapper) -> Result<Value> {
        self.slot.value(mapper)
    }

    pub fn slot(&self) -> &'a dyn Slot {
        self.slot
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.desc.name)
            .field("kind", &self.slot.kind())
            .field("type", &self.slot.type_name())
            .finish()
    }
}

/// Write accessor for one field.
pub struct FieldMut<'a> {
    desc: FieldDesc,
    slot: &'a mut dyn Slot,
}

impl<'a> FieldMut<'a> {
    pub fn new(desc: FieldDesc, slot: &'a mut dyn Slot) -> Self {
        Self { desc, slot }
    }

    pub fn desc(&self) -> FieldDesc {
        self.desc
    }

    pub fn name(&self) -> &'static str {
        self.desc.name
    }

    pub fn is_exported(&self) -> bool {
        self.desc.exported
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn is_zero(&self) -> bool {
        self.slot.is_zero()
    }

    pub fn value(&self, mapper: &Mapper) -> Result<Value> {
        self.slot.value(mapper)
    }

    /// Assigns `value` to the field.
    ///
    /// Unexported fields are never written, and a value whose kind does not fit
    /// the field leaves it unchanged. Both cases are reported as [`MapError`]s;
    /// the converters decide whether to surface them.
    pub fn set(&mut self, value: Value, mapper: &Mapper) -> Result<()> {
        if !self.desc.exported {
            return Err(MapError::FieldNotSettable {
                field: self.desc.name.to_string(),
            }
            .into());
        }

        let found = value.type_name();
        if self.slot.assign(value, mapper)? {
            Ok(())
        } else {
            Err(MapError::KindMismatch {
                field: self.desc.name.to_string(),
                expected: self.slot.type_name().to_string(),
                found: found.to_string(),
            }
            .into())
        }
    }

    pub fn slot_mut(&mut self) -> &mut dyn Slot {
        &mut *self.slot
    }

    pub fn into_slot(self) -> &'a mut dyn Slot {
        self.slot
    }
}

impl fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMut")
            .field("name", &self.desc.name)
            .field("kind", &self.slot.kind())
            .field("type", &self.slot.type_name())
            .finish()
    }
}
