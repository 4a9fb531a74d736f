//! Paths from a root record to a mapped field.
//!
//! Inlining flattens nested fields into the parent's key space, so a mapped
//! name may live several records deep. A [`Route`] records the field position
//! at each level, plus the [`FieldInitializer`] of any level whose container
//! had not been allocated when the mappings were built.

use std::sync::Arc;

use super::FieldInitializer;
use crate::{Field, FieldMut, MapError, Record};

#[derive(Debug, Clone)]
pub(crate) struct Route {
    index: usize,
    initializer: Option<Arc<FieldInitializer>>,
    next: Option<Box<Route>>,
}

impl Route {
    /// Route to field `index` of the record itself.
    pub(crate) fn field(index: usize) -> Self {
        Self {
            index,
            initializer: None,
            next: None,
        }
    }

    /// Route through field `index`, optionally lazily initialized, then on
    /// along `next` inside the record it holds.
    pub(crate) fn through(
        index: usize,
        initializer: Option<Arc<FieldInitializer>>,
        next: Option<Route>,
    ) -> Self {
        Self {
            index,
            initializer,
            next: next.map(Box::new),
        }
    }

    /// Returns true if any level of the route waits on an initializer.
    pub(crate) fn is_lazy(&self) -> bool {
        self.initializer.is_some() || self.next.as_ref().is_some_and(|next| next.is_lazy())
    }

    /// Runs `f` on the field at the end of the route.
    ///
    /// Containers that are not installed yet are read from their pending
    /// instance, so a read never allocates anything. Returns `None` when a
    /// container along the way is absent.
    pub(crate) fn read<T>(&self, record: &dyn Record, f: impl FnOnce(Field<'_>) -> T) -> Option<T> {
        if let Some(initializer) = &self.initializer
            && !initializer.is_installed()
        {
            return initializer
                .with_instance(|desc, instance| self.descend(Field::new(desc, instance), f))
                .flatten();
        }

        let field = record.fields().into_iter().nth(self.index)?;
        self.descend(field, f)
    }

    fn descend<T>(&self, field: Field<'_>, f: impl FnOnce(Field<'_>) -> T) -> Option<T> {
        match &self.next {
            None => Some(f(field)),
            Some(next) => next.read(field.slot().record()?, f),
        }
    }

    /// Runs `f` on the field at the end of the route, installing every lazy
    /// container along the way first.
    pub(crate) fn write<T>(
        &self,
        record: &mut dyn Record,
        f: impl FnOnce(FieldMut<'_>) -> T,
    ) -> Result<T, MapError> {
        let mut field = record
            .fields_mut()
            .into_iter()
            .nth(self.index)
            .ok_or_else(|| MapError::FieldUnreachable {
                field: format!("#{}", self.index),
            })?;

        // Containers behind unexported fields are never allocated or entered
        if (self.initializer.is_some() || self.next.is_some()) && !field.is_exported() {
            return Err(MapError::FieldNotSettable {
                field: field.name().to_string(),
            });
        }

        if let Some(initializer) = &self.initializer {
            initializer.ensure_init(field.slot_mut());
        }

        let Some(next) = &self.next else {
            return Ok(f(field));
        };

        let name = field.name();
        let nested = field
            .into_slot()
            .record_mut()
            .ok_or_else(|| MapError::FieldUnreachable {
                field: name.to_string(),
            })?;
        next.write(nested, f)
    }
}
