//! Run-once installation of lazily allocated containers.
//!
//! When an inline field is zero (a `None` pointer, an empty map, a zero
//! record), the mapping builder constructs a fresh instance to map against but
//! leaves the field itself alone. A [`FieldInitializer`] holds that instance
//! until the first write routed through the field, installs it exactly once,
//! and is shared by every route that can trigger the installation.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, Once, PoisonError},
};

use crate::{FieldDesc, record::Slot};

/// Installs a pre-built instance into its owning field on first use.
pub struct FieldInitializer {
    target: FieldDesc,
    once: Once,
    instance: Mutex<Option<Box<dyn Slot>>>,
}

impl FieldInitializer {
    /// Creates an initializer that will install `instance` into the field
    /// described by `target`.
    pub fn new(target: FieldDesc, instance: Box<dyn Slot>) -> Self {
        Self {
            target,
            once: Once::new(),
            instance: Mutex::new(Some(instance)),
        }
    }

    /// Descriptor of the owning field.
    pub fn target(&self) -> FieldDesc {
        self.target
    }

    /// Returns true once the instance has been installed.
    pub fn is_installed(&self) -> bool {
        self.once.is_completed()
    }

    /// Installs the pending instance into `slot` unless that already happened.
    ///
    /// Concurrent callers block until the first one has finished installing.
    pub fn ensure_init(&self, slot: &mut dyn Slot) {
        self.once.call_once(|| {
            let Some(instance) = self.lock().take() else {
                return;
            };

            if slot.install(instance) {
                tracing::trace!(field = self.target.name(), "Installed lazily allocated container");
            } else {
                tracing::warn!(
                    field = self.target.name(),
                    expected = slot.type_name(),
                    "Lazy container does not match its owning field"
                );
            }
        });
    }

    /// Runs `f` against the pending instance.
    ///
    /// Returns `None` once the instance has been installed.
    pub fn with_instance<T>(&self, f: impl FnOnce(FieldDesc, &dyn Slot) -> T) -> Option<T> {
        let guard = self.lock();
        guard.as_deref().map(|instance| f(self.target, instance))
    }

    fn lock(&self) -> MutexGuard<'_, Option<Box<dyn Slot>>> {
        self.instance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for FieldInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInitializer")
            .field("target", &self.target.name())
            .field("installed", &self.is_installed())
            .finish()
    }
}
