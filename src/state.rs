//! Shared single-writer state slots.
//!
//! Active-section and category-filter were process-wide mutable values in
//! the original portal. Here each is an explicit slot created by the
//! top-level [`crate::app::Portal`]; collaborators that only render from
//! a value get a [`SlotReader`]. Writer discipline is by interface, not
//! by the lock: the portal and its navigation coordinator keep the only
//! writable handles.

use std::sync::Arc;

use parking_lot::RwLock;

/// A single read/write value slot.
pub struct SharedSlot<T>(Arc<RwLock<T>>);

impl<T> Clone for SharedSlot<T> {
    fn clone(&self) -> Self {
        SharedSlot(Arc::clone(&self.0))
    }
}

impl<T: Copy> SharedSlot<T> {
    pub fn new(value: T) -> Self {
        SharedSlot(Arc::new(RwLock::new(value)))
    }

    pub fn get(&self) -> T {
        *self.0.read()
    }

    pub fn set(&self, value: T) {
        *self.0.write() = value;
    }

    /// Hand out a read-only view of this slot.
    pub fn reader(&self) -> SlotReader<T> {
        SlotReader(Arc::clone(&self.0))
    }
}

/// Read-only handle to a [`SharedSlot`].
pub struct SlotReader<T>(Arc<RwLock<T>>);

impl<T> Clone for SlotReader<T> {
    fn clone(&self) -> Self {
        SlotReader(Arc::clone(&self.0))
    }
}

impl<T: Copy> SlotReader<T> {
    pub fn get(&self) -> T {
        *self.0.read()
    }
}
