//! Entity → device resolution.

use std::collections::HashMap;

use crate::id::{DeviceId, EntityId};
use crate::section::EntityRef;

/// Capability answering "which device owns this entity?".
pub trait DeviceLookup {
    /// The device registered for `entity`, if any.
    fn device_for(&self, entity: &EntityId) -> Option<DeviceId>;

    /// Pair `entity` with its device, falling back to the entity itself.
    fn resolve(&self, entity: EntityId) -> EntityRef {
        let device = self
            .device_for(&entity)
            .unwrap_or_else(|| DeviceId::from(entity.clone()));
        EntityRef { entity, device }
    }
}

impl<T: DeviceLookup + ?Sized> DeviceLookup for &T {
    fn device_for(&self, entity: &EntityId) -> Option<DeviceId> {
        (**self).device_for(entity)
    }
}

/// A snapshot of the entity registry, keyed by entity id.
#[derive(Debug, Clone, Default)]
pub struct DeviceIndex {
    devices: HashMap<EntityId, DeviceId>,
}

impl DeviceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `entity` belongs to `device`, replacing any earlier entry.
    pub fn insert(&mut self, entity: EntityId, device: DeviceId) {
        self.devices.insert(entity, device);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceLookup for DeviceIndex {
    fn device_for(&self, entity: &EntityId) -> Option<DeviceId> {
        self.devices.get(entity).cloned()
    }
}

impl FromIterator<(EntityId, DeviceId)> for DeviceIndex {
    fn from_iter<I: IntoIterator<Item = (EntityId, DeviceId)>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}
