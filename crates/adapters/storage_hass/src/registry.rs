//! [`EntityRegistry`] over `core.entity_registry`.

use serde::Deserialize;

use homecontrol_app::ports::EntityRegistry;
use homecontrol_domain::error::HomeControlError;
use homecontrol_domain::id::{DeviceId, EntityId};
use homecontrol_domain::registry::DeviceIndex;

use crate::storage::HassStorage;

const REGISTRY_KEY: &str = "core.entity_registry";

#[derive(Deserialize)]
struct RegistryData {
    #[serde(default)]
    entities: Vec<RegistryEntry>,
}

#[derive(Deserialize)]
struct RegistryEntry {
    entity_id: String,
    device_id: Option<String>,
}

impl RegistryEntry {
    fn into_pair(self) -> Option<(EntityId, DeviceId)> {
        let entity = EntityId::parse(&self.entity_id)?;
        let device = self.device_id?.parse::<DeviceId>().ok()?;
        Some((entity, device))
    }
}

impl EntityRegistry for HassStorage {
    async fn device_index(&self) -> Result<DeviceIndex, HomeControlError> {
        let data: Option<RegistryData> = self.read(REGISTRY_KEY).await?;
        let index: DeviceIndex = data
            .map(|data| data.entities)
            .unwrap_or_default()
            .into_iter()
            .filter_map(RegistryEntry::into_pair)
            .collect();
        tracing::debug!(entries = index.len(), "loaded entity registry");
        Ok(index)
    }
}
