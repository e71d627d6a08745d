//! Dashboard service: normalizes stored dashboards into sections.
//!
//! Nothing is cached: every call lists the store, snapshots the registry,
//! and rebuilds the result from scratch.

use homecontrol_domain::dashboard::{DashboardDocument, NormalizedDashboards, View, assemble_dashboard};
use homecontrol_domain::error::{HomeControlError, NotFoundError};
use homecontrol_domain::id::DashboardId;
use homecontrol_domain::registry::DeviceIndex;
use homecontrol_domain::time::now;

use crate::ports::{DashboardListing, DashboardStore, EntityRegistry};

/// Application service producing normalized dashboards.
pub struct DashboardService<S, R> {
    store: S,
    registry: R,
}

impl<S: DashboardStore, R: EntityRegistry> DashboardService<S, R> {
    /// Create a new service backed by the given store and registry.
    pub fn new(store: S, registry: R) -> Self {
        Self { store, registry }
    }

    /// Normalize every dashboard the store lists.
    ///
    /// Dashboards whose configuration cannot be loaded are left out.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot list dashboards or the
    /// registry cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn normalize_all(&self) -> Result<NormalizedDashboards, HomeControlError> {
        let listings = self.store.list_dashboards().await?;
        let devices = self.registry.device_index().await?;

        let mut dashboards = NormalizedDashboards::new();
        for listing in &listings {
            if let Some(views) = self.assemble(listing, &devices).await {
                dashboards.insert(listing.id.clone(), views);
            }
        }
        tracing::debug!(count = dashboards.len(), "normalized dashboards");
        Ok(dashboards)
    }

    /// Normalize a single dashboard.
    ///
    /// The result holds at most one entry; it is empty when `id` is not
    /// listed or fails to load.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot list dashboards or the
    /// registry cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn normalize(&self, id: &DashboardId) -> Result<NormalizedDashboards, HomeControlError> {
        let mut dashboards = NormalizedDashboards::new();
        if let Some((listing, views)) = self.find(id).await? {
            dashboards.insert(listing.id, views);
        }
        Ok(dashboards)
    }

    /// Build the served document for dashboard `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeControlError::NotFound`] when `id` is not listed or its
    /// configuration cannot be loaded, or an error from the store or registry.
    #[tracing::instrument(skip(self))]
    pub async fn document(&self, id: &DashboardId) -> Result<DashboardDocument, HomeControlError> {
        let (listing, views) = self.find(id).await?.ok_or_else(|| NotFoundError {
            entity: "Dashboard",
            id: id.to_string(),
        })?;

        Ok(DashboardDocument {
            dashboard_title: listing.title.unwrap_or_else(|| listing.id.to_string()),
            dashboard_id: listing.id,
            generated_at: now(),
            views,
        })
    }

    async fn find(
        &self,
        id: &DashboardId,
    ) -> Result<Option<(DashboardListing<S::Handle>, Vec<View>)>, HomeControlError> {
        let Some(listing) = self
            .store
            .list_dashboards()
            .await?
            .into_iter()
            .find(|listing| &listing.id == id)
        else {
            tracing::debug!(dashboard = %id, "dashboard not listed");
            return Ok(None);
        };

        let devices = self.registry.device_index().await?;
        Ok(self
            .assemble(&listing, &devices)
            .await
            .map(|views| (listing, views)))
    }

    async fn assemble(
        &self,
        listing: &DashboardListing<S::Handle>,
        devices: &DeviceIndex,
    ) -> Option<Vec<View>> {
        match self.store.load(&listing.handle).await {
            Ok(config) => Some(assemble_dashboard(&config, devices)),
            Err(err) if err.is_not_found() => {
                tracing::debug!(dashboard = %listing.id, "dashboard has no stored configuration, skipping");
                None
            }
            Err(err) => {
                tracing::warn!(dashboard = %listing.id, error = %err, "failed to load dashboard, skipping");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homecontrol_domain::config_node::ConfigNode;
    use homecontrol_domain::id::{DeviceId, EntityId};
    use std::collections::HashMap;
    use std::future::Future;
    use std::str::FromStr;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct BrokenStorage;

    impl std::fmt::Display for BrokenStorage {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("disk on fire")
        }
    }

    impl std::error::Error for BrokenStorage {}

    enum Stored {
        Config(serde_json::Value),
        Missing,
        Broken,
    }

    #[derive(Default)]
    struct InMemoryStore {
        dashboards: Vec<(DashboardId, Option<String>)>,
        configs: HashMap<String, Stored>,
        loads: Mutex<Vec<String>>,
    }

    impl InMemoryStore {
        fn with(mut self, id: &str, title: Option<&str>, stored: Stored) -> Self {
            self.dashboards
                .push((DashboardId::from_str(id).unwrap(), title.map(str::to_string)));
            self.configs.insert(id.to_string(), stored);
            self
        }
    }

    impl DashboardStore for InMemoryStore {
        type Handle = String;

        fn list_dashboards(
            &self,
        ) -> impl Future<Output = Result<Vec<DashboardListing<String>>, HomeControlError>> + Send
        {
            let listings = self
                .dashboards
                .iter()
                .map(|(id, title)| DashboardListing {
                    id: id.clone(),
                    title: title.clone(),
                    handle: id.to_string(),
                })
                .collect();
            async { Ok(listings) }
        }

        fn load(
            &self,
            handle: &String,
        ) -> impl Future<Output = Result<ConfigNode, HomeControlError>> + Send {
            self.loads.lock().unwrap().push(handle.clone());
            let result = match self.configs.get(handle) {
                Some(Stored::Config(value)) => Ok(ConfigNode::from(value.clone())),
                Some(Stored::Broken) => Err(HomeControlError::Storage(Box::new(BrokenStorage))),
                Some(Stored::Missing) | None => Err(HomeControlError::from(NotFoundError {
                    entity: "Dashboard",
                    id: handle.clone(),
                })),
            };
            async { result }
        }
    }

    #[derive(Default)]
    struct FakeRegistry {
        devices: Vec<(&'static str, &'static str)>,
    }

    impl EntityRegistry for FakeRegistry {
        fn device_index(&self) -> impl Future<Output = Result<DeviceIndex, HomeControlError>> + Send {
            let index = self
                .devices
                .iter()
                .map(|(entity, device)| {
                    (
                        EntityId::from_str(entity).unwrap(),
                        DeviceId::from_str(device).unwrap(),
                    )
                })
                .collect();
            async { Ok(index) }
        }
    }

    fn kitchen_config() -> Stored {
        Stored::Config(serde_json::json!({
            "title": "Kitchen",
            "views": [{
                "title": "Main",
                "cards": [
                    {"type": "heading", "heading": "Lights"},
                    {"type": "tile", "entity": "light.ceiling"},
                ],
            }],
        }))
    }

    fn dashboard(id: &str) -> DashboardId {
        DashboardId::from_str(id).unwrap()
    }

    #[tokio::test]
    async fn should_normalize_every_loadable_dashboard() {
        let store = InMemoryStore::default()
            .with("kitchen", Some("Kitchen"), kitchen_config())
            .with("missing", None, Stored::Missing)
            .with("broken", None, Stored::Broken)
            .with("empty", None, Stored::Config(serde_json::json!({})));
        let svc = DashboardService::new(store, FakeRegistry::default());

        let all = svc.normalize_all().await.unwrap();
        let ids: Vec<&str> = all.keys().map(DashboardId::as_str).collect();
        assert_eq!(ids, vec!["empty", "kitchen"]);
        assert!(all[&dashboard("empty")].is_empty());
        assert_eq!(all[&dashboard("kitchen")][0].sections.len(), 1);
    }

    #[tokio::test]
    async fn should_resolve_devices_from_registry() {
        let store = InMemoryStore::default().with("kitchen", None, kitchen_config());
        let registry = FakeRegistry {
            devices: vec![("light.ceiling", "hue-1")],
        };
        let svc = DashboardService::new(store, registry);

        let all = svc.normalize(&dashboard("kitchen")).await.unwrap();
        let entity = &all[&dashboard("kitchen")][0].sections[0].entities[0];
        assert_eq!(entity.device.as_str(), "hue-1");
    }

    #[tokio::test]
    async fn should_only_load_requested_dashboard() {
        let store = InMemoryStore::default()
            .with("kitchen", None, kitchen_config())
            .with("garage", None, kitchen_config());
        let svc = DashboardService::new(store, FakeRegistry::default());

        let one = svc.normalize(&dashboard("garage")).await.unwrap();
        assert_eq!(one.len(), 1);
        assert!(one.contains_key(&dashboard("garage")));
        assert_eq!(*svc.store.loads.lock().unwrap(), vec!["garage".to_string()]);
    }

    #[tokio::test]
    async fn should_return_empty_mapping_for_unknown_dashboard() {
        let svc = DashboardService::new(InMemoryStore::default(), FakeRegistry::default());
        let result = svc.normalize(&dashboard("nope")).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_build_document_with_listing_title() {
        let store = InMemoryStore::default().with("kitchen", Some("Kitchen"), kitchen_config());
        let svc = DashboardService::new(store, FakeRegistry::default());

        let doc = svc.document(&dashboard("kitchen")).await.unwrap();
        assert_eq!(doc.dashboard_id, dashboard("kitchen"));
        assert_eq!(doc.dashboard_title, "Kitchen");
        assert_eq!(doc.views.len(), 1);
        assert_eq!(doc.views[0].title.as_deref(), Some("Main"));
    }

    #[tokio::test]
    async fn should_fall_back_to_id_for_document_title() {
        let store = InMemoryStore::default().with("garage", None, kitchen_config());
        let svc = DashboardService::new(store, FakeRegistry::default());

        let doc = svc.document(&dashboard("garage")).await.unwrap();
        assert_eq!(doc.dashboard_title, "garage");
    }

    #[tokio::test]
    async fn should_return_not_found_document_when_config_missing() {
        let store = InMemoryStore::default().with("missing", None, Stored::Missing);
        let svc = DashboardService::new(store, FakeRegistry::default());

        let result = svc.document(&dashboard("missing")).await;
        assert!(matches!(result, Err(HomeControlError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_document_when_not_listed() {
        let svc = DashboardService::new(InMemoryStore::default(), FakeRegistry::default());
        let result = svc.document(&dashboard("ghost")).await;
        assert!(matches!(result, Err(HomeControlError::NotFound(_))));
    }
}
