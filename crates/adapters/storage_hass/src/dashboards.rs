//! [`DashboardStore`] over `lovelace_dashboards` and `lovelace.<id>`.

use serde::Deserialize;

use homecontrol_app::ports::{DashboardListing, DashboardStore};
use homecontrol_domain::config_node::ConfigNode;
use homecontrol_domain::error::{HomeControlError, NotFoundError};
use homecontrol_domain::id::DashboardId;

use crate::storage::HassStorage;

const DASHBOARDS_KEY: &str = "lovelace_dashboards";
const CONFIG_KEY_PREFIX: &str = "lovelace.";

#[derive(Deserialize)]
struct DashboardsData {
    #[serde(default)]
    items: Vec<DashboardItem>,
}

#[derive(Deserialize)]
struct DashboardItem {
    id: String,
    url_path: Option<String>,
    title: Option<String>,
}

#[derive(Deserialize)]
struct LovelaceData {
    config: Option<ConfigNode>,
}

impl DashboardItem {
    fn into_listing(self) -> Option<DashboardListing<String>> {
        let id = self.url_path.and_then(|path| path.parse::<DashboardId>().ok());
        if id.is_none() {
            tracing::debug!(storage_id = %self.id, "dashboard without url path, skipping");
        }
        Some(DashboardListing {
            id: id?,
            title: self.title.filter(|title| !title.is_empty()),
            handle: self.id,
        })
    }
}

/// Storage ids are plain file-name suffixes.
fn is_plain_key(handle: &str) -> bool {
    !handle.is_empty() && !handle.contains(['/', '\\']) && handle != "." && handle != ".."
}

impl DashboardStore for HassStorage {
    type Handle = String;

    async fn list_dashboards(&self) -> Result<Vec<DashboardListing<String>>, HomeControlError> {
        let data: Option<DashboardsData> = self.read(DASHBOARDS_KEY).await?;
        Ok(data
            .map(|data| data.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(DashboardItem::into_listing)
            .collect())
    }

    async fn load(&self, handle: &String) -> Result<ConfigNode, HomeControlError> {
        let not_found = || NotFoundError {
            entity: "Dashboard configuration",
            id: handle.clone(),
        };
        if !is_plain_key(handle) {
            return Err(not_found().into());
        }

        let key = format!("{CONFIG_KEY_PREFIX}{handle}");
        let data: Option<LovelaceData> = self.read(&key).await?;
        data.and_then(|data| data.config)
            .ok_or_else(|| HomeControlError::from(not_found()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Config;
    use serde_json::json;
    use std::path::Path;

    fn write(dir: &Path, key: &str, data: &serde_json::Value) {
        let doc = json!({"version": 1, "minor_version": 1, "key": key, "data": data});
        std::fs::write(dir.join(key), serde_json::to_string(&doc).unwrap()).unwrap();
    }

    async fn storage(dir: &Path) -> HassStorage {
        Config {
            path: dir.to_path_buf(),
        }
        .build()
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_list_dashboards_by_url_path() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            DASHBOARDS_KEY,
            &json!({"items": [
                {"id": "dashboard_home", "url_path": "dashboard-home", "title": "Home", "mode": "storage"},
                {"id": "dashboard_bare", "url_path": "dashboard-bare"},
                {"id": "dashboard_broken"},
            ]}),
        );
        let storage = storage(dir.path()).await;

        let listings = storage.list_dashboards().await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id.as_str(), "dashboard-home");
        assert_eq!(listings[0].title.as_deref(), Some("Home"));
        assert_eq!(listings[0].handle, "dashboard_home");
        assert_eq!(listings[1].title, None);
    }

    #[tokio::test]
    async fn should_list_nothing_without_dashboards_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(dir.path()).await;
        assert!(storage.list_dashboards().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_load_config_tree() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lovelace.dashboard_home",
            &json!({"config": {"views": [{"title": "Main", "cards": []}]}}),
        );
        let storage = storage(dir.path()).await;

        let config = storage.load(&"dashboard_home".to_string()).await.unwrap();
        assert_eq!(config.items("views").len(), 1);
    }

    #[tokio::test]
    async fn should_report_not_found_when_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(dir.path()).await;

        let result = storage.load(&"dashboard_gone".to_string()).await;
        assert!(matches!(result, Err(HomeControlError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_report_not_found_when_config_is_null() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "lovelace.dashboard_new", &json!({"config": null}));
        let storage = storage(dir.path()).await;

        let result = storage.load(&"dashboard_new".to_string()).await;
        assert!(matches!(result, Err(HomeControlError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_refuse_handles_escaping_storage_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(dir.path()).await;

        let result = storage.load(&"../secrets".to_string()).await;
        assert!(matches!(result, Err(HomeControlError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_report_storage_error_for_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lovelace.dashboard_bad"), "{").unwrap();
        let storage = storage(dir.path()).await;

        let result = storage.load(&"dashboard_bad".to_string()).await;
        assert!(matches!(result, Err(HomeControlError::Storage(_))));
    }
}
