//! Dashboard store port: where raw dashboard configuration comes from.

use std::future::Future;

use homecontrol_domain::config_node::ConfigNode;
use homecontrol_domain::error::HomeControlError;
use homecontrol_domain::id::DashboardId;

/// A dashboard known to the store, not yet loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardListing<H> {
    pub id: DashboardId,
    /// Human-readable title, when the store knows one.
    pub title: Option<String>,
    /// Opaque store-specific handle passed back to [`DashboardStore::load`].
    pub handle: H,
}

/// Source of dashboard configuration trees.
pub trait DashboardStore {
    /// Store-specific reference to a dashboard.
    type Handle: Send + Sync;

    /// List every dashboard the store knows about, in store order.
    fn list_dashboards(
        &self,
    ) -> impl Future<Output = Result<Vec<DashboardListing<Self::Handle>>, HomeControlError>> + Send;

    /// Load the raw configuration tree of one dashboard.
    ///
    /// Fails with [`HomeControlError::NotFound`] when the dashboard has no
    /// stored configuration.
    fn load(
        &self,
        handle: &Self::Handle,
    ) -> impl Future<Output = Result<ConfigNode, HomeControlError>> + Send;
}
