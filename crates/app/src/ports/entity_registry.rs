//! Entity registry port: entity → device ownership.

use std::future::Future;

use homecontrol_domain::error::HomeControlError;
use homecontrol_domain::registry::DeviceIndex;

/// Source of entity → device ownership.
pub trait EntityRegistry {
    /// Read the current registry into a lookup snapshot.
    fn device_index(&self) -> impl Future<Output = Result<DeviceIndex, HomeControlError>> + Send;
}
