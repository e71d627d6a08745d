//! # homecontrol-adapter-storage-hass
//!
//! Reads dashboards and the entity registry straight from a Home Assistant
//! `.storage` directory.
//!
//! ## Responsibilities
//! - Implement `DashboardStore` over `lovelace_dashboards` and `lovelace.<id>`
//! - Implement `EntityRegistry` over `core.entity_registry`
//! - Map between Home Assistant's storage documents and domain types
//!
//! Files are re-read on every call; nothing is cached.
//!
//! ## Dependency rule
//! Depends on `homecontrol-app` (for port traits) and `homecontrol-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod dashboards;
pub mod error;
pub mod registry;
pub mod storage;

pub use error::StorageError;
pub use storage::{Config, HassStorage};
