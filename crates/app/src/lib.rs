//! # homecontrol-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DashboardStore`: list dashboards and load their raw configuration
//!   - `EntityRegistry`: snapshot of which device owns which entity
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DashboardService`: normalize one or every dashboard
//! - Orchestrate domain logic without knowing *how* configuration is stored
//!
//! ## Dependency rule
//! Depends on `homecontrol-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
