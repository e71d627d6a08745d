//! # homecontrol-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the normalized dashboards as JSON
//!   (`/api/homecontrol/dashboard`, `/api/homecontrol/dashboards`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Turn "no dashboard selected" and "dashboard not found" into 404s
//!
//! ## Dependency rule
//! Depends on `homecontrol-app` (for port traits and services) and
//! `homecontrol-domain` (for domain types used in responses). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
