//! # homecontrol-domain
//!
//! Pure domain model for the homecontrol dashboard normalizer.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Model raw dashboard configuration as an explicit tree ([`config_node`])
//! - Extract **entity references** from arbitrary card configurations
//! - Group a view's cards into titled/untitled **sections** of entities
//! - Assemble **views** and **badges** of a dashboard into the normalized shape
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//! Device resolution is a plain synchronous capability ([`registry::DeviceLookup`])
//! injected by the caller.

pub mod error;
pub mod id;
pub mod time;

pub mod card;
pub mod config_node;
pub mod dashboard;
pub mod extract;
pub mod grouping;
pub mod registry;
pub mod section;
