//! Dashboard assembly: views, their sections, and their badges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config_node::ConfigNode;
use crate::extract::extract_entities;
use crate::grouping::group_cards;
use crate::id::{DashboardId, EntityId};
use crate::registry::DeviceLookup;
use crate::section::{EntityRef, Section};
use crate::time::Timestamp;

/// Every normalized dashboard, keyed by id.
pub type NormalizedDashboards = BTreeMap<DashboardId, Vec<View>>;

/// One normalized dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub path: String,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<Badge>,
}

/// A compact entity summary attached to a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityRef>,
}

/// The document served for a single selected dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDocument {
    pub dashboard_id: DashboardId,
    pub dashboard_title: String,
    pub generated_at: Timestamp,
    pub views: Vec<View>,
}

/// Normalize every view declared by a dashboard configuration.
#[must_use]
pub fn assemble_dashboard<L: DeviceLookup>(config: &ConfigNode, devices: &L) -> Vec<View> {
    config
        .items("views")
        .iter()
        .enumerate()
        .map(|(index, view)| assemble_view(index, view, devices))
        .collect()
}

/// Normalize the view found at position `index` of its dashboard.
#[must_use]
pub fn assemble_view<L: DeviceLookup>(index: usize, view: &ConfigNode, devices: &L) -> View {
    let sections = if is_sectioned(view) {
        view.items("sections")
            .iter()
            .flat_map(|section| group_cards(section.items("cards"), devices))
            .collect()
    } else {
        group_cards(view.items("cards"), devices)
    };

    View {
        title: view.text("title").map(str::to_string),
        path: view
            .text("path")
            .map_or_else(|| index.to_string(), str::to_string),
        sections,
        badges: view
            .items("badges")
            .iter()
            .filter_map(|badge| normalize_badge(badge, devices))
            .collect(),
    }
}

/// A view laid out as declared sections, each with its own cards.
fn is_sectioned(view: &ConfigNode) -> bool {
    view.kind() == "sections" || view.has_sequence("sections")
}

/// Normalize one badge; `None` when it carries neither a title nor an entity.
#[must_use]
pub fn normalize_badge<L: DeviceLookup>(badge: &ConfigNode, devices: &L) -> Option<Badge> {
    let title = badge
        .non_empty_text("name")
        .or_else(|| badge.non_empty_text("title"))
        .map(str::to_string);

    let mut entities: Vec<EntityId> = extract_entities(badge).into_iter().collect();
    if entities.is_empty() {
        entities.extend(badge.as_text().and_then(EntityId::parse));
    }

    let badge = Badge {
        title,
        entities: entities
            .into_iter()
            .map(|entity| devices.resolve(entity))
            .collect(),
    };
    (badge.title.is_some() || !badge.entities.is_empty()).then_some(badge)
}
