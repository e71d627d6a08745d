//! Sections (titled or untitled groups of entity references) and the
//! accumulator used while building them.

use serde::{Deserialize, Serialize};

use crate::extract::EntitySet;
use crate::id::{DeviceId, EntityId};

/// An entity paired with the device that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity: EntityId,
    pub device: DeviceId,
}

/// A group of entities within a dashboard view.
///
/// `title` and `subtitle` are omitted from the serialized form when absent;
/// `entities` is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub entities: Vec<EntityRef>,
}

impl Section {
    /// A section holding only entities.
    #[must_use]
    pub fn untitled(entities: Vec<EntityRef>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }

    /// A section with a title and its entities.
    #[must_use]
    pub fn titled(title: impl Into<String>, entities: Vec<EntityRef>) -> Self {
        Self {
            title: Some(title.into()),
            entities,
            ..Self::default()
        }
    }
}

/// The section currently being built while scanning a view's cards.
///
/// Entity ids are unique within the accumulator: the first occurrence is
/// kept, later ones are dropped.
#[derive(Debug, Default)]
pub struct SectionAccumulator {
    title: Option<String>,
    subtitle: Option<String>,
    entities: Vec<EntityRef>,
    members: EntitySet,
}

impl SectionAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a title, a subtitle, or any entity has been collected.
    #[must_use]
    pub fn has_open_section(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
            || self.subtitle.as_deref().is_some_and(|s| !s.is_empty())
            || self.has_entities()
    }

    #[must_use]
    pub fn has_entities(&self) -> bool {
        !self.entities.is_empty()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.subtitle = subtitle;
    }

    /// Append `entity` unless it is already part of this section.
    pub fn push(&mut self, entity: EntityRef) {
        if self.members.insert(entity.entity.clone()) {
            self.entities.push(entity);
        }
    }

    #[must_use]
    pub fn contains(&self, entity: &EntityId) -> bool {
        self.members.contains(entity)
    }

    /// Take the collected section, leaving the accumulator empty.
    ///
    /// Returns `None` (and still resets) when nothing worth emitting was
    /// collected.
    pub fn flush(&mut self) -> Option<Section> {
        let open = self.has_open_section();
        let taken = std::mem::take(self);
        open.then(|| Section {
            title: taken.title.filter(|t| !t.is_empty()),
            subtitle: taken.subtitle.filter(|s| !s.is_empty()),
            entities: taken.entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity_ref(id: &str) -> EntityRef {
        let entity = EntityId::from_str(id).unwrap();
        EntityRef {
            device: DeviceId::from(entity.clone()),
            entity,
        }
    }

    #[test]
    fn should_not_be_open_when_fresh() {
        let acc = SectionAccumulator::new();
        assert!(!acc.has_open_section());
    }

    #[test]
    fn should_not_emit_when_flushing_empty_accumulator() {
        let mut acc = SectionAccumulator::new();
        assert_eq!(acc.flush(), None);
    }

    #[test]
    fn should_not_count_empty_title_as_open() {
        let mut acc = SectionAccumulator::new();
        acc.set_title(Some(String::new()));
        assert!(!acc.has_open_section());
        assert_eq!(acc.flush(), None);
    }

    #[test]
    fn should_emit_title_only_section() {
        let mut acc = SectionAccumulator::new();
        acc.set_title(Some("Kitchen".to_string()));
        assert!(acc.has_open_section());
        assert_eq!(
            acc.flush(),
            Some(Section {
                title: Some("Kitchen".to_string()),
                subtitle: None,
                entities: vec![],
            })
        );
    }

    #[test]
    fn should_drop_duplicate_entities_keeping_first() {
        let mut acc = SectionAccumulator::new();
        acc.push(entity_ref("light.a"));
        acc.push(entity_ref("light.b"));
        acc.push(entity_ref("light.a"));
        let section = acc.flush().unwrap();
        let ids: Vec<&str> = section.entities.iter().map(|e| e.entity.as_str()).collect();
        assert_eq!(ids, vec!["light.a", "light.b"]);
    }

    #[test]
    fn should_reset_after_flush() {
        let mut acc = SectionAccumulator::new();
        acc.set_title(Some("A".to_string()));
        acc.set_subtitle(Some("B".to_string()));
        acc.push(entity_ref("light.a"));
        assert!(acc.flush().is_some());

        assert!(!acc.has_open_section());
        assert!(!acc.contains(&EntityId::from_str("light.a").unwrap()));
        assert_eq!(acc.flush(), None);
    }

    #[test]
    fn should_omit_absent_title_and_subtitle_when_serialized() {
        let section = Section::untitled(vec![entity_ref("light.a")]);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"entities": [{"entity": "light.a", "device": "light.a"}]})
        );
    }

    #[test]
    fn should_keep_empty_entities_when_serialized() {
        let section = Section::titled("Empty", vec![]);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Empty", "entities": []}));
    }
}
