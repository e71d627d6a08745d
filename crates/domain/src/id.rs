//! Typed identifier newtypes.
//!
//! [`DeviceId`] and [`DashboardId`] are opaque non-empty strings.
//! [`EntityId`] additionally enforces the `domain.object_id` lexical form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

macro_rules! define_opaque_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        define_id!($(#[doc = $doc])* $name);

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.is_empty() {
                    return Err(ValidationError::EmptyIdentifier);
                }
                Ok(Self(value))
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s.to_string())
            }
        }
    };
}

define_id!(
    /// Identifier of a controllable/observable point, e.g. `light.kitchen`.
    EntityId
);

define_opaque_id!(
    /// Identifier of the physical or logical device owning entities.
    DeviceId
);

define_opaque_id!(
    /// Identifier of a dashboard (its url path).
    DashboardId
);

static ENTITY_ID_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z_][a-z0-9_]*\.[a-z0-9_.]+$").expect("entity id pattern is valid")
});

static ENTITY_ID_SCAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z_][a-z0-9_]*\.[a-z0-9_.]+").expect("entity id pattern is valid")
});

impl EntityId {
    /// Whether `candidate` matches the entity id form in full.
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        ENTITY_ID_EXACT.is_match(candidate)
    }

    /// Parse `candidate` if it is a well-formed entity id, `None` otherwise.
    #[must_use]
    pub fn parse(candidate: &str) -> Option<Self> {
        Self::is_valid(candidate).then(|| Self(candidate.to_string()))
    }

    /// Every non-overlapping entity id occurring inside `text`, left to right.
    pub fn scan(text: &str) -> impl Iterator<Item = EntityId> + '_ {
        ENTITY_ID_SCAN
            .find_iter(text)
            .map(|found| Self(found.as_str().to_string()))
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidEntityId(value))
        }
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

/// An entity with no registered device stands in as its own device.
impl From<EntityId> for DeviceId {
    fn from(entity: EntityId) -> Self {
        Self(entity.0)
    }
}
