use std::fmt;

use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// Stable identifier of an item, e.g. `rusty_key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create an item ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Narrative tags. None of these change generic mechanics; they are read by
/// the win check and by story rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemTag {
    /// Plot-critical item.
    Special,
    /// One half of the win condition.
    Victory,
    /// The other half of the win condition.
    Ultimate,
}

/// An object that can lie in a room or be carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name, e.g. "Rusty Key".
    pub name: String,
    /// Text shown when the item is examined.
    pub description: String,
    /// Whether `take` may move the item into the inventory.
    pub can_take: bool,
    /// Room this item is meant to be used on, if any.
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_target: Option<RoomId>,
    /// Narrative tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ItemTag>,
}

impl Item {
    /// Create a takeable item with no tags.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            can_take: true,
            use_target: None,
            tags: Vec::new(),
        }
    }

    /// Mark the item as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.can_take = false;
        self
    }

    /// Set the room this item is used on.
    pub fn used_on(mut self, room: impl Into<RoomId>) -> Self {
        self.use_target = Some(room.into());
        self
    }

    /// Add a narrative tag.
    pub fn with_tag(mut self, tag: ItemTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Check whether the item carries a tag.
    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }
}
