use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Stable identifier of a room, e.g. `entrance`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Create a room ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction label of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// All directions, in display order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a full direction word (`north`, `up`, ...).
    pub fn from_word(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
    }

    /// Parse a direction word or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" => Some(Self::North),
            "s" => Some(Self::South),
            "e" => Some(Self::East),
            "w" => Some(Self::West),
            "u" => Some(Self::Up),
            "d" => Some(Self::Down),
            other => Self::from_word(other),
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A labelled passage from one room to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Direction label shown to the player.
    pub direction: Direction,
    /// Destination room.
    pub to: RoomId,
}

/// A location in the school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier.
    pub id: RoomId,
    /// Display name, e.g. "Main Corridor".
    pub name: String,
    /// Text shown when the room is described.
    pub description: String,
    /// Exits in the order they are listed to the player.
    #[serde(default)]
    pub exits: Vec<Exit>,
    /// Items lying here, in pickup-search order.
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Character name tokens, e.g. `ghost_student`.
    #[serde(default)]
    pub characters: Vec<String>,
    /// Entry needs a key item.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub locked: bool,
    /// Entry needs the map to have been found.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    /// Entry needs this item in the inventory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_item: Option<ItemId>,
}

impl Room {
    /// Create an open room with no exits, items, or characters.
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            characters: Vec::new(),
            locked: false,
            hidden: false,
            requires_item: None,
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: Direction, to: impl Into<RoomId>) -> Self {
        self.set_exit(direction, to.into());
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.place_item(item.into());
        self
    }

    /// Add a character.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Mark the room as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Mark the room as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Require an item to enter.
    pub fn requires(mut self, item: impl Into<ItemId>) -> Self {
        self.requires_item = Some(item.into());
        self
    }

    /// Destination of the exit in `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| &e.to)
    }

    /// Add or redirect an exit. A new direction is appended to the end of
    /// the listing; an existing one keeps its position.
    pub fn set_exit(&mut self, direction: Direction, to: RoomId) {
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.to = to,
            None => self.exits.push(Exit { direction, to }),
        }
    }

    /// Check whether an item lies here.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    /// Put an item here. Returns `false` if it was already present.
    pub fn place_item(&mut self, item: ItemId) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item from this room.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        if let Some(pos) = self.items.iter().position(|id| id == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether a character is present. Tokens compare by
    /// [`character_key`], so `Guard` and `guard` name the same character.
    pub fn has_character(&self, name: &str) -> bool {
        let key = character_key(name);
        self.characters.iter().any(|c| character_key(c) == key)
    }
}

/// Lowercase a character name and join its words with `_`.
pub fn character_key(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_words_and_abbreviations() {
        assert_eq!(Direction::from_word("north"), Some(Direction::North));
        assert_eq!(Direction::from_word("n"), None);
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("DOWN"), Some(Direction::Down));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn exits_keep_insertion_order() {
        let mut room = Room::new("office", "Office", "")
            .with_exit(Direction::South, "corridor")
            .with_exit(Direction::North, "attic");

        room.set_exit(Direction::Down, RoomId::new("cellar"));
        room.set_exit(Direction::South, RoomId::new("hall"));

        let order: Vec<_> = room.exits.iter().map(|e| e.direction).collect();
        assert_eq!(
            order,
            vec![Direction::South, Direction::North, Direction::Down]
        );
        assert_eq!(room.exit(Direction::South), Some(&RoomId::new("hall")));
        assert_eq!(room.exit(Direction::West), None);
    }

    #[test]
    fn items_never_duplicate() {
        let mut room = Room::new("library", "Library", "").with_item("book");
        assert!(!room.place_item(ItemId::new("book")));
        assert_eq!(room.items.len(), 1);

        assert!(room.remove_item(&ItemId::new("book")));
        assert!(!room.remove_item(&ItemId::new("book")));
        assert!(room.items.is_empty());
    }

    #[test]
    fn characters_match_regardless_of_case() {
        let room = Room::new("hall", "Hall", "")
            .with_character("Guard")
            .with_character("ghost_student");
        assert!(room.has_character("guard"));
        assert!(room.has_character("GUARD"));
        assert!(room.has_character("Ghost Student"));
        assert!(!room.has_character("ghost"));
        assert_eq!(character_key("  Ancient   Dragon "), "ancient_dragon");
    }

    #[test]
    fn flags_skipped_when_false() {
        let room = Room::new("hall", "Hall", "Plain.");
        let json = serde_json::to_value(&room).unwrap();
        assert!(json.get("locked").is_none());
        assert!(json.get("hidden").is_none());

        let json = serde_json::to_value(room.locked()).unwrap();
        assert_eq!(json["locked"], true);
    }
}
