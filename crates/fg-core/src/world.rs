use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::item::{Item, ItemId, ItemTag};
use crate::room::{Room, RoomId};

/// Metadata about the world itself and the rooms and items the rules of
/// movement single out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title shown in banners.
    pub title: String,
    /// Room a new session starts in.
    pub start: RoomId,
    /// The hidden finale room; entering it sets `map_found`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finale: Option<RoomId>,
    /// Items that open any locked room when carried.
    #[serde(default)]
    pub key_items: Vec<ItemId>,
}

impl WorldMeta {
    /// Create metadata with a title and a start room.
    pub fn new(title: impl Into<String>, start: impl Into<RoomId>) -> Self {
        Self {
            title: title.into(),
            start: start.into(),
            finale: None,
            key_items: Vec::new(),
        }
    }
}

/// On-disk shape of a world. Converting it into a [`World`] validates every
/// cross reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldFile {
    /// World metadata.
    pub meta: WorldMeta,
    /// Rooms in declaration order.
    pub rooms: Vec<Room>,
    /// Items in declaration order.
    pub items: Vec<Item>,
}

/// The world graph. Owns all rooms and items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WorldFile", into = "WorldFile")]
pub struct World {
    /// World metadata.
    pub meta: WorldMeta,
    rooms: Vec<Room>,
    items: Vec<Item>,

    // Indexes
    room_index: HashMap<RoomId, usize>,
    item_index: HashMap<ItemId, usize>,
}

impl World {
    /// Create an empty world.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            rooms: Vec::new(),
            items: Vec::new(),
            room_index: HashMap::new(),
            item_index: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a room to the world.
    pub fn add_room(&mut self, room: Room) -> WorldResult<()> {
        if self.room_index.contains_key(&room.id) {
            return Err(WorldError::DuplicateRoom(room.id));
        }
        self.room_index.insert(room.id.clone(), self.rooms.len());
        self.rooms.push(room);
        Ok(())
    }

    /// Add an item to the item table.
    pub fn add_item(&mut self, item: Item) -> WorldResult<()> {
        if self.item_index.contains_key(&item.id) {
            return Err(WorldError::DuplicateItem(item.id));
        }
        self.item_index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Check that every reference in the world resolves.
    pub fn validate(&self) -> WorldResult<()> {
        self.expect_room(&self.meta.start, "the start room")?;
        if let Some(finale) = &self.meta.finale {
            self.expect_room(finale, "the finale room")?;
        }
        for key in &self.meta.key_items {
            self.expect_item(key, "the key item list")?;
        }

        let mut placed: HashMap<&ItemId, &RoomId> = HashMap::new();
        for room in &self.rooms {
            for exit in &room.exits {
                let referenced_by = format!("the {} exit of {}", exit.direction, room.id);
                self.expect_room(&exit.to, &referenced_by)?;
            }
            for item in &room.items {
                self.expect_item(item, &format!("room {}", room.id))?;
                if let Some(first) = placed.insert(item, &room.id) {
                    return Err(WorldError::ItemPlacedTwice {
                        item: item.clone(),
                        first: first.clone(),
                        second: room.id.clone(),
                    });
                }
            }
            if let Some(required) = &room.requires_item {
                self.expect_item(required, &format!("the entry rule of {}", room.id))?;
            }
        }

        for item in &self.items {
            if let Some(target) = &item.use_target {
                self.expect_room(target, &format!("item {}", item.id))?;
            }
        }
        Ok(())
    }

    /// Fail with [`WorldError::UnknownRoom`] unless the room exists.
    pub fn expect_room(&self, id: &RoomId, referenced_by: &str) -> WorldResult<()> {
        if self.room_index.contains_key(id) {
            Ok(())
        } else {
            Err(WorldError::UnknownRoom {
                room: id.clone(),
                referenced_by: referenced_by.to_string(),
            })
        }
    }

    /// Fail with [`WorldError::UnknownItem`] unless the item exists.
    pub fn expect_item(&self, id: &ItemId, referenced_by: &str) -> WorldResult<()> {
        if self.item_index.contains_key(id) {
            Ok(())
        } else {
            Err(WorldError::UnknownItem {
                item: id.clone(),
                referenced_by: referenced_by.to_string(),
            })
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a room by ID.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    /// Get a mutable room by ID.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.room_index.get(id).map(|&i| &mut self.rooms[i])
    }

    /// Get an item by ID.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    /// All rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// All items in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Whether carrying this item opens locked rooms.
    pub fn is_key(&self, id: &ItemId) -> bool {
        self.meta.key_items.contains(id)
    }

    /// Whether this is the hidden finale room.
    pub fn is_finale(&self, id: &RoomId) -> bool {
        self.meta.finale.as_ref() == Some(id)
    }

    /// Whether any of `held` carries `tag`.
    pub fn any_tagged<'a>(
        &self,
        held: impl IntoIterator<Item = &'a ItemId>,
        tag: ItemTag,
    ) -> bool {
        held.into_iter()
            .filter_map(|id| self.item(id))
            .any(|item| item.has_tag(tag))
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of items in the item table.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl TryFrom<WorldFile> for World {
    type Error = WorldError;

    fn try_from(file: WorldFile) -> WorldResult<Self> {
        let mut world = World::new(file.meta);
        for room in file.rooms {
            world.add_room(room)?;
        }
        for item in file.items {
            world.add_item(item)?;
        }
        world.validate()?;
        Ok(world)
    }
}

impl From<World> for WorldFile {
    fn from(world: World) -> Self {
        Self {
            meta: world.meta,
            rooms: world.rooms,
            items: world.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Direction;

    fn test_world() -> World {
        let mut world = World::new(WorldMeta::new("Test School", "hall"));
        world
            .add_room(
                Room::new("hall", "Hall", "A hall.")
                    .with_exit(Direction::North, "vault")
                    .with_item("lamp"),
            )
            .unwrap();
        world
            .add_room(
                Room::new("vault", "Vault", "A vault.")
                    .with_exit(Direction::South, "hall")
                    .locked(),
            )
            .unwrap();
        world
            .add_item(Item::new("lamp", "Brass Lamp", "It glows.").with_tag(ItemTag::Victory))
            .unwrap();
        world
    }

    #[test]
    fn lookup_rooms_and_items() {
        let world = test_world();
        assert_eq!(world.room(&RoomId::new("vault")).unwrap().name, "Vault");
        assert_eq!(world.item(&ItemId::new("lamp")).unwrap().name, "Brass Lamp");
        assert!(world.room(&RoomId::new("attic")).is_none());
        assert_eq!(world.room_count(), 2);
        assert_eq!(world.item_count(), 1);
        world.validate().unwrap();
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut world = test_world();
        let result = world.add_room(Room::new("hall", "Other Hall", ""));
        assert!(matches!(result, Err(WorldError::DuplicateRoom(_))));
    }

    #[test]
    fn dangling_exit_rejected() {
        let mut world = test_world();
        world
            .room_mut(&RoomId::new("vault"))
            .unwrap()
            .set_exit(Direction::Down, RoomId::new("cellar"));
        let err = world.validate().unwrap_err();
        assert!(err.to_string().contains("cellar"));
    }

    #[test]
    fn item_in_two_rooms_rejected() {
        let mut world = test_world();
        world
            .room_mut(&RoomId::new("vault"))
            .unwrap()
            .place_item(ItemId::new("lamp"));
        assert!(matches!(
            world.validate(),
            Err(WorldError::ItemPlacedTwice { .. })
        ));
    }

    #[test]
    fn unknown_start_rejected() {
        let mut world = test_world();
        world.meta.start = RoomId::new("nowhere");
        assert!(matches!(
            world.validate(),
            Err(WorldError::UnknownRoom { .. })
        ));
    }

    #[test]
    fn tags_over_inventory() {
        let world = test_world();
        let held = [ItemId::new("lamp"), ItemId::new("ghost")];
        assert!(world.any_tagged(&held, ItemTag::Victory));
        assert!(!world.any_tagged(&held, ItemTag::Ultimate));
    }

    #[test]
    fn json_roundtrip_validates() {
        let world = test_world();
        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back.room_count(), 2);
        assert!(back.room(&RoomId::new("vault")).unwrap().locked);

        let broken = json.replace("\"to\":\"hall\"", "\"to\":\"nowhere\"");
        assert!(serde_json::from_str::<World>(&broken).is_err());
    }
}
