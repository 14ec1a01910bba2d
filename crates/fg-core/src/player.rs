//! Player state management.

use crate::item::ItemId;
use crate::room::RoomId;

/// Where the player stands and what they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Current room. Always a key of the world's room table.
    pub current_room: RoomId,
    /// Items carried, in pickup order.
    pub inventory: Vec<ItemId>,
}

impl Player {
    /// Create a player with an empty inventory in the given room.
    pub fn new(room: RoomId) -> Self {
        Self {
            current_room: room,
            inventory: Vec::new(),
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Add an item to inventory. Returns `false` if it was already held.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        if self.inventory.contains(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }
}
