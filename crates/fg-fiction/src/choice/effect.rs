//! Effects that modify world or story state.

use fg_core::{Direction, Flag, GameState, ItemId, Player, RoomId, World, WorldResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An effect applied when a rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Set a story flag.
    SetFlag(Flag),
    /// Clear a room's `locked` mark.
    Unlock(RoomId),
    /// Clear a room's `hidden` mark.
    Reveal(RoomId),
    /// Add or redirect an exit.
    AddExit {
        /// Room that gets the exit.
        room: RoomId,
        /// Direction label of the exit.
        direction: Direction,
        /// Destination room.
        to: RoomId,
    },
    /// Put an item in a room, unless it is already in some room or carried.
    PlaceItem {
        /// Room to put the item in.
        room: RoomId,
        /// Item to put there.
        item: ItemId,
    },
}

impl Effect {
    /// Apply the effect.
    pub fn apply(&self, world: &mut World, player: &Player, state: &mut GameState) {
        match self {
            Effect::SetFlag(flag) => {
                if state.set(*flag) {
                    debug!(%flag, "flag set");
                }
            }
            Effect::Unlock(room) => {
                if let Some(room) = world.room_mut(room) {
                    room.locked = false;
                    debug!(room = %room.id, "room unlocked");
                }
            }
            Effect::Reveal(room) => {
                if let Some(room) = world.room_mut(room) {
                    room.hidden = false;
                    debug!(room = %room.id, "room revealed");
                }
            }
            Effect::AddExit {
                room,
                direction,
                to,
            } => {
                if let Some(room) = world.room_mut(room) {
                    room.set_exit(*direction, to.clone());
                    debug!(room = %room.id, %direction, %to, "exit added");
                }
            }
            Effect::PlaceItem { room, item } => {
                let exists = player.has_item(item) || world.rooms().any(|r| r.has_item(item));
                if exists {
                    debug!(%item, "item already in play, not placed again");
                    return;
                }
                if let Some(room) = world.room_mut(room) {
                    room.place_item(item.clone());
                    debug!(room = %room.id, %item, "item placed");
                }
            }
        }
    }

    /// Check that every room and item named by the effect exists.
    pub fn validate(&self, world: &World, referenced_by: &str) -> WorldResult<()> {
        match self {
            Effect::SetFlag(_) => Ok(()),
            Effect::Unlock(room) | Effect::Reveal(room) => world.expect_room(room, referenced_by),
            Effect::AddExit { room, to, .. } => {
                world.expect_room(room, referenced_by)?;
                world.expect_room(to, referenced_by)
            }
            Effect::PlaceItem { room, item } => {
                world.expect_room(room, referenced_by)?;
                world.expect_item(item, referenced_by)
            }
        }
    }
}

/// Apply effects in order.
pub fn apply_all(effects: &[Effect], world: &mut World, player: &Player, state: &mut GameState) {
    for effect in effects {
        effect.apply(world, player, state);
    }
}
