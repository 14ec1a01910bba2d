//! Core types for Forgotten: rooms, items, story flags, and the world graph.
//!
//! This crate holds the data the adventure is played on. It knows nothing
//! about commands or dialogue; the `fg-fiction` crate drives a [`World`]
//! through a [`Player`] and a [`GameState`].

/// Error types used throughout the crate.
pub mod error;
/// Items and their tags.
pub mod item;
/// The player's location pointer and inventory.
pub mod player;
/// Rooms, exits, and directions.
pub mod room;
/// Monotonic story flags.
pub mod state;
/// The world graph that owns rooms and items.
pub mod world;

/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Item, ItemId, ItemTag};
/// Re-export player state.
pub use player::Player;
/// Re-export room types.
pub use room::{Direction, Exit, Room, RoomId, character_key};
/// Re-export story flags.
pub use state::{Flag, GameState};
/// Re-export world model types.
pub use world::{World, WorldMeta};
