use crate::item::ItemId;
use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when assembling or validating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A room with the same identifier already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(RoomId),

    /// An item with the same identifier already exists.
    #[error("item already exists: \"{0}\"")]
    DuplicateItem(ItemId),

    /// A reference names a room that is not part of the world.
    #[error("unknown room \"{room}\" referenced by {referenced_by}")]
    UnknownRoom {
        /// The unresolved room identifier.
        room: RoomId,
        /// Where the reference was found.
        referenced_by: String,
    },

    /// A reference names an item that is not part of the world.
    #[error("unknown item \"{item}\" referenced by {referenced_by}")]
    UnknownItem {
        /// The unresolved item identifier.
        item: ItemId,
        /// Where the reference was found.
        referenced_by: String,
    },

    /// The same item is placed in more than one room.
    #[error("item \"{item}\" is placed in both \"{first}\" and \"{second}\"")]
    ItemPlacedTwice {
        /// The item placed twice.
        item: ItemId,
        /// The first room holding it.
        first: RoomId,
        /// The second room holding it.
        second: RoomId,
    },
}
