//! Error types for the adventure engine.

use fg_core::WorldError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised while loading a story or starting a session. Player input
/// never produces one of these; see [`Refusal`].
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world graph is inconsistent.
    #[error(transparent)]
    World(#[from] WorldError),

    /// A dialogue table names a character that stands in no room.
    #[error("dialogue for \"{0}\", who is in no room")]
    UnknownCharacter(String),

    /// The story file is not valid JSON for a story.
    #[error("invalid story file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which way an operation fell short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalKind {
    /// The named item, character, or direction is not there.
    NoMatch,
    /// The target exists but a precondition is not met.
    Precondition,
    /// Nothing to do.
    NoOp,
}

/// A refused player action. The message is the text shown to the player;
/// a refusal never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    /// No exit in that direction.
    #[error("You cannot go that way.")]
    NoExit,

    /// No matching item in the room.
    #[error("You don't see that here.")]
    NotHere,

    /// No matching item in the room or the inventory.
    #[error("You don't see that item.")]
    NotVisible,

    /// No matching item in the inventory.
    #[error("You don't have that item.")]
    NotCarried,

    /// No such character in the room.
    #[error("There's no one here by that name.")]
    NoOneNamed,

    /// The destination is locked and no key is carried.
    #[error("The door is locked. You need a key to enter.")]
    Locked,

    /// The destination needs an item that is not carried.
    #[error("You need the {0} to enter this room.")]
    MissingItem(String),

    /// The destination is hidden and has not been discovered.
    #[error("You sense there might be something here, but cannot find the way.")]
    Hidden,

    /// The item is fixed in place.
    #[error("You cannot take the {0}.")]
    CannotTake(String),

    /// No use rule matches this item here.
    #[error("You cannot use the {0} here.")]
    NoUseHere(String),

    /// The character has no dialogue.
    #[error("They don't seem interested in talking right now.")]
    NotInterested,

    /// Nothing is waiting for an answer.
    #[error("No one is waiting for an answer right now.")]
    NoQuestion,

    /// The command word is unknown.
    #[error("I don't understand that command. Type 'help' for available commands.")]
    UnknownCommand,
}

impl Refusal {
    /// Classify the refusal.
    pub fn kind(&self) -> RefusalKind {
        match self {
            Self::NoExit
            | Self::NotHere
            | Self::NotVisible
            | Self::NotCarried
            | Self::NoOneNamed => RefusalKind::NoMatch,
            Self::Locked
            | Self::MissingItem(_)
            | Self::Hidden
            | Self::CannotTake(_)
            | Self::NoUseHere(_) => RefusalKind::Precondition,
            Self::NotInterested | Self::NoQuestion | Self::UnknownCommand => RefusalKind::NoOp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_item() {
        assert_eq!(
            Refusal::CannotTake("Enchanted Telescope".into()).to_string(),
            "You cannot take the Enchanted Telescope."
        );
        assert_eq!(
            Refusal::MissingItem("Book of Forgotten Lore".into()).to_string(),
            "You need the Book of Forgotten Lore to enter this room."
        );
    }

    #[test]
    fn refusal_classes() {
        assert_eq!(Refusal::NoExit.kind(), RefusalKind::NoMatch);
        assert_eq!(Refusal::Hidden.kind(), RefusalKind::Precondition);
        assert_eq!(Refusal::UnknownCommand.kind(), RefusalKind::NoOp);
    }
}
