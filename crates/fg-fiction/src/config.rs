//! Configuration for an adventure session.

use fg_core::RoomId;

/// Configuration for an adventure session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Start here instead of the story's start room.
    pub start_room: Option<RoomId>,
    /// Whether the session stops accepting input once the game is won.
    pub stop_on_win: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_room: None,
            stop_on_win: true,
        }
    }
}

impl SessionConfig {
    /// Override the start room.
    pub fn with_start(mut self, room: impl Into<RoomId>) -> Self {
        self.start_room = Some(room.into());
        self
    }

    /// Keep accepting commands after the game is won.
    pub fn keep_playing(mut self) -> Self {
        self.stop_on_win = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert!(cfg.start_room.is_none());
        assert!(cfg.stop_on_win);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default().with_start("library").keep_playing();
        assert_eq!(cfg.start_room, Some(RoomId::new("library")));
        assert!(!cfg.stop_on_win);
    }
}
