//! Character dialogue tables.

use fg_core::{GameState, Player};
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::effect::Effect;

/// Everything one character can say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    /// Character name token, e.g. `ancient_dragon`.
    pub character: String,
    /// Candidate lines; the first whose condition holds is spoken.
    pub lines: Vec<Line>,
}

impl Dialogue {
    /// Create a dialogue with no lines.
    pub fn new(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            lines: Vec::new(),
        }
    }

    /// Add a line.
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// The line to speak in the current state, if any.
    pub fn line_for(&self, player: &Player, state: &GameState) -> Option<&Line> {
        self.lines.iter().find(|l| l.when.evaluate(player, state))
    }
}

/// A single reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// When this line applies.
    #[serde(default)]
    pub when: Condition,
    /// The spoken text.
    pub text: String,
    /// Effects applied when the line is spoken.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Line {
    /// Create an unconditional line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            when: Condition::Always,
            text: text.into(),
            effects: Vec::new(),
        }
    }

    /// Set the condition.
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = condition;
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::{Flag, RoomId};

    #[test]
    fn first_matching_line_wins() {
        let dialogue = Dialogue::new("librarian")
            .with_line(
                Line::new("Take the book.").when(Condition::unset(Flag::LibraryBookFound)),
            )
            .with_line(Line::new("The book will serve you well."));

        let player = Player::new(RoomId::new("library"));
        let mut state = GameState::new();
        assert_eq!(
            dialogue.line_for(&player, &state).unwrap().text,
            "Take the book."
        );

        state.set(Flag::LibraryBookFound);
        assert_eq!(
            dialogue.line_for(&player, &state).unwrap().text,
            "The book will serve you well."
        );
    }

    #[test]
    fn no_line_when_nothing_matches() {
        let dialogue = Dialogue::new("ghost")
            .with_line(Line::new("Boo.").when(Condition::Flag(Flag::GameCompleted)));
        let player = Player::new(RoomId::new("corridor"));
        assert!(dialogue.line_for(&player, &GameState::new()).is_none());
    }

    #[test]
    fn line_builder() {
        let line = Line::new("Answer me this.")
            .when(Condition::unset(Flag::DragonTalked))
            .with_effect(Effect::SetFlag(Flag::DragonTalked));
        assert_eq!(line.effects, vec![Effect::SetFlag(Flag::DragonTalked)]);
        assert_eq!(line.when, Condition::unset(Flag::DragonTalked));
    }
}
