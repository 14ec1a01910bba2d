//! Rule tables for item uses, riddles, and pickups.

use fg_core::{GameState, ItemId, Player, RoomId};
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::effect::Effect;

/// What happens when a carried item is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseRule {
    /// The item being used.
    pub item: ItemId,
    /// Room the use must happen in; anywhere if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomId>,
    /// Extra condition.
    #[serde(default)]
    pub when: Condition,
    /// Effects of the use.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Narrative reply.
    pub text: String,
}

impl UseRule {
    /// Create a rule for using `item` in `room`.
    pub fn new(
        item: impl Into<ItemId>,
        room: impl Into<RoomId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            room: Some(room.into()),
            when: Condition::Always,
            effects: Vec::new(),
            text: text.into(),
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

    /// Whether the rule fires for `item` in the current state.
    pub fn matches(&self, item: &ItemId, player: &Player, state: &GameState) -> bool {
        &self.item == item
            && self
                .room
                .as_ref()
                .is_none_or(|room| room == &player.current_room)
            && self.when.evaluate(player, state)
    }
}

/// A question someone in a room waits to have answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiddleRule {
    /// Room the answer must be given in.
    pub room: RoomId,
    /// Expected answer, compared without regard to case.
    pub keyword: String,
    /// When the question is open.
    #[serde(default)]
    pub when: Condition,
    /// Effects of a correct answer.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Narrative reply.
    pub text: String,
}

impl RiddleRule {
    /// Create a riddle answered with `keyword` in `room`.
    pub fn new(room: impl Into<RoomId>, keyword: &str, text: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            keyword: keyword.trim().to_lowercase(),
            when: Condition::Always,
            effects: Vec::new(),
            text: text.into(),
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

    /// Whether `response` answers this riddle in the current state.
    pub fn accepts(&self, response: &str, player: &Player, state: &GameState) -> bool {
        self.room == player.current_room
            && response.trim().to_lowercase() == self.keyword.trim().to_lowercase()
            && self.when.evaluate(player, state)
    }
}

/// Effects applied when an item is picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeRule {
    /// The item picked up.
    pub item: ItemId,
    /// Effects of picking it up.
    pub effects: Vec<Effect>,
}

impl TakeRule {
    /// Create a pickup rule.
    pub fn new(item: impl Into<ItemId>, effects: Vec<Effect>) -> Self {
        Self {
            item: item.into(),
            effects,
        }
    }
}
