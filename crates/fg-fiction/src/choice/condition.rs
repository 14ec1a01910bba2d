//! Conditions guarding story rules.

use fg_core::{Flag, GameState, ItemId, Player, RoomId, World, WorldResult};
use serde::{Deserialize, Serialize};

/// A condition that can be evaluated against player and story state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Always true.
    #[default]
    Always,
    /// A story flag is set.
    Flag(Flag),
    /// The player carries an item.
    HasItem(ItemId),
    /// The player stands in a room.
    InRoom(RoomId),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    All(Vec<Condition>),
    /// Logical OR.
    Any(Vec<Condition>),
}

impl Condition {
    /// Shorthand for `Not(Flag(flag))`.
    pub fn unset(flag: Flag) -> Self {
        Self::Not(Box::new(Self::Flag(flag)))
    }

    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, player: &Player, state: &GameState) -> bool {
        match self {
            Condition::Always => true,
            Condition::Flag(flag) => state.is_set(*flag),
            Condition::HasItem(item) => player.has_item(item),
            Condition::InRoom(room) => &player.current_room == room,
            Condition::Not(inner) => !inner.evaluate(player, state),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(player, state)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(player, state)),
        }
    }

    /// Check that every room and item named by the condition exists.
    pub fn validate(&self, world: &World, referenced_by: &str) -> WorldResult<()> {
        match self {
            Condition::Always | Condition::Flag(_) => Ok(()),
            Condition::HasItem(item) => world.expect_item(item, referenced_by),
            Condition::InRoom(room) => world.expect_room(room, referenced_by),
            Condition::Not(inner) => inner.validate(world, referenced_by),
            Condition::All(conditions) | Condition::Any(conditions) => conditions
                .iter()
                .try_for_each(|c| c.validate(world, referenced_by)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::WorldMeta;

    fn player() -> Player {
        Player::new(RoomId::new("library"))
    }

    #[test]
    fn player_in_room() {
        let state = GameState::new();
        let cond = Condition::InRoom(RoomId::new("library"));
        assert!(cond.evaluate(&player(), &state));

        let cond = Condition::InRoom(RoomId::new("corridor"));
        assert!(!cond.evaluate(&player(), &state));
    }

    #[test]
    fn has_item() {
        let state = GameState::new();
        let mut player = player();
        let cond = Condition::HasItem(ItemId::new("ancient_book"));
        assert!(!cond.evaluate(&player, &state));

        player.add_item(ItemId::new("ancient_book"));
        assert!(cond.evaluate(&player, &state));
    }

    #[test]
    fn flag_and_unset() {
        let mut state = GameState::new();
        let talked = Condition::Flag(Flag::DragonTalked);
        let not_talked = Condition::unset(Flag::DragonTalked);
        assert!(!talked.evaluate(&player(), &state));
        assert!(not_talked.evaluate(&player(), &state));

        state.set(Flag::DragonTalked);
        assert!(talked.evaluate(&player(), &state));
        assert!(!not_talked.evaluate(&player(), &state));
    }

    #[test]
    fn logical_all_and_any() {
        let mut state = GameState::new();
        state.set(Flag::MapFound);

        let both = Condition::All(vec![
            Condition::Flag(Flag::MapFound),
            Condition::Flag(Flag::PotionMixed),
        ]);
        let either = Condition::Any(vec![
            Condition::Flag(Flag::MapFound),
            Condition::Flag(Flag::PotionMixed),
        ]);
        assert!(!both.evaluate(&player(), &state));
        assert!(either.evaluate(&player(), &state));
        assert!(Condition::All(Vec::new()).evaluate(&player(), &state));
        assert!(!Condition::Any(Vec::new()).evaluate(&player(), &state));
    }

    #[test]
    fn json_shape() {
        let cond = Condition::All(vec![
            Condition::Flag(Flag::DragonTalked),
            Condition::unset(Flag::FinalExamTaken),
        ]);
        let json = serde_json::to_string(&cond).unwrap();
        assert_eq!(
            json,
            r#"{"all":[{"flag":"dragon_talked"},{"not":{"flag":"final_exam_taken"}}]}"#
        );
        assert_eq!(
            serde_json::to_string(&Condition::Always).unwrap(),
            r#""always""#
        );
    }

    #[test]
    fn validate_names() {
        let world = World::new(WorldMeta::new("Empty", "nowhere"));
        let cond = Condition::Not(Box::new(Condition::HasItem(ItemId::new("orb"))));
        let err = cond.validate(&world, "a test rule").unwrap_err();
        assert!(err.to_string().contains("a test rule"));
        assert!(Condition::Flag(Flag::HasKey).validate(&world, "x").is_ok());
    }
}
