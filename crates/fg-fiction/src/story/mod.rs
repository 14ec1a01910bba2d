//! Story definitions.
//!
//! A [`Story`] is a world plus the rule tables that give it behaviour. It
//! loads from and saves to JSON, and loading checks every reference.

mod school;

use fg_core::{GameState, ItemId, Player, World, character_key};
use serde::{Deserialize, Serialize};

use crate::choice::{Dialogue, Effect, RiddleRule, TakeRule, UseRule};
use crate::error::{FictionError, FictionResult};

/// A playable story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Rooms, items, and the designated start, finale, and key items.
    pub world: World,
    /// Greeting shown before the first room description.
    #[serde(default)]
    pub intro: String,
    /// Reply to `help`; a generic command list when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
    /// Narrative appended once the win condition fires.
    pub victory: String,
    /// Effects of picking items up.
    #[serde(default)]
    pub on_take: Vec<TakeRule>,
    /// Item use rules, tried in order.
    #[serde(default)]
    pub uses: Vec<UseRule>,
    /// Dialogue by character.
    #[serde(default)]
    pub dialogue: Vec<Dialogue>,
    /// Riddles waiting for an `answer`.
    #[serde(default)]
    pub riddles: Vec<RiddleRule>,
}

impl Story {
    /// Parse a story from JSON and validate it.
    pub fn from_json(json: &str) -> FictionResult<Self> {
        let story: Story = serde_json::from_str(json)?;
        story.validate()?;
        Ok(story)
    }

    /// Serialize the story as pretty-printed JSON.
    pub fn to_json(&self) -> FictionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the world and every rule reference.
    pub fn validate(&self) -> FictionResult<()> {
        let world = &self.world;
        world.validate()?;

        for rule in &self.on_take {
            let context = format!("the pickup rule for {}", rule.item);
            world.expect_item(&rule.item, &context)?;
            validate_effects(world, &rule.effects, &context)?;
        }
        for rule in &self.uses {
            let context = format!("the use rule for {}", rule.item);
            world.expect_item(&rule.item, &context)?;
            if let Some(room) = &rule.room {
                world.expect_room(room, &context)?;
            }
            rule.when.validate(world, &context)?;
            validate_effects(world, &rule.effects, &context)?;
        }
        for dialogue in &self.dialogue {
            if !world.rooms().any(|r| r.has_character(&dialogue.character)) {
                return Err(FictionError::UnknownCharacter(dialogue.character.clone()));
            }
            let context = format!("the dialogue of {}", dialogue.character);
            for line in &dialogue.lines {
                line.when.validate(world, &context)?;
                validate_effects(world, &line.effects, &context)?;
            }
        }
        for riddle in &self.riddles {
            let context = format!("the riddle in {}", riddle.room);
            world.expect_room(&riddle.room, &context)?;
            riddle.when.validate(world, &context)?;
            validate_effects(world, &riddle.effects, &context)?;
        }
        Ok(())
    }

    /// Dialogue table of a character, matched by [`character_key`].
    pub fn dialogue_for(&self, character: &str) -> Option<&Dialogue> {
        let key = character_key(character);
        self.dialogue.iter().find(|d| character_key(&d.character) == key)
    }

    /// The first use rule that fires for `item` where the player stands.
    pub fn use_rule(&self, item: &ItemId, player: &Player, state: &GameState) -> Option<&UseRule> {
        self.uses.iter().find(|rule| rule.matches(item, player, state))
    }

    /// The open riddle that `response` answers, if any.
    pub fn riddle_for(
        &self,
        response: &str,
        player: &Player,
        state: &GameState,
    ) -> Option<&RiddleRule> {
        self.riddles.iter().find(|riddle| riddle.accepts(response, player, state))
    }

    /// Effects of picking up an item.
    pub fn take_effects(&self, item: &ItemId) -> impl Iterator<Item = &Effect> {
        self.on_take
            .iter()
            .filter(move |rule| &rule.item == item)
            .flat_map(|rule| rule.effects.iter())
    }
}

fn validate_effects(world: &World, effects: &[Effect], context: &str) -> FictionResult<()> {
    for effect in effects {
        effect.validate(world, context)?;
    }
    Ok(())
}
