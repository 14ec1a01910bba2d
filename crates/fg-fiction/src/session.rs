//! Adventure session management.

use fg_core::{Direction, Flag, GameState, ItemTag, Player, Room, World};
use tracing::{debug, info};

use crate::choice::apply_all;
use crate::config::SessionConfig;
use crate::error::{FictionResult, Refusal};
use crate::parser::{Command, normalize, parse_command, resolve_item};
use crate::story::Story;

/// Help text for stories that bring none of their own.
const DEFAULT_HELP: &str = "**Available Commands:**
• **look** - Examine your surroundings
• **look [item]** - Examine a specific item
• **go [direction]** - Move in a direction (north, south, east, west, up, down)
• **take [item]** - Pick up an item
• **use [item]** - Use an item
• **talk [character]** - Speak with someone
• **answer [word]** - Answer a question
• **inventory** - Check what you're carrying
• **help** - Show this help message";

/// A single play-through of a story.
///
/// The session owns its copy of the world, so rooms unlocked or items taken
/// here never leak into another session.
#[derive(Debug, Clone)]
pub struct AdventureSession {
    story: Story,
    player: Player,
    state: GameState,
    config: SessionConfig,
    terminal: bool,
}

impl AdventureSession {
    /// Start a session at the story's start room.
    pub fn new(story: Story) -> FictionResult<Self> {
        Self::with_config(story, SessionConfig::default())
    }

    /// Start a session with explicit configuration.
    ///
    /// Validates the story and the start room override.
    pub fn with_config(story: Story, config: SessionConfig) -> FictionResult<Self> {
        story.validate()?;
        let start = match &config.start_room {
            Some(room) => {
                story.world.expect_room(room, "the start room override")?;
                room.clone()
            }
            None => story.world.meta.start.clone(),
        };
        debug!(title = %story.world.meta.title, %start, "session started");

        Ok(Self {
            story,
            player: Player::new(start),
            state: GameState::new(),
            config,
            terminal: false,
        })
    }

    /// The world as it stands.
    pub fn world(&self) -> &World {
        &self.story.world
    }

    /// The player's position and inventory.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Story flags set so far.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the game has been won.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether a front end should keep reading commands.
    pub fn accepts_input(&self) -> bool {
        !(self.terminal && self.config.stop_on_win)
    }

    /// The story's greeting followed by the first room description.
    pub fn opening(&self) -> String {
        let room = self.describe_room();
        if self.story.intro.is_empty() {
            room
        } else {
            format!("{}\n\n{room}", self.story.intro)
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Process one line of player input and return the reply.
    ///
    /// Refusals come back as their advisory text. When the line completes the
    /// win condition for the first time, the victory narrative is appended
    /// after a blank line and the session becomes terminal.
    pub fn submit(&mut self, line: &str) -> String {
        let command = parse_command(line);
        debug!(?command, room = %self.player.current_room, "dispatching command");

        let mut response = self.dispatch(command).unwrap_or_else(|refusal| {
            debug!(kind = ?refusal.kind(), %refusal, "command refused");
            refusal.to_string()
        });

        if !self.terminal {
            if let Some(narrative) = self.check_win() {
                info!(title = %self.story.world.meta.title, "game won");
                self.terminal = true;
                response.push_str("\n\n");
                response.push_str(&narrative);
            }
        }
        response
    }

    /// Execute a parsed command.
    pub fn dispatch(&mut self, command: Command) -> Result<String, Refusal> {
        match command {
            Command::Look { target } => self.describe(target.as_deref()),
            Command::Examine { target } => self.describe(Some(&target)),
            Command::Move { direction } => self.go(&direction),
            Command::Take { item } => self.take(&item),
            Command::Use { item, target } => self.use_item(&item, target.as_deref()),
            Command::Talk { character } => self.talk(&character),
            Command::Answer { response } => self.answer(&response),
            Command::Inventory => Ok(self.inventory_view()),
            Command::Help => Ok(self.help().to_string()),
            Command::Unknown { .. } => Err(Refusal::UnknownCommand),
        }
    }

    // -----------------------------------------------------------------------
    // World operations
    // -----------------------------------------------------------------------

    /// The room the player stands in.
    ///
    /// Always `Some` for a session: the start room is checked on
    /// construction and every exit leads to a known room.
    pub fn current_room_view(&self) -> Option<&Room> {
        self.story.world.room(&self.player.current_room)
    }

    /// Describe the current room, or the named item when a target is given.
    ///
    /// Targets are looked up among carried items first, then the room's.
    pub fn describe(&self, target: Option<&str>) -> Result<String, Refusal> {
        let Some(target) = target else {
            return Ok(self.describe_room());
        };

        let world = &self.story.world;
        let room_items = self.current_room_view().map(|r| r.items.as_slice());
        let candidates = self
            .player
            .inventory
            .iter()
            .chain(room_items.unwrap_or_default());
        resolve_item(world, target, candidates)
            .and_then(|id| world.item(id))
            .map(|item| item.description.clone())
            .ok_or(Refusal::NotVisible)
    }

    /// Walk through the exit labelled `direction`.
    pub fn go(&mut self, direction: &str) -> Result<String, Refusal> {
        let world = &self.story.world;
        let to = Direction::parse(direction)
            .zip(self.current_room_view())
            .and_then(|(dir, here)| here.exit(dir))
            .ok_or(Refusal::NoExit)?;
        let next = world.room(to).ok_or(Refusal::NoExit)?;

        if next.locked && !self.player.inventory.iter().any(|id| world.is_key(id)) {
            return Err(Refusal::Locked);
        }
        if let Some(required) = &next.requires_item {
            if !self.player.has_item(required) {
                let name = world
                    .item(required)
                    .map_or_else(|| required.to_string(), |item| item.name.clone());
                return Err(Refusal::MissingItem(name));
            }
        }
        if next.hidden && !self.state.is_set(Flag::MapFound) {
            return Err(Refusal::Hidden);
        }

        let to = to.clone();
        debug!(from = %self.player.current_room, %to, "moved");
        if world.is_finale(&to) && self.state.set(Flag::MapFound) {
            debug!(flag = %Flag::MapFound, "flag set");
        }
        self.player.current_room = to;
        Ok(self.describe_room())
    }

    /// Pick up an item from the current room.
    pub fn take(&mut self, name: &str) -> Result<String, Refusal> {
        let world = &self.story.world;
        let here = self.current_room_view().ok_or(Refusal::NotHere)?;
        let id = resolve_item(world, name, &here.items)
            .cloned()
            .ok_or(Refusal::NotHere)?;
        let item = world.item(&id).ok_or(Refusal::NotHere)?;
        if !item.can_take {
            return Err(Refusal::CannotTake(item.name.clone()));
        }
        let reply = format!("You take the {}.", item.name);
        let effects: Vec<_> = self.story.take_effects(&id).cloned().collect();

        if let Some(room) = self.story.world.room_mut(&self.player.current_room) {
            room.remove_item(&id);
        }
        debug!(item = %id, "item taken");
        self.player.add_item(id);
        apply_all(
            &effects,
            &mut self.story.world,
            &self.player,
            &mut self.state,
        );
        Ok(reply)
    }

    /// Use a carried item. `target` is accepted for `use X on Y` phrasing
    /// but rules are keyed by item and room only.
    pub fn use_item(&mut self, name: &str, target: Option<&str>) -> Result<String, Refusal> {
        let world = &self.story.world;
        let id = resolve_item(world, name, &self.player.inventory).ok_or(Refusal::NotCarried)?;
        let Some(rule) = self.story.use_rule(id, &self.player, &self.state).cloned() else {
            let name = world
                .item(id)
                .map_or_else(|| id.to_string(), |item| item.name.clone());
            return Err(Refusal::NoUseHere(name));
        };

        debug!(item = %rule.item, ?target, "item used");
        apply_all(
            &rule.effects,
            &mut self.story.world,
            &self.player,
            &mut self.state,
        );
        Ok(rule.text)
    }

    /// Talk to a character in the current room.
    pub fn talk(&mut self, name: &str) -> Result<String, Refusal> {
        let character = normalize(name);
        let present = self
            .current_room_view()
            .is_some_and(|room| room.has_character(&character));
        if !present {
            return Err(Refusal::NoOneNamed);
        }

        let line = self
            .story
            .dialogue_for(&character)
            .and_then(|dialogue| dialogue.line_for(&self.player, &self.state))
            .cloned()
            .ok_or(Refusal::NotInterested)?;
        debug!(%character, "dialogue");
        apply_all(
            &line.effects,
            &mut self.story.world,
            &self.player,
            &mut self.state,
        );
        Ok(line.text)
    }

    /// Answer an open riddle in the current room.
    pub fn answer(&mut self, response: &str) -> Result<String, Refusal> {
        let riddle = self
            .story
            .riddle_for(response, &self.player, &self.state)
            .cloned()
            .ok_or(Refusal::NoQuestion)?;
        debug!(room = %riddle.room, "riddle answered");
        apply_all(
            &riddle.effects,
            &mut self.story.world,
            &self.player,
            &mut self.state,
        );
        Ok(riddle.text)
    }

    /// List what the player carries.
    pub fn inventory_view(&self) -> String {
        let names: Vec<&str> = self
            .player
            .inventory
            .iter()
            .filter_map(|id| self.story.world.item(id))
            .map(|item| item.name.as_str())
            .collect();
        if names.is_empty() {
            "Your inventory is empty.".to_string()
        } else {
            format!("You are carrying: {}", names.join(", "))
        }
    }

    /// The help text.
    pub fn help(&self) -> &str {
        if self.story.help.is_empty() {
            DEFAULT_HELP
        } else {
            &self.story.help
        }
    }

    /// The victory narrative if a victory item and an ultimate item are both
    /// carried. Sets `game_completed` when it fires.
    pub fn check_win(&mut self) -> Option<String> {
        let world = &self.story.world;
        let held = &self.player.inventory;
        let won =
            world.any_tagged(held, ItemTag::Victory) && world.any_tagged(held, ItemTag::Ultimate);
        if !won {
            return None;
        }
        self.state.set(Flag::GameCompleted);
        Some(self.story.victory.clone())
    }

    fn describe_room(&self) -> String {
        let Some(room) = self.current_room_view() else {
            return String::new();
        };
        let mut out = format!("**{}**\n\n{}", room.name, room.description);

        let items: Vec<&str> = room
            .items
            .iter()
            .filter_map(|id| self.story.world.item(id))
            .map(|item| item.name.as_str())
            .collect();
        if !items.is_empty() {
            out.push_str("\n\nYou can see: ");
            out.push_str(&items.join(", "));
        }

        if !room.characters.is_empty() {
            out.push_str("\n\nPresent here: ");
            out.push_str(&room.characters.join(", ").replace('_', " "));
        }

        if !room.exits.is_empty() {
            let exits: Vec<&str> = room.exits.iter().map(|e| e.direction.name()).collect();
            out.push_str("\n\nExits: ");
            out.push_str(&exits.join(", "));
        }

        out
    }
}
