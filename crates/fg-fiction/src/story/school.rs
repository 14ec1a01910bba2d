//! The School of Forgotten Subjects.

use fg_core::{Direction, Flag, Item, ItemId, ItemTag, Room, RoomId, World, WorldMeta};

use super::Story;
use crate::choice::{Condition, Dialogue, Effect, Line, RiddleRule, TakeRule, UseRule};
use crate::error::FictionResult;

const INTRO: &str = "Welcome to the School of Forgotten Subjects!
═══════════════════════════════════════

You are a young scholar seeking to learn the ancient arts that have been forgotten by the modern world. This mystical school holds secrets beyond imagination...

Type 'help' for available commands.";

const HELP: &str = "**Available Commands:**
• **look** - Examine your surroundings
• **look [item]** - Examine a specific item
• **go [direction]** - Move in a direction (north, south, east, west, up, down)
• **take [item]** - Pick up an item
• **use [item]** - Use an item
• **talk [character]** - Speak with someone
• **inventory** - Check what you're carrying
• **help** - Show this help message

**Objective:** Explore the School of Forgotten Subjects, gather knowledge and items, and prove yourself worthy of graduation!

**Tips:**
- Talk to everyone you meet - they often have valuable information
- Some doors are locked and require keys
- The ancient book is crucial for accessing the deepest secrets
- Read item descriptions carefully for clues";

const VICTORY: &str = "🎉 **CONGRATULATIONS!** 🎉

You have successfully graduated from the School of Forgotten Subjects! You possess both the Diploma of Forgotten Arts and the Orb of Infinite Knowledge. You are now a master of the forgotten arts!

The ancient magic flows through you as you step out into the world, ready to preserve and teach the knowledge that others have forgotten. Your adventure has come to a triumphant end!";

impl Story {
    /// The built-in School of Forgotten Subjects.
    pub fn school() -> FictionResult<Self> {
        let story = Story {
            world: school_world()?,
            intro: INTRO.to_string(),
            help: HELP.to_string(),
            victory: VICTORY.to_string(),
            on_take: vec![
                TakeRule::new("rusty_key", vec![Effect::SetFlag(Flag::HasKey)]),
                TakeRule::new("master_key", vec![Effect::SetFlag(Flag::HasKey)]),
                TakeRule::new("ancient_book", vec![Effect::SetFlag(Flag::LibraryBookFound)]),
            ],
            uses: school_uses(),
            dialogue: school_dialogue(),
            riddles: vec![
                RiddleRule::new(
                    "secret_chamber",
                    "knowledge",
                    "The dragon rumbles with approval. 'Correct! Knowledge is indeed the most \
                     powerful magic. The orb is yours.'",
                )
                .when(Condition::All(vec![
                    Condition::Flag(Flag::DragonTalked),
                    Condition::unset(Flag::FinalExamTaken),
                ]))
                .with_effect(Effect::PlaceItem {
                    room: RoomId::new("secret_chamber"),
                    item: ItemId::new("orb_of_knowledge"),
                })
                .with_effect(Effect::SetFlag(Flag::FinalExamTaken)),
            ],
        };
        story.validate()?;
        Ok(story)
    }
}

fn school_world() -> FictionResult<World> {
    let mut meta = WorldMeta::new("School of Forgotten Subjects", "entrance");
    meta.finale = Some(RoomId::new("secret_chamber"));
    meta.key_items = vec![ItemId::new("rusty_key"), ItemId::new("master_key")];
    let mut world = World::new(meta);

    let rooms = [
        Room::new(
            "entrance",
            "School Entrance Hall",
            "You stand before the grand entrance of the School of Forgotten Subjects. Ancient \
             stone archways tower above you, carved with mysterious runes that seem to shimmer \
             in the torchlight. A heavy wooden door with iron hinges leads deeper into the school.",
        )
        .with_exit(Direction::North, "corridor")
        .with_exit(Direction::East, "library")
        .with_item("rusty_key")
        .with_character("guard"),
        Room::new(
            "corridor",
            "Main Corridor",
            "A long, dimly lit corridor stretches before you. Portraits of long-forgotten \
             headmasters line the walls, their eyes seeming to follow your every move. Doors \
             lead to various classrooms, and you can hear the faint sound of chanting from \
             somewhere nearby.",
        )
        .with_exit(Direction::South, "entrance")
        .with_exit(Direction::West, "alchemy_class")
        .with_exit(Direction::North, "headmaster_office")
        .with_exit(Direction::East, "astronomy_tower")
        .with_item("scroll")
        .with_character("ghost_student"),
        Room::new(
            "library",
            "Library of Lost Knowledge",
            "Towering bookshelves reach up into darkness, filled with ancient tomes and \
             forgotten scrolls. Dust motes dance in shafts of light filtering through stained \
             glass windows. A massive book lies open on a pedestal in the center.",
        )
        .with_exit(Direction::West, "entrance")
        .with_item("ancient_book")
        .with_item("magic_quill")
        .with_character("librarian"),
        Room::new(
            "alchemy_class",
            "Alchemy Laboratory",
            "Bubbling cauldrons and glowing vials fill this mystical laboratory. The air is \
             thick with the scent of herbs and magical ingredients. A large blackboard shows \
             complex formulas for forgotten potions.",
        )
        .with_exit(Direction::East, "corridor")
        .with_item("potion_ingredients")
        .with_item("crystal_vial")
        .with_character("professor_mysterium")
        .locked(),
        Room::new(
            "astronomy_tower",
            "Astronomy Tower",
            "At the top of a spiral staircase, you find yourself in a circular room with windows \
             on all sides. Ancient telescopes point toward the stars, and star charts cover every \
             available surface. The night sky twinkles mysteriously above.",
        )
        .with_exit(Direction::West, "corridor")
        .with_item("star_map")
        .with_item("telescope")
        .with_character("star_keeper"),
        Room::new(
            "headmaster_office",
            "Headmaster's Office",
            "The office of the school's enigmatic headmaster is filled with magical artifacts \
             and floating books. A large desk sits in the center, covered with important-looking \
             documents. Behind it, a portrait of the founder watches solemnly.",
        )
        .with_exit(Direction::South, "corridor")
        .with_item("diploma")
        .with_item("master_key")
        .with_character("headmaster")
        .requires("ancient_book"),
        Room::new(
            "secret_chamber",
            "Secret Chamber of Secrets",
            "Hidden beneath the school, this ancient chamber holds the deepest secrets of \
             forgotten knowledge. Glowing crystals illuminate walls covered in the oldest \
             magical texts. At the center stands an altar with a mysterious orb.",
        )
        .with_exit(Direction::Up, "headmaster_office")
        .with_item("orb_of_knowledge")
        .with_character("ancient_dragon")
        .hidden(),
    ];
    for room in rooms {
        world.add_room(room)?;
    }

    let items = [
        Item::new(
            "rusty_key",
            "Rusty Key",
            "An old iron key, worn by time but still functional. It might unlock something \
             important.",
        )
        .used_on("alchemy_class"),
        Item::new(
            "scroll",
            "Ancient Scroll",
            "A yellowed parchment with mysterious writing. The text appears to be a map of the \
             school's secret passages.",
        ),
        Item::new(
            "ancient_book",
            "Book of Forgotten Lore",
            "A massive tome bound in dragon leather. Its pages contain the accumulated wisdom of \
             centuries.",
        )
        .with_tag(ItemTag::Special),
        Item::new(
            "magic_quill",
            "Enchanted Quill",
            "A golden quill that writes by itself when dipped in magical ink.",
        ),
        Item::new(
            "potion_ingredients",
            "Rare Potion Ingredients",
            "A collection of mystical herbs and crystals needed for advanced alchemy.",
        ),
        Item::new(
            "crystal_vial",
            "Crystal Vial",
            "A perfectly clear vial that seems to amplify magical properties.",
        ),
        Item::new(
            "star_map",
            "Celestial Map",
            "A detailed chart showing the positions of mystical constellations.",
        ),
        Item::new(
            "telescope",
            "Enchanted Telescope",
            "This telescope can see not just stars, but glimpses of the future.",
        )
        .fixed(),
        Item::new(
            "diploma",
            "Diploma of Forgotten Arts",
            "An official certificate proving mastery of the forgotten subjects.",
        )
        .with_tag(ItemTag::Victory),
        Item::new(
            "master_key",
            "Master Key",
            "A ornate key that can open any door in the school.",
        ),
        Item::new(
            "orb_of_knowledge",
            "Orb of Infinite Knowledge",
            "A mystical orb containing all the forgotten knowledge of the ages.",
        )
        .with_tag(ItemTag::Ultimate),
    ];
    for item in items {
        world.add_item(item)?;
    }

    Ok(world)
}

fn school_uses() -> Vec<UseRule> {
    const MIXED: &str = "You mix the potion ingredients in the crystal vial. The mixture glows \
                         with magical energy!";

    vec![
        UseRule::new(
            "rusty_key",
            "entrance",
            "You use the rusty key. You hear a distant click - something has been unlocked.",
        )
        .with_effect(Effect::Unlock(RoomId::new("alchemy_class"))),
        UseRule::new("potion_ingredients", "alchemy_class", MIXED)
            .when(Condition::HasItem(ItemId::new("crystal_vial")))
            .with_effect(Effect::SetFlag(Flag::PotionMixed)),
        UseRule::new("crystal_vial", "alchemy_class", MIXED)
            .when(Condition::HasItem(ItemId::new("potion_ingredients")))
            .with_effect(Effect::SetFlag(Flag::PotionMixed)),
        UseRule::new(
            "ancient_book",
            "headmaster_office",
            "As you open the ancient book, a secret passage opens in the floor!",
        )
        .with_effect(Effect::Reveal(RoomId::new("secret_chamber")))
        .with_effect(Effect::AddExit {
            room: RoomId::new("headmaster_office"),
            direction: Direction::Down,
            to: RoomId::new("secret_chamber"),
        }),
    ]
}

fn school_dialogue() -> Vec<Dialogue> {
    vec![
        Dialogue::new("guard").with_line(Line::new(
            "The guard nods solemnly. 'Welcome to the School of Forgotten Subjects, young one. \
             Seek knowledge, but beware the dangers that lie within.'",
        )),
        Dialogue::new("ghost_student").with_line(Line::new(
            "The ghostly student whispers: 'I've been here for centuries, still trying to pass \
             my final exam. The library holds many secrets...'",
        )),
        Dialogue::new("librarian")
            .with_line(
                Line::new(
                    "The ancient librarian looks up from her work. 'Ah, a seeker of knowledge! \
                     Take the Book of Forgotten Lore - you'll need it to reach the headmaster.'",
                )
                .when(Condition::unset(Flag::LibraryBookFound)),
            )
            .with_line(Line::new(
                "The librarian smiles knowingly. 'The book will serve you well. Knowledge is \
                 power, young scholar.'",
            )),
        Dialogue::new("professor_mysterium").with_line(Line::new(
            "Professor Mysterium adjusts his pointed hat. 'Ah, an alchemist in training! Mix the \
             ingredients carefully - one wrong move and... well, let's just say we've lost \
             students before.'",
        )),
        Dialogue::new("star_keeper").with_line(Line::new(
            "The Star Keeper gazes through a telescope. 'The stars tell of great destiny. Your \
             path leads to the deepest secrets of this school.'",
        )),
        Dialogue::new("headmaster")
            .with_line(
                Line::new(
                    "The Headmaster's eyes light up. 'You have proven worthy! The book you carry \
                     holds the key to our greatest secret. Use it wisely.'",
                )
                .when(Condition::HasItem(ItemId::new("ancient_book"))),
            )
            .with_line(Line::new(
                "The Headmaster regards you seriously. 'You seek audience with me? First, prove \
                 your worth by finding the Book of Forgotten Lore.'",
            )),
        Dialogue::new("ancient_dragon")
            .with_line(
                Line::new(
                    "The ancient dragon opens one massive eye. 'So, another seeker reaches my \
                     chamber. Answer me this: What is the most powerful magic?' (Hint: try \
                     'answer knowledge')",
                )
                .when(Condition::unset(Flag::DragonTalked))
                .with_effect(Effect::SetFlag(Flag::DragonTalked)),
            )
            .with_line(Line::new(
                "The dragon nods approvingly. 'You have learned much, young scholar. Take the orb \
                 - you have earned it.'",
            )),
    ]
}
