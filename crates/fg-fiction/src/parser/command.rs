//! Command parsing for player input.

use fg_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Describe the room, or an item when a target is given.
    Look {
        /// Optional item to examine.
        target: Option<String>,
    },
    /// Examine an item.
    Examine {
        /// The item name.
        target: String,
    },
    /// Walk through an exit.
    Move {
        /// The direction label as typed.
        direction: String,
    },
    /// Pick up an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Use a carried item, optionally on something.
    Use {
        /// The item name.
        item: String,
        /// What the item is used on, if given.
        target: Option<String>,
    },
    /// Talk to a character.
    Talk {
        /// The character name.
        character: String,
    },
    /// Answer a question someone asked.
    Answer {
        /// The answer text.
        response: String,
    },
    /// List inventory.
    Inventory,
    /// Show help.
    Help,
    /// Unknown command.
    Unknown {
        /// The input as typed.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const LOOK_VERBS: &[&str] = &["look", "l"];
const EXAMINE_VERBS: &[&str] = &["examine", "exam", "x"];
const MOVE_VERBS: &[&str] = &["go", "move"];
const TAKE_VERBS: &[&str] = &["take", "get", "pick"];
const USE_VERBS: &[&str] = &["use"];
const TALK_VERBS: &[&str] = &["talk", "speak"];
const ANSWER_VERBS: &[&str] = &["answer"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const HELP_VERBS: &[&str] = &["help", "h"];

/// Articles dropped in front of an object name.
const ARTICLES: &[&str] = &["the", "a", "an"];

/// Parse a player input line into a command.
///
/// The line is trimmed and lowercased, the first word picks the command and
/// the remaining words are re-joined with single spaces. A leading article
/// is dropped from object names, so `take the key` takes the key.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Command::Unknown { input };
    };

    // A bare direction word is its own move
    if Direction::from_word(verb).is_some() {
        return Command::Move {
            direction: verb.to_string(),
        };
    }

    if LOOK_VERBS.contains(&verb) {
        let target = object(rest, &["at"]);
        return Command::Look {
            target: (!target.is_empty()).then(|| target.join(" ")),
        };
    }
    if EXAMINE_VERBS.contains(&verb) {
        return Command::Examine {
            target: object(rest, &["at"]).join(" "),
        };
    }
    if MOVE_VERBS.contains(&verb) {
        return Command::Move {
            direction: rest.join(" "),
        };
    }
    if TAKE_VERBS.contains(&verb) {
        return Command::Take {
            item: object(rest, &["up"]).join(" "),
        };
    }
    if USE_VERBS.contains(&verb) {
        return parse_use(rest);
    }
    if TALK_VERBS.contains(&verb) {
        return Command::Talk {
            character: object(rest, &["to", "with"]).join(" "),
        };
    }
    if ANSWER_VERBS.contains(&verb) {
        return Command::Answer {
            response: rest.join(" "),
        };
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb) {
        return Command::Help;
    }

    Command::Unknown { input }
}

/// Drop a leading filler word such as "at" in "look at".
fn skip_word<'a, 'b>(rest: &'a [&'b str], fillers: &[&str]) -> &'a [&'b str] {
    match rest.split_first() {
        Some((first, tail)) if fillers.contains(first) => tail,
        _ => rest,
    }
}

/// Drop a leading filler word, then a leading article.
fn object<'a, 'b>(rest: &'a [&'b str], fillers: &[&str]) -> &'a [&'b str] {
    skip_word(skip_word(rest, fillers), ARTICLES)
}

fn parse_use(rest: &[&str]) -> Command {
    // "use X on Y" / "use X with Y"
    if let Some(split_pos) = rest
        .iter()
        .skip(1)
        .position(|w| *w == "on" || *w == "with")
        .map(|p| p + 1)
    {
        let target = object(&rest[split_pos + 1..], &[]).join(" ");
        Command::Use {
            item: object(&rest[..split_pos], &[]).join(" "),
            target: (!target.is_empty()).then_some(target),
        }
    } else {
        Command::Use {
            item: object(rest, &[]).join(" "),
            target: None,
        }
    }
}
