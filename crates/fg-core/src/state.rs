use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named story-progress flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// A key item has been picked up.
    HasKey,
    /// The Book of Forgotten Lore has been picked up.
    LibraryBookFound,
    /// The potion was mixed in the alchemy lab.
    PotionMixed,
    /// The dragon has posed its riddle.
    DragonTalked,
    /// The secret chamber has been discovered.
    MapFound,
    /// The dragon's riddle has been answered.
    FinalExamTaken,
    /// The win condition has fired.
    GameCompleted,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 7] = [
        Self::HasKey,
        Self::LibraryBookFound,
        Self::PotionMixed,
        Self::DragonTalked,
        Self::MapFound,
        Self::FinalExamTaken,
        Self::GameCompleted,
    ];

    /// The snake_case name used in story files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HasKey => "has_key",
            Self::LibraryBookFound => "library_book_found",
            Self::PotionMixed => "potion_mixed",
            Self::DragonTalked => "dragon_talked",
            Self::MapFound => "map_found",
            Self::FinalExamTaken => "final_exam_taken",
            Self::GameCompleted => "game_completed",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Story progress. Flags only ever go from unset to set; there is no way to
/// clear one within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    set: BTreeSet<Flag>,
}

impl GameState {
    /// Create a state with every flag unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a flag is set.
    pub fn is_set(&self, flag: Flag) -> bool {
        self.set.contains(&flag)
    }

    /// Set a flag. Returns `true` if it was not set before.
    pub fn set(&mut self, flag: Flag) -> bool {
        self.set.insert(flag)
    }

    /// Iterate over the flags that are set.
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.set.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let state = GameState::new();
        assert!(Flag::ALL.iter().all(|f| !state.is_set(*f)));
    }

    #[test]
    fn set_reports_first_time_only() {
        let mut state = GameState::new();
        assert!(state.set(Flag::DragonTalked));
        assert!(!state.set(Flag::DragonTalked));
        assert!(state.is_set(Flag::DragonTalked));
    }

    #[test]
    fn flag_names_match_serde() {
        for flag in Flag::ALL {
            let json = serde_json::to_value(flag).unwrap();
            assert_eq!(json, flag.name());
        }
    }

    proptest! {
        #[test]
        fn flags_are_monotonic(ops in proptest::collection::vec(0usize..Flag::ALL.len(), 0..40)) {
            let mut state = GameState::new();
            let mut seen = BTreeSet::new();
            for i in ops {
                let flag = Flag::ALL[i];
                state.set(flag);
                seen.insert(flag);
                for f in &seen {
                    prop_assert!(state.is_set(*f));
                }
            }
            prop_assert_eq!(state.iter().count(), seen.len());
        }
    }
}
