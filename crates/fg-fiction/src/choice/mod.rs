//! Rule engine for story content.
//!
//! Dialogue, item uses, riddles, and pickups are all tables of rules built
//! from the same conditions and effects.

mod condition;
mod dialogue;
mod effect;
mod rules;

pub use condition::Condition;
pub use dialogue::{Dialogue, Line};
pub use effect::{Effect, apply_all};
pub use rules::{RiddleRule, TakeRule, UseRule};
