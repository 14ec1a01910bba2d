//! Adventure engine for Forgotten.
//!
//! Turns free-text commands into operations on a [`fg_core::World`] and
//! answers with plain text. Story content (rooms, items, dialogue, item uses,
//! riddles) is data: the built-in School of Forgotten Subjects is one
//! [`Story`], and any story file of the same shape plays the same way.

/// Rule engine: conditions, effects, and the rule tables built from them.
pub mod choice;
/// Session configuration.
pub mod config;
/// Error and refusal types for the engine.
pub mod error;
/// Command parsing and item name resolution.
pub mod parser;
/// Adventure session management.
pub mod session;
/// Story definitions and the built-in school.
pub mod story;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult, Refusal, RefusalKind};
pub use parser::{Command, parse_command};
pub use session::AdventureSession;
pub use story::Story;
