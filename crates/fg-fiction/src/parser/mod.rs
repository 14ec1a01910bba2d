//! Command parsing and item name resolution.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{normalize, resolve_item};
