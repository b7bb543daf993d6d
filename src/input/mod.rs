//! Input handling: the command vocabulary and the key-binding map that
//! turns key strings into commands.

/// Key string → command lookup.
pub mod bindings;
/// Commands the controller accepts.
pub mod command;

pub use bindings::{KeyBindings, KeyCommandTag};
pub use command::Command;
