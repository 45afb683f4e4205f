//! Terminal surface adapters.

mod commands;

pub use commands::{CommandError, TerminalCommand, HELP};
