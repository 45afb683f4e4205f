//! Terminal commands - Parsing of the interactive stdin surface.
//!
//! Criterion numbers are 1-based on the terminal and 0-based everywhere else.

use std::str::FromStr;
use thiserror::Error;

use crate::domain::ranking::NudgeDirection;

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalCommand {
    /// `set <criterion> <value>`
    Set { criterion: usize, value: f64 },
    /// `up <criterion>` / `down <criterion>`
    Nudge {
        criterion: usize,
        direction: NudgeDirection,
    },
    Recompute,
    Weights,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a criterion number (criteria are numbered from 1)")]
    InvalidCriterion(String),

    #[error("'{0}' is not a number")]
    InvalidValue(String),
}

pub const HELP: &str = "\
Commands:
  set <criterion> <value>  set a weight
  up <criterion>           raise a weight by one step
  down <criterion>         lower a weight by one step
  recompute                recompute the ranking
  weights                  show current weights
  help                     show this help
  quit                     exit";

impl FromStr for TerminalCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match (verb.as_str(), args.as_slice()) {
            ("set", [criterion, value]) => Ok(TerminalCommand::Set {
                criterion: parse_criterion(criterion)?,
                value: value
                    .parse()
                    .map_err(|_| CommandError::InvalidValue(value.to_string()))?,
            }),
            ("set", _) => Err(CommandError::Usage("set <criterion> <value>")),
            ("up", [criterion]) => Ok(TerminalCommand::Nudge {
                criterion: parse_criterion(criterion)?,
                direction: NudgeDirection::Up,
            }),
            ("up", _) => Err(CommandError::Usage("up <criterion>")),
            ("down", [criterion]) => Ok(TerminalCommand::Nudge {
                criterion: parse_criterion(criterion)?,
                direction: NudgeDirection::Down,
            }),
            ("down", _) => Err(CommandError::Usage("down <criterion>")),
            ("recompute", []) => Ok(TerminalCommand::Recompute),
            ("weights", []) => Ok(TerminalCommand::Weights),
            ("help", _) => Ok(TerminalCommand::Help),
            ("quit" | "exit", _) => Ok(TerminalCommand::Quit),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_criterion(text: &str) -> Result<usize, CommandError> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidCriterion(text.to_string())),
    }
}
