//! User actions on a visualized structure.
//!
//! On the command line an action is a token such as `push:42`, `pop`,
//! `enqueue:A`, `dequeue`, `peek`, `reset` or `random:5`. Parsing is
//! structure-agnostic; whether a verb fits the structure is checked when the
//! action is applied.

use crate::model::collection::{StructureKind, RANDOM_BATCH};
use crate::view_state::compressor::MAX_ITEMS;
use thiserror::Error;

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Push or enqueue a raw (not yet validated) value.
    Insert {
        /// Verb as typed, used to reject `push` on a queue and vice versa.
        verb: Verb,
        /// Raw value text.
        value: String,
    },
    /// Pop or dequeue.
    Remove {
        /// Verb as typed.
        verb: Verb,
    },
    /// Highlight the next item to be removed.
    Peek,
    /// Clear the collection.
    Reset,
    /// Insert this many random values.
    AddRandom(usize),
}

/// Structure-specific verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Stack insert.
    Push,
    /// Stack remove.
    Pop,
    /// Queue insert.
    Enqueue,
    /// Queue remove.
    Dequeue,
}

impl Verb {
    /// Structure this verb belongs to.
    pub fn structure(&self) -> StructureKind {
        match self {
            Self::Push | Self::Pop => StructureKind::Stack,
            Self::Enqueue | Self::Dequeue => StructureKind::Queue,
        }
    }

    /// Verb as written on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Enqueue => "enqueue",
            Self::Dequeue => "dequeue",
        }
    }
}

/// Errors parsing an action token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    /// The verb is not one of the known actions.
    #[error("unknown action `{0}` (expected push, pop, enqueue, dequeue, peek, reset or random)")]
    UnknownVerb(String),

    /// An insert verb was given without `:VALUE`.
    #[error("`{0}` needs a value, e.g. `{0}:42`")]
    MissingValue(&'static str),

    /// A verb that takes no argument was given one.
    #[error("`{0}` takes no value")]
    UnexpectedValue(&'static str),

    /// `random:N` with a non-numeric, zero or oversized `N`.
    #[error("invalid random count `{0}`")]
    InvalidCount(String),
}

impl std::str::FromStr for Action {
    type Err = ActionParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match token.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (token, None),
        };

        let insert = |verb: Verb| match arg {
            Some(value) => Ok(Self::Insert {
                verb,
                value: value.to_string(),
            }),
            None => Err(ActionParseError::MissingValue(verb.as_str())),
        };
        let bare = |name: &'static str, action: Self| match arg {
            None => Ok(action),
            Some(_) => Err(ActionParseError::UnexpectedValue(name)),
        };

        match verb.to_ascii_lowercase().as_str() {
            "push" => insert(Verb::Push),
            "enqueue" => insert(Verb::Enqueue),
            "pop" => bare("pop", Self::Remove { verb: Verb::Pop }),
            "dequeue" => bare("dequeue", Self::Remove { verb: Verb::Dequeue }),
            "peek" => bare("peek", Self::Peek),
            "reset" => bare("reset", Self::Reset),
            "random" => match arg {
                None => Ok(Self::AddRandom(RANDOM_BATCH)),
                Some(n) => match n.parse::<usize>() {
                    Ok(count) if (1..=MAX_ITEMS).contains(&count) => Ok(Self::AddRandom(count)),
                    _ => Err(ActionParseError::InvalidCount(n.to_string())),
                },
            },
            _ => Err(ActionParseError::UnknownVerb(verb.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insert { verb, value } => write!(f, "{}:{}", verb.as_str(), value),
            Self::Remove { verb } => f.write_str(verb.as_str()),
            Self::Peek => f.write_str("peek"),
            Self::Reset => f.write_str("reset"),
            Self::AddRandom(n) => write!(f, "random:{n}"),
        }
    }
}
