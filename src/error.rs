//! Error type for everything at the edges of the solver: reading structure and word list files,
//! building a [`Puzzle`](crate::puzzle::Puzzle) from slot geometry, and running out of time.
//!
//! An unsatisfiable puzzle is *not* an error; see [`Outcome`](crate::backtracking_search::Outcome).

use std::io;

use instant::Duration;

use crate::puzzle::{Variable, VariableId};

/// Errors produced while building or solving a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Structure has no rows")]
    EmptyStructure,

    #[error("Slot {variable} appears more than once")]
    DuplicateVariable { variable: Variable },

    #[error("Slot {variable} has zero length")]
    EmptyVariable { variable: Variable },

    #[error("Slots {first} and {second} share more than one cell")]
    MultipleOverlaps { first: Variable, second: Variable },

    #[error("Slot id {id} is out of range (puzzle has {count} slots)")]
    UnknownVariable { id: VariableId, count: usize },

    #[error("Slot {id} cannot overlap itself")]
    SelfOverlap { id: VariableId },

    #[error("Offset {offset} out of range for slot {id} (length {length})")]
    OverlapOutOfRange {
        id: VariableId,
        offset: usize,
        length: usize,
    },

    #[error("Gave up after {elapsed:?} without finishing the search")]
    TimedOut { elapsed: Duration },
}

pub type Result<T> = std::result::Result<T, Error>;
