//! The static description of a puzzle: its slots and where they cross.

use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display, Formatter};

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::MAX_SLOT_LENGTH;

/// An identifier for a given slot, based on its index in the `Puzzle`'s `variables` field.
pub type VariableId = usize;

/// Zero-indexed (row, column) coords for a cell in the grid, where row 0 is the top row.
pub type GridCoord = (usize, usize);

/// Offsets `(i, j)` of a shared cell: character `i` of one slot's word must equal character `j`
/// of the other slot's word.
pub type Overlap = (usize, usize);

/// Direction that a slot is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A slot in the grid. Two variables are the same slot iff all four fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Variable {
        Variable {
            row,
            col,
            direction,
            length,
        }
    }

    /// The grid coords of the cell at `idx` within this slot.
    pub fn cell(&self, idx: usize) -> GridCoord {
        match self.direction {
            Direction::Across => (self.row, self.col + idx),
            Direction::Down => (self.row + idx, self.col),
        }
    }

    /// Generate the coords for each cell of this slot.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.length).map(move |idx| self.cell(idx))
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (row, col) = (self.row, self.col);
        write!(f, "({row}, {col}) {}/{}", self.direction, self.length)
    }
}

/// A crossing between one slot and another, referencing the other slot's id and the location of
/// the intersection within each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub other_id: VariableId,
    pub cell: usize,
    pub other_cell: usize,
}

/// An immutable puzzle: a list of slots plus, for every pair of them, the cell they share if any.
pub struct Puzzle {
    variables: Vec<Variable>,
    crossings: Vec<SmallVec<[Crossing; MAX_SLOT_LENGTH]>>,
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let crossing_count: usize = self.crossings.iter().map(|c| c.len()).sum();
        f.debug_struct("Puzzle")
            .field("variables", &self.variables)
            .field("crossing_count", &crossing_count)
            .finish()
    }
}

impl Puzzle {
    /// Build a puzzle from slot geometry, computing overlaps from the cells each slot covers.
    pub fn new(variables: Vec<Variable>) -> Result<Puzzle> {
        check_variables(&variables)?;

        // Build a map from cell location to the slots covering it, which we can then use to
        // calculate crossings.
        let mut entries_by_cell: HashMap<GridCoord, Vec<(VariableId, usize)>> = HashMap::new();
        for (id, variable) in variables.iter().enumerate() {
            for (cell_idx, loc) in variable.cells().enumerate() {
                entries_by_cell.entry(loc).or_default().push((id, cell_idx));
            }
        }

        let mut overlaps: Vec<(VariableId, VariableId, Overlap)> = vec![];
        let mut seen_pairs: HashSet<(VariableId, VariableId)> = HashSet::new();

        for entries in entries_by_cell.values() {
            for (idx, &(id, cell)) in entries.iter().enumerate() {
                for &(other_id, other_cell) in &entries[idx + 1..] {
                    if !seen_pairs.insert((id, other_id)) {
                        return Err(Error::MultipleOverlaps {
                            first: variables[id],
                            second: variables[other_id],
                        });
                    }
                    overlaps.push((id, other_id, (cell, other_cell)));
                }
            }
        }

        Ok(Puzzle::build(variables, overlaps))
    }

    /// Build a puzzle from slots plus an explicit list of overlaps, each given once per unordered
    /// pair as `(x, y, (i, j))`.
    pub fn with_overlaps<I>(variables: Vec<Variable>, overlaps: I) -> Result<Puzzle>
    where
        I: IntoIterator<Item = (VariableId, VariableId, Overlap)>,
    {
        check_variables(&variables)?;

        let count = variables.len();
        let mut seen_pairs: HashSet<(VariableId, VariableId)> = HashSet::new();
        let mut checked: Vec<(VariableId, VariableId, Overlap)> = vec![];

        for (x, y, (i, j)) in overlaps {
            for id in [x, y] {
                if id >= count {
                    return Err(Error::UnknownVariable { id, count });
                }
            }
            if x == y {
                return Err(Error::SelfOverlap { id: x });
            }
            for (id, offset) in [(x, i), (y, j)] {
                let length = variables[id].length;
                if offset >= length {
                    return Err(Error::OverlapOutOfRange { id, offset, length });
                }
            }
            if !seen_pairs.insert((x.min(y), x.max(y))) {
                return Err(Error::MultipleOverlaps {
                    first: variables[x],
                    second: variables[y],
                });
            }
            checked.push((x, y, (i, j)));
        }

        Ok(Puzzle::build(variables, checked))
    }

    fn build(variables: Vec<Variable>, overlaps: Vec<(VariableId, VariableId, Overlap)>) -> Puzzle {
        let mut crossings: Vec<SmallVec<[Crossing; MAX_SLOT_LENGTH]>> =
            variables.iter().map(|_| SmallVec::new()).collect();

        for (x, y, (i, j)) in overlaps {
            crossings[x].push(Crossing {
                other_id: y,
                cell: i,
                other_cell: j,
            });
            crossings[y].push(Crossing {
                other_id: x,
                cell: j,
                other_cell: i,
            });
        }
        for variable_crossings in &mut crossings {
            variable_crossings.sort_by_key(|crossing| (crossing.cell, crossing.other_id));
        }

        Puzzle {
            variables,
            crossings,
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn ids(&self) -> std::ops::Range<VariableId> {
        0..self.variables.len()
    }

    /// Find the id of a slot by its geometry.
    pub fn id_of(&self, variable: &Variable) -> Option<VariableId> {
        self.variables
            .iter()
            .position(|candidate| candidate == variable)
    }

    /// Every crossing of slot `id`, ordered by position within the slot.
    pub fn crossings(&self, id: VariableId) -> &[Crossing] {
        &self.crossings[id]
    }

    /// The slots that share a cell with slot `id`.
    pub fn neighbors(&self, id: VariableId) -> impl Iterator<Item = VariableId> + '_ {
        self.crossings[id].iter().map(|crossing| crossing.other_id)
    }

    /// Number of slots that cross slot `id`.
    pub fn degree(&self, id: VariableId) -> usize {
        self.crossings[id].len()
    }

    /// The overlap between `x` and `y` as `(offset in x, offset in y)`, if they share a cell.
    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.crossings[x]
            .iter()
            .find(|crossing| crossing.other_id == y)
            .map(|crossing| (crossing.cell, crossing.other_cell))
    }
}

fn check_variables(variables: &[Variable]) -> Result<()> {
    let mut seen: HashSet<&Variable> = HashSet::with_capacity(variables.len());
    for variable in variables {
        if variable.length == 0 {
            return Err(Error::EmptyVariable {
                variable: *variable,
            });
        }
        if !seen.insert(variable) {
            return Err(Error::DuplicateVariable {
                variable: *variable,
            });
        }
    }
    Ok(())
}
