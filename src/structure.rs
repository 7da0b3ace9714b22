//! Reading a puzzle layout from text and drawing a fill back over it. None of the solving code
//! depends on this module.

use std::fs;
use std::path::Path;

use crate::backtracking_search::Assignment;
use crate::error::{Error, Result};
use crate::puzzle::{Direction, GridCoord, Puzzle, Variable};
use crate::word_list::WordList;

/// Character drawn for blocked cells.
pub const BLOCK: char = '█';

/// Character marking an open cell in a structure file. Anything else is a block.
pub const OPEN: char = '_';

/// The shape of a grid: which cells are open and which are blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub width: usize,
    pub height: usize,
    open: Vec<Vec<bool>>,
}

impl Structure {
    /// Parse a structure from a string template, with `_` representing open cells and anything
    /// else representing blocks. Short rows are padded with blocks out to the widest row.
    pub fn parse(template: &str) -> Result<Structure> {
        let lines: Vec<&str> = template.lines().collect();
        if lines.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let open = lines
            .iter()
            .map(|line| {
                let mut row: Vec<bool> = line.chars().map(|cell| cell == OPEN).collect();
                row.resize(width, false);
                row
            })
            .collect();

        Ok(Structure {
            width,
            height: lines.len(),
            open,
        })
    }

    /// Read and parse a structure file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Structure> {
        let contents = fs::read_to_string(path)?;
        Structure::parse(&contents)
    }

    pub fn is_open(&self, (row, col): GridCoord) -> bool {
        self.open
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Every maximal run of two or more open cells, across runs first, each in reading order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = vec![];

        for direction in [Direction::Across, Direction::Down] {
            let (outer, inner) = match direction {
                Direction::Across => (self.height, self.width),
                Direction::Down => (self.width, self.height),
            };
            let coord = |line: usize, idx: usize| match direction {
                Direction::Across => (line, idx),
                Direction::Down => (idx, line),
            };

            for line in 0..outer {
                let mut run_start: Option<usize> = None;

                for idx in 0..=inner {
                    let open = idx < inner && self.is_open(coord(line, idx));

                    match (open, run_start) {
                        (true, None) => run_start = Some(idx),
                        (false, Some(start)) => {
                            if idx - start > 1 {
                                let (row, col) = coord(line, start);
                                variables.push(Variable::new(row, col, direction, idx - start));
                            }
                            run_start = None;
                        }
                        _ => {}
                    }
                }
            }
        }

        // Reading order within each direction, matching how clue numbers are laid out.
        variables.sort_by_key(|variable| (variable.direction, variable.row, variable.col));
        variables
    }

    /// Build the puzzle described by this structure.
    pub fn puzzle(&self) -> Result<Puzzle> {
        Puzzle::new(self.variables())
    }

    /// Lay the assignment's words out over the grid.
    pub fn letter_grid(
        &self,
        puzzle: &Puzzle,
        word_list: &WordList,
        assignment: &Assignment,
    ) -> Vec<Vec<Option<char>>> {
        let mut letters: Vec<Vec<Option<char>>> = vec![vec![None; self.width]; self.height];

        for choice in assignment.choices() {
            let variable = puzzle.variable(choice.variable_id);
            let word = word_list.get(choice.word_id);

            for (cell_idx, &letter) in word.chars.iter().enumerate() {
                let (row, col) = variable.cell(cell_idx);
                if let Some(cell) = letters.get_mut(row).and_then(|cells| cells.get_mut(col)) {
                    *cell = Some(letter);
                }
            }
        }

        letters
    }

    /// Turn the assignment into a rendered string, one line per row. Blocks are drawn as `█` and
    /// open cells without a letter as spaces.
    pub fn render(&self, puzzle: &Puzzle, word_list: &WordList, assignment: &Assignment) -> String {
        let letters = self.letter_grid(puzzle, word_list, assignment);

        letters
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, letter)| {
                        if self.is_open((row, col)) {
                            letter.unwrap_or(' ')
                        } else {
                            BLOCK
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
