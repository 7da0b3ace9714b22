//! Fill a crossword grid by treating it as a constraint satisfaction problem.
//!
//! Each slot in the grid is a variable whose domain is the word list. Solving runs in three
//! stages:
//!
//! 1. node consistency drops every word whose length doesn't match its slot ([`domain`]);
//! 2. AC-3 removes words that have no compatible word in some crossing slot
//!    ([`arc_consistency`]);
//! 3. backtracking search assigns one distinct word per slot, choosing slots by fewest remaining
//!    options (then most crossings) and words by fewest options ruled out in crossing slots
//!    ([`backtracking_search`]).
//!
//! ```
//! use crossword_fill::{solve, Direction, Outcome, Puzzle, Variable, WordList};
//!
//! let puzzle = Puzzle::new(vec![
//!     Variable::new(0, 0, Direction::Across, 3),
//!     Variable::new(0, 0, Direction::Down, 3),
//! ]).unwrap();
//! let word_list = WordList::new(["cat", "cow", "dog"]);
//!
//! match solve(&puzzle, &word_list) {
//!     Outcome::Solved(assignment) => assert!(assignment.is_consistent(&puzzle, &word_list)),
//!     Outcome::Unsatisfiable => unreachable!(),
//! }
//! ```

pub mod arc_consistency;
pub mod backtracking_search;
pub mod domain;
pub mod error;
pub mod logging;
pub mod puzzle;
pub mod structure;
pub mod word_list;

pub use backtracking_search::{solve, Assignment, Outcome, Solution, Solver, SolverOptions};
pub use error::{Error, Result};
pub use puzzle::{Direction, Puzzle, Variable, VariableId};
pub use word_list::{WordId, WordList};

/// The expected maximum length for a single slot. Longer slots still work, they just spill to
/// the heap.
pub const MAX_SLOT_LENGTH: usize = 21;
