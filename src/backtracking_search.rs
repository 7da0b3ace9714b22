//! This module implements grid-filling using chronological backtracking search. Arc consistency is
//! established once up front; after that the domains are read-only, and the search picks slots
//! with the "minimum remaining values" heuristic (breaking ties by degree) and tries their words in
//! "least constraining value" order.
//!
//! The search runs on an explicit stack of frames rather than native recursion, so its depth is
//! only bounded by the heap.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use instant::{Duration, Instant};
use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::arc_consistency::{ac3, ArcConsistencyFailure, ArcConsistencyResult};
use crate::domain::Domains;
use crate::error::{Error, Result};
use crate::puzzle::{Crossing, Puzzle, VariableId};
use crate::word_list::{WordId, WordList};
use crate::MAX_SLOT_LENGTH;

/// How many search states should we visit between checks of the time limit?
pub const INTERRUPT_FREQUENCY: usize = 10;

/// A struct recording a slot assignment made during the filling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub variable_id: VariableId,
    pub word_id: WordId,
}

/// A partial mapping from slot to word. This is mutated in place during search, with every
/// assignment undone before we backtrack past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    use_counts: HashMap<WordId, usize>,
    assigned_count: usize,
}

impl Assignment {
    /// An empty assignment for a puzzle with `variable_count` slots.
    pub fn new(variable_count: usize) -> Assignment {
        Assignment {
            words: vec![None; variable_count],
            use_counts: HashMap::new(),
            assigned_count: 0,
        }
    }

    pub fn get(&self, id: VariableId) -> Option<WordId> {
        self.words[id]
    }

    /// The word chosen for slot `id`, as a string.
    pub fn word<'a>(&self, id: VariableId, word_list: &'a WordList) -> Option<&'a str> {
        self.words[id].map(|word_id| word_list.word_str(word_id))
    }

    pub fn is_assigned(&self, id: VariableId) -> bool {
        self.words[id].is_some()
    }

    /// Is this word used by any slot?
    pub fn uses_word(&self, word_id: WordId) -> bool {
        self.use_counts.contains_key(&word_id)
    }

    /// Number of slots with a word.
    pub fn len(&self) -> usize {
        self.assigned_count
    }

    pub fn is_empty(&self) -> bool {
        self.assigned_count == 0
    }

    /// Does every slot have a word?
    pub fn is_complete(&self) -> bool {
        self.assigned_count == self.words.len()
    }

    pub fn choices(&self) -> impl Iterator<Item = Choice> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(variable_id, word_id)| {
                word_id.map(|word_id| Choice {
                    variable_id,
                    word_id,
                })
            })
    }

    /// Put `word_id` in slot `id`, replacing whatever was there.
    pub fn assign(&mut self, id: VariableId, word_id: WordId) {
        self.unassign(id);
        self.words[id] = Some(word_id);
        *self.use_counts.entry(word_id).or_insert(0) += 1;
        self.assigned_count += 1;
    }

    /// Clear slot `id`, returning the word it held.
    pub fn unassign(&mut self, id: VariableId) -> Option<WordId> {
        let word_id = self.words[id].take()?;

        if let Some(count) = self.use_counts.get_mut(&word_id) {
            *count -= 1;
            if *count == 0 {
                self.use_counts.remove(&word_id);
            }
        }
        self.assigned_count -= 1;

        Some(word_id)
    }

    /// Check every invariant from scratch: each word has its slot's length, no word is used
    /// twice, and every pair of assigned crossing slots agrees on the shared letter.
    pub fn is_consistent(&self, puzzle: &Puzzle, word_list: &WordList) -> bool {
        let mut words_used: HashSet<WordId> = HashSet::with_capacity(self.assigned_count);

        for choice in self.choices() {
            let word = word_list.get(choice.word_id);

            if word.len() != puzzle.variable(choice.variable_id).length {
                return false;
            }
            if !words_used.insert(choice.word_id) {
                return false;
            }
            for crossing in puzzle.crossings(choice.variable_id) {
                if let Some(other_word_id) = self.words[crossing.other_id] {
                    let other_word = word_list.get(other_word_id);
                    if other_word.char_at(crossing.other_cell) != word.char_at(crossing.cell) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// The result of a search: either every slot gets a word, or no fill exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Assignment),
    Unsatisfiable,
}

impl Outcome {
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Outcome::Solved(assignment) => Some(assignment),
            Outcome::Unsatisfiable => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// A struct tracking stats about the filling process.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub states: usize,
    pub backtracks: usize,
    pub eliminations: usize,
    pub initial_arc_consistency_time: Duration,
    pub total_time: Duration,
}

/// The outcome of `Solver::solve` along with statistics about how we got there.
#[derive(Debug, Clone)]
pub struct Solution {
    pub outcome: Outcome,
    pub statistics: Statistics,
}

/// Runtime knobs for a `Solver`.
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    /// Give up with `Error::TimedOut` once this much time has passed since the solver was built.
    pub time_limit: Option<Duration>,
}

/// A wall-clock budget, checked cooperatively between search states.
#[derive(Debug, Clone)]
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(start: Instant, limit: Duration) -> Self {
        Self { start, limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// One level of the search stack: a slot and its ordered candidates, `next` being the index of
/// the next candidate to try.
#[derive(Debug)]
struct Frame {
    variable_id: VariableId,
    candidates: Vec<WordId>,
    next: usize,
}

/// Solver for a single static puzzle. Building one seeds the domains and enforces node
/// consistency; `solve` does the rest.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    word_list: &'a WordList,
    domains: Domains,
    statistics: Statistics,
    start: Instant,
    budget: Option<TimeBudget>,
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle, word_list: &'a WordList) -> Solver<'a> {
        Solver::with_options(puzzle, word_list, SolverOptions::default())
    }

    pub fn with_options(
        puzzle: &'a Puzzle,
        word_list: &'a WordList,
        options: SolverOptions,
    ) -> Solver<'a> {
        let start = Instant::now();
        let SolverOptions { time_limit } = options;

        let mut domains = Domains::initialize(puzzle, word_list);
        domains.enforce_node_consistency(puzzle, word_list);

        Solver {
            puzzle,
            word_list,
            domains,
            statistics: Statistics::default(),
            start,
            budget: time_limit.map(|limit| TimeBudget::new(start, limit)),
        }
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Run AC-3 over the whole puzzle, recording how long it took and how much it pruned.
    pub fn enforce_arc_consistency(&mut self) -> ArcConsistencyResult {
        let start = Instant::now();
        let result = ac3(&mut self.domains, self.puzzle, self.word_list, None);

        self.statistics.initial_arc_consistency_time = start.elapsed();
        if let Ok(success) = &result {
            self.statistics.eliminations = success.eliminations;
        }

        result
    }

    /// Pick the unassigned slot with the fewest remaining options. Ties go to the slot crossing
    /// the most other slots, then to the lowest slot id.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<VariableId> {
        self.puzzle
            .ids()
            .filter(|&id| !assignment.is_assigned(id))
            .min_by_key(|&id| (self.domains.len(id), Reverse(self.puzzle.degree(id)), id))
    }

    /// Return the words in the domain of slot `id`, ordered by how many options they'd rule out
    /// in the crossing slots that aren't assigned yet. A crossing option is ruled out if it puts a
    /// different letter in the shared cell or is the very same word. Ties are broken by word id,
    /// which is lexicographic.
    pub fn order_domain_values(&self, id: VariableId, assignment: &Assignment) -> Vec<WordId> {
        let word_list = self.word_list;
        let open_crossings: SmallVec<[Crossing; MAX_SLOT_LENGTH]> = self
            .puzzle
            .crossings(id)
            .iter()
            .filter(|crossing| !assignment.is_assigned(crossing.other_id))
            .copied()
            .collect();

        // For each open crossing, how many of its options put each letter in the shared cell?
        let letter_counts: SmallVec<[HashMap<char, usize>; MAX_SLOT_LENGTH]> = open_crossings
            .iter()
            .map(|crossing| {
                let mut counts: HashMap<char, usize> = HashMap::new();
                for other_word_id in self.domains.word_ids(crossing.other_id) {
                    let letter = word_list.get(other_word_id).char_at(crossing.other_cell);
                    *counts.entry(letter).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut costs: Vec<(usize, WordId)> = self
            .domains
            .word_ids(id)
            .map(|word_id| {
                let word = word_list.get(word_id);

                let cost: usize = open_crossings
                    .iter()
                    .zip(&letter_counts)
                    .map(|(crossing, counts)| {
                        let letter = word.char_at(crossing.cell);
                        let compatible = counts.get(&letter).copied().unwrap_or(0);
                        let mut ruled_out = self.domains.len(crossing.other_id) - compatible;

                        // The same word is compatible with itself at the shared cell, but still
                        // can't be used twice.
                        if self.domains.contains(crossing.other_id, word_id)
                            && word.char_at(crossing.other_cell) == letter
                        {
                            ruled_out += 1;
                        }
                        ruled_out
                    })
                    .sum();

                (cost, word_id)
            })
            .collect();

        costs.sort_unstable();
        costs.into_iter().map(|(_, word_id)| word_id).collect()
    }

    /// Could slot `id` (currently unassigned) take `word_id` without breaking the assignment?
    /// Only the slot's own crossings are checked against letters; distinctness is checked against
    /// every assigned slot.
    pub fn is_consistent_choice(
        &self,
        assignment: &Assignment,
        id: VariableId,
        word_id: WordId,
    ) -> bool {
        let word_list = self.word_list;
        let word = word_list.get(word_id);

        if word.len() != self.puzzle.variable(id).length || assignment.uses_word(word_id) {
            return false;
        }

        for crossing in self.puzzle.crossings(id) {
            if let Some(other_word_id) = assignment.get(crossing.other_id) {
                let other_letter = word_list.get(other_word_id).char_at(crossing.other_cell);
                if other_letter != word.char_at(crossing.cell) {
                    return false;
                }
            }
        }

        true
    }

    fn check_deadline(&self) -> Result<()> {
        if let Some(budget) = &self.budget {
            if self.statistics.states % INTERRUPT_FREQUENCY == 0 && budget.expired() {
                return Err(Error::TimedOut {
                    elapsed: budget.elapsed(),
                });
            }
        }
        Ok(())
    }

    /// Extend `assignment` to a complete, consistent assignment using the current domains, or
    /// report that none exists. The first complete assignment found wins.
    pub fn backtrack(&mut self, mut assignment: Assignment) -> Result<Outcome> {
        let mut stack: Vec<Frame> = Vec::with_capacity(self.puzzle.len());

        'slot_selection: loop {
            if assignment.is_complete() {
                return Ok(Outcome::Solved(assignment));
            }

            self.check_deadline()?;
            self.statistics.states += 1;

            let variable_id = match self.select_unassigned_variable(&assignment) {
                Some(variable_id) => variable_id,
                None => return Ok(Outcome::Solved(assignment)),
            };
            let candidates = self.order_domain_values(variable_id, &assignment);
            stack.push(Frame {
                variable_id,
                candidates,
                next: 0,
            });

            // Move the top frame on to its next usable word, unwinding any frames that run out.
            loop {
                let frame = match stack.last_mut() {
                    Some(frame) => frame,
                    None => return Ok(Outcome::Unsatisfiable),
                };

                while let Some(&word_id) = frame.candidates.get(frame.next) {
                    frame.next += 1;

                    if self.is_consistent_choice(&assignment, frame.variable_id, word_id) {
                        assignment.assign(frame.variable_id, word_id);
                        continue 'slot_selection;
                    }
                }

                stack.pop();
                self.statistics.backtracks += 1;

                // The parent's current word led nowhere; clear it so it can try its next one.
                if let Some(parent) = stack.last() {
                    let undone = assignment.unassign(parent.variable_id);
                    trace!(
                        "Backtracking slot {} (was {:?})",
                        self.puzzle.variable(parent.variable_id),
                        undone.map(|word_id| self.word_list.word_str(word_id))
                    );
                }
            }
        }
    }

    /// Enforce arc consistency, then search. Only fails if a time limit was set and expired.
    pub fn solve(mut self) -> Result<Solution> {
        info!(
            "Solving {} slots with {} candidate words",
            self.puzzle.len(),
            self.word_list.len()
        );

        let outcome = match self.enforce_arc_consistency() {
            Err(ArcConsistencyFailure { wiped_out }) => {
                let variable = self.puzzle.variable(wiped_out);
                info!("No options left for slot {}", variable);
                Outcome::Unsatisfiable
            }
            Ok(_) => {
                let elapsed = self.statistics.initial_arc_consistency_time;
                debug!("Initial arc consistency took {:?}", elapsed);
                self.backtrack(Assignment::new(self.puzzle.len()))?
            }
        };

        self.statistics.total_time = self.start.elapsed();
        let verdict = match outcome {
            Outcome::Solved(_) => "Solved",
            Outcome::Unsatisfiable => "No fill exists",
        };
        info!("{} after {} states", verdict, self.statistics.states);

        Ok(Solution {
            outcome,
            statistics: self.statistics,
        })
    }
}

/// Solve a puzzle with no time limit.
pub fn solve(puzzle: &Puzzle, word_list: &WordList) -> Outcome {
    match Solver::new(puzzle, word_list).solve() {
        Ok(solution) => solution.outcome,
        Err(err) => unreachable!("Search without a time limit failed: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Direction::{Across, Down};
    use crate::puzzle::Variable;

    fn id(word_list: &WordList, word: &str) -> WordId {
        word_list.id_of(word).unwrap()
    }

    fn strings(word_list: &WordList, word_ids: &[WordId]) -> Vec<String> {
        word_ids
            .iter()
            .map(|&word_id| word_list.word_str(word_id).to_string())
            .collect()
    }

    /// `count` slots of length 3, none of which cross, plus enough words to fill them.
    fn independent_slots(count: usize) -> (Puzzle, WordList) {
        let variables: Vec<Variable> = (0..count)
            .map(|idx| Variable::new(2 * idx, 0, Across, 3))
            .collect();
        let words = (b'a'..=b'z').map(|letter| format!("ab{}", letter as char));

        (Puzzle::new(variables).unwrap(), WordList::new(words))
    }

    #[test]
    fn test_single_slot_takes_either_word() {
        let puzzle = Puzzle::new(vec![Variable::new(0, 0, Across, 4)]).unwrap();
        let word_list = WordList::new(["word", "four"]);

        let outcome = solve(&puzzle, &word_list);

        let assignment = outcome.assignment().expect("no fill");
        assert!(assignment.is_complete());
        let word = assignment.word(0, &word_list).unwrap();
        assert!(["word", "four"].contains(&word));
    }

    #[test]
    fn test_empty_puzzle_is_trivially_solved() {
        let puzzle = Puzzle::new(vec![]).unwrap();
        let word_list = WordList::new(["word"]);

        let outcome = solve(&puzzle, &word_list);

        assert_eq!(outcome, Outcome::Solved(Assignment::new(0)));
    }

    /// Both slots cross at their second letter and only "only" fits either of them.
    #[test]
    fn test_one_word_cannot_fill_two_slots() {
        let across = Variable::new(1, 0, Across, 4);
        let down = Variable::new(0, 1, Down, 4);
        let puzzle = Puzzle::new(vec![across, down]).unwrap();
        assert_eq!(puzzle.overlap(0, 1), Some((1, 1)));
        let word_list = WordList::new(["only", "on", "lonely"]);

        let mut solver = Solver::new(&puzzle, &word_list);
        assert!(solver.enforce_arc_consistency().is_ok());
        let words = |id| solver.domains().words(id, &word_list).collect::<Vec<_>>();
        assert_eq!(words(0), vec!["only"]);
        assert_eq!(words(1), vec!["only"]);

        assert_eq!(solve(&puzzle, &word_list), Outcome::Unsatisfiable);
    }

    #[test]
    fn test_failed_arc_consistency_skips_search() {
        let across = Variable::new(0, 0, Across, 3);
        let down = Variable::new(0, 1, Down, 3);
        let puzzle = Puzzle::new(vec![across, down]).unwrap();
        let word_list = WordList::new(["cat", "car", "tac"]);

        let solution = Solver::new(&puzzle, &word_list).solve().unwrap();

        assert_eq!(solution.outcome, Outcome::Unsatisfiable);
        assert_eq!(solution.statistics.states, 0);
    }

    /// ...
    /// ...
    /// ...
    #[test]
    fn test_fill_for_3x3_square() {
        let mut variables = vec![];
        for idx in 0..3 {
            variables.push(Variable::new(idx, 0, Across, 3));
            variables.push(Variable::new(0, idx, Down, 3));
        }
        let puzzle = Puzzle::new(variables).unwrap();
        let word_list = WordList::new([
            "tab", "ore", "pet", "top", "are", "bet", "cat", "dog", "ear", "tea", "ago",
        ]);

        let solution = Solver::new(&puzzle, &word_list).solve().unwrap();

        let assignment = solution.outcome.assignment().expect("no fill");
        assert!(assignment.is_complete());
        assert!(assignment.is_consistent(&puzzle, &word_list));
        assert!(solution.statistics.states >= puzzle.len());
    }

    #[test]
    fn test_select_prefers_fewest_options() {
        let puzzle = Puzzle::new(vec![
            Variable::new(0, 0, Across, 3),
            Variable::new(0, 0, Down, 3),
            Variable::new(5, 5, Across, 4),
        ])
        .unwrap();
        let word_list = WordList::new(["ant", "bee", "cat", "dog", "frog"]);
        let solver = Solver::new(&puzzle, &word_list);
        let assignment = Assignment::new(3);

        assert_eq!(solver.select_unassigned_variable(&assignment), Some(2));
    }

    #[test]
    fn test_select_breaks_ties_by_degree_then_id() {
        let puzzle = Puzzle::new(vec![
            Variable::new(5, 5, Across, 3),
            Variable::new(0, 0, Down, 3),
            Variable::new(0, 2, Down, 3),
            Variable::new(0, 0, Across, 3),
        ])
        .unwrap();
        assert_eq!(puzzle.degree(3), 2);
        let word_list = WordList::new(["ant", "bee", "cat"]);
        let solver = Solver::new(&puzzle, &word_list);

        let mut assignment = Assignment::new(4);
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(3));

        assignment.assign(3, id(&word_list, "bee"));
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(1));

        assignment.assign(1, id(&word_list, "bee"));
        assignment.assign(2, id(&word_list, "bee"));
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(0));

        assignment.assign(0, id(&word_list, "bee"));
        assert_eq!(solver.select_unassigned_variable(&assignment), None);
    }

    #[test]
    fn test_order_prefers_least_constraining_words() {
        let across = Variable::new(0, 0, Across, 3);
        let down = Variable::new(0, 0, Down, 3);
        let puzzle = Puzzle::new(vec![across, down]).unwrap();
        let word_list = WordList::new(["art", "cat", "cow", "cup"]);
        let solver = Solver::new(&puzzle, &word_list);
        let mut assignment = Assignment::new(2);

        // "art" rules out every c-word plus itself; each c-word only rules out "art" and itself.
        let order = solver.order_domain_values(0, &assignment);
        assert_eq!(strings(&word_list, &order), ["cat", "cow", "cup", "art"]);

        // Once the crossing slot is assigned, nothing is ruled out and ids decide.
        assignment.assign(1, id(&word_list, "cat"));
        let order = solver.order_domain_values(0, &assignment);
        assert_eq!(strings(&word_list, &order), ["art", "cat", "cow", "cup"]);
    }

    #[test]
    fn test_consistent_choice_checks_length_reuse_and_letters() {
        let across = Variable::new(0, 0, Across, 3);
        let down = Variable::new(0, 0, Down, 3);
        let puzzle = Puzzle::new(vec![across, down]).unwrap();
        let word_list = WordList::new(["cat", "cow", "dog", "goat"]);
        let solver = Solver::new(&puzzle, &word_list);
        let mut assignment = Assignment::new(2);
        assignment.assign(0, id(&word_list, "cat"));

        let fits = |word| solver.is_consistent_choice(&assignment, 1, id(&word_list, word));
        assert!(fits("cow"));
        assert!(!fits("cat"));
        assert!(!fits("dog"));
        assert!(!fits("goat"));
    }

    #[test]
    fn test_assignment_tracks_reuse() {
        let across = Variable::new(0, 0, Across, 3);
        let down = Variable::new(4, 4, Down, 3);
        let puzzle = Puzzle::new(vec![across, down]).unwrap();
        let word_list = WordList::new(["cat", "dog"]);
        let cat = id(&word_list, "cat");
        let mut assignment = Assignment::new(2);

        assignment.assign(0, cat);
        assignment.assign(1, cat);
        assert!(assignment.is_complete());
        assert!(!assignment.is_consistent(&puzzle, &word_list));

        assert_eq!(assignment.unassign(1), Some(cat));
        assert!(assignment.uses_word(cat));
        assert!(assignment.is_consistent(&puzzle, &word_list));

        assignment.assign(0, id(&word_list, "dog"));
        assert!(!assignment.uses_word(cat));
        assert_eq!(assignment.len(), 1);
        assert_eq!(assignment.unassign(1), None);
    }

    /// ...
    /// .#.
    /// .#.
    #[test]
    fn test_search_backtracks_out_of_dead_ends() {
        let puzzle = Puzzle::new(vec![
            Variable::new(0, 0, Across, 3),
            Variable::new(0, 0, Down, 3),
            Variable::new(0, 2, Down, 3),
        ])
        .unwrap();
        let word_list = WordList::new(["ant", "aza", "bee", "bzc", "cow"]);

        // "aza" ties with "bzc" on cost and wins on id, but then both down slots need "ant".
        let solution = Solver::new(&puzzle, &word_list).solve().unwrap();

        let assignment = solution.outcome.assignment().expect("no fill");
        assert_eq!(assignment.word(0, &word_list), Some("bzc"));
        assert_eq!(assignment.word(1, &word_list), Some("bee"));
        assert_eq!(assignment.word(2, &word_list), Some("cow"));
        assert!(assignment.is_consistent(&puzzle, &word_list));
        assert_eq!(solution.statistics.backtracks, 2);
    }

    #[test]
    fn test_time_limit_interrupts_search() {
        let puzzle = Puzzle::new(vec![Variable::new(0, 0, Across, 4)]).unwrap();
        let word_list = WordList::new(["word", "four"]);
        let options = SolverOptions {
            time_limit: Some(Duration::ZERO),
        };

        let result = Solver::with_options(&puzzle, &word_list, options).solve();

        assert!(matches!(result, Err(Error::TimedOut { .. })));
    }

    #[test]
    fn test_deadline_is_only_checked_every_few_states() {
        let expired = || SolverOptions {
            time_limit: Some(Duration::ZERO),
        };

        // Starting from state 1, eight slots are filled without reaching a check.
        let (puzzle, word_list) = independent_slots(8);
        let mut solver = Solver::with_options(&puzzle, &word_list, expired());
        solver.statistics.states = 1;
        let outcome = solver.backtrack(Assignment::new(puzzle.len())).unwrap();
        assert!(outcome.is_solved());
        assert_eq!(solver.statistics.states, 9);

        // Twelve slots run into the check at the next interval.
        let (puzzle, word_list) = independent_slots(12);
        let mut solver = Solver::with_options(&puzzle, &word_list, expired());
        solver.statistics.states = 1;
        let result = solver.backtrack(Assignment::new(puzzle.len()));
        assert!(matches!(result, Err(Error::TimedOut { .. })));
        assert_eq!(solver.statistics.states, INTERRUPT_FREQUENCY);
    }
}
