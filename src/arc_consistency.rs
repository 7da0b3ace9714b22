//! This module contains a crossword-specific implementation of the AC-3 algorithm. For our
//! purposes, the domains are arc-consistent when every word left in a slot's domain has, for each
//! crossing slot, at least one word in that slot's domain with the same letter in the shared cell.
//!
//! Note that this doesn't mean a fill exists, only that no remaining option is locally doomed.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::domain::Domains;
use crate::puzzle::{Puzzle, VariableId};
use crate::word_list::{WordId, WordList};

/// A directed arc `(x, y)`, meaning "`x` must be revised against `y`".
pub type Arc = (VariableId, VariableId);

/// Result from a successful call to `ac3`, reflecting how much the domains shrank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConsistencySuccess {
    pub eliminations: usize,
}

/// Result from a failed call to `ac3`, naming the slot whose domain was wiped out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConsistencyFailure {
    pub wiped_out: VariableId,
}

/// Result from a call to `ac3`.
pub type ArcConsistencyResult = Result<ArcConsistencySuccess, ArcConsistencyFailure>;

/// FIFO worklist of arcs waiting to be revised. An arc that's already waiting isn't queued again.
#[derive(Debug)]
struct ArcQueue {
    queue: VecDeque<Arc>,
    queued: HashSet<Arc>,
}

impl ArcQueue {
    fn with_initial_queue<Items>(items: Items) -> ArcQueue
    where
        Items: IntoIterator<Item = Arc>,
    {
        let mut queue = ArcQueue {
            queue: VecDeque::new(),
            queued: HashSet::new(),
        };
        for arc in items {
            queue.enqueue(arc);
        }
        queue
    }

    fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queued.remove(&arc);
        Some(arc)
    }

    fn enqueue(&mut self, arc: Arc) {
        if self.queued.insert(arc) {
            self.queue.push_back(arc);
        }
    }
}

/// Every ordered pair of crossing slots.
pub fn all_arcs(puzzle: &Puzzle) -> Vec<Arc> {
    puzzle
        .ids()
        .flat_map(|x| puzzle.neighbors(x).map(move |y| (x, y)))
        .collect()
}

/// Make `x` arc-consistent with `y` by removing every word from `x`'s domain that has no word in
/// `y`'s domain agreeing at the shared cell. Returns whether anything was removed.
///
/// Every word in both domains must already have its slot's length (see
/// [`Domains::enforce_node_consistency`]).
///
/// # Panics
///
/// If `x` and `y` don't cross; arcs are only ever built between crossing slots.
pub fn revise(
    domains: &mut Domains,
    puzzle: &Puzzle,
    word_list: &WordList,
    x: VariableId,
    y: VariableId,
) -> bool {
    let (cell, other_cell) = puzzle
        .overlap(x, y)
        .unwrap_or_else(|| panic!("Slots {} and {} don't cross", x, y));

    // Letters that `y` can still place in the shared cell.
    let supported: HashSet<char> = domains
        .word_ids(y)
        .map(|word_id| word_list.get(word_id).char_at(other_cell))
        .collect();

    let unsupported: Vec<WordId> = domains
        .word_ids(x)
        .filter(|&word_id| !supported.contains(&word_list.get(word_id).char_at(cell)))
        .collect();

    for &word_id in &unsupported {
        domains.remove(x, word_id);
    }

    !unsupported.is_empty()
}

/// Enforce arc consistency over `domains`, starting from `initial_arcs` or, if that's `None`,
/// from every arc in the puzzle. Gives up as soon as any slot's domain is emptied.
pub fn ac3(
    domains: &mut Domains,
    puzzle: &Puzzle,
    word_list: &WordList,
    initial_arcs: Option<Vec<Arc>>,
) -> ArcConsistencyResult {
    let initial_arcs = initial_arcs.unwrap_or_else(|| all_arcs(puzzle));
    let starting_len = domains.total_len();
    let mut queue = ArcQueue::with_initial_queue(initial_arcs);
    let mut revisions = 0usize;

    while let Some((x, y)) = queue.pop_front() {
        revisions += 1;

        if !revise(domains, puzzle, word_list, x, y) {
            continue;
        }

        if domains.is_empty(x) {
            debug!(
                "AC-3 wiped out slot {} after {} revisions",
                puzzle.variable(x),
                revisions
            );
            return Err(ArcConsistencyFailure { wiped_out: x });
        }

        // `x` lost options, so any other slot crossing it may have lost support.
        for z in puzzle.neighbors(x) {
            if z != y {
                queue.enqueue((z, x));
            }
        }
    }

    let eliminations = starting_len - domains.total_len();
    debug!("AC-3 removed {eliminations} options in {revisions} steps");

    Ok(ArcConsistencySuccess { eliminations })
}
