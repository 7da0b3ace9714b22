//! Per-slot candidate sets, and the unary (length) constraint over them.

use std::fmt::{Debug, Formatter};

use bit_set::BitSet;

use crate::puzzle::{Puzzle, VariableId};
use crate::word_list::{WordId, WordList};

/// The set of words still considered feasible for each slot, stored as a bit set of `WordId`s
/// indexed by `VariableId`. Iteration is always in ascending `WordId` order.
#[derive(Clone, PartialEq, Eq)]
pub struct Domains {
    sets: Vec<BitSet>,
}

impl Debug for Domains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sets.iter().map(|set| set.len()))
            .finish()
    }
}

impl Domains {
    /// Seed every slot's domain with the full word list.
    pub fn initialize(puzzle: &Puzzle, word_list: &WordList) -> Domains {
        let all_words: BitSet = (0..word_list.len()).collect();

        Domains {
            sets: puzzle.ids().map(|_| all_words.clone()).collect(),
        }
    }

    /// Remove from each slot every word whose length differs from the slot's length.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle, word_list: &WordList) {
        for (id, set) in self.sets.iter_mut().enumerate() {
            let length = puzzle.variable(id).length;
            let wrong_length: Vec<WordId> = set
                .iter()
                .filter(|&word_id| word_list.get(word_id).len() != length)
                .collect();

            for word_id in wrong_length {
                set.remove(word_id);
            }
        }
    }

    pub fn len(&self, id: VariableId) -> usize {
        self.sets[id].len()
    }

    pub fn is_empty(&self, id: VariableId) -> bool {
        self.sets[id].is_empty()
    }

    pub fn contains(&self, id: VariableId, word_id: WordId) -> bool {
        self.sets[id].contains(word_id)
    }

    /// Remove a word from a slot's domain, returning whether it was there.
    pub fn remove(&mut self, id: VariableId, word_id: WordId) -> bool {
        self.sets[id].remove(word_id)
    }

    pub fn word_ids(&self, id: VariableId) -> impl Iterator<Item = WordId> + '_ {
        self.sets[id].iter()
    }

    pub fn words<'a>(
        &'a self,
        id: VariableId,
        word_list: &'a WordList,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.word_ids(id)
            .map(move |word_id| word_list.word_str(word_id))
    }

    /// Total number of candidates across all slots.
    pub fn total_len(&self) -> usize {
        self.sets.iter().map(|set| set.len()).sum()
    }
}
