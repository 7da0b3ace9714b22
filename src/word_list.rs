//! The dictionary that every slot draws its candidates from.

use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::Path;

use smallvec::SmallVec;

use crate::error::Result;
use crate::MAX_SLOT_LENGTH;

/// An identifier for a given word, based on its index in the `WordList`'s `words` field. Ids are
/// handed out in lexicographic order, so comparing two ids compares the underlying strings.
pub type WordId = usize;

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub string: String,
    pub chars: SmallVec<[char; MAX_SLOT_LENGTH]>,
}

impl Word {
    fn new(string: String) -> Word {
        let chars = string.chars().collect();
        Word { string, chars }
    }

    /// Length in characters, which is what slot lengths are measured in.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, idx: usize) -> char {
        self.chars[idx]
    }
}

/// A deduplicated, lexicographically ordered set of candidate words.
#[derive(Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
}

impl Debug for WordList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("words", &format_args!("({} entries)", self.words.len()))
            .finish()
    }
}

impl WordList {
    /// Build a word list from arbitrary strings. Surrounding whitespace is trimmed, empty entries
    /// are dropped, and duplicates collapse into a single entry.
    pub fn new<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        WordList {
            words: unique.into_iter().map(Word::new).collect(),
        }
    }

    /// Parse the contents of a word list file: one word per line, normalized to upper case.
    pub fn parse(contents: &str) -> WordList {
        WordList::new(contents.lines().map(str::to_uppercase))
    }

    /// Read and parse a word list file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<WordList> {
        let contents = fs::read_to_string(path)?;
        Ok(WordList::parse(&contents))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word_id: WordId) -> &Word {
        &self.words[word_id]
    }

    pub fn word_str(&self, word_id: WordId) -> &str {
        &self.words[word_id].string
    }

    /// Look up the id of a word, if it's in the list.
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|candidate| candidate.string.as_str().cmp(word))
            .ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}
