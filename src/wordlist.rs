//! Word list storage for Hangman.
//!
//! A word file holds one word per line, prefixed by a mark character:
//! `?` for words that have not been played yet and `!` for words that
//! have. The [`WordList`] keeps those marks in memory, hands out unused
//! words at random and writes the marks back in the same format.

use crate::debug_log;
use rand::Rng;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const MARK_UNUSED: char = '?';
pub const MARK_USED: char = '!';

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListError {
    #[error("the word list is empty")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Unused,
    Used,
}

impl Mark {
    /// Only `?` marks a word as selectable; any other character counts as used.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        if c == MARK_UNUSED {
            Self::Unused
        } else {
            Self::Used
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Unused => MARK_UNUSED,
            Self::Used => MARK_USED,
        }
    }
}

/// One line of a word file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub mark: Mark,
    pub text: String,
}

impl WordEntry {
    pub fn new(mark: Mark, text: impl Into<String>) -> Self {
        Self {
            mark,
            text: text.into(),
        }
    }

    fn from_line(line: &str) -> Self {
        // `lines()` leaves the `\r` on a last line that has no `\n`
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut chars = line.chars();
        match chars.next() {
            Some(c) => Self::new(Mark::from_char(c), chars.as_str()),
            // A blank line has no mark to read, so it can never be selected
            None => Self::new(Mark::Used, ""),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Parse word file content. Never fails: empty input gives an empty list,
    /// and a last line without a line break is still an entry.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let entries: Vec<WordEntry> = text.lines().map(WordEntry::from_line).collect();
        debug_log!("Parsed word list with {} entries", entries.len());
        Self { entries }
    }

    #[must_use]
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn unused_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.mark == Mark::Unused)
            .count()
    }

    /// Pick an unused word, mark it used and return it.
    ///
    /// A start index is drawn uniformly at random, then the list is probed
    /// forward (wrapping around) until an unused entry turns up. When every
    /// entry is already used, all marks are reset and the selection is
    /// repeated once with a fresh start index, so this only fails on an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if the list has no entries.
    pub fn next_unused_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<String, WordListError> {
        if self.entries.is_empty() {
            return Err(WordListError::Empty);
        }

        let index = match self.probe_unused(rng) {
            Some(index) => index,
            None => {
                debug_log!(
                    "All {} words used, resetting marks and retrying",
                    self.entries.len()
                );
                self.reset_marks();
                self.probe_unused(rng).ok_or(WordListError::Empty)?
            }
        };

        let entry = &mut self.entries[index];
        entry.mark = Mark::Used;
        debug_log!("Selected word at index {}", index);
        Ok(entry.text.clone())
    }

    fn probe_unused<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let start = rng.random_range(0..self.entries.len());
        self.first_unused_from(start)
    }

    /// Index of the first unused entry at or after `start`, wrapping around.
    fn first_unused_from(&self, start: usize) -> Option<usize> {
        let len = self.entries.len();
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| self.entries[index].mark == Mark::Unused)
    }

    pub fn reset_marks(&mut self) {
        for entry in &mut self.entries {
            entry.mark = Mark::Unused;
        }
    }

    /// Serialize in word file format. Every line, including the last, ends with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}{}", entry.mark.as_char(), entry.text)?;
        }
        Ok(())
    }
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::from_text(&content))
}

pub fn write_wordlist_to_file<P: AsRef<Path>>(words: &WordList, path: P) -> io::Result<()> {
    fs::write(path, words.to_text())
}
