//! A single round of Hangman: hidden word, visible pattern and miss count.

pub const MAX_MISSES: usize = 10;
pub const HIDDEN: char = '?';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    Hit,
    Miss,
    /// The round was already won or lost
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Byte position of the first character in `text` equal to `letter`, ignoring ASCII case.
#[must_use]
pub fn find_ignore_case(text: &str, letter: char) -> Option<usize> {
    text.char_indices()
        .find(|(_, c)| c.eq_ignore_ascii_case(&letter))
        .map(|(index, _)| index)
}

#[derive(Clone, Debug)]
pub struct Round {
    word: String,
    // Same byte layout as `word`, with unrevealed ASCII letters replaced by HIDDEN
    visible: String,
    misses: usize,
    guessed: Vec<char>,
}

impl Round {
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_difficulty(word, 0)
    }

    /// Start a round with `difficulty` misses already counted.
    pub fn with_difficulty(word: impl Into<String>, difficulty: usize) -> Self {
        let word = word.into();
        let visible = word
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { HIDDEN } else { c })
            .collect();
        Self {
            word,
            visible,
            misses: difficulty.min(MAX_MISSES - 1),
            guessed: Vec::new(),
        }
    }

    pub fn guess(&mut self, letter: char) -> GuessResult {
        if self.status() != RoundStatus::InProgress {
            return GuessResult::Finished;
        }

        let normalized = letter.to_ascii_lowercase();
        if !self.guessed.contains(&normalized) {
            self.guessed.push(normalized);
        }

        if self.reveal(letter) {
            GuessResult::Hit
        } else {
            self.misses += 1;
            GuessResult::Miss
        }
    }

    fn reveal(&mut self, letter: char) -> bool {
        let mut found = false;
        let mut offset = 0;
        while let Some(position) = find_ignore_case(&self.word[offset..], letter) {
            let start = offset + position;
            let end = start + letter.len_utf8();
            self.visible.replace_range(start..end, &self.word[start..end]);
            offset = end;
            found = true;
        }
        found
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.visible == self.word {
            RoundStatus::Won
        } else if self.misses >= MAX_MISSES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn visible(&self) -> &str {
        &self.visible
    }

    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }

    #[must_use]
    pub fn misses_left(&self) -> usize {
        MAX_MISSES.saturating_sub(self.misses)
    }

    /// Letters guessed so far, lowercased, in the order they were first tried.
    #[must_use]
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }
}
