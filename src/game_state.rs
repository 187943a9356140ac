use crate::error::HangmanError;
use crate::logging::GameLog;
use crate::round::{Round, RoundStatus};
use crate::wordlist::{WordList, WordListError, load_wordlist_from_file, write_wordlist_to_file};
use crate::{debug_log, info_log};
use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    /// The player quit before the round was decided
    Abandoned,
}

impl RoundOutcome {
    fn log_message(self) -> &'static str {
        match self {
            Self::Won => "Round won",
            Self::Lost => "Round lost",
            Self::Abandoned => "Round abandoned",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        self.rounds_played += 1;
        match outcome {
            RoundOutcome::Won => self.rounds_won += 1,
            RoundOutcome::Lost => self.rounds_lost += 1,
            RoundOutcome::Abandoned => {}
        }
    }
}

/// Presentation layer used by the game loop.
///
/// Implemented by the line-based CLI and by the full-screen TUI.
pub trait GameInterface {
    /// Show the current state of a round: misses, visible pattern and gallows.
    fn display_round(&mut self, round: &Round);

    /// Read the next action. `None` means the input was rejected and should be asked for again.
    fn read_guess(&mut self) -> Option<UserAction>;

    fn display_outcome(&mut self, round: &Round, outcome: RoundOutcome);

    fn ask_play_again(&mut self) -> bool;

    fn display_message(&mut self, message: &str);
}

/// Play one word until it is guessed, the gallows is complete or the player quits.
pub fn play_round(
    word: &str,
    difficulty: usize,
    interface: &mut dyn GameInterface,
    log: &mut GameLog,
) -> RoundOutcome {
    let mut round = Round::with_difficulty(word, difficulty);
    info_log!(
        "play_round() - {} characters, difficulty {}",
        word.chars().count(),
        difficulty
    );

    log.separator();
    log.event("Game started");
    log.raw(&format!("Word:       \"{word}\""));

    let outcome = loop {
        interface.display_round(&round);
        log.event(&format!("Visible:    \"{}\"", round.visible()));
        log.flush();

        match round.status() {
            RoundStatus::Won => break RoundOutcome::Won,
            RoundStatus::Lost => break RoundOutcome::Lost,
            RoundStatus::InProgress => {}
        }

        let action = loop {
            if let Some(action) = interface.read_guess() {
                break action;
            }
        };

        match action {
            UserAction::Guess(letter) => {
                let result = round.guess(letter);
                debug_log!("play_round() - guess '{}' -> {:?}", letter, result);
            }
            UserAction::Exit => break RoundOutcome::Abandoned,
        }
    };

    info_log!("play_round() - finished: {:?}", outcome);
    log.event(outcome.log_message());
    log.flush();
    interface.display_outcome(&round, outcome);
    outcome
}

/// Play rounds with random unused words, saving the marks to `path` after every round.
///
/// At most one round per word is played; the player may stop earlier.
///
/// # Errors
///
/// Fails with [`WordListError::Empty`] if `words` has no entries, or with
/// [`HangmanError::Io`] if the marks cannot be written back.
pub fn play_word_list<R: Rng + ?Sized>(
    words: &mut WordList,
    path: &Path,
    rng: &mut R,
    difficulty: usize,
    interface: &mut dyn GameInterface,
    log: &mut GameLog,
) -> Result<SessionSummary, HangmanError> {
    if words.is_empty() {
        return Err(WordListError::Empty.into());
    }

    let mut summary = SessionSummary::default();
    for _ in 0..words.len() {
        let word = words.next_unused_random(rng)?;
        let outcome = play_round(&word, difficulty, interface, log);
        summary.record(outcome);

        write_wordlist_to_file(words, path).map_err(|e| HangmanError::io(path, e))?;
        debug_log!(
            "play_word_list() - saved marks, {} unused",
            words.unused_count()
        );

        if outcome == RoundOutcome::Abandoned || !interface.ask_play_again() {
            break;
        }
    }

    info_log!("play_word_list() - session finished: {:?}", summary);
    Ok(summary)
}

/// Load a word file and play a session with it, optionally resetting all marks first.
///
/// # Errors
///
/// See [`play_word_list`]; also fails if the file cannot be read.
pub fn play_word_file<R: Rng + ?Sized>(
    path: &Path,
    reset: bool,
    rng: &mut R,
    difficulty: usize,
    interface: &mut dyn GameInterface,
    log: &mut GameLog,
) -> Result<SessionSummary, HangmanError> {
    if reset {
        reset_word_file(path)?;
    }

    let mut words = load_wordlist_from_file(path).map_err(|e| HangmanError::io(path, e))?;
    interface.display_message(&format!(
        "Loaded {} words ({} unused).",
        words.len(),
        words.unused_count()
    ));
    play_word_list(&mut words, path, rng, difficulty, interface, log)
}

/// Mark every word in the file as unused. Returns the number of words.
///
/// # Errors
///
/// Fails if the file cannot be read or written.
pub fn reset_word_file(path: &Path) -> Result<usize, HangmanError> {
    let mut words = load_wordlist_from_file(path).map_err(|e| HangmanError::io(path, e))?;
    words.reset_marks();
    write_wordlist_to_file(&words, path).map_err(|e| HangmanError::io(path, e))?;
    info_log!("reset_word_file() - reset {} words", words.len());
    Ok(words.len())
}
