// Library interface for hangman
// This allows integration tests to access internal modules

pub mod art;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use error::HangmanError;
pub use game_state::{
    GameInterface, RoundOutcome, SessionSummary, UserAction, play_round, play_word_file,
    play_word_list, reset_word_file,
};
pub use round::{GuessResult, Round, RoundStatus, find_ignore_case};
pub use wordlist::{
    Mark, WordEntry, WordList, WordListError, load_wordlist_from_file, write_wordlist_to_file,
};
