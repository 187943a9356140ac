use crate::art::gallows;
use crate::debug_log;
use crate::game_state::{GameInterface, RoundOutcome, UserAction};
use crate::round::Round;
use clap::Parser;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman - guess the hidden word letter by letter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Play a single round with this word
    #[arg(short = 'w', long = "word")]
    pub word: Option<String>,

    /// Play with random words from a word file ('?word' unused, '!word' used)
    #[arg(short = 'f', long = "file")]
    pub wordfile: Option<PathBuf>,

    /// Reset used/unused marks in the word file before playing
    #[arg(short = 'r', long = "reset", requires = "wordfile")]
    pub reset: bool,

    /// Game difficulty: misses already counted when a round starts (0-9)
    #[arg(
        short = 'd',
        long = "difficulty",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    pub difficulty: u8,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Where to append the game log (default: local data directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Seed for the random word order
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

enum GuessInput {
    Letters(Vec<char>),
    Exit,
    Empty,
    Invalid(char),
}

fn parse_guess_line(line: &str) -> GuessInput {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        return GuessInput::Exit;
    }

    let letters: Vec<char> = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if letters.is_empty() {
        return GuessInput::Empty;
    }
    match letters.iter().find(|c| !c.is_ascii_alphabetic()) {
        Some(&bad) => GuessInput::Invalid(bad),
        None => GuessInput::Letters(letters),
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

pub fn display_round(round: &Round) {
    println!("Misses:   {}", round.misses());
    println!("Visible:  \"{}\"", round.visible());
    if !round.guessed().is_empty() {
        let guessed: String = round.guessed().iter().collect();
        println!("Guessed:  {guessed}");
    }
    println!("Hangman: \n{}", gallows(round.misses()));
}

pub fn display_outcome(round: &Round, outcome: RoundOutcome) {
    match outcome {
        RoundOutcome::Won => println!("You found the word \"{}\"!", round.word()),
        RoundOutcome::Lost => println!("Out of guesses. The word was \"{}\".", round.word()),
        RoundOutcome::Abandoned => println!("Round abandoned. The word was \"{}\".", round.word()),
    }
}

/// Line-based interface over any `BufRead`.
///
/// Several letters typed on one line are guessed one after another.
pub struct CliInterface<R: BufRead> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input),
            Err(e) => {
                debug_log!("read_line() - input error: {}", e);
                None
            }
        }
    }

    fn prompt(text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &Round) {
        display_round(round);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if let Some(letter) = self.pending.pop_front() {
            return Some(UserAction::Guess(letter));
        }

        Self::prompt("Guess a letter ('exit' to quit): ");
        let Some(line) = self.read_line() else {
            return Some(UserAction::Exit);
        };

        match parse_guess_line(&line) {
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::Empty => None,
            GuessInput::Invalid(c) => {
                println!("Only letters can be guessed ('{c}' is not a letter).");
                None
            }
            GuessInput::Letters(letters) => {
                self.pending.extend(letters);
                self.pending.pop_front().map(UserAction::Guess)
            }
        }
    }

    fn display_outcome(&mut self, round: &Round, outcome: RoundOutcome) {
        self.pending.clear();
        display_outcome(round, outcome);
    }

    fn ask_play_again(&mut self) -> bool {
        loop {
            Self::prompt("Play another round? (y/n) ");
            let Some(line) = self.read_line() else {
                return false;
            };
            if !line.trim().is_empty() {
                return is_yes(&line);
            }
        }
    }

    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }
}
