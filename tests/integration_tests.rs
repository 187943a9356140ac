// Integration tests for the hangman application
// These tests verify that the word list, game loop and CLI work together

use hangman::cli::CliInterface;
use hangman::logging::GameLog;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn temp_word_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_single_word_game_win() {
    // Guessing each letter of "Apple" once, mixing cases
    let input = "a\nP\nl\ne\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    let outcome = play_round("Apple", 0, &mut interface, &mut log);
    assert_eq!(outcome, RoundOutcome::Won);
}

#[test]
fn test_single_word_game_all_letters_on_one_line() {
    let input = "tac\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    assert_eq!(
        play_round("cat", 0, &mut interface, &mut log),
        RoundOutcome::Won
    );
}

#[test]
fn test_single_word_game_loss() {
    let input = "b\nd\nf\ng\nh\ni\nj\nk\nm\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    let outcome = play_round("cat", 0, &mut interface, &mut log);
    assert_eq!(outcome, RoundOutcome::Lost);
}

#[test]
fn test_single_word_game_with_difficulty() {
    // Difficulty 9 leaves a single miss
    let input = "z\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    let outcome = play_round("cat", 9, &mut interface, &mut log);
    assert_eq!(outcome, RoundOutcome::Lost);
}

#[test]
fn test_invalid_input_then_exit() {
    let input = "1\n?\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    let outcome = play_round("cat", 0, &mut interface, &mut log);
    assert_eq!(outcome, RoundOutcome::Abandoned);
}

#[test]
fn test_end_of_input_abandons_round() {
    let mut interface = CliInterface::new(Cursor::new("c\n"));
    let mut log = GameLog::disabled();

    let outcome = play_round("cat", 0, &mut interface, &mut log);
    assert_eq!(outcome, RoundOutcome::Abandoned);
}

#[test]
fn test_word_file_session_single_word() {
    let path = temp_word_file("hangman_it_single.txt", "?dog");
    let mut rng = StdRng::seed_from_u64(1);
    let input = "dog\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    let summary = play_word_file(&path, false, &mut rng, 0, &mut interface, &mut log).unwrap();

    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.rounds_won, 1);
    // The selected word is saved as used, with a line break appended
    assert_eq!(fs::read_to_string(&path).unwrap(), "!dog\n");
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_word_file_session_plays_until_exhausted() {
    // Every word uses only letters from "abc", so guessing all three wins any round
    let path = temp_word_file("hangman_it_exhaust.txt", "?ab\n?ba\n?cab\n");
    let mut rng = StdRng::seed_from_u64(2);
    let input = "abc\ny\nabc\ny\nabc\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    let summary = play_word_file(&path, false, &mut rng, 0, &mut interface, &mut log).unwrap();

    assert_eq!(summary.rounds_played, 3);
    assert_eq!(summary.rounds_won, 3);
    let saved = load_wordlist_from_file(&path).unwrap();
    assert_eq!(saved.unused_count(), 0);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_word_file_reset_flag() {
    let path = temp_word_file("hangman_it_reset.txt", "!ab\n!ba\n");
    let mut rng = StdRng::seed_from_u64(3);
    let input = "ab\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut log = GameLog::disabled();

    play_word_file(&path, true, &mut rng, 0, &mut interface, &mut log).unwrap();

    let saved = load_wordlist_from_file(&path).unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved.unused_count(), 1);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_empty_word_file_reports_error() {
    let path = temp_word_file("hangman_it_empty.txt", "");
    let mut rng = StdRng::seed_from_u64(4);
    let mut interface = CliInterface::new(Cursor::new(""));
    let mut log = GameLog::disabled();

    let err = play_word_file(&path, false, &mut rng, 0, &mut interface, &mut log).unwrap_err();
    assert!(matches!(err, HangmanError::WordList(WordListError::Empty)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_word_file_reports_path() {
    let path = std::env::temp_dir().join("hangman_it_missing.txt");
    let _ = fs::remove_file(&path);
    let mut rng = StdRng::seed_from_u64(5);
    let mut interface = CliInterface::new(Cursor::new(""));
    let mut log = GameLog::disabled();

    let err = play_word_file(&path, false, &mut rng, 0, &mut interface, &mut log).unwrap_err();
    assert!(err.to_string().contains("hangman_it_missing.txt"));
}

#[test]
fn test_game_log_file_records_round() {
    let log_path = std::env::temp_dir().join("hangman_it_game_log.txt");
    let _ = fs::remove_file(&log_path);

    {
        let mut log = GameLog::append_to(&log_path).unwrap();
        let mut interface = CliInterface::new(Cursor::new("h\ni\n"));
        log.event("Program started");
        play_round("hi", 0, &mut interface, &mut log);
        log.event("Game ended.");
    }

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("Program started"));
    assert!(contents.contains("Word:       \"hi\""));
    assert!(contents.contains("Visible:    \"h?\""));
    assert!(contents.contains("Round won"));
    assert!(contents.trim_end().ends_with("Game ended."));
    fs::remove_file(&log_path).unwrap();
}

#[test]
fn test_word_list_round_trip_through_session() {
    let original = "?cat\n!dog\n?eel";
    let mut words = WordList::from_text(original);
    assert_eq!(words.len(), 3);

    let mut rng = StdRng::seed_from_u64(6);
    let picked = words.next_unused_random(&mut rng).unwrap();
    assert!(picked == "cat" || picked == "eel");

    let reparsed = WordList::from_text(&words.to_text());
    assert_eq!(reparsed, words);
    assert_eq!(reparsed.unused_count(), 1);
}

#[test]
fn test_case_insensitive_matching_at_boundary() {
    let mut upper = Round::new("Apple");
    assert_eq!(upper.guess('A'), GuessResult::Hit);
    assert!(upper.visible().starts_with('A'));

    let mut lower = Round::new("Apple");
    assert_eq!(lower.guess('a'), GuessResult::Hit);
    assert!(lower.visible().starts_with('A'));
}
