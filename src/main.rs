use hangman::cli::{CliInterface, parse_cli};
use hangman::game_state::{GameInterface, play_round, play_word_file};
use hangman::logging::{GameLog, default_log_path};
use hangman::tui::TuiInterface;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let mut log = match GameLog::append_to(&log_path) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Cannot open log file '{}': {e}", log_path.display());
            GameLog::disabled()
        }
    };
    log.event("Program started");

    if cli.word.is_none() && cli.wordfile.is_none() {
        println!("Nothing to play. Use --word WORD or --file FILE (see --help).");
        log.event("Game ended.");
        return ExitCode::SUCCESS;
    }

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let difficulty = usize::from(cli.difficulty);

    if let Some(word) = &cli.word {
        play_round(word, difficulty, interface.as_mut(), &mut log);
    }

    let session = cli.wordfile.as_deref().map(|path| {
        play_word_file(
            path,
            cli.reset,
            &mut rng,
            difficulty,
            interface.as_mut(),
            &mut log,
        )
    });

    // Leave the alternate screen before printing anything else
    drop(interface);

    let mut status = ExitCode::SUCCESS;
    match session {
        Some(Ok(summary)) => {
            info!("Session finished: {summary:?}");
            println!(
                "Rounds played: {}, won: {}, lost: {}",
                summary.rounds_played, summary.rounds_won, summary.rounds_lost
            );
        }
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            log.event(&format!("Error: {e}"));
            status = ExitCode::FAILURE;
        }
        None => {}
    }

    println!("Game ended.");
    log.event("Game ended.");
    log.flush();
    status
}
