use std::io;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use tictactoe_engine::Difficulty;
use tictactoe_ui::{logger::initialize_terminal_logger, Settings};

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(
    version,
    about = "Play tic-tac-toe against a minimax computer opponent",
    long_about = None
)]
struct Cli {
    /// Difficulty level (1: Easy, 2: Medium, 3: Hard); skips the prompt before each game
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Log verbosity on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_terminal_logger(cli.log_level);

    let settings = Settings {
        difficulty: cli.difficulty,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    tictactoe_ui::run(&mut stdin.lock(), &mut stdout.lock(), &settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_prompting_and_warn_level() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn parses_difficulty_and_log_level() {
        let cli = Cli::try_parse_from(["tictactoe", "-d", "2", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.difficulty, Some(Difficulty::Medium));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "--difficulty", "4"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--difficulty", "hard"]).is_err());
    }
}
