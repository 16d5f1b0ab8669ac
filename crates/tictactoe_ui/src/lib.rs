//! Text front-end: main menu, difficulty prompt and the human/computer turn loop.
//!
//! Everything is generic over `BufRead`/`Write` so the same shell drives a
//! terminal or a scripted test.

pub mod error;
pub mod game;
pub mod input;
pub mod logger;
pub mod settings;

use std::io::{BufRead, Write};

use tictactoe_engine::Difficulty;

pub use error::{InputError, UiError};
pub use game::{play_game, GameOutcome};
pub use settings::Settings;

use crate::input::{parse_menu_choice, read_line, MenuChoice};

/// Runs the main menu until the player exits or input runs out
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
) -> Result<(), UiError> {
    loop {
        writeln!(output, "Welcome to Tic Tac Toe!")?;
        writeln!(output, "1. Play Game")?;
        writeln!(output, "2. Exit")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            log::info!("input closed at main menu");
            writeln!(output)?;
            return Ok(());
        };

        match parse_menu_choice(&line) {
            Ok(MenuChoice::Play) => {
                let Some(difficulty) = choose_difficulty(input, output, settings)? else {
                    continue;
                };
                if play_game(input, output, difficulty)? == GameOutcome::InputClosed {
                    writeln!(output)?;
                    return Ok(());
                }
            }
            Ok(MenuChoice::Exit) => {
                writeln!(output, "Exiting the game. Goodbye!")?;
                return Ok(());
            }
            Err(err) => {
                log::debug!("bad menu input: {}", err);
                writeln!(output, "Invalid choice. Try again.")?;
            }
        }
    }
}

/// Uses the preset difficulty if there is one, otherwise asks for it.
/// `None` means back to the menu.
fn choose_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
) -> Result<Option<Difficulty>, UiError> {
    if let Some(difficulty) = settings.difficulty {
        return Ok(Some(difficulty));
    }

    write!(output, "Choose difficulty level (1: Easy, 2: Medium, 3: Hard): ")?;
    output.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(None);
    };

    match line.parse::<Difficulty>() {
        Ok(difficulty) => Ok(Some(difficulty)),
        Err(err) => {
            log::debug!("bad difficulty input: {}", err);
            writeln!(output, "Invalid difficulty level. Returning to menu.")?;
            Ok(None)
        }
    }
}
