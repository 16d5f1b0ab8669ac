use std::io::BufRead;

use crate::error::{InputError, UiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Exit,
}

/// What the human typed on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Quit,
    Place { row: i64, col: i64 },
}

/// Reads one line without its terminator; `None` at end of input
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, UiError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    match line.trim().parse::<i64>() {
        Ok(1) => Ok(MenuChoice::Play),
        Ok(2) => Ok(MenuChoice::Exit),
        _ => Err(InputError::UnknownChoice(line.trim().to_string())),
    }
}

/// Parses "row col" or a quit request. Range checking is left to the board,
/// so "5 5" parses and is rejected later as an invalid move.
pub fn parse_move(line: &str) -> Result<MoveCommand, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(MoveCommand::Quit);
    }

    let malformed = || InputError::MalformedMove(line.to_string());
    let mut parts = line.split_whitespace();
    let row = parts.next().and_then(|s| s.parse::<i64>().ok()).ok_or_else(malformed)?;
    let col = parts.next().and_then(|s| s.parse::<i64>().ok()).ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(MoveCommand::Place { row, col })
}
