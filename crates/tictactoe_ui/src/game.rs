use std::io::{BufRead, Write};

use tictactoe_core::{Board, GameStatus, Player};
use tictactoe_engine::{ComputerPlayer, Difficulty};

use crate::error::UiError;
use crate::input::{parse_move, read_line, MoveCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
enum Turn {
    #[default]
    Player,
    AI,
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished(GameStatus),
    Quit,
    InputClosed,
}

struct GameState {
    board: Board,
    ai: ComputerPlayer,
    turn: Turn,
}

impl GameState {
    fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            ai: ComputerPlayer::from_difficulty(difficulty),
            turn: Turn::default(),
        }
    }
}

fn verdict(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::ComputerWins => Some("AI wins!"),
        GameStatus::HumanWins => Some("You win!"),
        GameStatus::Draw => Some("It's a tie!"),
        GameStatus::InProgress => None,
    }
}

fn print_instructions<W: Write>(output: &mut W) -> Result<(), UiError> {
    writeln!(output, "You are 'X', and the AI is 'O'.")?;
    writeln!(output, "Rows (0, 1, 2) run from top to bottom.")?;
    writeln!(output, "Columns (0, 1, 2) run from left to right.")?;
    writeln!(output, "To make a move, type the row and column numbers separated by a space.")?;
    writeln!(output, "For example, typing '1 1' marks the middle cell.")?;
    Ok(())
}

/// Plays one game, human first, until someone wins, the board fills up,
/// the human quits or the input runs dry.
pub fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    difficulty: Difficulty,
) -> Result<GameOutcome, UiError> {
    let mut state = GameState::new(difficulty);
    log::info!("starting {} game (search depth {})", difficulty, state.ai.max_depth());

    print_instructions(output)?;

    loop {
        write!(output, "\nCurrent Board:\n{}", state.board)?;

        let status = state.board.status();
        if let Some(message) = verdict(status) {
            writeln!(output, "{}", message)?;
            let played = state.board.count(Player::Human) + state.board.count(Player::Computer);
            log::info!("game over after {} moves: {:?}", played, status);
            return Ok(GameOutcome::Finished(status));
        }

        match state.turn {
            Turn::Player => {
                write!(output, "Enter your move (row and column, or 'q' to quit): ")?;
                output.flush()?;

                let Some(line) = read_line(input)? else {
                    log::info!("input closed mid-game");
                    return Ok(GameOutcome::InputClosed);
                };

                match parse_move(&line) {
                    Ok(MoveCommand::Quit) => {
                        writeln!(output, "You chose to quit. Returning to the main menu...")?;
                        log::info!("player quit");
                        return Ok(GameOutcome::Quit);
                    }
                    Ok(MoveCommand::Place { row, col }) => {
                        match state.board.apply_human_move(row, col) {
                            Ok(()) => state.turn = Turn::AI,
                            Err(_) => writeln!(output, "Invalid move. Try again.")?,
                        }
                    }
                    Err(err) => {
                        log::debug!("{}", err);
                        writeln!(output, "Invalid input. Try again.")?;
                    }
                }
            }
            Turn::AI => {
                let mv = state.ai.get_move(&mut state.board).ok_or(UiError::NoComputerMove)?;
                state.board.make_move(mv)?;
                state.turn = Turn::Player;
            }
        }
    }
}
