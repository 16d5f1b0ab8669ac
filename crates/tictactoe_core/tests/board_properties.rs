use proptest::collection::vec;
use proptest::prelude::*;

use tictactoe_core::{Board, Cell, GameStatus, Player, Position};

fn cell_arb() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::Human), Just(Cell::Computer)]
}

fn board_arb() -> impl Strategy<Value = Board> {
    vec(cell_arb(), 9).prop_map(|cells| {
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            board.set(pos, cell);
        }
        board
    })
}

fn swap_marks(board: &Board) -> Board {
    let mut swapped = *board;
    for pos in Position::ALL {
        let cell = match board.get(pos) {
            Cell::Human => Cell::Computer,
            Cell::Computer => Cell::Human,
            Cell::Empty => Cell::Empty,
        };
        swapped.set(pos, cell);
    }
    swapped
}

proptest! {
    #[test]
    fn prop_speculation_leaves_board_identical(board in board_arb(), index in 0usize..9) {
        let mut board = board;
        let pos = Position::ALL[index];
        prop_assume!(board.get(pos).is_empty());
        let before = board;

        for player in [Player::Human, Player::Computer] {
            {
                let guard = board.speculate(pos, player);
                prop_assert_eq!(guard.get(pos), player.mark());
            }
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn prop_set_then_clear_round_trips(board in board_arb(), index in 0usize..9) {
        let mut board = board;
        let pos = Position::ALL[index];
        prop_assume!(board.get(pos).is_empty());
        let before = board;

        board.set(pos, Cell::Human);
        board.clear(pos);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_open_board_without_line_is_in_progress(board in board_arb()) {
        prop_assume!(board.winner().is_none());
        prop_assume!(board.has_empty_cell());
        prop_assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn prop_swapping_marks_swaps_winner(board in board_arb()) {
        let swapped = swap_marks(&board);
        prop_assert_eq!(swapped.winner(), board.winner().map(Player::opponent));
    }

    #[test]
    fn prop_rejected_moves_leave_board_unchanged(
        board in board_arb(),
        row in -3i64..6,
        col in -3i64..6,
    ) {
        let mut board = board;
        let before = board;
        if board.apply_human_move(row, col).is_err() {
            prop_assert_eq!(board, before);
        } else {
            prop_assert_eq!(board.count(Player::Human), before.count(Player::Human) + 1);
        }
    }
}
