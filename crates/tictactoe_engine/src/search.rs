// Depth-limited minimax with alpha-beta pruning over a single shared board
use std::time::{Duration, Instant};

use tictactoe_core::{Board, Move, Player, Position};

use crate::evaluation::{evaluate_position, LOSS_SCORE, NEUTRAL_SCORE, WIN_SCORE};

// Window bounds standing in for -infinity / +infinity. Scores never leave
// [-10, 10], so neither bound can be overflowed.
pub const ALPHA_INIT: i32 = i32::MIN;
pub const BETA_INIT: i32 = i32::MAX;

/// Counters gathered over one root search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,      // positions scored by minimax
    pub cutoffs: u64,    // subtrees skipped by alpha-beta
    pub elapsed: Duration,
}

/// The move chosen for the computer and the value it was chosen on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub stats: SearchStats,
}

struct Searcher {
    max_depth: u8,
    stats: SearchStats,
}

impl Searcher {
    fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            stats: SearchStats::default(),
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let score = evaluate_position(board);

        // Prefer quick wins and slow losses
        if score == WIN_SCORE {
            return score - depth as i32;
        }
        if score == LOSS_SCORE {
            return score + depth as i32;
        }
        // Out of squares, or at the depth cap: call it even. Shallow caps
        // make the easier levels short-sighted on purpose.
        if !board.has_empty_cell() || depth == self.max_depth {
            return NEUTRAL_SCORE;
        }

        let player = if maximizing { Player::Computer } else { Player::Human };
        let mut best = if maximizing { ALPHA_INIT } else { BETA_INIT };

        for pos in Position::ALL {
            if !board.get(pos).is_empty() {
                continue;
            }

            let value = {
                let mut child = board.speculate(pos, player);
                self.minimax(&mut child, depth + 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            // The other side already has something better elsewhere
            if beta <= alpha {
                self.stats.cutoffs += 1;
                return best;
            }
        }

        best
    }
}

/// Scores `board` with `maximizing` selecting whose turn it is (computer
/// when true). `depth` is the number of plies already played below the
/// root move; the search stops expanding at exactly `max_depth`. A `depth`
/// already past the cap never meets it and searches to the end of the game.
///
/// The board is mutated during the search and always handed back unchanged.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    max_depth: u8,
) -> i32 {
    Searcher::new(max_depth).minimax(board, depth, maximizing, alpha, beta)
}

/// Tries every empty square for the computer in row-major order and keeps
/// the first one with the strictly highest minimax value. Returns `None`
/// when the board has no empty square.
pub fn search(board: &mut Board, max_depth: u8) -> Option<SearchResult> {
    let start_time = Instant::now();
    let mut searcher = Searcher::new(max_depth);
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.get(pos).is_empty() {
            continue;
        }

        let value = {
            let mut child = board.speculate(pos, Player::Computer);
            searcher.minimax(&mut child, 0, false, ALPHA_INIT, BETA_INIT)
        };
        log::trace!("candidate ({}, {}) scored {}", pos.row, pos.col, value);

        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    searcher.stats.elapsed = start_time.elapsed();

    let Some((pos, score)) = best else {
        log::warn!("search called on a full board, no move to make");
        return None;
    };

    log::debug!(
        "depth {} search picked ({}, {}) with score {} in {:?} ({} nodes, {} cut-offs)",
        max_depth,
        pos.row,
        pos.col,
        score,
        searcher.stats.elapsed,
        searcher.stats.nodes,
        searcher.stats.cutoffs,
    );

    Some(SearchResult {
        best_move: Move::new(Player::Computer, pos),
        score,
        stats: searcher.stats,
    })
}

/// Finds the computer's move for `board` searching at most `max_depth` plies
/// past the candidate move.
pub fn search_best_move(board: &mut Board, max_depth: u8) -> Option<Move> {
    search(board, max_depth).map(|result| result.best_move)
}
