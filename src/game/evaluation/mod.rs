//! Evaluation of a Kalah position.

pub mod material;
pub mod tempo;
pub mod threats;

use crate::constants::WIN_THRESHOLD;
use crate::game::board::{Board, Side};
use crate::game::search::SearchConfig;

/// How much `side` likes this board. Positive is always good for `side`, so
/// evaluating the same position from the two sides yields negated values.
///
/// The search consumes the Top perspective directly: Top maximizes it and
/// Bottom minimizes it, so the engine's fixed identity never skews the tree.
pub fn evaluate(board: &Board, side: Side, config: &SearchConfig) -> i32 {
    let score = evaluate_for_top(board, config);
    match side {
        Side::Top => score,
        Side::Bottom => -score,
    }
}

/// Board score in Top's geometric perspective.
fn evaluate_for_top(board: &Board, config: &SearchConfig) -> i32 {
    let mut score = material::evaluate(board);

    // Tempo and capture threats exist only for the side holding the move.
    let mover_bonus = tempo::evaluate(board, config) + threats::evaluate(board, config);
    score += match board.whose_move() {
        Side::Top => mover_bonus,
        Side::Bottom => -mover_bonus,
    };

    // A store past the majority threshold decides the game. Scored eagerly
    // at every node, not only at terminal boards.
    if board.score_top() > WIN_THRESHOLD {
        score += config.win_bonus;
    } else if board.score_bottom() > WIN_THRESHOLD {
        score -= config.win_bonus;
    }

    score
}
