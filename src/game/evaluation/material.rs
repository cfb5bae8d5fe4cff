use crate::game::board::Board;

/// Banked stones count twice: once as raw material and once as the winning
/// margin over the opponent. Reported in Top's perspective.
pub fn evaluate(board: &Board) -> i32 {
    2 * (board.score_top() - board.score_bottom())
}
