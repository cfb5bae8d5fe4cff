use crate::game::board::Board;
use crate::game::search::SearchConfig;

/// Bonus if the side to move can land its last stone in its own store and
/// keep the move.
pub fn evaluate(board: &Board, config: &SearchConfig) -> i32 {
    let mover = board.whose_move();
    for pit in mover.pits() {
        if board.legal_move(pit) && board.sow_destination(pit) == mover.store() {
            return config.go_again_bonus;
        }
    }
    0
}
