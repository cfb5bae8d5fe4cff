use crate::constants::CAPTURE_THREAT_MIN_STONES;
use crate::game::board::Board;
use crate::game::search::SearchConfig;

/// Bonus if the side to move can land in one of its own empty pits while the
/// mirror pit holds enough stones to make the capture worth taking.
///
/// This reads the current stone counts rather than replaying the sow, which
/// matches the cheap one-pass scan the rest of the evaluation performs.
pub fn evaluate(board: &Board, config: &SearchConfig) -> i32 {
    let mover = board.whose_move();
    for pit in mover.pits() {
        if !board.legal_move(pit) {
            continue;
        }
        let dest = board.sow_destination(pit);
        if !mover.owns_pit(dest) {
            continue;
        }
        if board.stones_at(dest) == 0
            && board.stones_at(Board::opposite(dest)) > CAPTURE_THREAT_MIN_STONES
        {
            return config.capture_threat_bonus;
        }
    }
    0
}
