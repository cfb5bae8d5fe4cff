// game/mod.rs

pub mod board;
pub mod evaluation;
pub mod player;
pub mod search;

use std::cmp::Ordering;

use tracing::trace;

use crate::constants::MOVE_LIMIT;
use board::{Board, Side};
use player::Player;

/// A running game: the board plus a readable log of the moves played.
pub struct GameState {
    pub board: Board,
    log: String,
}

impl GameState {
    pub fn new(first_mover: Side) -> Self {
        Self {
            board: Board::new(first_mover),
            log: String::new(),
        }
    }

    /// Apply a move for the side to move, recording it in the log as e.g.
    /// `T9` or `B2`.
    pub fn make_move(&mut self, pit: usize) -> bool {
        let mover = self.board.whose_move();
        if !self.board.make_move(pit) {
            return false;
        }
        let tag = match mover {
            Side::Top => 'T',
            Side::Bottom => 'B',
        };
        self.log.push(tag);
        self.log.push_str(&pit.to_string());
        self.log.push(' ');
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.board.game_over()
    }

    pub fn move_log(&self) -> &str {
        &self.log
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// Play a single game between two players. The move cap only guards against
/// a player that refuses to end the game.
pub fn play_game(
    top: &mut dyn Player,
    bottom: &mut dyn Player,
    first_mover: Side,
) -> (GameOutcome, GameState) {
    let mut state = GameState::new(first_mover);
    let mut moves_played = 0;

    while !state.is_game_over() && moves_played < MOVE_LIMIT {
        let mover = state.board.whose_move();
        let player: &mut dyn Player = match mover {
            Side::Top => top,
            Side::Bottom => bottom,
        };
        debug_assert_eq!(player.side(), mover, "player wired to the wrong seat");
        let Some(pit) = player.choose_move(&state.board) else {
            break;
        };
        if !state.make_move(pit) {
            break;
        }
        trace!(player = player.name(), ?mover, pit, board = %state.board, "move played");
        moves_played += 1;
    }

    let outcome = match state.board.score_top().cmp(&state.board.score_bottom()) {
        Ordering::Greater => GameOutcome::Winner(Side::Top),
        Ordering::Less => GameOutcome::Winner(Side::Bottom),
        Ordering::Equal => GameOutcome::Draw,
    };
    (outcome, state)
}

#[cfg(test)]
mod tests {
    use super::player::RandomPlayer;
    use super::*;
    use crate::constants::TOTAL_STONES;

    #[test]
    fn random_game_reaches_a_verdict() {
        let mut top = RandomPlayer::new(Side::Top, Some(1));
        let mut bottom = RandomPlayer::new(Side::Bottom, Some(2));
        let (outcome, state) = play_game(&mut top, &mut bottom, Side::Bottom);

        assert!(state.is_game_over());
        assert!(!state.move_log().is_empty());
        assert_eq!(
            state.board.score_top() + state.board.score_bottom(),
            TOTAL_STONES
        );
        let expected = match state.board.score_top().cmp(&state.board.score_bottom()) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Side::Top),
            std::cmp::Ordering::Less => GameOutcome::Winner(Side::Bottom),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        };
        assert_eq!(outcome, expected);
    }

    #[test]
    fn game_state_rejects_illegal_moves_and_keeps_the_log_clean() {
        let mut state = GameState::new(Side::Bottom);
        assert!(!state.make_move(9));
        assert_eq!(state.move_log(), "");
        assert!(state.make_move(2));
        assert_eq!(state.move_log(), "B2 ");
    }
}
