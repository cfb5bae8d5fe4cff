// src/game/player.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::board::{Board, Side};
use crate::game::search::{Engine, SearchConfig};

/// A participant in a game: anything that can pick a pit for its side.
pub trait Player {
    fn name(&self) -> &str;

    fn side(&self) -> Side;

    /// Pick a pit for the side to move, or `None` when no move exists.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;

    /// Victory line printed when this player wins.
    fn gloat(&self) -> String {
        format!("{} wins.", self.name())
    }
}

/// Picks uniformly among the legal moves. Seedable so matches can be
/// replayed exactly.
pub struct RandomPlayer {
    side: Side,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(side: Side, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { side, rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn side(&self) -> Side {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let moves: Vec<usize> = board.legal_moves().collect();
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.gen_range(0..moves.len())])
        }
    }
}

/// The iterative-deepening minimax engine behind the [`Player`] interface.
pub struct EnginePlayer {
    engine: Engine,
}

impl EnginePlayer {
    pub fn new(side: Side, config: SearchConfig) -> Self {
        Self {
            engine: Engine::new(side, config),
        }
    }
}

impl Player for EnginePlayer {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn side(&self) -> Side {
        self.engine.side()
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        self.engine.choose_move(board)
    }

    fn gloat(&self) -> String {
        "Give me a real challenge.".to_string()
    }
}
