// src/game/search.rs

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{CAPTURE_THREAT_BONUS, DEFAULT_TIME_PER_MOVE_MS, GO_AGAIN_BONUS, WIN_BONUS};
use crate::game::board::{Board, Side};
use crate::game::evaluation;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Wall-clock budget per move decision.
    pub time_per_move_ms: u64,
    /// Cut off siblings once the alpha-beta bounds cross. Disabling this
    /// falls back to plain minimax; both explore moves in the same order and
    /// return the same result.
    pub use_alpha_beta: bool,
    pub go_again_bonus: i32,
    pub capture_threat_bonus: i32,
    pub win_bonus: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_per_move_ms: DEFAULT_TIME_PER_MOVE_MS,
            use_alpha_beta: true,
            go_again_bonus: GO_AGAIN_BONUS,
            capture_threat_bonus: CAPTURE_THREAT_BONUS,
            win_bonus: WIN_BONUS,
        }
    }
}

/// Outcome of one search call: the move judged best for the side to move and
/// the score backing it up. `best_move` is `None` at leaves and on boards
/// that offer no move.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub score: i32,
}

/// Depth-limited minimax over board clones. Top maximizes and Bottom
/// minimizes the Top-perspective evaluation, so one searcher serves both
/// sides.
#[derive(Default)]
pub struct MinimaxSearcher {
    nodes: u64,
}

impl MinimaxSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Recursive depth-first search. Legal moves are explored in ascending
    /// pit order and ties keep the first move found.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        config: &SearchConfig,
    ) -> SearchResult {
        self.nodes += 1;

        if board.game_over() || depth == 0 {
            return SearchResult {
                best_move: None,
                score: evaluation::evaluate(board, Side::Top, config),
            };
        }

        let mover = board.whose_move();
        let maximizing = mover == Side::Top;
        let mut best: Option<SearchResult> = None;

        for pit in mover.pits() {
            if !board.legal_move(pit) {
                continue;
            }

            let mut child = board.clone();
            let applied = child.make_move(pit);
            debug_assert!(applied);
            let reply = self.minimax(&child, depth - 1, alpha, beta, config);

            let improved = match best {
                None => true,
                Some(current) => {
                    if maximizing {
                        reply.score > current.score
                    } else {
                        reply.score < current.score
                    }
                }
            };
            if improved {
                best = Some(SearchResult {
                    best_move: Some(pit),
                    score: reply.score,
                });
            }

            if maximizing {
                alpha = alpha.max(reply.score);
            } else {
                beta = beta.min(reply.score);
            }
            if config.use_alpha_beta && alpha >= beta {
                break;
            }
        }

        // A non-terminal board always offers the mover a move; stay defensive
        // if handed one that does not.
        best.unwrap_or_else(|| SearchResult {
            best_move: None,
            score: evaluation::evaluate(board, Side::Top, config),
        })
    }
}

/// Iterative-deepening driver around [`MinimaxSearcher`], fixed to one side
/// for the lifetime of the engine.
pub struct Engine {
    side: Side,
    config: SearchConfig,
}

impl Engine {
    pub fn new(side: Side, config: SearchConfig) -> Self {
        Self { side, config }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// Runs complete searches at depth 1, 2, ... and re-checks the clock only
    /// after each finished depth: the budget can be overshot by one search,
    /// but the answer always comes from a fully completed depth and at least
    /// the depth-1 search always runs. Returns `None` on a finished game.
    pub fn choose_move(&self, board: &Board) -> Option<usize> {
        if board.game_over() {
            warn!(side = ?self.side, "choose_move called on a finished game");
            return None;
        }

        let budget = Duration::from_millis(self.config.time_per_move_ms);
        let start = Instant::now();
        let mut depth = 1;
        let mut best;

        loop {
            let mut searcher = MinimaxSearcher::new();
            let result = searcher.minimax(board, depth, i32::MIN, i32::MAX, &self.config);
            debug!(
                side = ?self.side,
                depth,
                score = result.score,
                nodes = searcher.nodes(),
                "completed search iteration"
            );
            best = result;
            depth += 1;
            if start.elapsed() >= budget {
                break;
            }
        }

        best.best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zero budget: the do-while loop still completes exactly one depth-1
    /// search, which keeps these tests deterministic.
    fn instant_config() -> SearchConfig {
        SearchConfig {
            time_per_move_ms: 0,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn single_legal_move_is_returned() {
        let board = Board::from_pits([4, 4, 4, 4, 4, 4, 0, 0, 0, 5, 0, 0, 0, 0], Side::Top);
        let engine = Engine::new(Side::Top, instant_config());
        assert_eq!(engine.choose_move(&board), Some(9));

        let generous = SearchConfig {
            time_per_move_ms: 50,
            ..SearchConfig::default()
        };
        let engine = Engine::new(Side::Top, generous);
        assert_eq!(engine.choose_move(&board), Some(9));
    }

    #[test]
    fn depth_one_opening_picks_the_go_again_pit() {
        let board = Board::new(Side::Top);
        let config = SearchConfig::default();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.minimax(&board, 1, i32::MIN, i32::MAX, &config);
        // Pit 9 is the only opening move that lands in Top's store.
        assert_eq!(result.best_move, Some(9));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn bottom_minimizes_and_takes_the_capture() {
        // Bottom's pit 1 lands alone in pit 2 and captures mirror pit 10.
        let board = Board::from_pits([1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0], Side::Bottom);
        let config = SearchConfig::default();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.minimax(&board, 1, i32::MIN, i32::MAX, &config);
        assert_eq!(result.best_move, Some(1));
        assert!(result.score < 0);
    }

    #[test]
    fn ties_keep_the_lowest_pit() {
        // Top's pits 7, 8 and 9 all sow one stone to a quiet square and leave
        // identical scores behind.
        let board = Board::from_pits([0, 0, 0, 2, 2, 2, 0, 1, 1, 1, 0, 0, 0, 0], Side::Top);
        let config = SearchConfig::default();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.minimax(&board, 1, i32::MIN, i32::MAX, &config);
        assert_eq!(result.best_move, Some(7));
    }

    #[test]
    fn pruning_matches_plain_minimax() {
        let board = Board::new(Side::Top);
        let pruned_config = SearchConfig::default();
        let plain_config = SearchConfig {
            use_alpha_beta: false,
            ..SearchConfig::default()
        };

        let mut pruned = MinimaxSearcher::new();
        let with_cutoffs = pruned.minimax(&board, 5, i32::MIN, i32::MAX, &pruned_config);
        let mut plain = MinimaxSearcher::new();
        let exhaustive = plain.minimax(&board, 5, i32::MIN, i32::MAX, &plain_config);

        assert_eq!(with_cutoffs.best_move, exhaustive.best_move);
        assert_eq!(with_cutoffs.score, exhaustive.score);
        assert!(pruned.nodes() < plain.nodes(), "cutoffs should skip siblings");
    }

    #[test]
    fn finished_game_yields_no_move() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28], Side::Top);
        let engine = Engine::new(Side::Top, instant_config());
        assert_eq!(engine.choose_move(&board), None);
    }

    #[test]
    fn chosen_move_is_legal_and_board_untouched() {
        let board = Board::new(Side::Top);
        let snapshot = board.clone();
        let engine = Engine::new(
            Side::Top,
            SearchConfig {
                time_per_move_ms: 5,
                ..SearchConfig::default()
            },
        );
        let pit = engine.choose_move(&board).expect("opening position has moves");
        assert!(board.legal_move(pit));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn deeper_search_beats_the_random_mover() {
        use crate::game::player::{Player, RandomPlayer};
        use crate::game::{play_game, GameOutcome};

        struct FixedDepthPlayer {
            side: Side,
            depth: u32,
            config: SearchConfig,
        }

        impl Player for FixedDepthPlayer {
            fn name(&self) -> &str {
                "FixedDepth"
            }
            fn side(&self) -> Side {
                self.side
            }
            fn choose_move(&mut self, board: &Board) -> Option<usize> {
                let mut searcher = MinimaxSearcher::new();
                searcher
                    .minimax(board, self.depth, i32::MIN, i32::MAX, &self.config)
                    .best_move
            }
        }

        let mut wins = 0;
        let mut losses = 0;
        for seed in 0..10u64 {
            let engine_side = if seed % 2 == 0 { Side::Top } else { Side::Bottom };
            let mut engine = FixedDepthPlayer {
                side: engine_side,
                depth: 4,
                config: SearchConfig::default(),
            };
            let mut random = RandomPlayer::new(engine_side.opponent(), Some(seed));
            let (outcome, _state) = match engine_side {
                Side::Top => play_game(&mut engine, &mut random, Side::Top),
                Side::Bottom => play_game(&mut random, &mut engine, Side::Top),
            };
            match outcome {
                GameOutcome::Winner(side) if side == engine_side => wins += 1,
                GameOutcome::Winner(_) => losses += 1,
                GameOutcome::Draw => {}
            }
        }
        assert!(wins > losses, "engine won {wins} and lost {losses}");
    }
}
