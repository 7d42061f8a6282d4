//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful for:
//! - Testing the tournament infrastructure
//! - Baseline comparisons (any real engine should easily beat this)

use game_core::{Engine, Position, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let moves = pos.legal_moves(false);
        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut thread_rng()).copied(),
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn author(&self) -> &str {
        "center-chess"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
