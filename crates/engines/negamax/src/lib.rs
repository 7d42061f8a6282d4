//! Negamax Chess Engine
//!
//! Iterative-deepening alpha-beta search with a per-search transposition
//! table, captures-first move ordering, and a material + center-control
//! evaluation. Rules of chess come entirely from the `game_core` facade.

mod config;
mod eval;
mod ordering;
mod search;
mod table;

pub use config::{ConfigError, DepthSchedule, MoveOrderingPolicy, SearchConfig};
pub use eval::{evaluate, EvalWeights, CASTLED_SQUARES, CENTER, MATE_SCORE, TRUE_CENTER};
pub use ordering::ordered_moves;
pub use search::{SearchOutcome, Searcher};
pub use table::{Bound, TableEntry, TranspositionTable};

use std::time::Duration;

use game_core::{Engine, Position, SearchLimits, SearchResult};

/// Chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - A depth schedule (fixed or ply-bucketed) with optional iterative deepening
/// - A transposition table, cleared at the start of every search
/// - Captures-first move ordering
/// - Material, center-control, and king-safety evaluation
#[derive(Debug, Clone)]
pub struct NegamaxEngine {
    searcher: Searcher,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Config-level time budget applies only when the host passes no move time.
    fn effective_limits(&self, limits: SearchLimits) -> SearchLimits {
        match (limits.move_time, self.searcher.config().time_budget_ms) {
            (None, Some(ms)) => {
                SearchLimits::depth_and_time(limits.depth, Duration::from_millis(ms))
            }
            _ => limits,
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let limits = self.effective_limits(limits);
        limits.start();

        let outcome = self.searcher.think(pos, &limits);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth: outcome.depth_reached,
            nodes: self.searcher.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn author(&self) -> &str {
        "center-chess"
    }

    fn new_game(&mut self) {
        self.searcher.clear();
    }
}
