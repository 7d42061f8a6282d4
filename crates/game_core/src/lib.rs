pub mod position;
pub mod time_control;
pub mod uci;

// Re-export the rules facade and shared engine plumbing
pub use position::*;
pub use time_control::*;
pub use uci::*;

pub use cozy_chess::{BitBoard, Color, Move, Piece, Square};

// =============================================================================
// Engine trait, implemented by all agents (negamax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in pawns from the engine's perspective
    pub score: f64,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all move-selection agents must implement.
///
/// This allows swapping between the negamax engine, the random baseline,
/// and future experiments without touching the tournament driver.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth, time, etc.)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Returns the engine's author for identification
    fn author(&self) -> &str {
        "center-chess"
    }

    /// Reset internal state for a new game (clear hash tables, history, etc.)
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
