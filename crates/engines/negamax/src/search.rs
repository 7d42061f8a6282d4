//! Negamax search with alpha-beta pruning and a transposition table.

use game_core::{Move, Position, SearchLimits};

use crate::config::SearchConfig;
use crate::eval::{evaluate, MATE_SCORE};
use crate::ordering::ordered_moves;
use crate::table::{Bound, TableEntry, TranspositionTable};

/// Result from a top-level think call.
pub struct SearchOutcome {
    /// Best move found with its score (None only if no legal moves exist)
    pub best_move: Option<(Move, f64)>,
    /// Deepest root scan that was started
    pub depth_reached: u8,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Owns the search state: configuration, transposition table, node counter.
///
/// Single-threaded and synchronous; the only shared mutable state is the
/// table, which is cleared at every top-level call.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    table: TranspositionTable,
    /// Nodes searched during the current think call (for statistics)
    pub nodes: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: TranspositionTable::new(),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }

    /// Searches the position and returns the best root move.
    ///
    /// Root scans use the window (-MATE_SCORE, MATE_SCORE). With iterative
    /// deepening the clock is polled before each root move; a depth that runs
    /// out of time mid-scan keeps whatever it has already committed, which
    /// may come from an incomplete sibling set. The best move is seeded with
    /// the first ordered root move, so even a zero budget yields a legal one.
    pub fn think(&mut self, pos: &Position, limits: &SearchLimits) -> SearchOutcome {
        self.table.clear();
        self.nodes = 0;

        let mut root = pos.clone();
        let moves = ordered_moves(&root, self.config.move_ordering);
        if moves.is_empty() {
            // Host contract violation: think is never called on a terminal
            // position by the tournament driver.
            return SearchOutcome {
                best_move: None,
                depth_reached: 0,
                stopped: false,
            };
        }

        let max_depth = self
            .config
            .schedule
            .depth_for(root.ply_count())
            .min(limits.depth)
            .max(1);
        let start_depth = if self.config.use_iterative_deepening {
            1
        } else {
            max_depth
        };

        let mut best_move = moves[0];
        let mut best_value = f64::NEG_INFINITY;
        let mut depth_reached = 0;
        let mut stopped = false;

        'deepening: for depth in start_depth..=max_depth {
            depth_reached = depth;
            let mut depth_best = f64::NEG_INFINITY;

            for &mv in &moves {
                // Check time before starting each root move
                if limits.time_control.check_time() {
                    stopped = true;
                    break 'deepening;
                }

                let undo = root.make_move(mv);
                self.nodes += 1;
                let value = -self.negamax(&mut root, -MATE_SCORE, MATE_SCORE, depth - 1);
                root.unmake_move(undo);

                // Strictly greater, so ties keep the earliest-seen move.
                if value > depth_best {
                    depth_best = value;
                    best_move = mv;
                    best_value = value;
                }
            }
        }

        SearchOutcome {
            best_move: Some((best_move, best_value)),
            depth_reached,
            stopped,
        }
    }

    /// Recursive negamax with alpha-beta pruning.
    ///
    /// The returned value is always from the perspective of the side to move
    /// at this node.
    fn negamax(&mut self, pos: &mut Position, mut alpha: f64, mut beta: f64, depth: u8) -> f64 {
        let hash = pos.position_hash();

        if let Some(entry) = self.table.lookup(hash) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.value,
                    Bound::Lower => alpha = alpha.max(entry.value),
                    Bound::Upper => beta = beta.min(entry.value),
                }
                if alpha >= beta {
                    return entry.value;
                }
            }
        }

        if depth == 0 || pos.is_checkmate() || pos.is_draw() {
            return evaluate(pos, &self.config.weights);
        }

        let mut best = f64::NEG_INFINITY;
        let mut cutoff = false;

        for mv in ordered_moves(pos, self.config.move_ordering) {
            let undo = pos.make_move(mv);
            self.nodes += 1;
            let value = -self.negamax(pos, -beta, -alpha, depth - 1);
            pos.unmake_move(undo);

            if value > best {
                best = value;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                cutoff = true;
                break; // Beta cutoff
            }
        }

        // This path records bounds only, never Exact.
        self.table.store(
            hash,
            TableEntry {
                value: best,
                depth,
                bound: if cutoff { Bound::Lower } else { Bound::Upper },
            },
        );

        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
