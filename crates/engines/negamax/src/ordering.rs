//! Move ordering for faster alpha-beta cutoffs.

use game_core::{Move, Position};

use crate::config::MoveOrderingPolicy;

/// Legal moves in search order.
///
/// Captures-first is purely a cutoff-rate optimization: any order yields the
/// same minimax value, just slower. Within each group the rules engine's
/// enumeration order is kept (no MVV-LVA or other scoring).
pub fn ordered_moves(pos: &Position, policy: MoveOrderingPolicy) -> Vec<Move> {
    match policy {
        MoveOrderingPolicy::Natural => pos.legal_moves(false),
        MoveOrderingPolicy::CapturesFirst => {
            let mut moves = pos.legal_moves(true);
            moves.extend(
                pos.legal_moves(false)
                    .into_iter()
                    .filter(|&mv| !pos.is_capture(mv)),
            );
            moves
        }
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
