//! Static evaluation: material, center occupancy, center attack coverage,
//! and phase-dependent king safety.

use game_core::{BitBoard, Color, Piece, Position};
use serde::{Deserialize, Serialize};

/// Score for the side being checkmated; also the root search window magnitude.
pub const MATE_SCORE: f64 = 10_000.0;

/// The 16 central squares, files c-f, ranks 3-6.
pub const CENTER: BitBoard = BitBoard(0x0000_3C3C_3C3C_0000);

/// The 4 true-center squares d4, e4, d5, e5.
pub const TRUE_CENTER: BitBoard = BitBoard(0x0000_0018_1800_0000);

/// Back-rank squares a castled king normally sits on: b1, c1, g1, h1 and
/// their rank-8 mirrors.
pub const CASTLED_SQUARES: BitBoard = BitBoard(0xC600_0000_0000_00C6);

/// Evaluation weights, in pawns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
    /// Keeps king material non-zero; kings are never actually captured.
    pub king: f64,
    /// Flat bonus per piece standing on one of the 16 central squares.
    pub center_bonus: f64,
    /// Weight per attacked true-center square.
    pub control_weight: f64,
    /// Queens do not count toward center control before this ply.
    pub queen_control_min_ply: u32,
    /// Total piece count at or below which the position is an endgame.
    pub endgame_piece_limit: u32,
    /// Endgame bonus for a king standing on a true-center square.
    pub king_center_bonus: f64,
    /// Middlegame bonus for a king standing on a castled square.
    pub castled_king_bonus: f64,
    /// Middlegame bonus per remaining castling right.
    pub castle_right_bonus: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 3.0,
            bishop: 3.5,
            rook: 5.0,
            queen: 9.0,
            king: 1000.0,
            center_bonus: 0.5,
            control_weight: 0.1,
            queen_control_min_ply: 30,
            endgame_piece_limit: 16,
            king_center_bonus: 1.0,
            castled_king_bonus: 2.0,
            castle_right_bonus: 0.5,
        }
    }
}

impl EvalWeights {
    pub fn piece_value(&self, kind: Piece) -> f64 {
        match kind {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => self.king,
        }
    }
}

/// Evaluates the position from the side-to-move's perspective.
///
/// Pure read-only query: attack bitboards come from the rules engine, the
/// position is never mutated. Returns a score in pawns:
/// - Positive = good for side to move
/// - Negative = bad for side to move
/// - `-MATE_SCORE` = side to move is checkmated, 0 = drawn
pub fn evaluate(pos: &Position, weights: &EvalWeights) -> f64 {
    // Terminal shortcut; both results are already mover-relative.
    if pos.is_checkmate() {
        return -MATE_SCORE;
    }
    if pos.is_draw() {
        return 0.0;
    }

    // Everything below is white-positive, flipped at the end.
    let mut score = 0.0;
    let mut white_attacks = 0u32;
    let mut black_attacks = 0u32;
    let ply = pos.ply_count();

    for group in pos.piece_groups() {
        let sign = match group.color {
            Color::White => 1.0,
            Color::Black => -1.0,
        };
        score += sign * weights.piece_value(group.kind) * f64::from(group.count);

        for &sq in &group.squares {
            if CENTER.has(sq) {
                score += sign * weights.center_bonus;
            }

            // Early queen sorties are not rewarded as center control.
            if group.kind == Piece::Queen && ply < weights.queen_control_min_ply {
                continue;
            }
            let hits = (pos.attack_squares(group.kind, sq, group.color) & TRUE_CENTER).len();
            match group.color {
                Color::White => white_attacks += hits,
                Color::Black => black_attacks += hits,
            }
        }
    }

    score += weights.control_weight * (f64::from(white_attacks) - f64::from(black_attacks));

    // King safety flips meaning with the phase: centralize in the endgame,
    // hide behind the castled files before that.
    if pos.piece_count() <= weights.endgame_piece_limit {
        if TRUE_CENTER.has(pos.king_square(Color::White)) {
            score += weights.king_center_bonus;
        }
        if TRUE_CENTER.has(pos.king_square(Color::Black)) {
            score -= weights.king_center_bonus;
        }
    } else {
        if CASTLED_SQUARES.has(pos.king_square(Color::White)) {
            score += weights.castled_king_bonus;
        }
        if CASTLED_SQUARES.has(pos.king_square(Color::Black)) {
            score -= weights.castled_king_bonus;
        }
        if pos.has_kingside_castle_right(Color::White) {
            score += weights.castle_right_bonus;
        }
        if pos.has_queenside_castle_right(Color::White) {
            score += weights.castle_right_bonus;
        }
        if pos.has_kingside_castle_right(Color::Black) {
            score -= weights.castle_right_bonus;
        }
        if pos.has_queenside_castle_right(Color::Black) {
            score -= weights.castle_right_bonus;
        }
    }

    // Convert to side-to-move perspective
    match pos.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
