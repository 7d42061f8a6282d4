use super::*;
use game_core::Position;

fn eval(fen: &str) -> f64 {
    let pos = Position::from_fen(fen).unwrap();
    evaluate(&pos, &EvalWeights::default())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_startpos_is_balanced() {
    let pos = Position::startpos();
    assert_eq!(evaluate(&pos, &EvalWeights::default()), 0.0);
}

#[test]
fn test_extra_rook_is_about_five_pawns() {
    // White has an extra rook and no positional asymmetry
    let white_up = eval("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert!(approx(white_up, 5.0), "got {}", white_up);
}

#[test]
fn test_sign_flips_with_side_to_move() {
    // Same material imbalance, seen from the side that is behind
    let black_to_move = eval("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
    assert!(approx(black_to_move, -5.0), "got {}", black_to_move);
}

#[test]
fn test_checkmate_is_mate_score() {
    // Fool's mate: the side to move is checkmated
    let mated = eval("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(mated, -MATE_SCORE);
}

#[test]
fn test_draw_is_exactly_zero() {
    // Insufficient material
    assert_eq!(eval("8/8/8/4k3/8/4K3/8/8 w - - 0 1"), 0.0);
}

#[test]
fn test_center_occupancy_bonus() {
    // Lone knight on e4: 3.0 material + 0.5 for standing in the center
    let score = eval("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1");
    assert!(approx(score, 3.5), "got {}", score);
}

#[test]
fn test_queen_control_suppressed_in_opening() {
    // A queen on e4 attacks d4, d5 and e5; that control only counts once the
    // game has left the opening plies.
    let early = eval("4k3/8/8/8/4Q3/8/8/4K3 w - - 0 1");
    let late = eval("4k3/8/8/8/4Q3/8/8/4K3 w - - 0 20");
    assert!(approx(late - early, 0.3), "got {} vs {}", early, late);
}

#[test]
fn test_endgame_king_centralization() {
    // K+P vs K: the white king on d4 earns the centralization bonus (1.0)
    // and attacks three true-center squares (0.3), plus the pawn (1.0).
    let score = eval("8/8/8/8/3K4/8/P7/4k3 w - - 0 1");
    assert!(approx(score, 2.3), "got {}", score);
}

#[test]
fn test_castling_rights_bonus() {
    // Startpos material, but only white kept its castling rights
    let score = eval("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ - 0 1");
    assert!(approx(score, 1.0), "got {}", score);
}

#[test]
fn test_castled_king_bonus() {
    // Mirrored development, but white has castled (king on g1, +2) and spent
    // its castling rights while black still holds both (-1).
    let score = eval("rnbqk2r/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1RK1 w kq - 0 5");
    assert!(approx(score, 1.0), "got {}", score);
}

#[test]
fn test_zero_sum_symmetry() {
    // Flipping only the side-to-move flag negates the score
    let w = eval("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let b = eval("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3");
    assert!(approx(w, -b), "got {} and {}", w, b);
}

#[test]
fn test_center_masks() {
    use game_core::Square;
    assert_eq!(CENTER.len(), 16);
    assert_eq!(TRUE_CENTER.len(), 4);
    assert_eq!(CASTLED_SQUARES.len(), 8);
    assert!(CENTER.has(Square::C3) && CENTER.has(Square::F6));
    assert!(TRUE_CENTER.has(Square::D4) && TRUE_CENTER.has(Square::E5));
    assert!(CASTLED_SQUARES.has(Square::G1) && CASTLED_SQUARES.has(Square::B8));
    assert!(!CENTER.has(Square::B3));
    assert!(!CASTLED_SQUARES.has(Square::E1));
}
