use super::*;
use crate::config::DepthSchedule;
use crate::eval::EvalWeights;
use crate::NegamaxEngine;
use game_core::{parse_uci_move, Engine, Position};
use std::time::Duration;

fn searcher() -> Searcher {
    Searcher::new(SearchConfig::default())
}

fn fixed_depth(depth: u8) -> Searcher {
    Searcher::new(SearchConfig {
        schedule: DepthSchedule::Fixed { depth },
        use_iterative_deepening: false,
        ..SearchConfig::default()
    })
}

fn play(pos: &mut Position, moves: &[&str]) {
    for txt in moves {
        let mv = parse_uci_move(pos, txt).unwrap_or_else(|| panic!("{} should be legal", txt));
        pos.make_move(mv);
    }
}

#[test]
fn test_think_startpos_returns_legal_move() {
    let pos = Position::startpos();
    let mut s = fixed_depth(2);
    let limits = SearchLimits::depth(2);
    limits.start();

    let outcome = s.think(&pos, &limits);
    let (mv, _) = outcome.best_move.expect("startpos has moves");
    assert!(pos.legal_moves(false).contains(&mv));
    assert!(s.nodes > 0);
    assert!(!outcome.stopped);
}

#[test]
fn test_think_finds_mate_in_one() {
    // Qe8 is mate
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mate = parse_uci_move(&pos, "e1e8").unwrap();

    let mut s = fixed_depth(2);
    let limits = SearchLimits::depth(2);
    limits.start();

    let outcome = s.think(&pos, &limits);
    let (mv, score) = outcome.best_move.unwrap();
    assert_eq!(mv, mate);
    assert!(score >= 9_000.0, "mate score expected, got {}", score);
}

#[test]
fn test_leaf_equivalence() {
    // At depth 0 the search is exactly the static evaluation
    let weights = EvalWeights::default();
    for fen in [
        "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3",
    ] {
        let mut pos = Position::from_fen(fen).unwrap();
        let expected = evaluate(&pos, &weights);
        let mut s = searcher();
        assert_eq!(s.negamax(&mut pos, -MATE_SCORE, MATE_SCORE, 0), expected);
    }
}

#[test]
fn test_depth_one_matches_naive_max() {
    // negamax at depth 1 must equal the best child evaluation by hand
    let weights = EvalWeights::default();
    let pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
            .unwrap();

    let mut naive = f64::NEG_INFINITY;
    let mut scratch = pos.clone();
    for mv in scratch.legal_moves(false) {
        let undo = scratch.make_move(mv);
        naive = naive.max(-evaluate(&scratch, &weights));
        scratch.unmake_move(undo);
    }

    let mut s = searcher();
    let mut pos = pos;
    let value = s.negamax(&mut pos, -MATE_SCORE, MATE_SCORE, 1);
    assert!((value - naive).abs() < 1e-9, "{} vs {}", value, naive);
}

#[test]
fn test_search_is_deterministic() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
            .unwrap();

    let limits = SearchLimits::depth(3);
    limits.start();
    let first = fixed_depth(3).think(&pos, &limits).best_move.unwrap();
    let second = fixed_depth(3).think(&pos, &limits).best_move.unwrap();
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn test_transpositions_search_identically() {
    // Two move orders into the same structure must search to the same value
    let mut a = Position::startpos();
    play(&mut a, &["e2e4", "e7e5", "g1f3", "b8c6"]);

    let mut b = Position::startpos();
    play(&mut b, &["g1f3", "e7e5", "e2e4", "b8c6"]);

    assert_eq!(a.position_hash(), b.position_hash());

    let va = searcher().negamax(&mut a, -MATE_SCORE, MATE_SCORE, 3);
    let vb = searcher().negamax(&mut b, -MATE_SCORE, MATE_SCORE, 3);
    assert_eq!(va, vb);
}

#[test]
fn test_make_unmake_is_balanced_across_think() {
    // The caller's position is untouched; the scratch copy ends restored
    let pos = Position::startpos();
    let hash = pos.position_hash();
    let limits = SearchLimits::depth(3);
    limits.start();
    fixed_depth(3).think(&pos, &limits);
    assert_eq!(pos.position_hash(), hash);
}

#[test]
fn test_zero_budget_still_returns_legal_move() {
    // Regression: iterative deepening with an exhausted clock must fall back
    // to the first ordered root move, never an uninitialized default.
    let pos = Position::startpos();
    let mut engine = NegamaxEngine::new();
    let result = engine.search(&pos, SearchLimits::depth_and_time(5, Duration::ZERO));

    let mv = result.best_move.expect("must return a move");
    assert!(pos.legal_moves(false).contains(&mv));
    assert!(result.stopped);
}

#[test]
fn test_engine_trait_search() {
    let pos = Position::startpos();
    let mut engine = NegamaxEngine::new();
    let result = engine.search(&pos, SearchLimits::depth(2));

    let mv = result.best_move.expect("startpos has moves");
    assert!(pos.legal_moves(false).contains(&mv));
    assert!(result.nodes > 0);
    assert_eq!(engine.name(), "Negamax v1.0");
}

#[test]
fn test_config_time_budget_applies() {
    // With no host move time, the config budget kicks in and stops the search
    let config = SearchConfig {
        time_budget_ms: Some(0),
        ..SearchConfig::default()
    };
    let mut engine = NegamaxEngine::with_config(config);
    let result = engine.search(&Position::startpos(), SearchLimits::depth(6));
    assert!(result.best_move.is_some());
    assert!(result.stopped);
}
