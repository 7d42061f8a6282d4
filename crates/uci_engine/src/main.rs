use game_core::{move_to_uci, set_position_from_uci, Engine, Position, SearchLimits};
use negamax_engine::NegamaxEngine;
use std::io::{self, BufRead, Write};
use std::time::Duration;

fn main() {
    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut pos = Position::startpos();
    let mut engine = NegamaxEngine::new();
    let mut depth: u8 = 4;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name()).ok();
                writeln!(stdout, "id author {}", engine.author()).ok();
                writeln!(stdout, "option name Depth type spin default 4 min 1 max 8").ok();
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "setoption" => {
                // Example: setoption name Depth value 5
                if let Some(idx_name) = parts.iter().position(|&x| x == "name") {
                    if idx_name + 1 < parts.len() && parts[idx_name + 1] == "Depth" {
                        if let Some(idx_val) = parts.iter().position(|&x| x == "value") {
                            if idx_val + 1 < parts.len() {
                                if let Ok(d) = parts[idx_val + 1].parse::<u8>() {
                                    depth = d.clamp(1, 8);
                                }
                            }
                        }
                    }
                }
            }
            "ucinewgame" => {
                pos = Position::startpos();
                engine.new_game();
            }
            "position" => {
                set_position_from_uci(&mut pos, &parts[1..]);
            }
            "go" => {
                let mut limits = SearchLimits::depth(depth);
                let mut i = 1;
                while i < parts.len() {
                    match parts[i] {
                        "depth" => {
                            if i + 1 < parts.len() {
                                if let Ok(d) = parts[i + 1].parse::<u8>() {
                                    limits = SearchLimits::depth(d);
                                }
                                i += 1;
                            }
                        }
                        "movetime" => {
                            if i + 1 < parts.len() {
                                if let Ok(ms) = parts[i + 1].parse::<u64>() {
                                    limits = SearchLimits::depth_and_time(
                                        limits.depth,
                                        Duration::from_millis(ms),
                                    );
                                }
                                i += 1;
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }

                let result = engine.search(&pos, limits);
                writeln!(
                    stdout,
                    "info depth {} score cp {} nodes {}",
                    result.depth,
                    (result.score * 100.0) as i64,
                    result.nodes
                )
                .ok();
                match result.best_move {
                    Some(mv) => {
                        writeln!(stdout, "bestmove {}", move_to_uci(&pos, mv)).ok();
                    }
                    None => {
                        writeln!(stdout, "bestmove 0000").ok();
                    }
                }
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}
