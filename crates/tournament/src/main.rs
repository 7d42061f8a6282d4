//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use game_core::Engine;
use negamax_engine::{NegamaxEngine, SearchConfig};
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{
    quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Chess Engine Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--config FILE]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D] [--config FILE]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  negamax       - Alpha-beta negamax with heuristic eval");
    println!("  random        - Uniform random mover (baseline)");
    println!();
    println!("Examples:");
    println!("  tournament match negamax random --games 20 --depth 4");
    println!("  tournament gauntlet negamax --games 10 --config search.toml");
}

fn create_engine(spec: &str, config: Option<&SearchConfig>) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "negamax" | "nm" => match config {
            Some(cfg) => Box::new(NegamaxEngine::with_config(cfg.clone())),
            None => Box::new(NegamaxEngine::new()),
        },
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using negamax", spec);
            Box::new(NegamaxEngine::new())
        }
    }
}

/// Options shared by the match and gauntlet commands
struct CliOptions {
    num_games: u32,
    depth: u8,
    search_config: Option<SearchConfig>,
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut opts = CliOptions {
        num_games: 10,
        depth: 4,
        search_config: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    opts.num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    opts.depth = args[i + 1].parse().unwrap_or(4);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match SearchConfig::load(Path::new(&args[i + 1])) {
                        Ok(cfg) => opts.search_config = Some(cfg),
                        Err(e) => {
                            eprintln!("Warning: failed to load {}: {}", args[i + 1], e);
                            eprintln!("Using default search config");
                        }
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    opts
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let opts = parse_options(&args[2..]);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut engine1 = create_engine(engine1_spec, opts.search_config.as_ref());
    let mut engine2 = create_engine(engine2_spec, opts.search_config.as_ref());

    let config = MatchConfig {
        num_games: opts.num_games,
        depth: opts.depth,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let opts = parse_options(&args[1..]);

    let opponents = vec!["random", "negamax"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: opts.num_games,
            search_depth: opts.depth,
            ..Default::default()
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec, opts.search_config.as_ref());
        let mut opp_engine = create_engine(opponent, None);

        let result = quick_match(
            challenger.as_mut(),
            opp_engine.as_mut(),
            opts.num_games,
            opts.depth,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
