//! Tournament Runner
//!
//! This crate is the host around the engines: it owns turn sequencing,
//! clocks, and game-over detection, and provides:
//! - Running matches between different engines
//! - Tracking Elo ratings across configurations
//! - Generating reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the negamax engine and the random baseline
//! cargo run -p tournament -- match negamax random --games 20 --depth 3
//!
//! # Run a gauntlet with a tuned configuration
//! cargo run -p tournament -- gauntlet negamax --config tuned.toml
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
