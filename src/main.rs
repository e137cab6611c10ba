//! Live Scoreboard - Binary Entry Point
//!
//! Replays a short World Cup session against the registry and prints the
//! summary after each step. Set `RUST_LOG=scoreboard=debug` to see every
//! operation the board accepts or rejects.

use scoreboard::MatchRegistry;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  Live Scoreboard");
    println!("===========================================");
    println!();

    let board = MatchRegistry::with_capacity(16);

    let fixtures = [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ];

    for (home, away, home_score, away_score) in fixtures {
        if let Err(e) = board.start_match(home, away) {
            warn!(home, away, error = %e, "could not start match");
            continue;
        }
        if let Err(e) = board.update_score(home, away, home_score, away_score) {
            warn!(home, away, error = %e, "could not update score");
        }
    }
    info!(matches = board.len(), "fixtures loaded");

    println!("Summary:");
    println!("{}", board.summary());
    println!();

    // Brazil is already playing
    if let Err(e) = board.start_match("Brazil", "Portugal") {
        println!("Rejected: {e}");
    }

    match board.finish_match("Spain", "Brazil") {
        Ok(m) => println!(
            "Full time: {} {} - {} {}",
            m.home, m.home_score, m.away, m.away_score
        ),
        Err(e) => warn!(error = %e, "could not finish match"),
    }
    println!();

    println!("Summary:");
    println!("{}", board.summary());
}
