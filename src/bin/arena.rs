//! Match runner CLI.
//!
//! Plays games of the pawn race between two configured players and outputs
//! game records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin arena -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 10)
//!   --depth D       Search depth for minimax players (default: 3)
//!   --no-pruning    Disable alpha-beta pruning for minimax players
//!   --black SPEC    Black player: random | minimax (default: random)
//!   --white SPEC    White player: random | minimax (default: minimax)
//!   --max-plies N   Ply limit per game before a draw (default: 200)
//!   --threads N     Number of parallel threads (default: 1)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use pawnstorm::arena::{self, MatchConfig, PlayerSpec};
use pawnstorm::eval::ALL_HEURISTICS;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = MatchConfig::default();
    let mut depth = 3u32;
    let mut pruning = true;
    let mut white_kind = "minimax".to_string();
    let mut black_kind = "random".to_string();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--depth" => {
                i += 1;
                depth = args[i].parse().expect("invalid --depth value");
            }
            "--no-pruning" => {
                pruning = false;
            }
            "--white" => {
                i += 1;
                white_kind = args[i].clone();
            }
            "--black" => {
                i += 1;
                black_kind = args[i].clone();
            }
            "--max-plies" => {
                i += 1;
                config.max_plies = args[i].parse().expect("invalid --max-plies value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;
    config.white = parse_spec(&white_kind, depth, pruning);
    config.black = parse_spec(&black_kind, depth, pruning);

    if !quiet {
        eprintln!(
            "Match: {} games, {} vs {}, max {} plies, {} threads",
            config.num_games,
            config.white.label(),
            config.black.label(),
            config.max_plies,
            config.threads,
        );
    }

    let start = Instant::now();
    let games = arena::run_matches(&config);
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64(),
        );
        arena::print_summary(&config, &games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            arena::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            arena::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

fn parse_spec(kind: &str, depth: u32, pruning: bool) -> PlayerSpec {
    match kind {
        "random" => PlayerSpec::Random,
        "minimax" => PlayerSpec::Minimax {
            depth,
            heuristics: ALL_HEURISTICS.to_vec(),
            pruning,
        },
        other => {
            eprintln!("Unknown player spec: {} (expected random or minimax)", other);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: arena [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N       Number of games to play (default: 10)");
    eprintln!("  --depth D       Search depth for minimax players (default: 3)");
    eprintln!("  --no-pruning    Disable alpha-beta pruning for minimax players");
    eprintln!("  --white SPEC    White player: random | minimax (default: minimax)");
    eprintln!("  --black SPEC    Black player: random | minimax (default: random)");
    eprintln!("  --max-plies N   Ply limit per game before a draw (default: 200)");
    eprintln!("  --threads N     Number of parallel threads (default: 1)");
    eprintln!("  --seed N        Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE   Output file path (default: stdout)");
    eprintln!("  --quiet         Suppress progress and summary output");
    eprintln!("  --help          Show this help");
}
