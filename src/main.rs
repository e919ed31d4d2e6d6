//! GoZero-Rust: a random-policy Go engine with an exact solver.
//!
//! ## Usage
//!
//! - `gozero-rust` - Show a demo
//! - `gozero-rust gtp` - Start the GTP server
//! - `gozero-rust demo` - Run the demo

use clap::{Parser, Subcommand};

use gozero_rust::agent::RandomAgent;
use gozero_rust::board::{Color, GoBoard};
use gozero_rust::gtp::GtpEngine;
use gozero_rust::solver::Solver;

/// GoZero-Rust: a random-policy Go engine with an exact solver
#[derive(Parser)]
#[command(name = "gozero-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new();
            engine.run()?;
        }
        Some(Commands::Demo) | None => {
            run_demo();
        }
    }
    Ok(())
}

fn run_demo() {
    println!("GoZero-Rust: random-policy Go engine with exact solver\n");

    let mut board = GoBoard::new(5);
    for (vertex, color) in [("C3", Color::Black), ("D4", Color::White), ("B2", Color::Black)] {
        if let Some(pt) = board.parse_coord(vertex) {
            let result = board.play_move(pt, color);
            println!("{color:?} at {vertex}: {result:?}");
        }
    }
    println!("\n{board}");

    let agent = RandomAgent::new();
    if let Some(pt) = agent.get_move(&board, Color::White) {
        println!("Random move for White: {}", board.str_coord(pt));
    }

    // A zero-second budget demonstrates the solver's graceful degradation:
    // the deadline is already expired, so nothing is explored.
    let mut solver = Solver::new();
    solver.set_time_limit(0);
    println!("Solve with a 0-second budget: {}", solver.solve(&mut board));
}
