//! GoZero-Rust: a random-policy Go engine with a time-bounded exact solver.
//!
//! The engine plays uniformly random legal moves and, on request, runs an
//! exhaustive minimax search that reports the game-theoretic result of the
//! current position (Black wins / draw / White wins, with a proving move)
//! or `unknown` when its wall-clock budget runs out first.
//!
//! ## Modules
//!
//! - [`constants`] - Board size range and engine defaults
//! - [`board`] - Go board with captures, ko, and reversible moves
//! - [`solver`] - Time-bounded depth-first minimax
//! - [`agent`] - Uniform-random move policy
//! - [`gtp`] - GTP front end
//!
//! ## Example
//!
//! ```
//! use gozero_rust::board::{Color, GoBoard};
//! use gozero_rust::solver::Solver;
//!
//! let mut board = GoBoard::new(5);
//! board.play_move(board.point_for(3, 3), Color::Black).unwrap();
//!
//! // A zero-second budget is exhausted before a single node is explored.
//! let mut solver = Solver::new();
//! solver.set_time_limit(0);
//! assert_eq!(solver.solve(&mut board).to_string(), "unknown");
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod gtp;
pub mod solver;
