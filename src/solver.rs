//! Time-bounded exact solver.
//!
//! The solver runs a plain depth-first minimax over the legal-move tree:
//! no evaluation function, no transposition table, no pruning, no move
//! ordering. Black maximizes and White minimizes over the tri-state outcome
//! {Black wins, draw, White wins}; a position the search cannot resolve
//! inside its wall-clock budget is reported as unknown rather than scored.
//!
//! The budget is a [`Deadline`] computed once per `solve` call and threaded
//! through the recursion as a value, so independent solve calls never share
//! timer state. Cancellation is cooperative: the deadline is polled at the
//! top of every recursive call, which bounds re-entry but cannot preempt the
//! work of a single node.

use std::fmt;
use std::time::Instant;

use crate::board::{Board, Color, Point};
use crate::constants::DEFAULT_TIME_LIMIT;

/// The proven final result of a line of play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    BlackWin,
    Draw,
    WhiteWin,
}

impl Outcome {
    /// Signed score used for minimax comparison: Black maximizes, White
    /// minimizes.
    pub fn signed(self) -> i32 {
        match self {
            Outcome::BlackWin => 1,
            Outcome::Draw => 0,
            Outcome::WhiteWin => -1,
        }
    }
}

/// Result of one `solve` call.
///
/// A result is never partially valid: either an outcome was proven and a
/// move achieving it is attached, or the whole result is `Unknown`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveResult {
    /// No proof was completed inside the time limit.
    Unknown,
    /// Proven outcome, with the move that achieves it.
    Proven(Outcome, Point),
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveResult::Unknown => write!(f, "unknown"),
            SolveResult::Proven(Outcome::Draw, pt) => write!(f, "draw {pt}"),
            SolveResult::Proven(Outcome::BlackWin, pt) => write!(f, "b {pt}"),
            SolveResult::Proven(Outcome::WhiteWin, pt) => write!(f, "w {pt}"),
        }
    }
}

/// Absolute point in time bounding one solve invocation.
///
/// Created at solve entry, read-only afterwards. A zero or negative limit is
/// expired from the start, so an already-exhausted budget never explores a
/// single node.
#[derive(Copy, Clone, Debug)]
struct Deadline {
    start: Instant,
    limit_secs: f64,
}

impl Deadline {
    fn new(limit_secs: i32) -> Self {
        Deadline {
            start: Instant::now(),
            limit_secs: limit_secs as f64,
        }
    }

    fn expired(&self) -> bool {
        self.start.elapsed().as_secs_f64() >= self.limit_secs
    }
}

/// Infer the color to move from the board contents alone.
///
/// Tallies stones over every point; Black is to move when its stone count
/// does not exceed White's. This reconstructs turn order under strict
/// alternation starting with Black; an empty board yields Black.
pub fn color_to_play(board: &impl Board) -> Color {
    let mut black = 0usize;
    let mut white = 0usize;
    for row in 1..=board.size() {
        for col in 1..=board.size() {
            match board.color_at(board.point_for(row, col)) {
                Some(Color::Black) => black += 1,
                Some(Color::White) => white += 1,
                None => {}
            }
        }
    }
    if black <= white {
        Color::Black
    } else {
        Color::White
    }
}

/// Exact solver with a configurable wall-clock budget.
pub struct Solver {
    time_limit: i32,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Solver {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Set the budget for subsequent `solve` calls, in seconds.
    ///
    /// Any integer is accepted; zero and negative budgets make `solve`
    /// return `Unknown` without exploring anything.
    pub fn set_time_limit(&mut self, seconds: i32) {
        self.time_limit = seconds;
    }

    pub fn time_limit(&self) -> i32 {
        self.time_limit
    }

    /// Determine the game-theoretic outcome of the current position.
    ///
    /// Infers the side to move, then searches until a proof is found or the
    /// budget runs out. Returns `Unknown` when the deadline passed during
    /// the search or when no line produced a proven outcome.
    pub fn solve(&self, board: &mut impl Board) -> SolveResult {
        let color = color_to_play(board);
        let deadline = Deadline::new(self.time_limit);
        let proven = search(board, color, &deadline);

        let result = if deadline.expired() {
            SolveResult::Unknown
        } else {
            match proven {
                Some((pt, outcome)) => SolveResult::Proven(outcome, pt),
                None => SolveResult::Unknown,
            }
        };
        log::debug!(
            "solve: {result} ({color:?} to move, {:.3}s elapsed)",
            deadline.start.elapsed().as_secs_f64()
        );
        result
    }
}

/// Depth-first minimax over the legal-move tree.
///
/// Returns the best move for `color` with its proven outcome, or `None`
/// when the position is unresolved: the deadline has passed, no legal move
/// exists, or every child came back unresolved.
fn search(board: &mut impl Board, color: Color, deadline: &Deadline) -> Option<(Point, Outcome)> {
    if deadline.expired() {
        return None;
    }

    let moves = board.legal_moves(color);
    if moves.is_empty() {
        return None;
    }

    let mut best: Option<(Point, Outcome)> = None;
    for mv in moves {
        if board.play_move(mv, color).is_err() {
            continue;
        }
        let child = search(board, color.opponent(), deadline);
        // The undo must happen even when the child is unresolved, so
        // sibling moves see a clean board.
        board.undo_move();

        let Some((_, outcome)) = child else { continue };
        if best.is_none_or(|(_, b)| improves(color, outcome, b)) {
            best = Some((mv, outcome));
        }
    }
    best
}

/// Whether `candidate` strictly beats `best` from `color`'s point of view.
///
/// Equal scores never improve, so on ties the earliest move in enumeration
/// order is kept.
fn improves(color: Color, candidate: Outcome, best: Outcome) -> bool {
    match color {
        Color::Black => candidate.signed() > best.signed(),
        Color::White => candidate.signed() < best.signed(),
    }
}
