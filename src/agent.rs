//! Random move policy.

use crate::board::{Board, Color, Point};

/// Policy that selects uniformly at random from the legal moves.
///
/// No eye filter is applied: moves filling a surrounded point are as likely
/// as any other. Returns `None` only when zero legal moves exist, which the
/// caller reports as a pass.
#[derive(Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent
    }

    pub fn get_move(&self, board: &impl Board, color: Color) -> Option<Point> {
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            None
        } else {
            Some(moves[fastrand::usize(..moves.len())])
        }
    }
}
