//! Constants for board geometry and engine defaults.
//!
//! The board size is a runtime value here (the GTP `boardsize` command can
//! resize the game), so this module only fixes the supported range and the
//! engine's default settings.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) used when no size has been requested.
pub const DEFAULT_SIZE: usize = 7;

/// Smallest board size the engine accepts.
pub const MIN_SIZE: usize = 2;

/// Largest board size the engine accepts. 19 is the largest standard Go board.
pub const MAX_SIZE: usize = 19;

// =============================================================================
// Special Move Values
// =============================================================================

/// Pass move marker (index 0 is padding in the board array, so safe to use).
pub const PASS_MOVE: usize = 0;

// =============================================================================
// Solver Parameters
// =============================================================================

/// Default wall-clock budget for one `solve` call, in seconds.
pub const DEFAULT_TIME_LIMIT: i32 = 1;
