//! Colored Tower of Hanoi solver.
//!
//! Disks carry a size and a color. A disk may only be placed on an empty
//! peg or on a larger disk of a different color. The solver runs the
//! classical recursive strategy and reports either the full move list or
//! that the strategy hits an illegal move.

pub mod error;
pub mod logging;
pub mod pegs;
pub mod puzzle;
pub mod replay;
pub mod rules;
pub mod solver;

// Re-export main types
pub use error::{InputError, PuzzleError};
pub use pegs::PegState;
pub use puzzle::{Disk, DiskColor, Move, Peg, PuzzleConfig};
pub use replay::{replay, verify_solution, ReplayMetrics, ReplayResult, ReplayStatus};
pub use rules::{check_move, is_valid_move, MoveViolation};
pub use solver::{solve, solve_colored_hanoi, solve_puzzle, Infeasibility, SolveResult, SolverConfig};
