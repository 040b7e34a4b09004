//! Move-list replay with invariant checks and metrics tracking.
//!
//! Replays a recorded move list from the initial position, re-validating
//! each move. Useful for checking solver output or a hand-written solution.

use log::debug;

use crate::pegs::PegState;
use crate::puzzle::{Move, Peg, PuzzleConfig};
use crate::rules::{check_move, MoveViolation};

/// Result status of a replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Every disk ended on peg C
    Solved,
    /// All moves applied but disks remain elsewhere
    Incomplete,
    /// Move indices must run 1, 2, 3, ...
    OutOfOrder { expected: usize, found: usize },
    /// A move broke the size or color rule
    IllegalMove { index: usize, violation: MoveViolation },
    /// A stack lost its ordering or the disk set changed
    InvariantBroken { index: usize },
}

/// Metrics collected during replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayMetrics {
    pub moves_applied: usize,
    pub max_stack_height: usize,
    pub moves_onto_empty: usize,
}

/// Result of replaying a move list
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub status: ReplayStatus,
    pub metrics: ReplayMetrics,
    pub solved: bool,
}

impl ReplayResult {
    fn with_status(status: ReplayStatus, metrics: ReplayMetrics) -> Self {
        let solved = status == ReplayStatus::Solved;
        Self {
            status,
            metrics,
            solved,
        }
    }
}

/// Replay `moves` on a fresh copy of the puzzle's initial position
pub fn replay(puzzle: &PuzzleConfig, moves: &[Move]) -> ReplayResult {
    let mut state = PegState::new(&puzzle.disks);
    let initial_sizes = state.size_multiset();

    let mut metrics = ReplayMetrics {
        max_stack_height: state.height(Peg::Source),
        ..Default::default()
    };

    for (position, m) in moves.iter().enumerate() {
        let expected = position + 1;
        if m.index != expected {
            return ReplayResult::with_status(
                ReplayStatus::OutOfOrder {
                    expected,
                    found: m.index,
                },
                metrics,
            );
        }

        if let Err(violation) = check_move(&state, m.source, m.target) {
            debug!("Move {m} refused: {violation}");
            return ReplayResult::with_status(
                ReplayStatus::IllegalMove {
                    index: m.index,
                    violation,
                },
                metrics,
            );
        }

        if state.is_empty(m.target) {
            metrics.moves_onto_empty += 1;
        }
        state.transfer(m.source, m.target);
        metrics.moves_applied += 1;

        for peg in Peg::ALL {
            metrics.max_stack_height = metrics.max_stack_height.max(state.height(peg));
        }

        if !state.is_well_ordered() || state.size_multiset() != initial_sizes {
            return ReplayResult::with_status(ReplayStatus::InvariantBroken { index: m.index }, metrics);
        }
    }

    let status = if state.is_complete_on(Peg::Target) {
        ReplayStatus::Solved
    } else {
        ReplayStatus::Incomplete
    };

    ReplayResult::with_status(status, metrics)
}

/// Simple verification: do the moves solve the puzzle?
pub fn verify_solution(puzzle: &PuzzleConfig, moves: &[Move]) -> bool {
    replay(puzzle, moves).solved
}
