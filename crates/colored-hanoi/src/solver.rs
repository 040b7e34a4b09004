//! Recursive solver for the colored Tower of Hanoi.
//!
//! The solver follows the classical three-peg decomposition: move `n - 1`
//! disks out of the way, move the largest disk, then move the `n - 1` disks
//! back on top of it. Every single-disk move is checked against
//! [`crate::rules`] before it is applied. The first refused move makes the
//! whole puzzle infeasible; the solver does not search for other orderings.

use log::{debug, trace};
use serde::ser::{Serialize, Serializer};

use crate::pegs::PegState;
use crate::puzzle::{Disk, Move, Peg, PuzzleConfig};
use crate::rules::{check_move, MoveViolation};

/// Move logs are preallocated up to this many entries
const MAX_PREALLOCATED_MOVES: usize = 1 << 16;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest puzzle accepted by [`PuzzleConfig::validate`]. A puzzle of
    /// `n` disks needs `2^n - 1` moves when it is feasible.
    pub max_disks: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_disks: 24 }
    }
}

/// The move that stopped a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infeasibility {
    pub source: Peg,
    pub target: Peg,
    pub violation: MoveViolation,
}

impl Infeasibility {
    /// Human-readable reason, e.g. for CLI output
    pub fn reason(&self) -> String {
        format!(
            "move {} -> {} refused: {}",
            self.source, self.target, self.violation
        )
    }
}

/// Outcome of a solve: every move in order, or the reason there is none.
///
/// An empty move list is a success (zero disks), never a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved(Vec<Move>),
    Infeasible(Infeasibility),
}

impl SolveResult {
    pub fn is_feasible(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            SolveResult::Solved(moves) => Some(moves),
            SolveResult::Infeasible(_) => None,
        }
    }

    pub fn infeasibility(&self) -> Option<&Infeasibility> {
        match self {
            SolveResult::Solved(_) => None,
            SolveResult::Infeasible(reason) => Some(reason),
        }
    }

    pub fn move_count(&self) -> usize {
        self.moves().map_or(0, <[Move]>::len)
    }
}

impl From<Result<Vec<Move>, Infeasibility>> for SolveResult {
    fn from(result: Result<Vec<Move>, Infeasibility>) -> Self {
        match result {
            Ok(moves) => SolveResult::Solved(moves),
            Err(reason) => SolveResult::Infeasible(reason),
        }
    }
}

/// Serialises as the move array, or as `-1` when infeasible
impl Serialize for SolveResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SolveResult::Solved(moves) => moves.serialize(serializer),
            SolveResult::Infeasible(_) => serializer.serialize_i64(-1),
        }
    }
}

/// Single solve in progress. Owns its peg state exclusively.
struct Recorder<'a> {
    state: &'a mut PegState,
    moves: Vec<Move>,
}

impl<'a> Recorder<'a> {
    fn new(state: &'a mut PegState, n: usize) -> Self {
        let expected = u32::try_from(n)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .map_or(MAX_PREALLOCATED_MOVES, |total| total - 1);

        Self {
            state,
            moves: Vec::with_capacity(expected.min(MAX_PREALLOCATED_MOVES)),
        }
    }

    fn transfer(
        &mut self,
        n: usize,
        source: Peg,
        auxiliary: Peg,
        target: Peg,
    ) -> Result<(), Infeasibility> {
        if n == 0 {
            return Ok(());
        }

        self.transfer(n - 1, source, target, auxiliary)?;
        self.move_disk(source, target)?;
        self.transfer(n - 1, auxiliary, source, target)
    }

    fn move_disk(&mut self, source: Peg, target: Peg) -> Result<(), Infeasibility> {
        check_move(self.state, source, target).map_err(|violation| Infeasibility {
            source,
            target,
            violation,
        })?;

        self.state.transfer(source, target);
        let recorded = Move::new(self.moves.len() + 1, source, target);
        trace!("{recorded}");
        self.moves.push(recorded);
        Ok(())
    }
}

/// Transfer the top `n` disks of `source` to `target`, using `auxiliary`
/// as the spare.
///
/// `state` is mutated as moves are applied. On failure it is left wherever
/// the refused move found it and no moves are returned.
pub fn solve(
    state: &mut PegState,
    n: usize,
    source: Peg,
    auxiliary: Peg,
    target: Peg,
) -> Result<Vec<Move>, Infeasibility> {
    let mut recorder = Recorder::new(state, n);
    recorder.transfer(n, source, auxiliary, target)?;
    Ok(recorder.moves)
}

/// Solve a puzzle with `disk_count` disks, listed bottom to top, starting on
/// peg A and ending on peg C.
///
/// The input is not validated. A `disk_count` larger than the disk list is
/// infeasible (the source runs out of disks); a smaller one transfers only
/// the top `disk_count` disks.
pub fn solve_colored_hanoi(disk_count: usize, disks: &[Disk]) -> SolveResult {
    debug!("Solving {} of {} disks", disk_count, disks.len());

    let mut state = PegState::new(disks);
    let result: SolveResult =
        solve(&mut state, disk_count, Peg::Source, Peg::Auxiliary, Peg::Target).into();

    match &result {
        SolveResult::Solved(moves) => debug!("Solved in {} moves", moves.len()),
        SolveResult::Infeasible(reason) => debug!("Infeasible: {}", reason.reason()),
    }

    result
}

/// Solve a parsed puzzle document
pub fn solve_puzzle(puzzle: &PuzzleConfig) -> SolveResult {
    solve_colored_hanoi(puzzle.disk_count(), &puzzle.disks)
}
