//! Move legality rules.
//!
//! A move takes the top disk of one peg and places it on another. It is
//! legal when the source has a disk and the target is either empty or
//! topped by a disk that is no smaller and of a different color.

use thiserror::Error;

use crate::pegs::PegState;
use crate::puzzle::{Disk, Peg};

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveViolation {
    #[error("peg {peg} has no disk to move")]
    EmptySource { peg: Peg },

    #[error("disk {moving} is larger than disk {resting}")]
    SizeRule { moving: Disk, resting: Disk },

    #[error("disk {moving} has the same color as disk {resting}")]
    ColorRule { moving: Disk, resting: Disk },
}

/// Check the size and color rules between two stack tops.
///
/// Size is checked first, so a disk that breaks both rules reports
/// [`MoveViolation::SizeRule`].
pub fn check_stacking(moving: &Disk, resting: &Disk) -> Result<(), MoveViolation> {
    if moving.size > resting.size {
        return Err(MoveViolation::SizeRule {
            moving: moving.clone(),
            resting: resting.clone(),
        });
    }

    if moving.color == resting.color {
        return Err(MoveViolation::ColorRule {
            moving: moving.clone(),
            resting: resting.clone(),
        });
    }

    Ok(())
}

/// Check moving the top disk of `source` onto `target`
pub fn check_move(state: &PegState, source: Peg, target: Peg) -> Result<(), MoveViolation> {
    let moving = state
        .top(source)
        .ok_or(MoveViolation::EmptySource { peg: source })?;

    match state.top(target) {
        None => Ok(()),
        Some(resting) => check_stacking(moving, resting),
    }
}

/// Whether moving the top disk of `source` onto `target` is legal
pub fn is_valid_move(state: &PegState, source: Peg, target: Peg) -> bool {
    check_move(state, source, target).is_ok()
}
