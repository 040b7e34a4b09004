//! Error types for puzzle input.
//!
//! Infeasibility is not an error: the solver reports it as
//! [`crate::solver::SolveResult::Infeasible`]. These types only cover input
//! that breaks the caller contract or cannot be read at all.

use std::io;

use thiserror::Error;

/// A puzzle that does not satisfy the caller contract.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("disk count {declared} does not match the {actual} disks supplied")]
    DiskCountMismatch { declared: usize, actual: usize },

    #[error("disk at position {position} has size 0, sizes must be positive")]
    ZeroSize { position: usize },

    #[error("disk size {size} appears more than once")]
    DuplicateSize { size: u32 },

    #[error("{count} disks exceeds the configured maximum of {max}")]
    TooManyDisks { count: usize, max: usize },

    #[error("invalid disk '{spec}', expected SIZE:COLOR (e.g. 3:red)")]
    InvalidDiskSpec { spec: String },
}

/// Failure to load a puzzle or move list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("no input: provide a file path, --stdin or --disk")]
    Missing,
}
