//! Puzzle representation types that match the JSON puzzle format.
//!
//! Disks and moves serialise as compact tuples (`[size, "color"]` and
//! `[index, "A", "C"]`) so puzzle files and move lists stay readable.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::solver::SolverConfig;

/// Disk color. Two colors are equal only if their names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiskColor(String);

impl DiskColor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DiskColor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DiskColor {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for DiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single disk. Within one puzzle the size identifies the disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, DiskColor)", into = "(u32, DiskColor)")]
pub struct Disk {
    pub size: u32,
    pub color: DiskColor,
}

impl Disk {
    pub fn new(size: u32, color: impl Into<DiskColor>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

impl From<(u32, DiskColor)> for Disk {
    fn from((size, color): (u32, DiskColor)) -> Self {
        Self { size, color }
    }
}

impl From<Disk> for (u32, DiskColor) {
    fn from(disk: Disk) -> Self {
        (disk.size, disk.color)
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.size, self.color)
    }
}

/// Parses the `SIZE:COLOR` shorthand used on the command line.
impl FromStr for Disk {
    type Err = PuzzleError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidDiskSpec {
            spec: spec.to_string(),
        };

        let (size, color) = spec.split_once(':').ok_or_else(invalid)?;
        let size: u32 = size.trim().parse().map_err(|_| invalid())?;
        let color = color.trim();
        if color.is_empty() {
            return Err(invalid());
        }

        Ok(Disk::new(size, color))
    }
}

/// One of the three pegs. Named `A`, `B` and `C` in all external formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    #[serde(rename = "A")]
    Source,
    #[serde(rename = "B")]
    Auxiliary,
    #[serde(rename = "C")]
    Target,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::Source, Peg::Auxiliary, Peg::Target];

    /// Stack slot used by [`crate::pegs::PegState`]
    pub fn index(self) -> usize {
        match self {
            Peg::Source => 0,
            Peg::Auxiliary => 1,
            Peg::Target => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Peg::Source => "A",
            Peg::Auxiliary => "B",
            Peg::Target => "C",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded single-disk move. Indices start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, Peg, Peg)", into = "(usize, Peg, Peg)")]
pub struct Move {
    pub index: usize,
    pub source: Peg,
    pub target: Peg,
}

impl Move {
    pub fn new(index: usize, source: Peg, target: Peg) -> Self {
        Self {
            index,
            source,
            target,
        }
    }
}

impl From<(usize, Peg, Peg)> for Move {
    fn from((index, source, target): (usize, Peg, Peg)) -> Self {
        Self::new(index, source, target)
    }
}

impl From<Move> for (usize, Peg, Peg) {
    fn from(m: Move) -> Self {
        (m.index, m.source, m.target)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.index, self.source, self.target)
    }
}

/// The complete puzzle document.
///
/// `disks` is listed from the bottom of the source peg to the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    #[serde(rename = "diskCount", default, skip_serializing_if = "Option::is_none")]
    pub disk_count: Option<usize>,
    pub disks: Vec<Disk>,
}

impl PuzzleConfig {
    pub fn new(disks: Vec<Disk>) -> Self {
        Self {
            disk_count: None,
            disks,
        }
    }

    /// Number of disks to transfer. Falls back to the length of the disk list.
    pub fn disk_count(&self) -> usize {
        self.disk_count.unwrap_or(self.disks.len())
    }

    /// Check the caller contract: matching count, positive and distinct
    /// sizes, and a disk count the solver is configured to handle.
    pub fn validate(&self, config: &SolverConfig) -> Result<(), PuzzleError> {
        let declared = self.disk_count();
        if declared != self.disks.len() {
            return Err(PuzzleError::DiskCountMismatch {
                declared,
                actual: self.disks.len(),
            });
        }

        if declared > config.max_disks {
            return Err(PuzzleError::TooManyDisks {
                count: declared,
                max: config.max_disks,
            });
        }

        let mut seen = HashSet::with_capacity(self.disks.len());
        for (position, disk) in self.disks.iter().enumerate() {
            if disk.size == 0 {
                return Err(PuzzleError::ZeroSize { position });
            }
            if !seen.insert(disk.size) {
                return Err(PuzzleError::DuplicateSize { size: disk.size });
            }
        }

        Ok(())
    }

    /// Distinct colors used by the puzzle
    pub fn colors(&self) -> Vec<&DiskColor> {
        let mut colors: Vec<&DiskColor> = self.disks.iter().map(|d| &d.color).collect();
        colors.sort();
        colors.dedup();
        colors
    }
}
