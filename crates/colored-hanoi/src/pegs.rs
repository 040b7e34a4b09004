//! Mutable peg state shared by the solver and the replay checker.
//!
//! The three stacks always partition the full disk set. Moves are applied
//! unchecked here; legality is decided by [`crate::rules`].

use smallvec::SmallVec;

use crate::puzzle::{Disk, Peg};

/// Inline capacity per peg. Larger puzzles spill to the heap.
const INLINE_DISKS: usize = 16;

type Stack = SmallVec<[Disk; INLINE_DISKS]>;

/// Three stacks of disks, top of each stack is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegState {
    stacks: [Stack; 3],
}

impl PegState {
    /// All disks on the source peg, listed bottom to top
    pub fn new(disks: &[Disk]) -> Self {
        Self {
            stacks: [disks.iter().cloned().collect(), Stack::new(), Stack::new()],
        }
    }

    /// Arbitrary position, each stack listed bottom to top
    pub fn from_stacks(source: &[Disk], auxiliary: &[Disk], target: &[Disk]) -> Self {
        Self {
            stacks: [
                source.iter().cloned().collect(),
                auxiliary.iter().cloned().collect(),
                target.iter().cloned().collect(),
            ],
        }
    }

    pub fn stack(&self, peg: Peg) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    pub fn top(&self, peg: Peg) -> Option<&Disk> {
        self.stacks[peg.index()].last()
    }

    pub fn height(&self, peg: Peg) -> usize {
        self.stacks[peg.index()].len()
    }

    pub fn is_empty(&self, peg: Peg) -> bool {
        self.stacks[peg.index()].is_empty()
    }

    pub fn disk_count(&self) -> usize {
        self.stacks.iter().map(|s| s.len()).sum()
    }

    /// Pop the top disk of `source` and push it onto `target`.
    ///
    /// Returns the moved disk, or `None` if `source` was empty.
    pub fn transfer(&mut self, source: Peg, target: Peg) -> Option<&Disk> {
        let disk = self.stacks[source.index()].pop()?;
        let stack = &mut self.stacks[target.index()];
        stack.push(disk);
        stack.last()
    }

    /// Every stack strictly decreasing in size from bottom to top
    pub fn is_well_ordered(&self) -> bool {
        self.stacks
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[0].size > pair[1].size))
    }

    /// Sizes of every disk on every peg, sorted. Used to check that moves
    /// neither create nor lose disks.
    pub fn size_multiset(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.stacks.iter().flatten().map(|d| d.size).collect();
        sizes.sort_unstable();
        sizes
    }

    /// True once `peg` holds every disk
    pub fn is_complete_on(&self, peg: Peg) -> bool {
        self.height(peg) == self.disk_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_disks() -> Vec<Disk> {
        vec![Disk::new(3, "red"), Disk::new(2, "blue"), Disk::new(1, "red")]
    }

    #[test]
    fn test_new_places_all_disks_on_source() {
        let state = PegState::new(&three_disks());
        assert_eq!(state.height(Peg::Source), 3);
        assert!(state.is_empty(Peg::Auxiliary));
        assert!(state.is_empty(Peg::Target));
        assert_eq!(state.top(Peg::Source), Some(&Disk::new(1, "red")));
        assert!(state.is_well_ordered());
    }

    #[test]
    fn test_transfer_moves_top_disk() {
        let mut state = PegState::new(&three_disks());
        let moved = state.transfer(Peg::Source, Peg::Target).cloned();

        assert_eq!(moved, Some(Disk::new(1, "red")));
        assert_eq!(state.top(Peg::Source), Some(&Disk::new(2, "blue")));
        assert_eq!(state.stack(Peg::Target), &[Disk::new(1, "red")]);
        assert_eq!(state.disk_count(), 3);
        assert_eq!(state.size_multiset(), vec![1, 2, 3]);
    }

    #[test]
    fn test_transfer_from_empty_peg() {
        let mut state = PegState::new(&three_disks());
        assert!(state.transfer(Peg::Auxiliary, Peg::Target).is_none());
        assert_eq!(state.height(Peg::Source), 3);
    }

    #[test]
    fn test_is_well_ordered_detects_inversion() {
        let state = PegState::new(&[Disk::new(1, "red"), Disk::new(2, "blue")]);
        assert!(!state.is_well_ordered());
    }

    #[test]
    fn test_is_complete_on() {
        let mut state = PegState::new(&[Disk::new(1, "red")]);
        assert!(!state.is_complete_on(Peg::Target));
        state.transfer(Peg::Source, Peg::Target);
        assert!(state.is_complete_on(Peg::Target));
    }
}
