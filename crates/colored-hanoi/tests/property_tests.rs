//! Property-based tests for the solver.
//!
//! Every move list the solver emits is replayed from scratch, so the size,
//! color, ordering and disk-conservation checks in `replay` apply to
//! each generated puzzle.

use colored_hanoi::{
    check_move, replay, solve_colored_hanoi, Disk, Move, MoveViolation, Peg, PegState,
    PuzzleConfig, ReplayStatus, SolveResult,
};
use proptest::prelude::*;

const PALETTE: [&str; 4] = ["red", "green", "blue", "yellow"];

/// Disks with sizes `n..=1` listed bottom to top
fn stack_with_colors(colors: &[usize]) -> Vec<Disk> {
    let n = colors.len() as u32;
    colors
        .iter()
        .zip((1..=n).rev())
        .map(|(&c, size)| Disk::new(size, PALETTE[c]))
        .collect()
}

prop_compose! {
    fn arbitrary_stack()(colors in prop::collection::vec(0..PALETTE.len(), 0..=9)) -> Vec<Disk> {
        stack_with_colors(&colors)
    }
}

prop_compose! {
    /// Every disk has its own color, so the color rule never fires
    fn rainbow_stack()(n in 0u32..=10) -> Vec<Disk> {
        (1..=n).rev().map(|size| Disk::new(size, format!("color-{size}"))).collect()
    }
}

proptest! {
    #[test]
    fn distinct_colors_take_classical_move_count(disks in rainbow_stack()) {
        let n = disks.len();
        let result = solve_colored_hanoi(n, &disks);
        prop_assert!(result.is_feasible());
        prop_assert_eq!(result.move_count(), (1usize << n) - 1);
    }

    #[test]
    fn alternating_two_colors_always_solvable(n in 0usize..=10) {
        let colors: Vec<usize> = (0..n).map(|i| i % 2).collect();
        let disks = stack_with_colors(&colors);
        let result = solve_colored_hanoi(n, &disks);
        prop_assert_eq!(result.move_count(), (1usize << n) - 1);
    }

    #[test]
    fn uniform_color_is_infeasible_beyond_one_disk(n in 2usize..=8, color in 0..PALETTE.len()) {
        let disks = stack_with_colors(&vec![color; n]);
        let result = solve_colored_hanoi(n, &disks);
        prop_assert!(!result.is_feasible());
        prop_assert!(result.moves().is_none());
        let is_color_rule = matches!(
            result.infeasibility().map(|r| &r.violation),
            Some(MoveViolation::ColorRule { .. })
        );
        prop_assert!(is_color_rule);
    }

    #[test]
    fn solved_moves_replay_cleanly(disks in arbitrary_stack()) {
        let puzzle = PuzzleConfig::new(disks.clone());
        if let SolveResult::Solved(moves) = solve_colored_hanoi(disks.len(), &disks) {
            let result = replay(&puzzle, &moves);
            prop_assert_eq!(result.status, ReplayStatus::Solved);
            prop_assert_eq!(result.metrics.moves_applied, moves.len());
        }
    }

    #[test]
    fn every_emitted_move_obeys_size_and_color(disks in arbitrary_stack()) {
        if let SolveResult::Solved(moves) = solve_colored_hanoi(disks.len(), &disks) {
            let mut state = PegState::new(&disks);
            for (i, m) in moves.iter().enumerate() {
                prop_assert_eq!(m.index, i + 1);

                let moving = state.top(m.source).cloned();
                let resting = state.top(m.target).cloned();
                prop_assert!(moving.is_some());
                if let (Some(moving), Some(resting)) = (moving, resting) {
                    prop_assert!(moving.size <= resting.size);
                    prop_assert_ne!(moving.color, resting.color);
                }

                prop_assert!(check_move(&state, m.source, m.target).is_ok());
                state.transfer(m.source, m.target);
                prop_assert!(state.is_well_ordered());
                prop_assert_eq!(state.disk_count(), disks.len());
            }
            prop_assert!(state.is_complete_on(Peg::Target));
        }
    }

    #[test]
    fn solving_is_deterministic(disks in arbitrary_stack()) {
        let first = solve_colored_hanoi(disks.len(), &disks);
        let second = solve_colored_hanoi(disks.len(), &disks);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn infeasible_serialises_as_sentinel(disks in arbitrary_stack()) {
        let result = solve_colored_hanoi(disks.len(), &disks);
        let json = serde_json::to_value(&result).unwrap();
        if result.is_feasible() {
            prop_assert!(json.is_array());
        } else {
            prop_assert_eq!(json, serde_json::json!(-1));
        }
    }
}

#[test]
fn zero_disks_is_success_not_sentinel() {
    let result = solve_colored_hanoi(0, &[]);
    assert_eq!(result, SolveResult::Solved(Vec::new()));
    assert_eq!(serde_json::to_value(&result).unwrap(), serde_json::json!([]));
}

#[test]
fn red_blue_pair_solves_in_three_moves() {
    let disks = [Disk::new(2, "blue"), Disk::new(1, "red")];
    let result = solve_colored_hanoi(2, &disks);
    assert_eq!(
        result,
        SolveResult::Solved(vec![
            Move::new(1, Peg::Source, Peg::Auxiliary),
            Move::new(2, Peg::Source, Peg::Target),
            Move::new(3, Peg::Auxiliary, Peg::Target),
        ])
    );
    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"[[1,"A","B"],[2,"A","C"],[3,"B","C"]]"#
    );
}

#[test]
fn red_red_pair_is_infeasible() {
    for disks in [
        [Disk::new(1, "red"), Disk::new(2, "red")],
        [Disk::new(2, "red"), Disk::new(1, "red")],
    ] {
        let result = solve_colored_hanoi(2, &disks);
        assert!(!result.is_feasible());
        assert_eq!(serde_json::to_string(&result).unwrap(), "-1");
    }
}

#[test]
fn puzzle_document_round_trip_through_solver() {
    let puzzle: PuzzleConfig = serde_json::from_str(
        r#"{"diskCount": 3, "disks": [[3, "red"], [2, "blue"], [1, "red"]]}"#,
    )
    .unwrap();
    let result = colored_hanoi::solve_puzzle(&puzzle);
    assert_eq!(result.move_count(), 7);
    assert!(colored_hanoi::verify_solution(&puzzle, result.moves().unwrap()));
}
