//! CLI entry point for the colored Hanoi solver.
//!
//! Usage:
//!   colored-hanoi solve <puzzle.json> [options]
//!   colored-hanoi solve --stdin [options]
//!   colored-hanoi solve --disk 2:blue --disk 1:red [options]
//!   colored-hanoi verify <puzzle.json> <moves.json>
//!
//! Options:
//!   --max-disks <n>         Largest puzzle accepted (default: 24)
//!   --format <json|text>    Output format for `solve` (default: json)
//!   -v, --verbose           Debug logging on stderr
//!
//! Exit codes: 0 solved / valid, 1 infeasible / invalid, 2 bad input.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use colored_hanoi::logging::init_logger;
use colored_hanoi::{
    replay, solve_puzzle, Disk, InputError, Move, PuzzleConfig, ReplayResult, ReplayStatus,
    SolveResult, SolverConfig,
};

const EXIT_FAILED: u8 = 1;
const EXIT_BAD_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "colored-hanoi")]
#[command(about = "Tower of Hanoi solver with a disk color constraint")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle from peg A to peg C
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Disk given inline as SIZE:COLOR, bottom first. Repeatable.
        #[arg(long = "disk", value_name = "SIZE:COLOR")]
        disks: Vec<Disk>,

        /// Largest number of disks accepted
        #[arg(long, default_value = "24")]
        max_disks: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Replay a move list against a puzzle and check every move
    Verify {
        /// Path to puzzle JSON file
        #[arg(value_name = "PUZZLE")]
        puzzle: PathBuf,

        /// Path to moves JSON: an array of [index, from, to] or `solve` output
        #[arg(value_name = "MOVES")]
        moves: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Output format for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput<'a> {
    feasible: bool,
    moves: &'a SolveResult,
    move_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    time_elapsed_ms: u64,
}

/// Output format for a replay
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOutput {
    valid: bool,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    moves_applied: usize,
    max_stack_height: usize,
    moves_onto_empty: usize,
}

/// Accepted shapes for a moves file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MovesDocument {
    List(Vec<Move>),
    Report { moves: Vec<Move> },
}

impl MovesDocument {
    fn into_moves(self) -> Vec<Move> {
        match self {
            MovesDocument::List(moves) | MovesDocument::Report { moves } => moves,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_BAD_INPUT)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode, InputError> {
    match command {
        Commands::Solve {
            file,
            stdin,
            disks,
            max_disks,
            format,
        } => {
            let puzzle = if !disks.is_empty() {
                PuzzleConfig::new(disks)
            } else {
                read_puzzle(file.as_deref(), stdin)?
            };

            let config = SolverConfig { max_disks };
            puzzle.validate(&config)?;
            debug!(
                "Puzzle has {} disks in {} colors",
                puzzle.disk_count(),
                puzzle.colors().len()
            );

            let start_time = Instant::now();
            let result = solve_puzzle(&puzzle);
            let time_elapsed_ms = start_time.elapsed().as_millis() as u64;

            if let Some(reason) = result.infeasibility() {
                info!("No solution: {}", reason.reason());
            }

            match format {
                OutputFormat::Json => {
                    let output = format_solve(&result, time_elapsed_ms);
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => match result.moves() {
                    Some(moves) => moves.iter().for_each(|m| println!("{m}")),
                    None => println!("-1"),
                },
            }

            Ok(exit_code(result.is_feasible()))
        }

        Commands::Verify { puzzle, moves } => {
            let puzzle: PuzzleConfig = serde_json::from_str(&fs::read_to_string(&puzzle)?)?;
            let moves: MovesDocument = serde_json::from_str(&fs::read_to_string(&moves)?)?;
            let moves = moves.into_moves();

            let result = replay(&puzzle, &moves);
            let output = format_replay(&result);
            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(exit_code(result.solved))
        }
    }
}

fn read_puzzle(file: Option<&Path>, stdin: bool) -> Result<PuzzleConfig, InputError> {
    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(path)?
    } else {
        return Err(InputError::Missing);
    };

    Ok(serde_json::from_str(&json_content)?)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILED)
    }
}

fn format_solve(result: &SolveResult, time_elapsed_ms: u64) -> SolveOutput<'_> {
    SolveOutput {
        feasible: result.is_feasible(),
        moves: result,
        move_count: result.move_count(),
        reason: result.infeasibility().map(|r| r.reason()),
        time_elapsed_ms,
    }
}

fn format_replay(result: &ReplayResult) -> VerifyOutput {
    let (status, reason) = match &result.status {
        ReplayStatus::Solved => ("solved", None),
        ReplayStatus::Incomplete => ("incomplete", Some("not every disk is on peg C".to_string())),
        ReplayStatus::OutOfOrder { expected, found } => (
            "out_of_order",
            Some(format!("expected move {expected}, found {found}")),
        ),
        ReplayStatus::IllegalMove { index, violation } => (
            "illegal_move",
            Some(format!("move {index}: {violation}")),
        ),
        ReplayStatus::InvariantBroken { index } => (
            "invariant_broken",
            Some(format!("stack order broken after move {index}")),
        ),
    };

    VerifyOutput {
        valid: result.solved,
        status,
        reason,
        moves_applied: result.metrics.moves_applied,
        max_stack_height: result.metrics.max_stack_height,
        moves_onto_empty: result.metrics.moves_onto_empty,
    }
}
