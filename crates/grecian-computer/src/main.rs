//! CLI entry point for the Grecian Computer solver.
//!
//! Usage:
//!   grecian-computer solve [options]
//!   grecian-computer show <POSITIONS>... [options]
//!
//! Options (solve):
//!   --target <n>           Column total to reach (default: 42)
//!   --rotating-layers <n>  Leading layers to rotate (default: 4)
//!   --quiet                Skip the per-candidate trace
//!   --json                 Print a JSON summary at the end
//!   -v, --verbose          Debug logging on stderr
//!
//! Exit status: 0 solved, 1 no solution, 2 error.

use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use grecian_computer::{
    find_alignment, grecian_layers, Candidate, GrecianComputer, Grid, SearchConfig,
    SearchOutcome, SearchReport, TARGET_TOTAL,
};

const EXIT_SOLVED: i32 = 0;
const EXIT_UNSOLVED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "grecian-computer")]
#[command(about = "Brute-force rotation search for the Grecian Computer puzzle")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every rotation until all columns reach the target
    Solve {
        /// Column total every column must reach
        #[arg(long, default_value_t = TARGET_TOTAL)]
        target: u32,

        /// Number of leading layers to rotate
        #[arg(long, default_value = "4")]
        rotating_layers: usize,

        /// Only print the outcome, not every candidate
        #[arg(long)]
        quiet: bool,

        /// Print a JSON summary after the search
        #[arg(long)]
        json: bool,
    },
    /// Show the grid for explicit layer rotations
    Show {
        /// Rotation offset per layer, top layer first
        #[arg(value_name = "POSITIONS", required = true, allow_negative_numbers = true)]
        positions: Vec<i32>,

        /// Column total every column must reach
        #[arg(long, default_value_t = TARGET_TOTAL)]
        target: u32,
    },
}

/// JSON summary of a search run
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    solved: bool,
    search_exhausted: bool,
    candidates_tested: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    offsets: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<GridOutput>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridOutput {
    positions: Vec<i32>,
    rows: Vec<Vec<Option<u32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_totals: Option<Vec<u32>>,
}

impl From<&Grid> for GridOutput {
    fn from(grid: &Grid) -> Self {
        Self {
            positions: grid.positions().to_vec(),
            rows: grid.rows().iter().map(|row| row.to_vec()).collect(),
            column_totals: grid.column_totals().ok().map(|totals| totals.to_vec()),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let quiet = matches!(cli.command, Commands::Solve { quiet: true, .. });
    let level = if cli.verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error installing logger: {}", e);
    }

    let code = match cli.command {
        Commands::Solve {
            target,
            rotating_layers,
            quiet,
            json,
        } => solve(
            &SearchConfig {
                target,
                rotating_layers,
            },
            quiet,
            json,
        ),
        Commands::Show { positions, target } => show(&positions, target),
    };
    process::exit(code);
}

fn solve(config: &SearchConfig, quiet: bool, json: bool) -> i32 {
    let mut computer = GrecianComputer::new(grecian_layers());

    let report = match find_alignment(&mut computer, config, |candidate| {
        if !quiet {
            print_candidate(candidate);
        }
    }) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    match &report.outcome {
        SearchOutcome::Found { grid, .. } => {
            if quiet {
                println!("{}", grid);
                println!("Solved!");
            }
        }
        SearchOutcome::Exhausted => {
            println!(
                "No solution found after {} candidates.",
                report.candidates_tested
            );
        }
    }

    if json {
        match serde_json::to_string_pretty(&format_report(&report)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing summary: {}", e);
                return EXIT_ERROR;
            }
        }
    }

    if report.solved() {
        EXIT_SOLVED
    } else {
        EXIT_UNSOLVED
    }
}

fn print_candidate(candidate: &Candidate) {
    println!("{}", candidate.grid);
    let verified = candidate.verified();
    println!("{}", if verified { "✅" } else { "❌" });
    if verified {
        println!("Solved!");
    } else {
        println!();
    }
}

fn show(positions: &[i32], target: u32) -> i32 {
    let mut computer = GrecianComputer::new(grecian_layers());
    for (layer, &position) in positions.iter().enumerate() {
        if let Err(e) = computer.rotate(layer, position) {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    }

    let grid = computer.compute_grid();
    println!("{}", grid);
    match grid.verify(target) {
        Ok(true) => {
            println!("✅");
            EXIT_SOLVED
        }
        Ok(false) => {
            println!("❌");
            EXIT_UNSOLVED
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn format_report(report: &SearchReport) -> SearchOutput {
    let (offsets, grid) = match &report.outcome {
        SearchOutcome::Found { offsets, grid } => {
            (Some(offsets.to_vec()), Some(GridOutput::from(grid)))
        }
        SearchOutcome::Exhausted => (None, None),
    };
    SearchOutput {
        solved: report.solved(),
        search_exhausted: report.search_exhausted(),
        candidates_tested: report.candidates_tested,
        time_elapsed_ms: report.time_elapsed_ms,
        offsets,
        grid,
    }
}
