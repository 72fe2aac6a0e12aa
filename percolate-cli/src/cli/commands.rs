//! Command implementations and argument parsing for the percolate CLI.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use percolate_core::{Percolation, PercolationBuilder, PercolationError, RunOutcome, Strategy};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::pacer::Pacer;

const DEFAULT_SIDE: usize = 20;
const DEFAULT_STEP_INTERVAL_MS: u64 = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "percolate", about = "Simulate site percolation on an N×N grid.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Open sites in seeded random order until the grid percolates.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Grid side length N.
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    pub side: usize,

    /// Seed for the site visitation shuffle; equal seeds reproduce runs.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Disjoint-set strategy backing the connectivity engine.
    #[arg(long, value_enum, default_value_t = StrategyChoice::WeightedCompressed)]
    pub strategy: StrategyChoice,

    /// Pace the run instead of stepping as fast as possible.
    #[arg(long)]
    pub paced: bool,

    /// Minimum interval between paced steps, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL_MS, requires = "paced")]
    pub step_interval_ms: u64,
}

/// Engine strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Flat labels: constant find, linear union.
    QuickFind,
    /// Unbalanced parent forest.
    QuickUnion,
    /// Size-weighted parent forest.
    Weighted,
    /// Size-weighted forest with path compression (default).
    WeightedCompressed,
}

impl StrategyChoice {
    /// Human-readable name used in summaries and span fields.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::QuickFind => "quick-find",
            Self::QuickUnion => "quick-union",
            Self::Weighted => "weighted",
            Self::WeightedCompressed => "weighted-compressed",
        }
    }
}

impl From<StrategyChoice> for Strategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::QuickFind => Self::QuickFind,
            StrategyChoice::QuickUnion => Self::QuickUnion,
            StrategyChoice::Weighted => Self::Weighted,
            StrategyChoice::WeightedCompressed => Self::WeightedCompressed,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core simulation failed.
    #[error(transparent)]
    Core(#[from] PercolationError),
}

/// Summarises the outcome of one simulated run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Grid side length.
    pub side: usize,
    /// Shuffle seed the run used.
    pub seed: u64,
    /// Label of the engine strategy.
    pub strategy: &'static str,
    /// Steps taken and percolation flag.
    pub outcome: RunOutcome,
    /// Sites open when the run stopped.
    pub opened: usize,
    /// Total sites in the grid.
    pub total: usize,
    /// Wall-clock duration of the stepping loop.
    pub elapsed: Duration,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the simulation fails.
///
/// # Examples
/// ```
/// use percolate_cli::cli::{Cli, run_cli};
/// use clap::Parser;
///
/// let cli = Cli::parse_from(["percolate", "run", "--side", "8", "--seed", "7"]);
/// let summary = run_cli(cli)?;
/// assert!(summary.outcome.percolated);
/// # Ok::<(), percolate_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        side = command.side,
        seed = command.seed,
        strategy = command.strategy.label(),
        paced = command.paced,
    ),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let mut sim = PercolationBuilder::new()
        .with_side(command.side)
        .with_seed(command.seed)
        .with_strategy(command.strategy.into())
        .build()?;

    let started = Instant::now();
    let outcome = if command.paced {
        run_paced(&mut sim, Duration::from_millis(command.step_interval_ms))?
    } else {
        sim.run_to_completion()?
    };
    let elapsed = started.elapsed();

    info!(
        opened = sim.opened_count(),
        total = sim.total_sites(),
        percolated = outcome.percolated,
        elapsed_ms = elapsed.as_millis() as u64,
        "run completed"
    );
    Ok(ExecutionSummary {
        side: sim.side(),
        seed: command.seed,
        strategy: command.strategy.label(),
        outcome,
        opened: sim.opened_count(),
        total: sim.total_sites(),
        elapsed,
    })
}

/// Steps the simulation under the pacing clock, one site per interval.
fn run_paced(sim: &mut Percolation, interval: Duration) -> Result<RunOutcome, CliError> {
    let mut pacer = Pacer::new(interval);
    let start = sim.opened_count();
    while !sim.is_percolated() && sim.opened_count() < sim.total_sites() {
        pacer.pause();
        sim.step()?;
    }
    Ok(RunOutcome {
        steps_taken: sim.opened_count() - start,
        percolated: sim.is_percolated(),
    })
}

/// Renders `summary` to the given writer.
///
/// # Errors
/// Returns any [`io::Error`] raised by the writer.
pub fn render_summary<W: Write>(summary: &ExecutionSummary, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{side}×{side} grid, seed {seed}, {strategy} engine",
        side = summary.side,
        seed = summary.seed,
        strategy = summary.strategy,
    )?;
    if summary.outcome.percolated {
        let percent = summary.opened as f64 / summary.total as f64 * 100.0;
        writeln!(
            writer,
            "percolated after {opened}/{total} sites ({percent:.1}%)",
            opened = summary.opened,
            total = summary.total,
        )?;
    } else {
        writeln!(
            writer,
            "did not percolate after opening all {total} sites",
            total = summary.total,
        )?;
    }
    writeln!(writer, "elapsed: {:.2?}", summary.elapsed)
}
