//! Command-line interface for the percolation simulator.
//!
//! Offers a `run` command that executes one simulation to the percolation
//! point, either as fast as possible or paced by a minimum interval between
//! steps, and renders a short summary to stdout.

mod commands;
mod pacer;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, StrategyChoice, render_summary, run_cli,
};
