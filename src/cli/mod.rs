//! Command-line parsing for the vibration teaching tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the response math.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "vmatt",
    version,
    about = "Vibration Magnification and Angle Teaching Tool"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (default).
    Tui(TuiArgs),
    /// Compute the response once, print the resonance summary and plots, optionally export.
    Compute(ComputeArgs),
    /// Plot a previously exported response JSON.
    Plot(PlotArgs),
}

/// Options for the interactive TUI.
#[derive(Debug, Parser, Clone, Default)]
pub struct TuiArgs {
    /// Pre-fill the name field (falls back to `VMATT_NAME`).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options for a single non-interactive computation.
#[derive(Debug, Parser, Clone)]
pub struct ComputeArgs {
    /// Name the result is addressed to (falls back to `VMATT_NAME`).
    #[arg(long)]
    pub name: Option<String>,

    /// Mass m [kg].
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub mass: f64,

    /// Damping constant c [N·s/m].
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub damping: f64,

    /// Spring constant k [N/m].
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub spring: f64,

    /// Also plot the phase angle curve.
    #[arg(long)]
    pub phase: bool,

    /// Disable the terminal plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Print every N-th sweep sample as a table (0 disables the table).
    #[arg(long, default_value_t = 0)]
    pub table: usize,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the sampled curves to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full response (inputs + resonance + grid) to JSON.
    #[arg(long = "export-response")]
    pub export_response: Option<PathBuf>,
}

/// Options for plotting a saved response.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Response JSON file produced by `vmatt compute --export-response`.
    #[arg(long, value_name = "JSON")]
    pub response: PathBuf,

    /// Plot the phase angle instead of the magnification factor.
    #[arg(long)]
    pub phase: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_parses_short_flags() {
        let cli = Cli::parse_from(["vmatt", "compute", "-m", "1", "-c", "0.2", "-k", "1"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.mass, 1.0);
        assert_eq!(args.damping, 0.2);
        assert_eq!(args.spring, 1.0);
        assert!(!args.phase);
        assert_eq!(args.width, 100);
    }

    #[test]
    fn compute_accepts_negative_values_for_validation_downstream() {
        let cli = Cli::parse_from(["vmatt", "compute", "-m", "-1", "-c", "1", "-k", "1"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.mass, -1.0);
    }
}
