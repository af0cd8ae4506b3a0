//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and environment settings
//! - installs logging
//! - dispatches to the TUI or the one-shot CLI commands

use clap::Parser;
use tracing::debug;

use crate::cli::{Command, ComputeArgs, PlotArgs, TuiArgs};
use crate::config::Settings;
use crate::domain::CurveKind;
use crate::error::AppError;
use crate::logging::LogTarget;

pub mod pipeline;

/// Entry point for the `vmatt` binary.
pub fn run() -> Result<(), AppError> {
    // We want `vmatt` and `vmatt --name Ada` to behave like `vmatt tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    let settings = Settings::from_env();

    let target = match cli.command {
        Command::Tui(_) => LogTarget::FileOnly,
        Command::Compute(_) | Command::Plot(_) => LogTarget::Stderr,
    };
    crate::logging::init(&settings, target)?;
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Tui(args) => handle_tui(args, &settings),
        Command::Compute(args) => handle_compute(args, &settings),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_tui(args: TuiArgs, settings: &Settings) -> Result<(), AppError> {
    let name = settings.resolve_name(args.name.as_deref()).unwrap_or_default();
    crate::tui::run(name)
}

fn handle_compute(args: ComputeArgs, settings: &Settings) -> Result<(), AppError> {
    let name = settings.resolve_name(args.name.as_deref()).unwrap_or_default();
    let run = pipeline::run_response(&name, args.mass, args.damping, args.spring)?;

    // Print terminal output.
    println!("{}", crate::report::format_run_summary(&run));

    if args.table > 0 {
        println!("{}", crate::report::format_response_table(&run.response, args.table));
    }

    if !args.no_plot {
        let plot = crate::plot::render_response_plot(&run.response, CurveKind::Magnification, args.width, args.height);
        println!("{plot}");
        if args.phase {
            let plot = crate::plot::render_response_plot(&run.response, CurveKind::Phase, args.width, args.height);
            println!("{plot}");
        }
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::export::write_response_csv(path, &run.response)?;
    }
    if let Some(path) = &args.export_response {
        crate::io::response_file::write_response_json(path, &run)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::response_file::read_response_json(&args.response)?;
    let kind = if args.phase {
        CurveKind::Phase
    } else {
        CurveKind::Magnification
    };

    let plot = crate::plot::render_response_file_plot(&file, kind, args.width, args.height);

    println!("{plot}");
    Ok(())
}

/// Rewrite argv so `vmatt` defaults to `vmatt tui`.
///
/// Rules:
/// - `vmatt`                     -> `vmatt tui`
/// - `vmatt --name Ada ...`      -> `vmatt tui --name Ada ...`
/// - `vmatt --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "compute" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(argv(&["vmatt"])), argv(&["vmatt", "tui"]));
    }

    #[test]
    fn leading_flags_are_tui_flags() {
        assert_eq!(
            rewrite_args(argv(&["vmatt", "--name", "Ada"])),
            argv(&["vmatt", "tui", "--name", "Ada"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        let compute = argv(&["vmatt", "compute", "-m", "1"]);
        assert_eq!(rewrite_args(compute.clone()), compute);
        assert_eq!(rewrite_args(argv(&["vmatt", "--help"])), argv(&["vmatt", "--help"]));
    }
}
