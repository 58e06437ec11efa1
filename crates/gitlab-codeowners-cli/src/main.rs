//! GitLab CODEOWNERS CLI
//!
//! A command-line tool that shows which approvals a change to a set of paths
//! requires under a GitLab CODEOWNERS file.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, LookupResults};

fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.json);

    let exit_code = run(args);

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Run a lookup with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Repository path: {}", config.repo_path.display());
    info!("CODEOWNERS file: {}", config.codeowners_path.display());

    let codeowners = match config.load_codeowners() {
        Ok(file) => file,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };
    info!(
        "Loaded {} section(s) with {} rule(s)",
        codeowners.sections().len(),
        codeowners.rules().count()
    );

    let paths = config.query_paths();
    info!("Looking up {} path(s)", paths.len());

    let results = LookupResults::collect(&codeowners, &paths);
    debug!(
        "{} section(s) require approvals, {} path(s) unowned",
        results.sections.len(),
        results.unowned.len()
    );

    let written = if config.json_output {
        results.write_json(&mut stdout)
    } else {
        results.write_human(&mut stdout, use_colors)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    config.exit_code_for_results(results.has_unowned())
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    let _ = HumanOutput::new(writer, use_colors).write_error(message);
}
