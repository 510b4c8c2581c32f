//! Main application orchestrator.
//!
//! 1. Initializes logging.
//! 2. Loads the graph from the edge-list file (or the demo graph).
//! 3. Runs the bounded search between the requested nodes.
//! 4. Writes the path report to the output file or stdout.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::graph::Node;

const LOG_FILE: &str = "bounded-paths.log";

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the graph cannot be loaded, the search request is
/// invalid or hits a configured ceiling, or the report cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(LOG_FILE) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                LOG_FILE, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", LOG_FILE);
        }
    }

    let result = run_search(&cli, quiet_mode);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of {}: {}", LOG_FILE, e);
        }
    }
    result
}

fn run_search(cli: &Cli, quiet_mode: bool) -> Result<(), AppError> {
    let graph_file = if cli.demo { None } else { cli.graph_file.as_deref() };
    let graph = processing::load_graph(graph_file, quiet_mode)?;

    let (report, found) = processing::search_and_report(
        &graph,
        Node::new(cli.start),
        Node::new(cli.end),
        cli.tolerance,
        cli.search_options(),
        quiet_mode,
    )?;

    match &cli.output {
        Some(output_path) => {
            file_handler::write_content_to_file(output_path, &report)?;
            verbose_println!(
                quiet_mode,
                "\n[INFO] Report with {} path(s) written to {}",
                found,
                output_path.display()
            );
            if quiet_mode {
                println!("Done.");
            }
        }
        None => print!("{}", report),
    }
    Ok(())
}
