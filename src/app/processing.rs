//! Loads the graph and runs the bounded search for the application.

use super::error::AppError;
use super::file_handler;
use super::verbose_println;
use crate::graph::{Node, UndirectedGraph};
use crate::loader;
use crate::path::write_paths_report;
use crate::search::{BoundedSearch, SearchOptions, SearchStats};
use std::path::Path;

/// Loads the graph from `graph_file`, or the demo graph when none is given.
pub fn load_graph(graph_file: Option<&Path>, quiet_mode: bool) -> Result<UndirectedGraph, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading graph...");
    let graph = match graph_file {
        Some(path) => {
            let path_str = file_handler::validate_graph_file(path, quiet_mode)?;
            loader::load_graph_from_file(&path_str)?
        }
        None => {
            verbose_println!(quiet_mode, "   => Using built-in demo graph.");
            loader::demo_graph()?
        }
    };
    verbose_println!(
        quiet_mode,
        "   => {} node(s), {} edge(s).",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Runs the search between `start` and `end` and renders the path report.
///
/// # Returns
/// The report text and the number of paths found.
pub fn search_and_report(
    graph: &UndirectedGraph,
    start: Node,
    end: Node,
    tolerance_factor: f64,
    options: SearchOptions,
    quiet_mode: bool,
) -> Result<(String, usize), AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 2] Searching paths {} -> {} with tolerance factor {}...",
        start,
        end,
        tolerance_factor
    );
    let outcome = BoundedSearch::new(graph, start, end, tolerance_factor)?
        .with_options(options)
        .run()?;
    print_search_summary(&outcome.stats, outcome.paths.len(), quiet_mode);

    verbose_println!(quiet_mode, "[STEP 3] Rendering report...");
    let mut report = Vec::new();
    write_paths_report(&outcome.paths, &mut report)?;
    let report = String::from_utf8_lossy(&report).into_owned();
    Ok((report, outcome.paths.len()))
}

fn print_search_summary(stats: &SearchStats, found: usize, quiet_mode: bool) {
    if quiet_mode {
        return;
    }

    verbose_println!(quiet_mode, "   Search Summary:");
    verbose_println!(quiet_mode, "     Rounds: {}", stats.rounds);
    verbose_println!(quiet_mode, "     Paths expanded: {}", stats.expanded);
    verbose_println!(quiet_mode, "     Paths pruned: {}", stats.pruned);
    verbose_println!(quiet_mode, "     Peak frontier: {}", stats.peak_frontier);
    match stats.bound {
        Some(bound) => verbose_println!(quiet_mode, "     Length bound: {}", bound),
        None => verbose_println!(quiet_mode, "     Length bound: none (end not reached)"),
    }
    verbose_println!(quiet_mode, "   => Found {} path(s).", found);
}
