// frontier.rs
// ──────────────────────────────────────────────────────────────────────────────
// Round-based enumeration of every start -> end walk whose length stays within
// `tolerance_factor` times the shortest one found.
//
// Each round extends every frontier path by one edge in every direction,
// harvests the extensions that end on the target node, recomputes the length
// bound from the shortest arrival and drops every path above it. Arrivals stay
// in the frontier: a walk that passes through the target may come back to it.
// ──────────────────────────────────────────────────────────────────────────────
use rayon::prelude::*;

use crate::graph::{Node, UndirectedGraph};
use crate::path::{Path, PathError};

use super::error::SearchError;

/// Resource ceilings and execution knobs for a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of expansion rounds before the search gives up.
    pub max_rounds: Option<usize>,
    /// Maximum number of paths the frontier may hold after an expansion.
    pub max_frontier: Option<usize>,
    /// Expand frontier paths on the rayon thread pool.
    pub parallel: bool,
}

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub rounds: usize,
    /// Paths created by expansion, over all rounds.
    pub expanded: usize,
    /// Frontier paths dropped for exceeding the bound.
    pub pruned: usize,
    pub peak_frontier: usize,
    /// Final length bound; `None` when no path arrived.
    pub bound: Option<f64>,
}

/// Result of [`BoundedSearch::run`].
#[derive(Clone, Debug)]
pub struct SearchOutcome<'g> {
    /// Arrived paths, ascending by length.
    pub paths: Vec<Path<'g>>,
    pub stats: SearchStats,
}

/// A validated search request over one graph.
#[derive(Clone, Debug)]
pub struct BoundedSearch<'g> {
    graph: &'g UndirectedGraph,
    start: Node,
    end: Node,
    tolerance_factor: f64,
    options: SearchOptions,
}

impl<'g> BoundedSearch<'g> {
    /// Validates the request. The tolerance factor is checked before the nodes.
    pub fn new(
        graph: &'g UndirectedGraph,
        start: Node,
        end: Node,
        tolerance_factor: f64,
    ) -> Result<Self, SearchError> {
        if !tolerance_factor.is_finite() || tolerance_factor < 1.0 {
            return Err(SearchError::InvalidTolerance(tolerance_factor));
        }
        for node in [start, end] {
            if !graph.contains(node) {
                return Err(SearchError::UnknownNode(node.id()));
            }
        }
        Ok(Self {
            graph,
            start,
            end,
            tolerance_factor,
            options: SearchOptions::default(),
        })
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the search to completion.
    ///
    /// Returns every distinct walk from start to end whose length is at most
    /// the shortest walk's length times the tolerance factor, sorted by
    /// length. Equal-length walks keep their discovery order. The seed path is
    /// never an arrival, so `start == end` yields only walks of positive
    /// length. An unreachable end node yields an empty result.
    ///
    /// # Errors
    /// Fails with `RoundLimitExceeded` or `FrontierLimitExceeded` when a
    /// configured ceiling is hit; no partial result is returned.
    pub fn run(&self) -> Result<SearchOutcome<'g>, SearchError> {
        let mut stats = SearchStats::default();

        // Without any arrival the bound never forms and cyclic walks would
        // keep the frontier alive forever.
        if !self.graph.is_reachable(self.start, self.end) {
            return Ok(SearchOutcome {
                paths: Vec::new(),
                stats,
            });
        }

        let mut frontier = vec![Path::seed(self.graph, self.start)?];
        let mut arrived: Vec<Path<'g>> = Vec::new();

        while !frontier.is_empty() {
            if let Some(limit) = self.options.max_rounds {
                if stats.rounds >= limit {
                    return Err(SearchError::RoundLimitExceeded { limit });
                }
            }

            frontier = self.expand(&frontier)?;
            stats.rounds += 1;
            stats.expanded += frontier.len();
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());

            if let Some(limit) = self.options.max_frontier {
                if frontier.len() > limit {
                    return Err(SearchError::FrontierLimitExceeded {
                        limit,
                        size: frontier.len(),
                    });
                }
            }

            arrived.extend(frontier.iter().filter(|path| path.end() == self.end).cloned());

            if let Some(bound) = self.length_bound(&arrived) {
                let before = frontier.len();
                frontier.retain(|path| path.length() <= bound);
                arrived.retain(|path| path.length() <= bound);
                stats.pruned += before - frontier.len();
                stats.bound = Some(bound);
            }
        }

        arrived.sort_by(|a, b| a.length().total_cmp(&b.length()));
        Ok(SearchOutcome {
            paths: arrived,
            stats,
        })
    }

    /// Shortest arrival times the tolerance factor, once anything arrived.
    fn length_bound(&self, arrived: &[Path<'g>]) -> Option<f64> {
        arrived
            .iter()
            .map(Path::length)
            .min_by(f64::total_cmp)
            .map(|shortest| shortest * self.tolerance_factor)
    }

    /// Extends every frontier path by one edge in every direction. The output
    /// keeps frontier order, then neighbor order, in both modes.
    fn expand(&self, frontier: &[Path<'g>]) -> Result<Vec<Path<'g>>, PathError> {
        let per_path: Vec<Vec<Path<'g>>> = if self.options.parallel {
            frontier
                .par_iter()
                .map(|path| self.extensions_of(path))
                .collect::<Result<_, _>>()?
        } else {
            frontier
                .iter()
                .map(|path| self.extensions_of(path))
                .collect::<Result<_, _>>()?
        };
        Ok(per_path.into_iter().flatten().collect())
    }

    fn extensions_of(&self, path: &Path<'g>) -> Result<Vec<Path<'g>>, PathError> {
        self.graph
            .neighbors(path.end())
            .into_iter()
            .map(|next| path.extended_with(next))
            .collect()
    }
}

/// Finds all walks from `start` to `end` no longer than the shortest one
/// times `tolerance_factor`, in ascending order of length.
///
/// # Arguments
/// * `graph` - The undirected graph to search.
/// * `start` - The start node of the paths.
/// * `end` - The end node of the paths.
/// * `tolerance_factor` - Maximum allowed length ratio to the shortest path (>= 1.0).
///
/// # Errors
/// `SearchError::InvalidTolerance` for a factor below 1.0 (or non-finite),
/// `SearchError::UnknownNode` when `start` or `end` is not in the graph.
pub fn compute_shortest_paths<'g>(
    graph: &'g UndirectedGraph,
    start: Node,
    end: Node,
    tolerance_factor: f64,
) -> Result<Vec<Path<'g>>, SearchError> {
    BoundedSearch::new(graph, start, end, tolerance_factor)?
        .run()
        .map(|outcome| outcome.paths)
}
