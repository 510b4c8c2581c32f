//! Enumerates every walk between two nodes of a weighted undirected graph
//! whose length stays within a tolerance factor of the shortest one.
//!
//! Walks may revisit nodes and edges, so the candidate space is unbounded; the
//! search grows all walks one edge per round and stops extending those that
//! exceed the shortest arrival's length times the tolerance factor.
//!
//! ```
//! use bounded_paths::graph::{Node, UndirectedGraph};
//! use bounded_paths::search::compute_shortest_paths;
//!
//! let graph = UndirectedGraph::from_triples([
//!     (1, 2, 10.0),
//!     (1, 3, 30.0),
//!     (2, 4, 10.0),
//!     (3, 4, 10.0),
//! ])?;
//! let paths = compute_shortest_paths(&graph, Node::new(1), Node::new(4), 1.0)?;
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].to_string(), "[1, 2, 4]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod graph;
pub mod loader;
pub mod path;
pub mod search;

pub use graph::{Edge, GraphError, Node, NodeId, UndirectedGraph};
pub use path::{Path, PathError};
pub use search::{compute_shortest_paths, BoundedSearch, SearchError, SearchOptions};
