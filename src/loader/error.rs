use crate::graph::GraphError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph loading operations.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a line of the edge list cannot be parsed.
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Error when the parsed edges do not form a valid graph.
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    /// Error when the input holds no edges at all.
    #[error("No edges found in '{0}'")]
    EmptyGraph(String),
}
