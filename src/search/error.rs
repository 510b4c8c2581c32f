use crate::graph::NodeId;
use crate::path::PathError;
use thiserror::Error;

// Error type for the bounded path search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Error when the tolerance factor is below 1.0, NaN or infinite.
    #[error("Invalid length tolerance factor {0}: must be a finite number >= 1.0")]
    InvalidTolerance(f64),

    /// Error when the start or end node is not part of the graph.
    #[error("Node {0} is not part of the graph")]
    UnknownNode(NodeId),

    /// Error when the search needs more rounds than allowed.
    #[error("Search did not finish within {limit} rounds")]
    RoundLimitExceeded { limit: usize },

    /// Error when the frontier grows past the configured ceiling.
    #[error("Frontier grew to {size} paths, exceeding the limit of {limit}")]
    FrontierLimitExceeded { limit: usize, size: usize },

    /// A frontier extension went through two non-adjacent nodes.
    #[error("Internal path inconsistency: {0}")]
    Path(#[from] PathError),
}
