use super::NodeId;
use thiserror::Error;

// Error type for edge and graph construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Error when an edge is given a zero or negative length.
    #[error("Edge connecting {a} and {b}: Non-positive length {length} not supported.")]
    NonPositiveLength { a: NodeId, b: NodeId, length: f64 },

    /// Error when an edge length is NaN or infinite.
    #[error("Edge connecting {a} and {b}: Non-finite length {length} not supported.")]
    NonFiniteLength { a: NodeId, b: NodeId, length: f64 },

    /// Error when a second edge is added between an already connected pair.
    #[error("Duplicate edge between {a} and {b} is not supported.")]
    DuplicateEdge { a: NodeId, b: NodeId },
}
