use crate::graph::NodeId;
use thiserror::Error;

// Error type for building and extending paths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Error when a path is built from an empty node list.
    #[error("A path needs at least one node.")]
    Empty,

    /// Error when a node of the path is not part of the graph.
    #[error("Node {0} is not part of the graph.")]
    UnknownNode(NodeId),

    /// Error when two consecutive nodes of a path are not adjacent.
    #[error("Path edges must be a chain of adjacent nodes: {from} and {to} are not connected.")]
    Disconnected { from: NodeId, to: NodeId },

    /// Error when appending or prepending an edge that does not touch the path's end.
    #[error("Edge ({a}, {b}) is not adjacent to path endpoint {endpoint}.")]
    EdgeNotIncident { a: NodeId, b: NodeId, endpoint: NodeId },
}
