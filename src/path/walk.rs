use std::fmt;
use std::hash::{Hash, Hasher};

use crate::graph::{Edge, Node, UndirectedGraph};

use super::error::PathError;

/// A walk through an [`UndirectedGraph`]: consecutive nodes are adjacent,
/// nodes and edges may repeat.
///
/// A path is immutable; extending it yields a new path. Its length is the sum
/// of the connecting edge lengths, computed once at construction. Two paths
/// are equal when their node sequences are identical.
#[derive(Clone)]
pub struct Path<'g> {
    graph: &'g UndirectedGraph,
    nodes: Vec<Node>,
    length: f64,
}

impl<'g> Path<'g> {
    /// The single-node, zero-length path used to seed a search.
    pub fn seed(graph: &'g UndirectedGraph, start: Node) -> Result<Self, PathError> {
        Self::new(graph, vec![start])
    }

    /// Builds a path, checking every consecutive pair for adjacency.
    pub fn new(graph: &'g UndirectedGraph, nodes: Vec<Node>) -> Result<Self, PathError> {
        let first = *nodes.first().ok_or(PathError::Empty)?;
        if !graph.contains(first) {
            return Err(PathError::UnknownNode(first.id()));
        }

        let mut length = 0.0;
        for pair in nodes.windows(2) {
            length += connecting_length(graph, pair[0], pair[1])?;
        }
        Ok(Self {
            graph,
            nodes,
            length,
        })
    }

    /// Returns a new path with `node` appended.
    pub fn extended_with(&self, node: Node) -> Result<Self, PathError> {
        let step = connecting_length(self.graph, self.end(), node)?;
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Ok(Self {
            graph: self.graph,
            nodes,
            length: self.length + step,
        })
    }

    /// Returns a new path extended at its end through `edge`.
    pub fn append_edge(&self, edge: &Edge) -> Result<Self, PathError> {
        let end = self.end();
        if !edge.touches(end) {
            return Err(not_incident(edge, end));
        }
        self.extended_with(edge.other_end(end))
    }

    /// Returns a new path extended at its start through `edge`.
    pub fn prepend_edge(&self, edge: &Edge) -> Result<Self, PathError> {
        let start = self.start();
        if !edge.touches(start) {
            return Err(not_incident(edge, start));
        }
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.push(edge.other_end(start));
        nodes.extend_from_slice(&self.nodes);
        Self::new(self.graph, nodes)
    }

    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    pub fn end(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of edges traversed.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns whether the walk visits some node more than once.
    pub fn is_cyclic(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.nodes.len());
        !self.nodes.iter().all(|node| seen.insert(*node))
    }

    pub fn graph(&self) -> &'g UndirectedGraph {
        self.graph
    }
}

fn connecting_length(graph: &UndirectedGraph, from: Node, to: Node) -> Result<f64, PathError> {
    if !graph.contains(to) {
        return Err(PathError::UnknownNode(to.id()));
    }
    graph
        .edge_between(from, to)
        .map(Edge::length)
        .ok_or(PathError::Disconnected {
            from: from.id(),
            to: to.id(),
        })
}

fn not_incident(edge: &Edge, endpoint: Node) -> PathError {
    let (a, b) = edge.end_nodes();
    PathError::EdgeNotIncident {
        a: a.id(),
        b: b.id(),
        endpoint: endpoint.id(),
    }
}

impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Path<'_> {}

impl Hash for Path<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
    }
}

impl fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("nodes", &self.nodes)
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "]")
    }
}
