// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Weighted undirected graph used by the bounded path search.
//
// Nodes are identified by an integer id. The graph stores every node once
// (in order of first appearance among the edges) and every edge once; the
// adjacency index maps a node slot to the slots of its incident edges. All of
// it is built in a single pass at construction and is read-only afterwards.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use super::error::GraphError;

/// Represents a unique identifier for a node in the graph.
pub type NodeId = i64;

/// A vertex of the graph. Equality and hashing are by id alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    id: NodeId,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl From<NodeId> for Node {
    fn from(id: NodeId) -> Self {
        Node::new(id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// An undirected edge with a strictly positive, finite length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    end_nodes: (Node, Node),
    length: f64,
}

impl Edge {
    /// Creates a new edge, rejecting lengths that are not strictly positive
    /// or not finite.
    pub fn new(a: NodeId, b: NodeId, length: f64) -> Result<Self, GraphError> {
        let (a, b) = (Node::new(a), Node::new(b));
        if length.is_nan() || length.is_infinite() {
            return Err(GraphError::NonFiniteLength {
                a: a.id,
                b: b.id,
                length,
            });
        }
        if length <= 0.0 {
            return Err(GraphError::NonPositiveLength {
                a: a.id,
                b: b.id,
                length,
            });
        }
        Ok(Self {
            end_nodes: (a, b),
            length,
        })
    }

    pub fn end_nodes(&self) -> (Node, Node) {
        self.end_nodes
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the other end of the edge, given one of the end nodes.
    /// For a node that is not an endpoint this returns the first endpoint.
    pub fn other_end(&self, start: Node) -> Node {
        if self.end_nodes.1 == start {
            self.end_nodes.0
        } else {
            self.end_nodes.1
        }
    }

    /// Returns whether `node` is one of the endpoints.
    pub fn touches(&self, node: Node) -> bool {
        self.end_nodes.0 == node || self.end_nodes.1 == node
    }

    /// Returns whether the edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: Node, b: Node) -> bool {
        (self.end_nodes.0 == a && self.end_nodes.1 == b)
            || (self.end_nodes.0 == b && self.end_nodes.1 == a)
    }

    /// Returns whether the edge shares an end node with `other`.
    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        other.touches(self.end_nodes.0) || other.touches(self.end_nodes.1)
    }

    /// Unordered key used for duplicate detection.
    fn pair_key(&self) -> (NodeId, NodeId) {
        let (a, b) = (self.end_nodes.0.id, self.end_nodes.1.id);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// A simple undirected graph with edges attributed with their length.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    edges: Vec<Edge>,
    /// Nodes in order of first appearance.
    nodes: Vec<Node>,
    slot_by_id: HashMap<NodeId, usize>,
    /// Node slot -> slots of incident edges. A self-loop is listed once.
    adjacency: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Builds the graph from a list of edges.
    ///
    /// Edges are checked in order; the second and every later edge between an
    /// already connected pair of nodes fails with `GraphError::DuplicateEdge`.
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Result<Self, GraphError> {
        let mut graph = Self::default();
        let mut seen_pairs: HashSet<(NodeId, NodeId)> = HashSet::new();

        for edge in edges {
            if !seen_pairs.insert(edge.pair_key()) {
                return Err(GraphError::DuplicateEdge {
                    a: edge.end_nodes.0.id,
                    b: edge.end_nodes.1.id,
                });
            }
            let edge_slot = graph.edges.len();
            let (a, b) = edge.end_nodes;
            let slot_a = graph.add_node(a);
            let slot_b = graph.add_node(b);
            graph.adjacency[slot_a].push(edge_slot);
            if slot_a != slot_b {
                graph.adjacency[slot_b].push(edge_slot);
            }
            graph.edges.push(edge);
        }
        Ok(graph)
    }

    /// Convenience constructor from `(a, b, length)` triples.
    pub fn from_triples(
        triples: impl IntoIterator<Item = (NodeId, NodeId, f64)>,
    ) -> Result<Self, GraphError> {
        let edges = triples
            .into_iter()
            .map(|(a, b, length)| Edge::new(a, b, length))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(edges)
    }

    /// Registers a node if it is new and returns its slot.
    fn add_node(&mut self, node: Node) -> usize {
        if let Some(&slot) = self.slot_by_id.get(&node.id) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(node);
        self.slot_by_id.insert(node.id, slot);
        self.adjacency.push(Vec::new());
        slot
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every node in the graph, in order of first appearance among the edges.
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, node: Node) -> bool {
        self.slot_by_id.contains_key(&node.id)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.slot_by_id.get(&id).map(|&slot| self.nodes[slot])
    }

    /// Edges incident to `node`; empty for nodes outside the graph.
    pub fn incident_edges(&self, node: Node) -> impl Iterator<Item = &Edge> + '_ {
        self.slot_by_id
            .get(&node.id)
            .map(|&slot| self.adjacency[slot].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&edge_slot| &self.edges[edge_slot])
    }

    pub fn degree(&self, node: Node) -> usize {
        self.incident_edges(node).count()
    }

    /// Returns the edge between `a` and `b`, if any. O(degree(a)).
    pub fn edge_between(&self, a: Node, b: Node) -> Option<&Edge> {
        self.incident_edges(a).find(|edge| edge.other_end(a) == b)
    }

    pub fn is_adjacent(&self, a: Node, b: Node) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// All nodes reachable from `node` over exactly one edge, ordered like
    /// `all_nodes()`.
    pub fn neighbors(&self, node: Node) -> Vec<Node> {
        let mut slots: Vec<usize> = self
            .incident_edges(node)
            .map(|edge| self.slot_by_id[&edge.other_end(node).id])
            .collect();
        slots.sort_unstable();
        slots.dedup();
        slots.into_iter().map(|slot| self.nodes[slot]).collect()
    }

    /// Breadth-first check whether `to` can be reached from `from`.
    /// A node present in the graph always reaches itself.
    pub fn is_reachable(&self, from: Node, to: Node) -> bool {
        let (Some(&source), Some(&target)) =
            (self.slot_by_id.get(&from.id), self.slot_by_id.get(&to.id))
        else {
            return false;
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        while let Some(slot) = queue.pop_front() {
            if slot == target {
                return true;
            }
            let node = self.nodes[slot];
            for &edge_slot in &self.adjacency[slot] {
                let next = self.slot_by_id[&self.edges[edge_slot].other_end(node).id];
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> UndirectedGraph {
        UndirectedGraph::from_triples([(1, 2, 10.0), (1, 3, 30.0), (2, 4, 10.0), (3, 4, 10.0)])
            .unwrap()
    }

    #[test]
    fn nodes_are_deduplicated_in_first_appearance_order() {
        let graph = square();
        let ids: Vec<NodeId> = graph.all_nodes().iter().map(Node::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn edge_between_works_in_both_directions() {
        let graph = square();
        let edge = graph.edge_between(Node::new(4), Node::new(3)).unwrap();
        assert_eq!(edge.length(), 10.0);
        assert!(edge.connects(Node::new(3), Node::new(4)));
        assert!(graph.edge_between(Node::new(1), Node::new(4)).is_none());
        assert!(graph.edge_between(Node::new(99), Node::new(1)).is_none());
    }

    #[test]
    fn neighbors_follow_node_order() {
        let graph = UndirectedGraph::from_triples([(5, 1, 1.0), (3, 5, 1.0), (5, 7, 1.0)]).unwrap();
        let ids: Vec<NodeId> = graph.neighbors(Node::new(5)).iter().map(Node::id).collect();
        // node order is 5, 1, 3, 7
        assert_eq!(ids, vec![1, 3, 7]);
        assert_eq!(graph.degree(Node::new(5)), 3);
    }

    #[test]
    fn self_loop_makes_node_its_own_neighbor() {
        let graph = UndirectedGraph::from_triples([(1, 1, 2.0), (1, 2, 3.0)]).unwrap();
        let ids: Vec<NodeId> = graph.neighbors(Node::new(1)).iter().map(Node::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(graph.degree(Node::new(1)), 2);
    }

    #[test]
    fn reachability_stops_at_component_border() {
        let graph = UndirectedGraph::from_triples([(1, 2, 1.0), (2, 3, 1.0), (7, 8, 1.0)]).unwrap();
        assert!(graph.is_reachable(Node::new(1), Node::new(3)));
        assert!(graph.is_reachable(Node::new(3), Node::new(3)));
        assert!(!graph.is_reachable(Node::new(1), Node::new(8)));
        assert!(!graph.is_reachable(Node::new(1), Node::new(42)));
    }

    #[test]
    fn rejects_non_positive_and_non_finite_lengths() {
        assert!(matches!(
            Edge::new(1, 2, 0.0),
            Err(GraphError::NonPositiveLength { a: 1, b: 2, .. })
        ));
        assert!(matches!(
            Edge::new(1, 2, -3.5),
            Err(GraphError::NonPositiveLength { .. })
        ));
        assert!(matches!(
            Edge::new(1, 2, f64::NAN),
            Err(GraphError::NonFiniteLength { .. })
        ));
        assert!(matches!(
            Edge::new(1, 2, f64::INFINITY),
            Err(GraphError::NonFiniteLength { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_edge_regardless_of_direction() {
        let err = UndirectedGraph::from_triples([(1, 2, 1.0), (3, 4, 1.0), (2, 1, 5.0)]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge { a: 2, b: 1 });
    }

    #[test]
    fn shares_endpoint_and_other_end() {
        let e1 = Edge::new(1, 2, 1.0).unwrap();
        let e2 = Edge::new(2, 3, 1.0).unwrap();
        let e3 = Edge::new(4, 5, 1.0).unwrap();
        assert!(e1.shares_endpoint(&e2));
        assert!(!e1.shares_endpoint(&e3));
        assert_eq!(e1.other_end(Node::new(2)), Node::new(1));
        assert_eq!(e1.other_end(Node::new(1)), Node::new(2));
    }
}
