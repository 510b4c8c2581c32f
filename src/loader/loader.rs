use std::fs;

use crate::graph::{Edge, NodeId, UndirectedGraph};

use super::error::LoaderError;

//─────────────────────────────────────────────────────────────────────────────

/// Loads an undirected graph from an edge-list file.
pub fn load_graph_from_file(file_path: &str) -> Result<UndirectedGraph, LoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| LoaderError::ReadFile(file_path.into(), e))?;

    let graph = parse_edge_list(&file_content)?;
    if graph.is_empty() {
        return Err(LoaderError::EmptyGraph(file_path.into()));
    }
    Ok(graph)
}

/// Parses an edge list into a graph.
///
/// One edge per line as `<a> <b> <length>`, separated by whitespace or commas.
/// Blank lines and everything after a `#` are ignored. Edges are validated in
/// line order, so a duplicate is reported for its second occurrence.
pub fn parse_edge_list(content: &str) -> Result<UndirectedGraph, LoaderError> {
    let mut edges = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        edges.push(parse_edge_line(line, index + 1)?);
    }
    Ok(UndirectedGraph::new(edges)?)
}

fn parse_edge_line(line: &str, line_no: usize) -> Result<Edge, LoaderError> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    let [a, b, length] = fields.as_slice() else {
        return Err(LoaderError::Parse {
            line: line_no,
            reason: format!("expected '<a> <b> <length>', found {} field(s)", fields.len()),
        });
    };

    let a = parse_node_id(a, line_no)?;
    let b = parse_node_id(b, line_no)?;
    let length: f64 = length.parse().map_err(|_| LoaderError::Parse {
        line: line_no,
        reason: format!("invalid edge length '{}'", length),
    })?;

    Edge::new(a, b, length).map_err(LoaderError::from)
}

fn parse_node_id(field: &str, line_no: usize) -> Result<NodeId, LoaderError> {
    field.parse().map_err(|_| LoaderError::Parse {
        line: line_no,
        reason: format!("invalid node id '{}'", field),
    })
}

/// Builds a graph from `((a, b), length)` connections, the shape used by
/// test fixtures.
pub fn graph_from_connections(
    connections: &[((NodeId, NodeId), f64)],
) -> Result<UndirectedGraph, LoaderError> {
    let graph = UndirectedGraph::from_triples(
        connections
            .iter()
            .map(|&((a, b), length)| (a, b, length)),
    )?;
    Ok(graph)
}

/// The four-node demo graph: two routes from 1 to 4, via 2 (length 20) and
/// via 3 (length 40).
pub fn demo_graph() -> Result<UndirectedGraph, LoaderError> {
    graph_from_connections(&[
        ((1, 2), 10.0),
        ((1, 3), 30.0),
        ((2, 4), 10.0),
        ((3, 4), 10.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphError, Node};
    use std::io::Write;

    #[test]
    fn parses_whitespace_and_comma_separated_lines() {
        let graph = parse_edge_list(
            "# demo\n1 2 10\n\n1,3,30\n2, 4, 10.5   # trailing comment\n3\t4\t10\n",
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 4);
        let edge = graph.edge_between(Node::new(4), Node::new(2)).unwrap();
        assert_eq!(edge.length(), 10.5);
    }

    #[test]
    fn reports_line_of_malformed_input() {
        let err = parse_edge_list("1 2 10\n1 x 3\n").unwrap_err();
        assert!(matches!(err, LoaderError::Parse { line: 2, .. }));

        let err = parse_edge_list("1 2\n").unwrap_err();
        assert!(matches!(err, LoaderError::Parse { line: 1, .. }));

        let err = parse_edge_list("1 2 ten\n").unwrap_err();
        assert!(err.to_string().contains("invalid edge length 'ten'"));
    }

    #[test]
    fn invalid_edges_surface_as_graph_errors() {
        let err = parse_edge_list("1 2 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::InvalidGraph(GraphError::NonPositiveLength { .. })
        ));

        let err = parse_edge_list("1 2 1\n2 1 4\n").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::InvalidGraph(GraphError::DuplicateEdge { a: 2, b: 1 })
        ));
    }

    #[test]
    fn loads_graph_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 10").unwrap();
        writeln!(file, "2 3 5").unwrap();
        let graph = load_graph_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_graph_from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoaderError::EmptyGraph(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_graph_from_file("/definitely/not/here.edges").unwrap_err();
        assert!(matches!(err, LoaderError::ReadFile(..)));
    }

    #[test]
    fn demo_graph_has_four_nodes() {
        let graph = demo_graph().unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
    }
}
