//! # EdgeList
//!
//! The EdgeList-Format consists of a [`Header`] `V A D P`, followed by non-comment-lines
//! `u v [w]`, each representing an edge `(u, v)` of weight `w`.
//!
//! - Blank lines and lines starting with a comment identifier (`#` or `//` by default) are skipped.
//! - Lines that do not start with two integers are skipped.
//! - `w` is only read for weighted graphs and defaults to `1` if missing or unparsable.
//! - Indices are 0-based unless no endpoint equals `0` and some endpoint equals `V`,
//!   in which case the file is treated as 1-based.
//! - Edges with an endpoint outside of `0..V`, or rejected by the graph, are skipped.
//!
//! Vertex `i` is labelled `"i"`.

use std::io::{BufRead, ErrorKind};

use itertools::Itertools;
use log::{debug, info, warn};

use super::*;
use crate::{
    config::Representation,
    node::{DEFAULT_WEIGHT, Node, Weight},
    ops::*,
};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Representation of graphs that can hold either
    representation: Representation,
    /// Lines starting with any of these are skipped when reading
    comment_identifiers: Vec<String>,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            comment_identifiers: vec!["#".to_string(), "//".to_string()],
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the representation used for [`AnyGraph`](crate::repr::AnyGraph)
    pub fn representation(mut self, representation: Representation) -> EdgeListReader {
        self.representation = representation;
        self
    }

    /// Updates the comment identifiers
    pub fn comment_identifiers<I, S>(mut self, identifiers: I) -> EdgeListReader
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_identifiers = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Returns *true* if the (trimmed) line carries no content
    fn is_skipped(&self, line: &str) -> bool {
        line.is_empty()
            || self
                .comment_identifiers
                .iter()
                .any(|c| line.starts_with(c.as_str()))
    }
}

/// An edge as found in the input, before index base detection
#[derive(Debug, Clone, Copy, PartialEq)]
struct RawEdge {
    origin: i64,
    destination: i64,
    weight: Weight,
}

impl RawEdge {
    /// Parses `u v [w]`; returns `None` if the line does not describe an edge
    fn parse(line: &str, weighted: bool) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let origin = parts.next()?.parse().ok()?;
        let destination = parts.next()?.parse().ok()?;
        let weight = if weighted {
            parts
                .next()
                .and_then(|w| w.parse().ok())
                .unwrap_or(DEFAULT_WEIGHT)
        } else {
            DEFAULT_WEIGHT
        };

        Some(Self {
            origin,
            destination,
            weight,
        })
    }
}

/// Returns *true* if the endpoints look like they are numbered `1..=n`
fn is_one_based(edges: &[RawEdge], n: i64) -> bool {
    let has_endpoint = |u: i64| edges.iter().any(|e| e.origin == u || e.destination == u);
    !has_endpoint(0) && has_endpoint(n)
}

impl<G: Graph> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if !self.is_skipped(line) {
                lines.push(line.to_string());
            }
        }
        let mut lines = lines.into_iter();

        let header = Header::parse_header(
            &lines
                .next()
                .ok_or_else(|| io_error!(ErrorKind::NotFound, "Header not found"))?,
        )?;

        let mut graph = G::new(header.config().representation(self.representation));
        graph.insert_vertices((0..header.number_of_nodes).map(|u| u.to_string()))?;

        let raw_edges = lines
            .filter_map(|line| RawEdge::parse(&line, header.weighted))
            .collect_vec();
        if raw_edges.is_empty() {
            warn!("Edge list contains no valid edges");
            return Ok(graph);
        }

        let n = header.number_of_nodes as i64;
        let offset = if is_one_based(&raw_edges, n) {
            info!("Detected 1-based indices; normalizing to 0-based");
            1
        } else {
            0
        };

        let mut inserted = 0usize;
        let mut rejected = 0usize;
        for edge in &raw_edges {
            let endpoints = (
                Node::try_from(edge.origin - offset),
                Node::try_from(edge.destination - offset),
            );
            let result = match endpoints {
                (Ok(u), Ok(v)) => graph.insert_edge(u, v, edge.weight),
                _ => {
                    debug!("Rejected edge {edge:?}: negative endpoint");
                    rejected += 1;
                    continue;
                }
            };

            match result {
                Ok(()) => inserted += 1,
                Err(err) => {
                    debug!("Rejected edge {edge:?}: {err}");
                    rejected += 1;
                }
            }
        }

        info!(
            "Read edge list: vertices={}, edges_read={}, edges_inserted={inserted}, rejected={rejected}",
            header.number_of_nodes,
            raw_edges.len()
        );

        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G: Graph> EdgeListRead for G {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::prelude::*;

    const SLIDES: &str = "\
# small weighted example
4 5 0 1

0 1 2.5
1 2
// self loop
3 3 4
2 0 x
0 4 1.0
not an edge
";

    #[test]
    fn read_zero_based() {
        let _ = env_logger::builder().is_test(true).try_init();

        for representation in [Representation::Matrix, Representation::List] {
            let graph: AnyGraph = EdgeListReader::new()
                .representation(representation)
                .try_read_graph(SLIDES.as_bytes())
                .unwrap();

            assert_eq!(graph.representation(), representation);
            assert!(graph.is_undirected());
            assert!(graph.is_weighted());
            assert_eq!(graph.labels(), &["0", "1", "2", "3"]);

            assert_eq!(graph.edge_weight(1, 0), Ok(Some(2.5)));
            assert_eq!(graph.edge_weight(1, 2), Ok(Some(1.0)));
            assert_eq!(graph.edge_weight(3, 3), Ok(Some(4.0)));
            assert_eq!(graph.edge_weight(2, 0), Ok(Some(1.0)));
            assert_eq!(graph.number_of_edges(), 4);
        }
    }

    #[test]
    fn read_one_based() {
        let input = "3 2 1 0\n1 2\n3 1 9\n";
        let graph = ListGraph::try_read_edge_list(input.as_bytes()).unwrap();

        assert!(graph.is_directed());
        assert!(!graph.is_weighted());
        assert_eq!(graph.edge_weight(0, 1), Ok(Some(1.0)));
        assert_eq!(graph.edge_weight(2, 0), Ok(Some(1.0)));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn rejects_out_of_range_and_invalid_weights() {
        let input = "3 4 1 1\n0 1 0\n0 5 1\n-1 2 1\n2 1 3\n";
        let graph = MatrixGraph::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_weight(2, 1), Ok(Some(3.0)));
        assert_eq!(graph.edge_weight(0, 1), Ok(None));
    }

    #[test]
    fn custom_comment_identifiers() {
        let input = "% comment\n2 1 1 0\n0 1\n";
        let graph: ListGraph = EdgeListReader::new()
            .comment_identifiers(["%"])
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(graph.has_edge(0, 1), Ok(true));
    }

    #[test]
    fn without_edges() {
        let graph = ListGraph::try_read_edge_list("2 0 0 0\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 2);
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn header_errors() {
        let err = ListGraph::try_read_edge_list("# only comments\n\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = ListGraph::try_read_edge_list("2 1 0\n0 1\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn read_file() {
        let path = std::env::temp_dir().join(format!("lgraphs-edge-list-{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            write!(file, "2 1 1 1\n0 1 0.25\n").unwrap();
        }

        let graph = MatrixGraph::try_read_edge_list_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(graph.edge_weight(0, 1), Ok(Some(0.25)));
        assert_eq!(graph.edge_weight(1, 0), Ok(None));
    }
}
