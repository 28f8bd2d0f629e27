//! # Headers
//!
//! The header(-line) of an edge list is the first non-comment line and consists of
//! four whitespace separated integers `V A D P` where `V` is the number of vertices, `A` the number of edges, and `D`/`P` are
//! non-zero if the graph is directed/weighted. Further tokens are ignored.

use std::{io::ErrorKind, str::FromStr};

use super::*;
use crate::{
    config::GraphConfig,
    edge::NumEdges,
    node::NumNodes,
};

/// A parsed header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of vertices
    pub number_of_nodes: NumNodes,
    /// Number of edges announced by the file; purely informational
    pub number_of_edges: NumEdges,
    pub directed: bool,
    pub weighted: bool,
}

impl Header {
    /// Tries to parse a header line
    pub fn parse_header(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        raise_error_unless!(
            line.split_whitespace().count() >= 4,
            ErrorKind::InvalidData,
            format!("Header needs four entries `V A D P`, found {line:?}")
        );

        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");
        let directed: i64 = parse_next_value!(parts, "Header>Directed");
        let weighted: i64 = parse_next_value!(parts, "Header>Weighted");

        Ok(Self {
            number_of_nodes,
            number_of_edges,
            directed: directed != 0,
            weighted: weighted != 0,
        })
    }

    /// Returns the graph configuration described by the header
    pub fn config(&self) -> GraphConfig {
        GraphConfig::with_flags(self.directed, self.weighted)
    }
}

impl FromStr for Header {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_header(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let header: Header = "5 7 1 0".parse().unwrap();
        assert_eq!(
            header,
            Header {
                number_of_nodes: 5,
                number_of_edges: 7,
                directed: true,
                weighted: false
            }
        );
        assert_eq!(header.config(), GraphConfig::with_flags(true, false));

        let header = Header::parse_header("  3\t0 0 2 trailing tokens").unwrap();
        assert_eq!(header.number_of_nodes, 3);
        assert!(!header.directed);
        assert!(header.weighted);
    }

    #[test]
    fn parse_invalid() {
        for line in ["5 7 1", "", "five 7 1 0", "5 7 x 0", "-1 0 0 0"] {
            let err = Header::parse_header(line).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{line:?}");
        }
    }
}
