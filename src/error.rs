//! Error types shared by all graph representations.

use thiserror::Error;

use crate::node::{Node, NumNodes, Weight};

/// All errors a graph operation can report.
///
/// A failing operation never modifies the graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Index does not refer to a vertex of the graph.
    #[error("Vertex {vertex} out of range for graph with {len} vertices")]
    VertexOutOfRange { vertex: Node, len: NumNodes },

    /// Weight cannot be stored (zero is reserved for *no edge*).
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(Weight),

    /// The graph already holds the maximum number of vertices.
    #[error("Graph cannot hold more than {0} vertices")]
    TooManyVertices(NumNodes),
}

/// Convenience result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    fn from(err: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GraphError::VertexOutOfRange { vertex: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Vertex 4 out of range for graph with 2 vertices"
        );
        assert_eq!(
            GraphError::InvalidWeight(0.0).to_string(),
            "Invalid edge weight: 0"
        );
    }

    #[test]
    fn into_io_error() {
        let err: std::io::Error = GraphError::TooManyVertices(7).into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
