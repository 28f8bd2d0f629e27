/*!
# Graph Representations

Two interchangeable storage strategies implement the full [`Graph`] contract:

- [`MatrixGraph`]: dense `n x n` adjacency matrix of weights. Constant time edge
  lookups, neighbors reported in ascending order.
- [`ListGraph`]: per-vertex adjacency lists of `(destination, weight)` records.
  Memory proportional to the number of edges, neighbors reported in insertion order.

Code that only depends on the contract can be generic over `G: Graph`.
If the representation is only known at runtime, use [`AnyGraph`] which selects
the representation from [`GraphConfig::get_representation`] and dispatches internally.
*/

use std::fmt::Display;

use itertools::Either;

use crate::{
    config::{GraphConfig, Representation},
    error::Result,
    node::*,
    ops::*,
    testing::test_graph_ops,
};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// A graph whose representation is chosen at construction time
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGraph {
    Matrix(MatrixGraph),
    List(ListGraph),
}

/// Forwards a call to the wrapped representation
macro_rules! dispatch {
    ($self:expr, $graph:ident => $call:expr) => {
        match $self {
            AnyGraph::Matrix($graph) => $call,
            AnyGraph::List($graph) => $call,
        }
    };
}

impl AnyGraph {
    /// Returns the representation of the wrapped graph
    pub fn representation(&self) -> Representation {
        match self {
            AnyGraph::Matrix(_) => Representation::Matrix,
            AnyGraph::List(_) => Representation::List,
        }
    }

    /// Copies the graph into the given representation
    pub fn converted(&self, representation: Representation) -> Result<AnyGraph> {
        AnyGraph::try_from_graph(self, representation)
    }
}

impl From<MatrixGraph> for AnyGraph {
    fn from(graph: MatrixGraph) -> Self {
        AnyGraph::Matrix(graph)
    }
}

impl From<ListGraph> for AnyGraph {
    fn from(graph: ListGraph) -> Self {
        AnyGraph::List(graph)
    }
}

impl GraphType for AnyGraph {
    fn config(&self) -> GraphConfig {
        dispatch!(self, g => g.config())
    }
}

impl GraphNew for AnyGraph {
    fn new(config: GraphConfig) -> Self {
        match config.get_representation() {
            Representation::Matrix => AnyGraph::Matrix(MatrixGraph::new(config)),
            Representation::List => AnyGraph::List(ListGraph::new(config)),
        }
    }
}

impl GraphNodeOrder for AnyGraph {
    fn labels(&self) -> &[Label] {
        dispatch!(self, g => g.labels())
    }
}

impl GraphVertexEditing for AnyGraph {
    fn insert_vertex<S: Into<Label>>(&mut self, label: S) -> Result<Node> {
        dispatch!(self, g => g.insert_vertex(label))
    }

    fn remove_vertex(&mut self, u: Node) -> Result<Label> {
        dispatch!(self, g => g.remove_vertex(u))
    }
}

impl AdjacencyList for AnyGraph {
    fn weighted_neighbors_of(
        &self,
        u: Node,
    ) -> Result<impl Iterator<Item = (Node, Weight)> + '_> {
        Ok(match self {
            AnyGraph::Matrix(g) => Either::Left(g.weighted_neighbors_of(u)?),
            AnyGraph::List(g) => Either::Right(g.weighted_neighbors_of(u)?),
        })
    }

    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        dispatch!(self, g => g.degree_of(u))
    }
}

impl AdjacencyTest for AnyGraph {
    fn edge_weight(&self, origin: Node, destination: Node) -> Result<Option<Weight>> {
        dispatch!(self, g => g.edge_weight(origin, destination))
    }
}

impl GraphEdgeEditing for AnyGraph {
    fn insert_edge(&mut self, origin: Node, destination: Node, weight: Weight) -> Result<()> {
        dispatch!(self, g => g.insert_edge(origin, destination, weight))
    }

    fn remove_edge(&mut self, origin: Node, destination: Node) -> Result<bool> {
        dispatch!(self, g => g.remove_edge(origin, destination))
    }
}

impl Display for AnyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, g => Display::fmt(g, f))
    }
}

impl GraphPrint for AnyGraph {}

// ---------- Testing ----------

test_graph_ops!(
    test_any_list_graph,
    AnyGraph,
    Representation::List,
    (
        GraphNew,
        GraphVertexEditing,
        AdjacencyTest,
        GraphEdgeEditing,
        RandomOperations
    )
);

test_graph_ops!(
    test_any_matrix_graph,
    AnyGraph,
    Representation::Matrix,
    (
        GraphNew,
        GraphVertexEditing,
        AdjacencyTest,
        GraphEdgeEditing,
        RandomOperations
    )
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;
    use itertools::Itertools;

    fn sample(representation: Representation) -> AnyGraph {
        let mut graph =
            AnyGraph::new(GraphConfig::with_flags(true, true).representation(representation));
        graph.insert_vertices(["a", "b", "c", "d"]).unwrap();
        graph.insert_edge(2, 0, 1.5).unwrap();
        graph.insert_edge(0, 3, 2.0).unwrap();
        graph.insert_edge(0, 1, 0.5).unwrap();
        graph.insert_edge(3, 3, 7.0).unwrap();
        graph
    }

    #[test]
    fn representation_selected_by_config() {
        assert_eq!(sample(Representation::Matrix).representation(), Representation::Matrix);
        assert_eq!(sample(Representation::List).representation(), Representation::List);
        assert!(matches!(sample(Representation::Matrix), AnyGraph::Matrix(_)));
        assert!(matches!(sample(Representation::List), AnyGraph::List(_)));
    }

    #[test]
    fn neighbor_order_follows_representation() {
        let matrix = sample(Representation::Matrix);
        let list = sample(Representation::List);

        assert_eq!(matrix.neighbors_of(0).unwrap().collect_vec(), vec![1, 3]);
        assert_eq!(list.neighbors_of(0).unwrap().collect_vec(), vec![3, 1]);
    }

    #[test]
    fn conversion_preserves_structure() {
        for (from, to) in [
            (Representation::Matrix, Representation::List),
            (Representation::List, Representation::Matrix),
        ] {
            let source = sample(from);
            let target = source.converted(to).unwrap();

            assert_eq!(target.representation(), to);
            assert_eq!(target.config(), source.config().representation(to));
            assert_eq!(target.labels(), source.labels());
            assert_eq!(target.number_of_edges(), 4);

            let edges = |g: &AnyGraph| {
                g.edges(false)
                    .map(|e| (e.edge, e.weight))
                    .sorted_by(|a, b| a.0.cmp(&b.0))
                    .collect_vec()
            };
            assert_eq!(edges(&target), edges(&source));
            assert_eq!(
                edges(&target).into_iter().map(|(e, _)| e).collect_vec(),
                vec![Edge(0, 1), Edge(0, 3), Edge(2, 0), Edge(3, 3)]
            );
        }
    }

    #[test]
    fn undirected_conversion_keeps_mirrors() {
        let mut graph = ListGraph::with_flags(false, false);
        graph.insert_vertices(["a", "b", "c"]).unwrap();
        graph.insert_unit_edge(2, 0).unwrap();
        graph.insert_unit_edge(1, 1).unwrap();

        let matrix = MatrixGraph::try_from_graph(&graph, Representation::Matrix).unwrap();
        assert_eq!(matrix.to_string(), "a b c\n0 0 1\n0 1 0\n1 0 0\n");
        assert_eq!(matrix.number_of_edges(), 2);
    }

    #[test]
    fn print_matches_wrapped_graph() {
        let matrix = sample(Representation::Matrix);
        let list = sample(Representation::List);

        assert_eq!(
            matrix.to_string(),
            "a b c d\n0 0.5 0 2\n0 0 0 0\n1.5 0 0 0\n0 0 0 7\n"
        );
        assert_eq!(
            list.to_string(),
            "a: (3, 2) (1, 0.5) \nb: \nc: (0, 1.5) \nd: (3, 7) \n"
        );
    }
}
