/*!
# Adjacency Matrix

[`MatrixGraph`] stores a dense `n x n` table of weights where entry `[u][v]` is the
weight of the edge `(u, v)` and `0` means *no edge*.

- Inserting a vertex appends a column to every row and a new all-zero row.
- Removing a vertex drops its row and column; all other indices shift implicitly.
- Neighbors are reported in ascending index order.
*/

use std::fmt::Display;

use itertools::Itertools;
use log::trace;

use super::*;

/// A graph represented by a dense adjacency matrix of weights
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixGraph {
    config: GraphConfig,
    labels: Vec<Label>,
    matrix: Vec<Vec<Weight>>,
}

/// Weight stored in cells without an edge
const NO_EDGE: Weight = 0.0;

impl MatrixGraph {
    /// Returns the row of weights of all edges leaving `u`
    pub fn row(&self, u: Node) -> Result<&[Weight]> {
        let u = self.check_vertex(u)?;
        Ok(&self.matrix[u])
    }

    /// Returns the complete matrix, indexed `[origin][destination]`
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }
}

impl GraphType for MatrixGraph {
    fn config(&self) -> GraphConfig {
        self.config
    }
}

impl GraphNew for MatrixGraph {
    fn new(config: GraphConfig) -> Self {
        Self {
            config: config.representation(Representation::Matrix),
            labels: Vec::new(),
            matrix: Vec::new(),
        }
    }
}

impl GraphNodeOrder for MatrixGraph {
    fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl GraphVertexEditing for MatrixGraph {
    fn insert_vertex<S: Into<Label>>(&mut self, label: S) -> Result<Node> {
        self.check_capacity()?;

        let u = self.number_of_nodes();
        for row in &mut self.matrix {
            row.push(NO_EDGE);
        }
        self.matrix.push(vec![NO_EDGE; self.len() + 1]);
        self.labels.push(label.into());

        trace!("Inserted vertex {u} ({})", self.labels[u as usize]);
        Ok(u)
    }

    fn remove_vertex(&mut self, u: Node) -> Result<Label> {
        let index = self.check_vertex(u)?;

        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }
        let label = self.labels.remove(index);

        trace!("Removed vertex {u} ({label})");
        Ok(label)
    }
}

impl AdjacencyList for MatrixGraph {
    fn weighted_neighbors_of(
        &self,
        u: Node,
    ) -> Result<impl Iterator<Item = (Node, Weight)> + '_> {
        let u = self.check_vertex(u)?;
        Ok(self.matrix[u]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != NO_EDGE)
            .map(|(v, &w)| (v as Node, w)))
    }
}

impl AdjacencyTest for MatrixGraph {
    fn edge_weight(&self, origin: Node, destination: Node) -> Result<Option<Weight>> {
        let (o, d) = self.check_endpoints(origin, destination)?;
        let weight = self.matrix[o][d];
        Ok((weight != NO_EDGE).then_some(weight))
    }
}

impl GraphEdgeEditing for MatrixGraph {
    fn insert_edge(&mut self, origin: Node, destination: Node, weight: Weight) -> Result<()> {
        let (o, d) = self.check_endpoints(origin, destination)?;
        let weight = self.effective_weight(weight)?;

        self.matrix[o][d] = weight;
        if self.is_undirected() {
            self.matrix[d][o] = weight;
        }

        trace!("Inserted edge ({origin},{destination}) with weight {weight}");
        Ok(())
    }

    fn remove_edge(&mut self, origin: Node, destination: Node) -> Result<bool> {
        let (o, d) = self.check_endpoints(origin, destination)?;

        let existed = self.matrix[o][d] != NO_EDGE;
        self.matrix[o][d] = NO_EDGE;
        if self.is_undirected() {
            self.matrix[d][o] = NO_EDGE;
        }

        trace!("Removed edge ({origin},{destination}): existed={existed}");
        Ok(existed)
    }
}

/// First line: labels; then one line of weights per row
impl Display for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.labels.iter().join(" "))?;
        for row in &self.matrix {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl GraphPrint for MatrixGraph {}

// ---------- Testing ----------

test_graph_ops!(
    test_matrix_graph,
    MatrixGraph,
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
    use itertools::Itertools;

    #[test]
    fn directed_unweighted_scenario() {
        let mut graph = MatrixGraph::with_flags(true, false);
        assert_eq!(graph.insert_vertex("A"), Ok(0));
        assert_eq!(graph.insert_vertex("B"), Ok(1));
        graph.insert_unit_edge(0, 1).unwrap();

        assert_eq!(graph.has_edge(0, 1), Ok(true));
        assert_eq!(graph.has_edge(1, 0), Ok(false));
        assert_eq!(graph.row(0).unwrap(), &[0.0, 1.0]);
        assert_eq!(graph.row(1).unwrap(), &[0.0, 0.0]);

        let mut out = Vec::new();
        graph.write_structure(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A B\n0 1\n0 0\n");
    }

    #[test]
    fn weighted_print() {
        let mut graph = MatrixGraph::with_flags(false, true);
        graph.insert_vertices(["x", "y", "z"]).unwrap();
        graph.insert_edge(0, 2, 2.5).unwrap();
        graph.insert_edge(1, 1, -3.0).unwrap();

        assert_eq!(graph.to_string(), "x y z\n0 0 2.5\n0 -3 0\n2.5 0 0\n");
    }

    #[test]
    fn empty_print() {
        let graph = MatrixGraph::with_flags(false, false);
        assert_eq!(graph.to_string(), "\n");
    }

    #[test]
    fn neighbors_in_ascending_order() {
        let mut graph = MatrixGraph::with_flags(true, false);
        graph.insert_vertices((0..6).map(|i| i.to_string())).unwrap();
        for v in [5, 2, 4, 0] {
            graph.insert_unit_edge(3, v).unwrap();
        }

        assert_eq!(graph.neighbors_of(3).unwrap().collect_vec(), vec![0, 2, 4, 5]);
    }

    #[test]
    fn matrix_stays_square() {
        let mut graph = MatrixGraph::with_flags(true, true);
        for i in 0..5 {
            graph.insert_vertex(format!("v{i}")).unwrap();
            assert!(graph.matrix().iter().all(|row| row.len() == i + 1));
            assert_eq!(graph.matrix().len(), i + 1);
        }

        graph.insert_edge(0, 4, 1.5).unwrap();
        graph.insert_edge(4, 3, 2.0).unwrap();
        graph.remove_vertex(2).unwrap();

        assert_eq!(graph.matrix().len(), 4);
        assert!(graph.matrix().iter().all(|row| row.len() == 4));
        assert_eq!(graph.edge_weight(0, 3), Ok(Some(1.5)));
        assert_eq!(graph.edge_weight(3, 2), Ok(Some(2.0)));
    }
}
