/*!
# Adjacency List

[`ListGraph`] stores, per vertex, the sequence of `(destination, weight)` records of
its outgoing edges in insertion order.

- There is at most one record per `(origin, destination)`: inserting an existing
  edge updates its weight in place and keeps its position.
- Removing a vertex drops its records, every record pointing at it, and shifts all
  destinations above it down by one so indices stay dense.
*/

use std::fmt::Display;

use log::trace;
use smallvec::SmallVec;

use super::*;

/// Outgoing edge stored in the neighborhood of its origin
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    pub destination: Node,
    pub weight: Weight,
}

/// Records kept inline before a neighborhood spills onto the heap
const INLINE_RECORDS: usize = 4;

type Records = SmallVec<[EdgeRecord; INLINE_RECORDS]>;

/// A graph represented by adjacency lists of weighted records
#[derive(Clone, Debug, PartialEq)]
pub struct ListGraph {
    config: GraphConfig,
    labels: Vec<Label>,
    adjacency: Vec<Records>,
}

impl ListGraph {
    /// Returns the records of all edges leaving `u` in adjacency order
    pub fn records_of(&self, u: Node) -> Result<&[EdgeRecord]> {
        let u = self.check_vertex(u)?;
        Ok(&self.adjacency[u])
    }

    /// Sets the record for `destination` or appends a new one
    fn upsert(records: &mut Records, destination: Node, weight: Weight) {
        match records.iter_mut().find(|r| r.destination == destination) {
            Some(record) => record.weight = weight,
            None => records.push(EdgeRecord {
                destination,
                weight,
            }),
        }
    }

    /// Drops the record for `destination` and returns *true* if there was one
    fn remove_record(records: &mut Records, destination: Node) -> bool {
        let before = records.len();
        records.retain(|r| r.destination != destination);
        records.len() != before
    }
}

impl GraphType for ListGraph {
    fn config(&self) -> GraphConfig {
        self.config
    }
}

impl GraphNew for ListGraph {
    fn new(config: GraphConfig) -> Self {
        Self {
            config: config.representation(Representation::List),
            labels: Vec::new(),
            adjacency: Vec::new(),
        }
    }
}

impl GraphNodeOrder for ListGraph {
    fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl GraphVertexEditing for ListGraph {
    fn insert_vertex<S: Into<Label>>(&mut self, label: S) -> Result<Node> {
        self.check_capacity()?;

        let u = self.number_of_nodes();
        self.adjacency.push(Records::new());
        self.labels.push(label.into());

        trace!("Inserted vertex {u} ({})", self.labels[u as usize]);
        Ok(u)
    }

    fn remove_vertex(&mut self, u: Node) -> Result<Label> {
        let index = self.check_vertex(u)?;

        self.adjacency.remove(index);
        for records in &mut self.adjacency {
            records.retain(|r| r.destination != u);
            for record in records.iter_mut().filter(|r| r.destination > u) {
                record.destination -= 1;
            }
        }
        let label = self.labels.remove(index);

        trace!("Removed vertex {u} ({label})");
        Ok(label)
    }
}

impl AdjacencyList for ListGraph {
    fn weighted_neighbors_of(
        &self,
        u: Node,
    ) -> Result<impl Iterator<Item = (Node, Weight)> + '_> {
        let u = self.check_vertex(u)?;
        Ok(self.adjacency[u].iter().map(|r| (r.destination, r.weight)))
    }

    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        let u = self.check_vertex(u)?;
        Ok(self.adjacency[u].len() as NumNodes)
    }
}

impl AdjacencyTest for ListGraph {}

impl GraphEdgeEditing for ListGraph {
    fn insert_edge(&mut self, origin: Node, destination: Node, weight: Weight) -> Result<()> {
        let (o, d) = self.check_endpoints(origin, destination)?;
        let weight = self.effective_weight(weight)?;

        Self::upsert(&mut self.adjacency[o], destination, weight);
        if self.is_undirected() {
            Self::upsert(&mut self.adjacency[d], origin, weight);
        }

        trace!("Inserted edge ({origin},{destination}) with weight {weight}");
        Ok(())
    }

    fn remove_edge(&mut self, origin: Node, destination: Node) -> Result<bool> {
        let (o, d) = self.check_endpoints(origin, destination)?;

        let existed = Self::remove_record(&mut self.adjacency[o], destination);
        if self.is_undirected() {
            Self::remove_record(&mut self.adjacency[d], origin);
        }

        trace!("Removed edge ({origin},{destination}): existed={existed}");
        Ok(existed)
    }
}

/// One line per vertex: `label: (destination, weight) ...`, every record followed by a space
impl Display for ListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, records) in self.labels.iter().zip(&self.adjacency) {
            write!(f, "{label}: ")?;
            for record in records {
                write!(f, "({}, {}) ", record.destination, record.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl GraphPrint for ListGraph {}

// ---------- Testing ----------

test_graph_ops!(
    test_list_graph,
    ListGraph,
    Representation::List,
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
    fn undirected_weighted_scenario() {
        let mut graph = ListGraph::with_flags(false, true);
        graph.insert_vertex("C").unwrap();
        graph.insert_vertex("D").unwrap();
        graph.insert_edge(0, 1, 2.5).unwrap();

        assert_eq!(graph.neighbors_of(0).unwrap().collect_vec(), vec![1]);
        assert_eq!(graph.neighbors_of(1).unwrap().collect_vec(), vec![0]);
        assert_eq!(graph.edge_weight(0, 1), Ok(Some(2.5)));
        assert_eq!(graph.edge_weight(1, 0), Ok(Some(2.5)));

        assert_eq!(graph.to_string(), "C: (1, 2.5) \nD: (0, 2.5) \n");
    }

    #[test]
    fn print_isolated_vertex() {
        let mut graph = ListGraph::with_flags(true, false);
        graph.insert_vertices(["a", "b"]).unwrap();
        graph.insert_edge(0, 1, 9.0).unwrap();

        let mut out = Vec::new();
        graph.write_structure(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a: (1, 1) \nb: \n");
    }

    #[test]
    fn neighbors_in_insertion_order() {
        let mut graph = ListGraph::with_flags(true, false);
        graph.insert_vertices((0..6).map(|i| i.to_string())).unwrap();
        for v in [5, 2, 4, 0] {
            graph.insert_unit_edge(3, v).unwrap();
        }
        assert_eq!(graph.neighbors_of(3).unwrap().collect_vec(), vec![5, 2, 4, 0]);

        // re-insertion keeps the position, removal keeps the relative order
        graph.insert_unit_edge(3, 5).unwrap();
        assert!(graph.remove_edge(3, 2).unwrap());
        assert_eq!(graph.neighbors_of(3).unwrap().collect_vec(), vec![5, 4, 0]);
    }

    #[test]
    fn no_parallel_records() {
        let mut graph = ListGraph::with_flags(true, true);
        graph.insert_vertices(["a", "b"]).unwrap();
        graph.insert_edge(0, 1, 1.5).unwrap();
        graph.insert_edge(0, 1, 4.0).unwrap();

        assert_eq!(
            graph.records_of(0).unwrap(),
            &[EdgeRecord {
                destination: 1,
                weight: 4.0
            }]
        );
        assert!(graph.remove_edge(0, 1).unwrap());
        assert!(!graph.has_edge(0, 1).unwrap());
        assert!(!graph.remove_edge(0, 1).unwrap());
    }

    #[test]
    fn remove_vertex_shifts_destinations() {
        let mut graph = ListGraph::with_flags(true, true);
        graph.insert_vertices(["a", "b", "c", "d"]).unwrap();
        graph.insert_edge(0, 3, 3.0).unwrap();
        graph.insert_edge(0, 1, 1.0).unwrap();
        graph.insert_edge(3, 2, 2.0).unwrap();
        graph.insert_edge(2, 1, 5.0).unwrap();

        assert_eq!(graph.remove_vertex(1), Ok("b".to_string()));

        assert_eq!(graph.labels(), &["a", "c", "d"]);
        assert_eq!(
            graph.weighted_neighbors_of(0).unwrap().collect_vec(),
            vec![(2, 3.0)]
        );
        assert_eq!(
            graph.weighted_neighbors_of(2).unwrap().collect_vec(),
            vec![(1, 2.0)]
        );
        assert_eq!(graph.degree_of(1), Ok(0));
        assert_eq!(graph.to_string(), "a: (2, 3) \nc: \nd: (1, 2) \n");
    }
}
