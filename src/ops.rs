/*!
# Graph Operations

The contract every representation satisfies, split into small traits:

- [`GraphType`] / [`GraphNew`]: construction-time flags and construction,
- [`GraphNodeOrder`] / [`GraphVertexEditing`]: labelled vertices,
- [`AdjacencyList`] / [`AdjacencyTest`]: neighborhood and edge queries,
- [`GraphEdgeEditing`]: inserting and removing edges,
- [`GraphPrint`]: human readable dump of the structure.

[`Graph`] bundles all of them and is implemented automatically.

Every operation that takes a vertex index validates it and reports
[`GraphError::VertexOutOfRange`] instead of panicking.
*/

use std::{fmt::Display, io::Write, ops::Range};

use log::{debug, trace};

use crate::{
    config::{GraphConfig, Representation},
    edge::{NumEdges, WeightedEdge},
    error::{GraphError, Result},
    node::*,
};

/// Provides the construction-time properties of a graph
pub trait GraphType {
    /// Returns the configuration the graph was created with
    fn config(&self) -> GraphConfig;

    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool {
        self.config().is_directed()
    }

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns *true* if supplied edge weights are honored
    fn is_weighted(&self) -> bool {
        self.config().is_weighted()
    }

    /// Returns the weight that is stored when `weight` is requested for an edge.
    ///
    /// Unweighted graphs always store [`DEFAULT_WEIGHT`]; weighted graphs reject
    /// weights that cannot be told apart from *no edge*.
    fn effective_weight(&self, weight: Weight) -> Result<Weight> {
        if !self.is_weighted() {
            Ok(DEFAULT_WEIGHT)
        } else if is_valid_weight(weight) {
            Ok(weight)
        } else {
            debug!("Rejected edge weight {weight}");
            Err(GraphError::InvalidWeight(weight))
        }
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with the given configuration
    fn new(config: GraphConfig) -> Self;

    /// Shorthand for creating an empty graph from its two flags
    fn with_flags(directed: bool, weighted: bool) -> Self {
        Self::new(GraphConfig::with_flags(directed, weighted))
    }

    /// Copies all labels and edges of `source` into a new graph with the same flags.
    /// `representation` only matters for graphs that can hold either representation.
    fn try_from_graph<G>(source: &G, representation: Representation) -> Result<Self>
    where
        G: AdjacencyList,
        Self: GraphEdgeEditing + GraphVertexEditing,
    {
        let mut graph = Self::new(source.config().representation(representation));
        graph.insert_vertices(source.labels().iter().cloned())?;
        for edge in source.edges(source.is_undirected()) {
            graph.insert_edge(edge.origin(), edge.destination(), edge.weight)?;
        }
        Ok(graph)
    }
}

/// Provides getters pertaining to the vertices of a graph
pub trait GraphNodeOrder {
    /// Returns the labels of all vertices, indexed by vertex
    fn labels(&self) -> &[Label];

    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes {
        self.labels().len() as NumNodes
    }

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.labels().len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of all vertex indices.
    /// The range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns `u` as a position into per-vertex storage if it is a vertex of the graph
    fn check_vertex(&self, u: Node) -> Result<usize> {
        if (u as usize) < self.len() {
            Ok(u as usize)
        } else {
            debug!(
                "Rejected vertex {u}: graph has {} vertices",
                self.number_of_nodes()
            );
            Err(GraphError::VertexOutOfRange {
                vertex: u,
                len: self.number_of_nodes(),
            })
        }
    }

    /// Checks both endpoints of an edge, see [`GraphNodeOrder::check_vertex`]
    fn check_endpoints(&self, origin: Node, destination: Node) -> Result<(usize, usize)> {
        Ok((self.check_vertex(origin)?, self.check_vertex(destination)?))
    }

    /// Returns the label of a given vertex
    fn vertex_label(&self, u: Node) -> Result<&str> {
        let u = self.check_vertex(u)?;
        Ok(self.labels()[u].as_str())
    }

    /// Returns the first vertex carrying `label` if any
    fn find_vertex(&self, label: &str) -> Option<Node> {
        self.labels()
            .iter()
            .position(|l| l == label)
            .map(|u| u as Node)
    }
}

/// Trait for adding and removing vertices
pub trait GraphVertexEditing: GraphNodeOrder {
    /// Appends a vertex with the given label and returns its index (the previous number of vertices).
    /// Labels do not need to be unique.
    fn insert_vertex<S: Into<Label>>(&mut self, label: S) -> Result<Node>;

    /// Removes a vertex together with all incident edges and returns its label.
    /// All vertices with a larger index move down by one; edges are renumbered accordingly.
    fn remove_vertex(&mut self, u: Node) -> Result<Label>;

    /// Appends one vertex per label and returns the range of new indices.
    /// On error, vertices inserted before the failure remain.
    fn insert_vertices<I, S>(&mut self, labels: I) -> Result<Range<Node>>
    where
        I: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        let start = self.number_of_nodes();
        for label in labels {
            self.insert_vertex(label)?;
        }
        Ok(start..self.number_of_nodes())
    }

    /// Returns an error if no further vertex can be added
    fn check_capacity(&self) -> Result<()> {
        if self.len() < MAX_NODES as usize {
            Ok(())
        } else {
            Err(GraphError::TooManyVertices(MAX_NODES))
        }
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over `(destination, weight)` of all edges leaving `u`.
    ///
    /// Order is defined by the representation.
    fn weighted_neighbors_of(
        &self,
        u: Node,
    ) -> Result<impl Iterator<Item = (Node, Weight)> + '_>;

    /// Returns an iterator over all vertices reachable from `u` by one edge
    fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        Ok(self.weighted_neighbors_of(u)?.map(|(v, _)| v))
    }

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        Ok(self.weighted_neighbors_of(u)?.count() as NumNodes)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> Result<impl Iterator<Item = WeightedEdge> + '_> {
        Ok(self
            .weighted_neighbors_of(u)?
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
            .filter(move |e| !only_normalized || e.edge.is_normalized()))
    }

    /// Returns an iterator over all edges of the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered,
    /// which lists every edge of an undirected graph exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized).into_iter().flatten())
    }

    /// Returns the number of edges; an undirected edge counts once
    fn number_of_edges(&self) -> NumEdges {
        self.edges(self.is_undirected()).count() as NumEdges
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.edges(false).next().is_none()
    }
}

/// Trait for testing the existence of single edges
pub trait AdjacencyTest: AdjacencyList {
    /// Returns the weight of the edge `(origin, destination)` or `None` if no such edge exists
    fn edge_weight(&self, origin: Node, destination: Node) -> Result<Option<Weight>> {
        self.check_vertex(destination)?;
        Ok(self
            .weighted_neighbors_of(origin)?
            .find_map(|(v, w)| (v == destination).then_some(w)))
    }

    /// Returns *true* if the edge `(origin, destination)` exists
    fn has_edge(&self, origin: Node, destination: Node) -> Result<bool> {
        Ok(self.edge_weight(origin, destination)?.is_some())
    }
}

/// Trait for adding and removing edges
pub trait GraphEdgeEditing: AdjacencyTest {
    /// Sets the edge `(origin, destination)`, and its mirror in undirected graphs.
    /// An already existing edge only has its weight updated.
    /// Unweighted graphs ignore `weight` and store [`DEFAULT_WEIGHT`].
    fn insert_edge(&mut self, origin: Node, destination: Node, weight: Weight) -> Result<()>;

    /// Inserts the edge `(origin, destination)` with [`DEFAULT_WEIGHT`]
    fn insert_unit_edge(&mut self, origin: Node, destination: Node) -> Result<()> {
        self.insert_edge(origin, destination, DEFAULT_WEIGHT)
    }

    /// Inserts all edges, stopping at the first failure
    fn insert_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        for edge in edges {
            self.insert_edge(edge.origin(), edge.destination(), edge.weight)?;
        }
        Ok(())
    }

    /// Removes the edge `(origin, destination)`, and its mirror in undirected graphs.
    /// Returns *true* if the edge existed before.
    fn remove_edge(&mut self, origin: Node, destination: Node) -> Result<bool>;
}

/// Trait for dumping the structure of a graph.
/// The format is the one of the graph's `Display` implementation.
pub trait GraphPrint: Display {
    /// Writes the structure to a writer
    fn write_structure<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Writes the structure to standard output
    fn print(&self) -> std::io::Result<()> {
        trace!("Printing graph to stdout");
        self.write_structure(std::io::stdout().lock())
    }
}

/// The complete contract of a graph representation
pub trait Graph: GraphNew + GraphVertexEditing + GraphEdgeEditing + GraphPrint {}

impl<G> Graph for G where G: GraphNew + GraphVertexEditing + GraphEdgeEditing + GraphPrint {}
