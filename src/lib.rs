/*!
`lgraphs` is a small graph data structure library for graphs whose vertices are
- **l**abelled : Every vertex carries a `String` label, labels need not be unique
- dense : Vertices are numbered `0` to `n - 1`; removing a vertex renumbers all later vertices

and whose edges are optionally **weighted** and optionally **directed**.

# Representation

We represent **vertices** as `u32` in the range `0..n` where `n` is the number of vertices in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and [`WeightedEdge`](crate::edge::WeightedEdge)
if the weight is needed as well. Weights are `f64`; a weight of `0` is reserved for *no edge*.

### Directed vs Undirected

- In an **undirected** graph, inserting or removing `(u, v)` also inserts or removes `(v, u)`.
- In a **directed** graph, the edge has orientation, so `(u, v)` and `(v, u)` are distinct.

### Weighted vs Unweighted

- In a **weighted** graph, the supplied weight is stored.
- In an **unweighted** graph, every edge has weight `1` regardless of the supplied weight.

Both flags are fixed at construction time via [`GraphConfig`](crate::config::GraphConfig).

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`MatrixGraph`](crate::repr::MatrixGraph): dense adjacency matrix
- [`ListGraph`](crate::repr::ListGraph): adjacency lists of `(destination, weight)` records
- [`AnyGraph`](crate::repr::AnyGraph): either of the above, chosen at runtime

# Errors

Every operation that takes a vertex index checks it and returns a
[`GraphError`](crate::error::GraphError) instead of panicking or silently failing.
A failing operation leaves the graph unchanged.

# Usage

```
use lgraphs::prelude::*;

let mut graph = MatrixGraph::with_flags(true, false);
let a = graph.insert_vertex("A")?;
let b = graph.insert_vertex("B")?;
graph.insert_unit_edge(a, b)?;

assert!(graph.has_edge(a, b)?);
assert!(!graph.has_edge(b, a)?);
assert_eq!(graph.to_string(), "A B\n0 1\n0 0\n");
# Ok::<(), GraphError>(())
```

There are *3* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, configuration, errors, all graph operation traits as well as all representations,
- [`io`] includes readers for loading a graph from an edge list,
- [`config`] includes the construction-time configuration.

The library never installs a logger; it reports through the [`log`] facade.
*/

pub mod config;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `lgraphs::prelude` includes definitions for nodes and edges, the configuration, errors,
/// all graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{config::*, edge::*, error::GraphError, node::*, ops::*, repr::*};
}
