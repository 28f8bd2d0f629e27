/*!
# Node Representation

Vertices are identified by their position `0..n` in the graph, stored as `Node = u32`.
Each vertex additionally carries a `Label`; labels are not required to be unique.
*/

/// Vertices are numbered from `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph
pub type NumNodes = Node;

/// `Node::MAX` is never handed out as an index
pub const MAX_NODES: NumNodes = Node::MAX;

/// Human readable name of a vertex
pub type Label = String;

/// Edge weights. A weight of `0` is reserved for *no edge*.
pub type Weight = f64;

/// Weight stored for every edge of an unweighted graph and used by `insert_unit_edge`
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Returns *true* if `w` can be stored as the weight of an edge
#[inline]
pub fn is_valid_weight(w: Weight) -> bool {
    w != 0.0 && !w.is_nan()
}
