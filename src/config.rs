/*!
# Configuration

Every graph is created from a [`GraphConfig`] that fixes, for its whole lifetime,
- whether edges are **directed** (undirected graphs mirror every insertion/removal),
- whether edges are **weighted** (unweighted graphs store weight `1` for every edge),
- which [`Representation`] backs the graph when it is built through [`AnyGraph`](crate::repr::AnyGraph).

Use the *Setter* pattern to alter the defaults:
```
use lgraphs::prelude::*;

let config = GraphConfig::new().directed(true).representation(Representation::Matrix);
assert!(config.is_directed() && !config.is_weighted());
```
*/

use std::{fmt::Display, io::ErrorKind, str::FromStr};

/// Storage strategy of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// Dense `n x n` adjacency matrix
    Matrix,
    /// Sparse per-vertex list of `(destination, weight)` records
    #[default]
    List,
}

impl FromStr for Representation {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "matrix" | "matriz" => Ok(Representation::Matrix),
            "list" | "lista" => Ok(Representation::List),
            _ => Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Unknown Representation: {s}"),
            )),
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Matrix => write!(f, "matrix"),
            Representation::List => write!(f, "list"),
        }
    }
}

/// Construction-time properties of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct GraphConfig {
    directed: bool,
    weighted: bool,
    representation: Representation,
}

impl GraphConfig {
    /// Undirected, unweighted, list-backed
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for setting both flags at once
    pub fn with_flags(directed: bool, weighted: bool) -> Self {
        Self::new().directed(directed).weighted(weighted)
    }

    /// Sets whether edges are directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets whether edge weights are honored
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Sets the storage strategy
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn get_representation(&self) -> Representation {
        self.representation
    }
}
