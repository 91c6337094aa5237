//! Edge types for weighted undirected graphs.
//!
//! An [`Edge`] is one entry of a vertex's adjacency set: the neighbor it
//! points at and the weight of the connection. A [`Triple`] is one row of
//! an edge list, naming both endpoints explicitly.

use std::collections::BTreeSet;
use std::fmt;

/// Vertex identifier. Written as a little-endian `u32` in encoded streams.
pub type VertexId = u32;

/// Edge weight. Restricted to 8 bits by the binary format.
pub type Weight = u8;

/// An adjacency entry attached to a source vertex.
///
/// Ordered by `to`, then by `weight`, which is the order in which the
/// encoder emits a vertex's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Neighbor vertex.
    pub to: VertexId,
    /// Weight of the connection.
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: VertexId, weight: Weight) -> Self {
        Self { to, weight }
    }
}

/// One `(from, to, weight)` row of an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Triple {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same edge with endpoints ordered so that `from <= to`.
    ///
    /// `(u, v, w)` and `(v, u, w)` normalize to the same triple.
    pub fn normalized(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            Self {
                from: self.to,
                to: self.from,
                weight: self.weight,
            }
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.from, self.to, self.weight)
    }
}

/// Symmetrize and deduplicate an edge list.
///
/// Two lists describe the same undirected graph exactly when their
/// symmetrized sets are equal.
pub fn symmetrized<I>(triples: I) -> BTreeSet<Triple>
where
    I: IntoIterator<Item = Triple>,
{
    triples.into_iter().map(Triple::normalized).collect()
}
