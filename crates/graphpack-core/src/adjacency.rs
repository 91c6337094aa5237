//! Symmetric adjacency structure for weighted undirected graphs.
//!
//! Every undirected edge `(u, v, w)` is stored twice, as `(v, w)` under `u`
//! and as `(u, w)` under `v`. A self-loop is stored once. Adjacency sets are
//! ordered sets keyed on `(to, weight)`, so inserting the same `(to, weight)`
//! pair twice leaves a single entry: the structure is not multi-edge-safe
//! for identical pairs, while parallel edges with different weights survive.

use std::collections::{BTreeMap, BTreeSet};

use crate::edge::{Edge, Triple, VertexId, Weight};

/// Owned vertex -> adjacency set map.
///
/// Built once from an edge list and consumed destructively by a single
/// encode pass; nothing else holds references into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<VertexId, BTreeSet<Edge>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edge-list rows.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut graph = Self::new();
        for triple in triples {
            graph.insert(triple);
        }
        graph
    }

    /// Register an undirected edge under both of its endpoints.
    pub fn insert(&mut self, triple: Triple) {
        self.insert_edge(triple.from, triple.to, triple.weight);
    }

    /// Register `(to, weight)` under `from` and `(from, weight)` under `to`.
    pub fn insert_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.adjacency
            .entry(from)
            .or_default()
            .insert(Edge::new(to, weight));
        self.adjacency
            .entry(to)
            .or_default()
            .insert(Edge::new(from, weight));
    }

    /// Number of vertices seen in the input, including ones whose adjacency
    /// set has since been consumed.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Current size of a vertex's adjacency set (0 for unknown vertices).
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(&vertex).map_or(0, BTreeSet::len)
    }

    /// Current degree of every vertex.
    pub fn degrees(&self) -> BTreeMap<VertexId, usize> {
        self.adjacency
            .iter()
            .map(|(&vertex, edges)| (vertex, edges.len()))
            .collect()
    }

    /// A vertex's adjacency set in emission order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.get(&vertex).into_iter().flatten()
    }

    /// Total number of adjacency entries across all vertices.
    pub fn adjacency_entries(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(&vertex, edges)| edges.iter().filter(|e| vertex <= e.to).count())
            .sum()
    }

    /// Every distinct undirected edge once, normalized so `from <= to`.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.adjacency.iter().flat_map(|(&vertex, edges)| {
            edges
                .iter()
                .filter(move |e| vertex <= e.to)
                .map(move |e| Triple::new(vertex, e.to, e.weight))
        })
    }

    /// Remove one adjacency entry. Returns whether it was present.
    pub fn remove_entry(&mut self, vertex: VertexId, edge: Edge) -> bool {
        self.adjacency
            .get_mut(&vertex)
            .is_some_and(|edges| edges.remove(&edge))
    }

    /// Take a vertex's whole adjacency set, leaving it empty.
    ///
    /// The vertex itself stays known to the graph.
    pub fn take_edges(&mut self, vertex: VertexId) -> BTreeSet<Edge> {
        self.adjacency
            .get_mut(&vertex)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

impl FromIterator<Triple> for AdjacencyGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self::from_triples(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjacencyGraph {
        AdjacencyGraph::from_triples([
            Triple::new(1, 2, 10),
            Triple::new(2, 3, 20),
            Triple::new(1, 3, 5),
        ])
    }

    #[test]
    fn triangle_is_symmetric() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(2), 2);
        assert_eq!(g.degree(3), 2);
        assert_eq!(g.adjacency_entries(), 6);
        assert_eq!(g.edge_count(), 3);

        let n1: Vec<Edge> = g.neighbors(1).copied().collect();
        assert_eq!(n1, vec![Edge::new(2, 10), Edge::new(3, 5)]);
        let n3: Vec<Edge> = g.neighbors(3).copied().collect();
        assert_eq!(n3, vec![Edge::new(1, 5), Edge::new(2, 20)]);
    }

    #[test]
    fn collected_graph_lists_vertices_in_order() {
        let g: AdjacencyGraph = [Triple::new(9, 4, 1), Triple::new(4, 7, 2)]
            .into_iter()
            .collect();
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![4, 7, 9]);
        assert_eq!(g, AdjacencyGraph::from_triples([Triple::new(4, 9, 1), Triple::new(7, 4, 2)]));
    }

    #[test]
    fn self_loop_stored_once() {
        let g = AdjacencyGraph::from_triples([Triple::new(5, 5, 9)]);
        assert_eq!(g.degree(5), 1);
        assert_eq!(g.neighbors(5).copied().collect::<Vec<_>>(), vec![Edge::new(5, 9)]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn exact_duplicates_collapse() {
        let g = AdjacencyGraph::from_triples([
            Triple::new(1, 2, 7),
            Triple::new(1, 2, 7),
            Triple::new(2, 1, 7),
        ]);
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.degree(2), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn parallel_edges_with_distinct_weights_survive() {
        let g = AdjacencyGraph::from_triples([Triple::new(1, 2, 7), Triple::new(1, 2, 8)]);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(2), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn triples_lists_each_edge_once() {
        let g = triangle();
        let triples: Vec<Triple> = g.triples().collect();
        assert_eq!(
            triples,
            vec![
                Triple::new(1, 2, 10),
                Triple::new(1, 3, 5),
                Triple::new(2, 3, 20),
            ]
        );
    }

    #[test]
    fn take_and_remove_consume_entries() {
        let mut g = triangle();
        let taken = g.take_edges(1);
        assert_eq!(taken.len(), 2);
        assert_eq!(g.degree(1), 0);
        assert!(g.contains_vertex(1));

        assert!(g.remove_entry(2, Edge::new(1, 10)));
        assert!(!g.remove_entry(2, Edge::new(1, 10)));
        assert!(!g.remove_entry(42, Edge::new(1, 10)));
        assert_eq!(g.degree(2), 1);
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let mut g = triangle();
        assert_eq!(g.degree(99), 0);
        assert_eq!(g.neighbors(99).count(), 0);
        assert!(g.take_edges(99).is_empty());
    }
}
