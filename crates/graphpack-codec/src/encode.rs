//! Degree-ordered encoding.
//!
//! Both layouts share one selection pass ([`extract_records`]): vertices are
//! kept in an ordered set keyed on `(degree, Reverse(id))`, the maximum is
//! extracted, its adjacency set is emitted and the reciprocal entries are
//! removed from its neighbors, which are then re-keyed under their lower
//! degree.
//!
//! The layouts differ in when a vertex leaves the pool. Greedy drops a
//! neighbor as soon as its set becomes empty, so it is never emitted.
//! Clustered keeps it at degree zero until it is selected, so every vertex
//! owns exactly one group and exhausted vertices form a leading degree-0
//! cluster.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use tracing::{debug, trace};

use graphpack_core::{AdjacencyGraph, Edge, Triple, VertexId};

use crate::error::Result;
use crate::format::{
    wire_count, write_pairs, write_word, EncodingMode, Record, HEADER_SIZE, WORD_SIZE,
};

/// What an encode pass wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Top-level frames: records (greedy) or clusters (clustered).
    pub frames: usize,
    /// Vertices that own a record.
    pub vertices: usize,
    /// `(to, weight)` pairs written.
    pub edges: usize,
    /// Bytes written.
    pub bytes: usize,
}

/// Vertex pool ordered by current degree, highest degree and then lowest
/// id last.
struct DegreeQueue {
    order: BTreeSet<(usize, Reverse<VertexId>)>,
    /// Keep vertices whose degree reached zero until they are selected.
    keep_exhausted: bool,
}

impl DegreeQueue {
    fn new(graph: &AdjacencyGraph, mode: EncodingMode) -> Self {
        let keep_exhausted = mode == EncodingMode::Clustered;
        let order = graph
            .degrees()
            .into_iter()
            .filter(|&(_, degree)| keep_exhausted || degree > 0)
            .map(|(vertex, degree)| (degree, Reverse(vertex)))
            .collect();
        Self {
            order,
            keep_exhausted,
        }
    }

    fn pop_max(&mut self) -> Option<(usize, VertexId)> {
        self.order
            .pop_last()
            .map(|(degree, Reverse(vertex))| (degree, vertex))
    }

    /// Move a vertex from `old` degree to `new`. Unless exhausted vertices
    /// are kept, a vertex at degree zero leaves the pool.
    fn rekey(&mut self, vertex: VertexId, old: usize, new: usize) {
        self.order.remove(&(old, Reverse(vertex)));
        if new > 0 || self.keep_exhausted {
            self.order.insert((new, Reverse(vertex)));
        }
    }
}

/// Run the selection pass for `mode`, consuming the graph.
///
/// Returns one record per selected vertex in selection order. Each
/// undirected edge appears in exactly one record. In clustered mode every
/// vertex of the graph is selected, the exhausted ones with no edges.
pub fn extract_records(mut graph: AdjacencyGraph, mode: EncodingMode) -> Vec<Record> {
    let mut queue = DegreeQueue::new(&graph, mode);
    let mut records = Vec::new();

    while let Some((degree, vertex)) = queue.pop_max() {
        let edges = graph.take_edges(vertex);
        debug_assert_eq!(edges.len(), degree);

        for edge in &edges {
            if edge.to == vertex {
                continue;
            }
            let before = graph.degree(edge.to);
            if graph.remove_entry(edge.to, Edge::new(vertex, edge.weight)) {
                queue.rekey(edge.to, before, before - 1);
            }
        }

        trace!(vertex, degree, "selected vertex");
        records.push(Record {
            owner: vertex,
            edges: edges.into_iter().collect(),
        });
    }

    records
}

/// Encode a graph into a byte vector.
pub fn encode(graph: AdjacencyGraph, mode: EncodingMode) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_to(graph, mode, &mut buf)?;
    Ok(buf)
}

/// Build the adjacency structure for `triples` and encode it.
pub fn encode_triples(triples: &[Triple], mode: EncodingMode) -> Result<Vec<u8>> {
    encode(AdjacencyGraph::from_triples(triples.iter().copied()), mode)
}

/// Encode a graph to a writer.
pub fn encode_to<W: Write>(
    graph: AdjacencyGraph,
    mode: EncodingMode,
    writer: &mut W,
) -> Result<EncodeSummary> {
    let records = extract_records(graph, mode);
    let summary = match mode {
        EncodingMode::Greedy => write_greedy(&records, writer)?,
        EncodingMode::Clustered => write_clustered(&records, writer)?,
    };
    debug!(
        %mode,
        frames = summary.frames,
        vertices = summary.vertices,
        edges = summary.edges,
        bytes = summary.bytes,
        "encoded graph"
    );
    Ok(summary)
}

fn write_greedy<W: Write>(records: &[Record], writer: &mut W) -> Result<EncodeSummary> {
    let mut summary = EncodeSummary::default();
    for record in records {
        write_word(writer, record.owner)?;
        write_word(writer, wire_count("degree", record.degree())?)?;
        write_pairs(writer, &record.edges)?;

        summary.frames += 1;
        summary.vertices += 1;
        summary.edges += record.degree();
        summary.bytes += WORD_SIZE + record.body_size();
    }
    Ok(summary)
}

fn write_clustered<W: Write>(records: &[Record], writer: &mut W) -> Result<EncodeSummary> {
    // Selection order is kept inside each cluster.
    let mut clusters: BTreeMap<usize, Vec<&Record>> = BTreeMap::new();
    for record in records {
        clusters.entry(record.degree()).or_default().push(record);
    }

    let mut summary = EncodeSummary::default();
    for (degree, members) in &clusters {
        write_word(writer, wire_count("degree", *degree)?)?;
        write_word(writer, wire_count("cluster size", members.len())?)?;
        summary.frames += 1;
        summary.bytes += HEADER_SIZE;

        for record in members {
            write_word(writer, record.owner)?;
            write_pairs(writer, &record.edges)?;
            summary.vertices += 1;
            summary.edges += record.degree();
            summary.bytes += record.body_size();
        }
    }
    Ok(summary)
}
