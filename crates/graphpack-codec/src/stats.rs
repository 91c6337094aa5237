//! Summary statistics over an encoded stream.

use std::collections::BTreeSet;

use serde::Serialize;
use sha2::{Digest, Sha256};

use graphpack_core::VertexId;

use crate::decode::RecordReader;
use crate::error::Result;
use crate::format::EncodingMode;

/// What an encoded stream contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Layout the stream was read as.
    pub mode: EncodingMode,
    /// Stream length in bytes.
    pub bytes: usize,
    /// Records (greedy) or clusters (clustered).
    pub frames: usize,
    /// Vertices that own a record.
    pub owners: usize,
    /// Distinct vertices referenced anywhere in the stream.
    pub vertices: usize,
    /// `(to, weight)` pairs in the stream.
    pub edges: usize,
    /// Largest number of pairs under a single owner.
    pub max_degree: usize,
    /// Owners that appear in more than one record.
    pub repeated_owners: usize,
    /// Hex SHA-256 of the raw stream.
    pub sha256: String,
}

impl StreamStats {
    /// Walk a stream and summarize it. Fails on the first malformed record.
    pub fn collect(data: &[u8], mode: EncodingMode) -> Result<Self> {
        let mut reader = RecordReader::new(data, mode);
        let mut owners: BTreeSet<VertexId> = BTreeSet::new();
        let mut vertices: BTreeSet<VertexId> = BTreeSet::new();
        let mut records = 0;
        let mut edges = 0;
        let mut max_degree = 0;

        for record in reader.by_ref() {
            let record = record?;
            records += 1;
            edges += record.degree();
            max_degree = max_degree.max(record.degree());
            vertices.insert(record.owner);
            vertices.extend(record.edges.iter().map(|e| e.to));
            owners.insert(record.owner);
        }

        Ok(Self {
            mode,
            bytes: data.len(),
            frames: reader.frames(),
            owners: owners.len(),
            vertices: vertices.len(),
            edges,
            max_degree,
            repeated_owners: records - owners.len(),
            sha256: hash_hex(&Sha256::digest(data)),
        })
    }
}

/// Format a digest as a lowercase hex string.
pub fn hash_hex(hash: &[u8]) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_triples;
    use graphpack_core::Triple;

    fn star() -> Vec<Triple> {
        vec![
            Triple::new(9, 1, 1),
            Triple::new(9, 2, 2),
            Triple::new(9, 3, 3),
            Triple::new(1, 2, 4),
        ]
    }

    #[test]
    fn greedy_stats() {
        let bytes = encode_triples(&star(), EncodingMode::Greedy).unwrap();
        let stats = StreamStats::collect(&bytes, EncodingMode::Greedy).unwrap();
        assert_eq!(stats.bytes, bytes.len());
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.owners, 2);
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.repeated_owners, 0);
        assert_eq!(stats.sha256.len(), 64);
    }

    #[test]
    fn clustered_stats_count_clusters() {
        let bytes = encode_triples(&star(), EncodingMode::Clustered).unwrap();
        let stats = StreamStats::collect(&bytes, EncodingMode::Clustered).unwrap();
        // degree 0 (vertices 2, 3), degree 1 (vertex 1), degree 3 (vertex 9)
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.owners, 4);
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.repeated_owners, 0);
    }

    #[test]
    fn identical_streams_share_digest() {
        let a = encode_triples(&star(), EncodingMode::Greedy).unwrap();
        let b = encode_triples(&star(), EncodingMode::Greedy).unwrap();
        let sa = StreamStats::collect(&a, EncodingMode::Greedy).unwrap();
        let sb = StreamStats::collect(&b, EncodingMode::Greedy).unwrap();
        assert_eq!(sa.sha256, sb.sha256);
    }

    #[test]
    fn empty_stream_digest() {
        let stats = StreamStats::collect(&[], EncodingMode::Greedy).unwrap();
        assert_eq!(stats.frames, 0);
        assert_eq!(
            stats.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn repeated_owner_detected() {
        let mut bytes = Vec::new();
        for _ in 0..2 {
            bytes.extend(3u32.to_le_bytes());
            bytes.extend(0u32.to_le_bytes());
        }
        let stats = StreamStats::collect(&bytes, EncodingMode::Greedy).unwrap();
        assert_eq!(stats.owners, 1);
        assert_eq!(stats.repeated_owners, 1);
    }
}
