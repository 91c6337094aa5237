//! Framing primitives shared by the encoder and decoder.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use graphpack_core::{Edge, Triple, VertexId};

use crate::error::CodecError;

/// Size of a vertex id or count field.
pub(crate) const WORD_SIZE: usize = 4;

/// Size of a weight field.
pub(crate) const WEIGHT_SIZE: usize = 1;

/// Size of one `(to, weight)` pair.
pub(crate) const PAIR_SIZE: usize = WORD_SIZE + WEIGHT_SIZE;

/// Size of a record or cluster header (two words).
pub(crate) const HEADER_SIZE: usize = 2 * WORD_SIZE;

/// Which stream layout to produce or expect.
///
/// Streams carry no marker of their own, so the decoder has to be told the
/// mode the encoder used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// One `(vertex, count, pairs)` record per emitted vertex, in selection order.
    #[default]
    Greedy,
    /// Records grouped into `(degree, size)` clusters in ascending degree order.
    Clustered,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Greedy => "greedy",
            EncodingMode::Clustered => "clustered",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingMode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(EncodingMode::Greedy),
            "clustered" => Ok(EncodingMode::Clustered),
            other => Err(CodecError::UnknownMode(other.to_string())),
        }
    }
}

/// One emitted vertex together with the adjacency entries written under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The vertex that owns the record.
    pub owner: VertexId,
    /// Adjacency entries in emission order.
    pub edges: Vec<Edge>,
}

impl Record {
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// The record's edges as `(owner, to, weight)` rows.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.edges
            .iter()
            .map(move |e| Triple::new(self.owner, e.to, e.weight))
    }

    /// Encoded size of the vertex id plus pairs, excluding any count field.
    pub(crate) fn body_size(&self) -> usize {
        WORD_SIZE + self.edges.len() * PAIR_SIZE
    }
}

/// Convert a length to the `u32` carried on the wire.
pub(crate) fn wire_count(what: &'static str, value: usize) -> Result<u32, CodecError> {
    u32::try_from(value).map_err(|_| CodecError::CountOverflow { what, value })
}

pub(crate) fn write_word<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

pub(crate) fn write_pairs<W: Write>(writer: &mut W, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        write_word(writer, edge.to)?;
        writer.write_all(&[edge.weight])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in [EncodingMode::Greedy, EncodingMode::Clustered] {
            assert_eq!(mode.to_string().parse::<EncodingMode>().unwrap(), mode);
        }
        assert!(matches!(
            "zigzag".parse::<EncodingMode>(),
            Err(CodecError::UnknownMode(name)) if name == "zigzag"
        ));
    }

    #[test]
    fn default_mode_is_greedy() {
        assert_eq!(EncodingMode::default(), EncodingMode::Greedy);
    }

    #[test]
    fn pairs_are_little_endian() {
        let mut buf = Vec::new();
        write_pairs(&mut buf, &[Edge::new(0x0102_0304, 7)]).unwrap();
        assert_eq!(buf, vec![0x04, 0x03, 0x02, 0x01, 7]);
    }

    #[test]
    fn record_triples_use_owner() {
        let record = Record {
            owner: 4,
            edges: vec![Edge::new(1, 2), Edge::new(4, 3)],
        };
        assert_eq!(record.degree(), 2);
        assert_eq!(record.body_size(), 4 + 2 * 5);
        assert_eq!(
            record.triples().collect::<Vec<_>>(),
            vec![Triple::new(4, 1, 2), Triple::new(4, 4, 3)]
        );
    }
}
