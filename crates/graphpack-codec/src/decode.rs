//! Stream decoding.
//!
//! Decoding inverts the framing only. It performs no graph algorithm and
//! makes no assumption about vertex order beyond what the stream encodes.

use tracing::debug;

use graphpack_core::{Edge, Triple, VertexId};

use crate::error::{CodecError, Result};
use crate::format::{EncodingMode, Record, PAIR_SIZE, WORD_SIZE};

/// Iterator over the records of an encoded stream.
///
/// Yields one [`Record`] per owning vertex in stream order. After the first
/// error the iterator is exhausted.
pub struct RecordReader<'a> {
    data: &'a [u8],
    pos: usize,
    mode: EncodingMode,
    /// `(degree, members left)` of the cluster being read.
    cluster: Option<(u32, u32)>,
    frames: usize,
    failed: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(data: &'a [u8], mode: EncodingMode) -> Self {
        Self {
            data,
            pos: 0,
            mode,
            cluster: None,
            frames: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread field.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Record (greedy) or cluster (clustered) headers read so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        if self.remaining() < needed {
            return Err(CodecError::Truncated {
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        let data = self.data;
        let bytes = &data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    fn read_word(&mut self) -> Result<u32> {
        let bytes = self.take(WORD_SIZE)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_pairs(&mut self, count: u32) -> Result<Vec<Edge>> {
        let count = count as usize;
        // Bound the allocation by what the input can actually hold.
        let mut edges = Vec::with_capacity(count.min(self.remaining() / PAIR_SIZE));
        for _ in 0..count {
            let bytes = self.take(PAIR_SIZE)?;
            let to = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            edges.push(Edge::new(to, bytes[4]));
        }
        Ok(edges)
    }

    fn read_greedy(&mut self) -> Result<Record> {
        let owner = self.read_word()?;
        let count = self.read_word()?;
        self.frames += 1;
        let edges = self.read_pairs(count)?;
        Ok(Record { owner, edges })
    }

    /// Read the next clustered member, or `None` at a clean end of stream.
    fn read_clustered(&mut self) -> Result<Option<Record>> {
        let degree = loop {
            if let Some((degree, left)) = self.cluster.filter(|&(_, left)| left > 0) {
                self.cluster = Some((degree, left - 1));
                break degree;
            }
            if self.remaining() == 0 {
                return Ok(None);
            }
            let degree = self.read_word()?;
            let size = self.read_word()?;
            self.frames += 1;
            self.cluster = Some((degree, size));
        };
        let owner: VertexId = self.read_word()?;
        let edges = self.read_pairs(degree)?;
        Ok(Some(Record { owner, edges }))
    }
}

impl Iterator for RecordReader<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = match self.mode {
            EncodingMode::Greedy => {
                if self.remaining() == 0 {
                    return None;
                }
                self.read_greedy().map(Some)
            }
            EncodingMode::Clustered => self.read_clustered(),
        };
        match result {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Decode a whole stream into `(owner, to, weight)` triples in stream order.
pub fn decode(data: &[u8], mode: EncodingMode) -> Result<Vec<Triple>> {
    let mut reader = RecordReader::new(data, mode);
    let mut triples = Vec::new();
    for record in reader.by_ref() {
        triples.extend(record?.triples());
    }
    debug!(
        %mode,
        frames = reader.frames(),
        edges = triples.len(),
        bytes = data.len(),
        "decoded stream"
    );
    Ok(triples)
}
