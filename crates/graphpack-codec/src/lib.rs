//! Degree-ordered binary encoding of weighted undirected graphs.
//!
//! The encoder repeatedly selects the vertex with the highest remaining
//! degree (ties to the smallest id), emits its whole adjacency set and
//! deletes the reciprocal entries from its neighbors, so every undirected
//! edge is written exactly once. In the clustered layout every vertex owns
//! exactly one group; vertices left without edges are grouped under degree
//! zero. The decoder only inverts the framing.
//!
//! ## Stream Layouts
//!
//! All integers are little-endian. There is no header and no sentinel:
//! the stream ends at end of input.
//!
//! ```text
//! Greedy (one record per emitted vertex):
//! ┌──────────────────────────────┐
//! │ vertex: u32                  │
//! │ count n: u32                 │
//! │ n × ┌──────────────────────┐ │
//! │     │ to: u32  weight: u8  │ │
//! │     └──────────────────────┘ │
//! └──────────────────────────────┘
//!
//! Clustered (one cluster per degree, ascending):
//! ┌──────────────────────────────────────┐
//! │ degree d: u32                        │
//! │ cluster size m: u32                  │
//! │ m × ┌──────────────────────────────┐ │
//! │     │ vertex: u32                  │ │
//! │     │ d × (to: u32, weight: u8)    │ │
//! │     └──────────────────────────────┘ │
//! └──────────────────────────────────────┘
//! ```

mod decode;
mod encode;
mod error;
mod format;
mod stats;

pub use decode::{decode, RecordReader};
pub use encode::{encode, encode_to, encode_triples, extract_records, EncodeSummary};
pub use error::{CodecError, Result};
pub use format::{EncodingMode, Record};
pub use stats::{hash_hex, StreamStats};
