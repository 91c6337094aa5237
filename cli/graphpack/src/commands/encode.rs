//! `graphpack encode` — text edge list to binary stream.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use graphpack_codec::{encode_to, EncodeSummary, EncodingMode};
use graphpack_core::read_graph;

use super::{read_input, write_output};

/// Encode the edge list at `input` and write the stream to `output`.
///
/// The whole graph is parsed and encoded in memory before `output` is
/// created, so a malformed edge list leaves no output file behind.
pub fn run(input: &Path, output: &Path, mode: EncodingMode) -> Result<EncodeSummary> {
    let text = read_input(input)?;
    let graph = read_graph(&mut text.as_slice())
        .with_context(|| format!("parsing {}", input.display()))?;
    info!(
        input = %input.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );

    let mut bytes = Vec::new();
    let summary = encode_to(graph, mode, &mut bytes).context("encoding graph")?;
    write_output(output, &bytes)?;

    info!(
        output = %output.display(),
        %mode,
        frames = summary.frames,
        bytes = summary.bytes,
        "wrote stream"
    );
    Ok(summary)
}
