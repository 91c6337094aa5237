//! `graphpack decode` — binary stream to text edge list.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use graphpack_codec::{decode, EncodingMode};
use graphpack_core::Triple;

use super::{read_input, write_output};

/// Decode the stream at `input` and write one row per edge to `output`.
///
/// Returns the number of rows written.
pub fn run(input: &Path, output: &Path, mode: EncodingMode, delimiter: &str) -> Result<usize> {
    let bytes = read_input(input)?;
    let triples =
        decode(&bytes, mode).with_context(|| format!("decoding {}", input.display()))?;
    write_output(output, render(&triples, delimiter).as_bytes())?;

    info!(
        input = %input.display(),
        output = %output.display(),
        %mode,
        rows = triples.len(),
        "wrote edge list"
    );
    Ok(triples.len())
}

/// Format triples as `from<d>to<d>weight` lines.
pub fn render(triples: &[Triple], delimiter: &str) -> String {
    triples
        .iter()
        .map(|t| format!("{}{delimiter}{}{delimiter}{}\n", t.from, t.to, t.weight))
        .collect()
}
