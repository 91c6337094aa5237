//! `graphpack inspect` — summarize an encoded stream.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use graphpack_codec::{EncodingMode, StreamStats};

use super::read_input;

/// Output format for `inspect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

/// Read the stream at `input` and render its statistics.
pub fn run(input: &Path, mode: EncodingMode, export: ExportFormat) -> Result<String> {
    let bytes = read_input(input)?;
    let stats = StreamStats::collect(&bytes, mode)
        .with_context(|| format!("reading {}", input.display()))?;

    match export {
        ExportFormat::Text => Ok(render_text(input, &stats)),
        ExportFormat::Json => {
            serde_json::to_string_pretty(&stats).context("serializing stream statistics")
        }
    }
}

fn render_text(input: &Path, stats: &StreamStats) -> String {
    let frame_label = match stats.mode {
        EncodingMode::Greedy => "Records:",
        EncodingMode::Clustered => "Clusters:",
    };
    let mut lines = vec![
        format!("--- Stream Stats ({}) ---", input.display()),
        format!("  Mode:       {}", stats.mode),
        format!("  Bytes:      {}", stats.bytes),
        format!("  {frame_label:<11} {}", stats.frames),
        format!("  Owners:     {}", stats.owners),
        format!("  Vertices:   {}", stats.vertices),
        format!("  Edges:      {}", stats.edges),
        format!("  Max degree: {}", stats.max_degree),
        format!("  SHA-256:    {}", stats.sha256),
    ];
    if stats.repeated_owners > 0 {
        lines.push(format!(
            "  warning: {} owner(s) appear in more than one record",
            stats.repeated_owners
        ));
    }
    lines.join("\n")
}
