//! Reading answer text, references, and recorded fragment streams.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use drinkmap_core::ReferenceSet;
use drinkmap_stream::Fragment;
use serde::Deserialize;

/// Reads `path` to a string; `-` reads stdin.
pub(crate) fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses a JSON array of reference candidates. Blank candidates are dropped.
pub(crate) fn parse_references(json: &str) -> anyhow::Result<ReferenceSet> {
    serde_json::from_str(json).context("references must be a JSON array of { uri, title }")
}

/// One recorded line of a fragment stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ReplayLine {
    /// Transport failure at this point of the stream.
    Error { error: String },
    Fragment(Fragment),
}

impl ReplayLine {
    pub(crate) fn into_result(self) -> Result<Fragment, String> {
        match self {
            Self::Error { error } => Err(error),
            Self::Fragment(fragment) => Ok(fragment),
        }
    }
}

/// Parses NDJSON replay lines, skipping blank lines.
pub(crate) fn parse_replay_lines(ndjson: &str) -> anyhow::Result<Vec<ReplayLine>> {
    ndjson
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid fragment on line {}", idx + 1))
        })
        .collect()
}
