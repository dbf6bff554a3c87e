//! `extract` command: one-shot segment extraction from a finished answer.

use std::path::Path;

use drinkmap_core::ReferenceSet;

use crate::input::{parse_references, read_source};

/// Prints the extracted segments of the answer in `input` as JSON.
///
/// # Errors
///
/// Returns an error if either file cannot be read or the references are not
/// a JSON array of candidates.
pub(crate) fn run_extract(
    input: &Path,
    references: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let text = read_source(input)?;
    let references = match references {
        Some(path) => parse_references(&read_source(path)?)?,
        None => ReferenceSet::new(),
    };

    let segments = drinkmap_parser::extract(&text, &references);
    tracing::info!(
        chars = text.len(),
        references = references.len(),
        segments = segments.len(),
        "extraction complete"
    );
    print_json(&segments, pretty)
}

/// Writes `value` to stdout as JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
