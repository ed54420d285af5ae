//! Corpus file loading

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// The sample corpus used by `okapi demo`
pub const SAMPLE_CORPUS: [&str; 8] = [
    "The quick brown fox jumps over the lazy dog",
    "A lazy brown dog naps under the tree",
    "The quick fox is a brown fox",
    "Never underestimate the power of a good book",
    "London is the capital of Great Britain",
    "The quick brown fox and the lazy dog are friends",
    "The stock market is volatile today, with tech stocks leading the decline",
    "Investing in the stock market requires careful research and a long-term strategy",
];

/// Load documents from `path`.
///
/// `.json` files hold an array of strings, `.jsonl` files one JSON string per
/// line, anything else one document per non-empty line.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;

    let docs = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str::<Vec<String>>(&content)
            .with_context(|| format!("{} is not a JSON array of strings", path.display()))?,
        Some("jsonl") => parse_jsonl(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        _ => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect(),
    };

    tracing::info!(path = %path.display(), num_docs = docs.len(), "loaded corpus");
    Ok(docs)
}

fn parse_jsonl(content: &str) -> Result<Vec<String>> {
    let mut docs = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<String>(line) {
            Ok(doc) => docs.push(doc),
            Err(err) => bail!("line {}: {}", lineno + 1, err),
        }
    }
    Ok(docs)
}
