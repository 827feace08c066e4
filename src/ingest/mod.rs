// Document ingestion — the boundary between storage and the pipeline.
//
// The pipeline consumes RawDocuments from any DocumentSource. The store
// module provides the SQLite-backed source; tests build vectors directly.

use anyhow::Result;
use serde::Deserialize;
use tracing::warn;

/// One post as supplied by an ingestion collaborator.
///
/// The text field may be missing entirely (platforms allow empty or
/// non-text titles); the pipeline degrades such documents to an empty
/// token sequence rather than failing.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub id: i64,
    pub text: Option<String>,
}

/// Anything that can supply a corpus of raw documents.
pub trait DocumentSource {
    fn fetch(&self) -> Result<Vec<RawDocument>>;
}

/// One line of a JSONL import file.
///
/// Matches the record shape the platform loaders produce. Only `title`
/// matters for analysis; the rest is kept for provenance.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Parse a JSONL buffer into post records, skipping unparseable lines.
pub fn parse_jsonl(input: &str) -> Vec<PostRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<PostRecord>(line) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "Skipped unparseable JSONL lines");
    }

    records
}
