//! Relevance judgment loading

use crate::error::LoadError;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Load relevance judgments, collapsing graded relevance to binary
/// (relevance > 0 is relevant).
///
/// Accepts both the 3-column TSV layout (`query-id  corpus-id  score`, with
/// an optional header on the first line) and the 4-column TREC layout
/// (`qid iter did rel`): the doc id is the second-to-last field and the
/// relevance grade the last. Rows are tab-split when the line contains a
/// tab, whitespace-split otherwise. Malformed rows are fatal.
pub fn load_qrels(path: &Path) -> Result<HashMap<String, HashSet<String>>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

    let mut qrels: HashMap<String, HashSet<String>> = HashMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if idx == 0 && line.starts_with("query-id") {
            continue;
        }

        let parts: Vec<&str> = if line.contains('\t') {
            line.split('\t').collect()
        } else {
            line.split_whitespace().collect()
        };
        if parts.len() < 3 {
            return Err(LoadError::malformed(
                path,
                idx + 1,
                format!("expected at least 3 fields, found {}", parts.len()),
            ));
        }

        let query_id = parts[0].trim();
        let doc_id = parts[parts.len() - 2].trim();
        let relevance: i64 = parts[parts.len() - 1].trim().parse().map_err(|_| {
            LoadError::malformed(
                path,
                idx + 1,
                format!("invalid relevance grade {:?}", parts[parts.len() - 1]),
            )
        })?;

        if relevance > 0 {
            qrels
                .entry(query_id.to_string())
                .or_default()
                .insert(doc_id.to_string());
        }
    }

    Ok(qrels)
}
