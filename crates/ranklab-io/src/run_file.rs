//! TREC run files: `query_id Q0 doc_id rank score run_tag`

use crate::error::LoadError;
use ranklab_core::RankedDoc;
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a run file, one line per (query, document) pair, scores at 4
/// decimal places. Lines are ordered by query id (numeric where the id
/// parses as an integer, lexicographic otherwise) then rank. Queries with
/// no results contribute no lines.
pub fn write_run(
    path: &Path,
    results: &HashMap<String, Vec<RankedDoc>>,
    run_tag: &str,
) -> std::io::Result<()> {
    let mut query_ids: Vec<&String> = results.keys().collect();
    query_ids.sort_by_key(|id| (id.parse::<u64>().is_err(), id.parse::<u64>().unwrap_or(0), id.as_str()));

    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);

    for query_id in query_ids {
        for doc in &results[query_id] {
            writeln!(
                out,
                "{} Q0 {} {} {:.4} {}",
                query_id, doc.doc_id, doc.rank, doc.score, run_tag
            )?;
        }
    }

    out.flush()
}

/// Load a run file into per-query result lists, re-sorted by rank. Rows
/// with fewer than 6 fields or non-numeric rank/score are fatal.
pub fn load_run(path: &Path) -> Result<HashMap<String, Vec<RankedDoc>>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

    let mut results: HashMap<String, Vec<RankedDoc>> = HashMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 6 {
            return Err(LoadError::malformed(
                path,
                idx + 1,
                format!("expected 6 fields, found {}", parts.len()),
            ));
        }

        let rank: usize = parts[3].parse().map_err(|_| {
            LoadError::malformed(path, idx + 1, format!("invalid rank {:?}", parts[3]))
        })?;
        let score: f64 = parts[4].parse().map_err(|_| {
            LoadError::malformed(path, idx + 1, format!("invalid score {:?}", parts[4]))
        })?;

        results.entry(parts[0].to_string()).or_default().push(RankedDoc {
            doc_id: parts[2].to_string(),
            rank,
            score,
        });
    }

    for docs in results.values_mut() {
        docs.sort_by_key(|d| d.rank);
    }

    Ok(results)
}
