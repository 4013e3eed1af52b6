//! Per-query ranking: score, order, truncate, assign ranks

use crate::bm25;
use crate::index::InvertedIndex;
use ranklab_core::{Bm25Params, RankedDoc};
use std::cmp::Ordering;

/// Rank the documents matching a tokenized query. Ordering is score
/// descending with doc id ascending as the tie-break, so output is
/// deterministic regardless of map iteration order. Ranks are dense and
/// 1-based.
pub fn rank(
    query_tokens: &[String],
    index: &InvertedIndex,
    params: &Bm25Params,
    top_k: usize,
) -> Vec<RankedDoc> {
    let scores = bm25::score(query_tokens, index, params);

    let mut scored: Vec<(String, f64)> = scores.into_iter().collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(top_k);

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (doc_id, score))| RankedDoc {
            doc_id,
            rank: i + 1,
            score,
        })
        .collect()
}
