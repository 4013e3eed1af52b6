//! Per-query and aggregate TREC metrics

use ranklab_core::RankedDoc;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Relevance judgments: query id -> set of relevant doc ids.
pub type Qrels = HashMap<String, HashSet<String>>;

/// Ranked results per query, as loaded from a run file.
pub type RunResults = HashMap<String, Vec<RankedDoc>>;

/// Metrics for a single evaluated query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMetrics {
    pub ap: f64,
    pub p5: f64,
    pub p10: f64,
    pub p30: f64,
    pub recall: f64,
    pub r_precision: f64,
    pub reciprocal_rank: f64,
    pub num_relevant: usize,
    pub num_retrieved: usize,
    pub num_relevant_retrieved: usize,
}

/// Arithmetic means across evaluated queries, plus corpus-wide totals.
/// All-zero when no query qualifies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateMetrics {
    pub map: f64,
    pub p5: f64,
    pub p10: f64,
    pub p30: f64,
    pub recall: f64,
    pub r_precision: f64,
    pub reciprocal_rank: f64,
    pub num_queries: usize,
    pub num_relevant: usize,
    pub num_retrieved: usize,
    pub num_relevant_retrieved: usize,
}

/// Evaluate ranked results against relevance judgments.
///
/// Only queries present in both relations with a non-empty relevant set are
/// evaluated; everything else is silently skipped. Retrieved lists are
/// re-sorted by their reported rank before scoring, so callers need not
/// guarantee order.
pub fn evaluate(qrels: &Qrels, results: &RunResults) -> (AggregateMetrics, BTreeMap<String, QueryMetrics>) {
    let mut per_query = BTreeMap::new();

    for (query_id, relevant) in qrels {
        if relevant.is_empty() {
            continue;
        }
        let Some(retrieved) = results.get(query_id) else {
            continue;
        };
        per_query.insert(query_id.clone(), query_metrics(relevant, retrieved));
    }

    let mut agg = AggregateMetrics::default();
    if per_query.is_empty() {
        return (agg, per_query);
    }

    for m in per_query.values() {
        agg.map += m.ap;
        agg.p5 += m.p5;
        agg.p10 += m.p10;
        agg.p30 += m.p30;
        agg.recall += m.recall;
        agg.r_precision += m.r_precision;
        agg.reciprocal_rank += m.reciprocal_rank;
        agg.num_relevant += m.num_relevant;
        agg.num_retrieved += m.num_retrieved;
        agg.num_relevant_retrieved += m.num_relevant_retrieved;
    }

    let n = per_query.len() as f64;
    agg.map /= n;
    agg.p5 /= n;
    agg.p10 /= n;
    agg.p30 /= n;
    agg.recall /= n;
    agg.r_precision /= n;
    agg.reciprocal_rank /= n;
    agg.num_queries = per_query.len();

    (agg, per_query)
}

fn query_metrics(relevant: &HashSet<String>, retrieved: &[RankedDoc]) -> QueryMetrics {
    let mut retrieved: Vec<RankedDoc> = retrieved.to_vec();
    retrieved.sort_by_key(|d| d.rank);

    let num_relevant = relevant.len();
    let mut relevant_retrieved = 0usize;
    let mut ap_sum = 0.0;
    let mut first_relevant_rank: Option<usize> = None;

    for (i, doc) in retrieved.iter().enumerate() {
        if relevant.contains(&doc.doc_id) {
            relevant_retrieved += 1;
            ap_sum += relevant_retrieved as f64 / (i + 1) as f64;
            if first_relevant_rank.is_none() {
                // By the reported rank field, not the list position.
                first_relevant_rank = Some(doc.rank);
            }
        }
    }

    let ap = if num_relevant > 0 {
        ap_sum / num_relevant as f64
    } else {
        0.0
    };

    let recall = if retrieved.is_empty() || num_relevant == 0 {
        0.0
    } else {
        relevant_retrieved as f64 / num_relevant as f64
    };

    QueryMetrics {
        ap,
        p5: precision_at(relevant, &retrieved, 5),
        p10: precision_at(relevant, &retrieved, 10),
        p30: precision_at(relevant, &retrieved, 30),
        recall,
        r_precision: r_precision(relevant, &retrieved),
        reciprocal_rank: first_relevant_rank.map(|r| 1.0 / r as f64).unwrap_or(0.0),
        num_relevant,
        num_retrieved: retrieved.len(),
        num_relevant_retrieved: relevant_retrieved,
    }
}

/// Precision at a fixed cutoff; 0.0 when fewer than `k` documents were
/// retrieved.
fn precision_at(relevant: &HashSet<String>, retrieved: &[RankedDoc], k: usize) -> f64 {
    if retrieved.len() < k {
        return 0.0;
    }
    let hits = retrieved[..k]
        .iter()
        .filter(|d| relevant.contains(&d.doc_id))
        .count();
    hits as f64 / k as f64
}

/// Precision at cutoff R = |relevant|. When fewer than R documents were
/// retrieved, relevant hits among those retrieved are still divided by R,
/// penalizing the short list.
fn r_precision(relevant: &HashSet<String>, retrieved: &[RankedDoc]) -> f64 {
    let r = relevant.len();
    if r == 0 {
        return 0.0;
    }
    let cutoff = r.min(retrieved.len());
    let hits = retrieved[..cutoff]
        .iter()
        .filter(|d| relevant.contains(&d.doc_id))
        .count();
    hits as f64 / r as f64
}
