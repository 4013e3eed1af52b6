//! trec_eval-format report output

use crate::metrics::{AggregateMetrics, QueryMetrics};
use std::collections::BTreeMap;
use std::io::{self, Write};

type MetricGetter = fn(&QueryMetrics) -> f64;

const METRICS: [(&str, MetricGetter); 7] = [
    ("map", |m| m.ap),
    ("Rprec", |m| m.r_precision),
    ("P_5", |m| m.p5),
    ("P_10", |m| m.p10),
    ("P_30", |m| m.p30),
    ("recall", |m| m.recall),
    ("recip_rank", |m| m.reciprocal_rank),
];

/// Write the evaluation report in trec_eval layout: one block per metric
/// with a line per query, then the `all` summary lines. Query ids appear in
/// lexicographic order, matching the reference tool.
pub fn write_report<W: Write>(
    mut out: W,
    agg: &AggregateMetrics,
    per_query: &BTreeMap<String, QueryMetrics>,
) -> io::Result<()> {
    for (name, get) in METRICS {
        for (query_id, m) in per_query {
            writeln!(out, "{:<21}\t{}\t{:.4}", name, query_id, get(m))?;
        }
    }

    writeln!(out, "{:<21}\tall\t{:.4}", "map", agg.map)?;
    writeln!(out, "{:<21}\tall\t{:.4}", "Rprec", agg.r_precision)?;
    writeln!(out, "{:<21}\tall\t{:.4}", "P_5", agg.p5)?;
    writeln!(out, "{:<21}\tall\t{:.4}", "P_10", agg.p10)?;
    writeln!(out, "{:<21}\tall\t{:.4}", "P_30", agg.p30)?;
    writeln!(out, "{:<21}\tall\t{:.4}", "recall", agg.recall)?;
    writeln!(out, "{:<21}\tall\t{:.4}", "recip_rank", agg.reciprocal_rank)?;
    writeln!(out, "{:<21}\tall\t{}", "num_q", agg.num_queries)?;
    writeln!(out, "{:<21}\tall\t{}", "num_rel", agg.num_relevant)?;
    writeln!(out, "{:<21}\tall\t{}", "num_ret", agg.num_retrieved)?;
    writeln!(out, "{:<21}\tall\t{}", "num_rel_ret", agg.num_relevant_retrieved)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> QueryMetrics {
        QueryMetrics {
            ap: 0.5,
            p5: 0.4,
            p10: 0.0,
            p30: 0.0,
            recall: 1.0,
            r_precision: 0.5,
            reciprocal_rank: 0.5,
            num_relevant: 2,
            num_retrieved: 5,
            num_relevant_retrieved: 2,
        }
    }

    #[test]
    fn test_report_layout() {
        let mut per_query = BTreeMap::new();
        per_query.insert("1".to_string(), sample_metrics());

        let agg = AggregateMetrics {
            map: 0.5,
            p5: 0.4,
            p10: 0.0,
            p30: 0.0,
            recall: 1.0,
            r_precision: 0.5,
            reciprocal_rank: 0.5,
            num_queries: 1,
            num_relevant: 2,
            num_retrieved: 5,
            num_relevant_retrieved: 2,
        };

        let mut buf = Vec::new();
        write_report(&mut buf, &agg, &per_query).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // 7 per-query lines + 7 metric summary lines + 4 count lines
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "map                  \t1\t0.5000");
        assert_eq!(lines[1], "Rprec                \t1\t0.5000");
        assert!(lines.contains(&"recip_rank           \t1\t0.5000"));
        assert!(lines.contains(&"map                  \tall\t0.5000"));
        assert!(lines.contains(&"num_q                \tall\t1"));
        assert!(lines.contains(&"num_rel_ret          \tall\t2"));
    }

    #[test]
    fn test_queries_are_grouped_by_metric() {
        let mut per_query = BTreeMap::new();
        per_query.insert("1".to_string(), sample_metrics());
        per_query.insert("3".to_string(), sample_metrics());

        let mut buf = Vec::new();
        write_report(&mut buf, &AggregateMetrics::default(), &per_query).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Both queries appear under "map" before "Rprec" starts.
        let map_block_end = text.find("Rprec").unwrap();
        let map_block = &text[..map_block_end];
        assert!(map_block.contains("\t1\t"));
        assert!(map_block.contains("\t3\t"));
    }
}
