use crate::cli::SearchArgs;
use anyhow::Context;
use chrono::Utc;
use ranklab_core::{
    Analyzer, AnalyzerOptions, Bm25Params, DocRecord, QueryFilter, QueryRecord, RankedDoc,
};
use ranklab_index::{rank, InvertedIndex};
use ranklab_io::{append_jsonl, load_stopwords, read_jsonl, write_run, RunRecord};
use std::collections::{HashMap, HashSet};

pub fn run(args: &SearchArgs) -> anyhow::Result<()> {
    let stopwords = match &args.stopwords {
        Some(path) => load_stopwords(path),
        None => HashSet::new(),
    };
    let analyzer = Analyzer::new(
        stopwords,
        AnalyzerOptions {
            stemming: !args.no_stemming,
        },
    );

    let docs: Vec<DocRecord> = read_jsonl(&args.corpus)
        .with_context(|| format!("reading corpus {}", args.corpus.display()))?;
    tracing::info!(
        "indexing {} documents from {}",
        docs.len(),
        args.corpus.display()
    );
    let index = InvertedIndex::build(docs, &analyzer, args.full_text);

    let queries: Vec<QueryRecord> = read_jsonl(&args.queries)
        .with_context(|| format!("reading queries {}", args.queries.display()))?;
    let filter = QueryFilter::from(args.subset);
    let params = Bm25Params {
        k1: args.k1,
        b: args.b,
    };

    let mut results: HashMap<String, Vec<RankedDoc>> = HashMap::new();
    for query in queries.iter().filter(|q| filter.accepts(&q.id)) {
        let tokens = analyzer.tokenize(&query.text);
        results.insert(query.id.clone(), rank(&tokens, &index, &params, args.top_k));
    }

    write_run(&args.output, &results, &args.run_tag)
        .with_context(|| format!("writing run file {}", args.output.display()))?;

    let record = RunRecord {
        run_tag: args.run_tag.clone(),
        timestamp: Utc::now(),
        corpus: args.corpus.display().to_string(),
        full_text: args.full_text,
        num_docs: index.num_docs(),
        vocab_size: index.vocab_size(),
        avg_doc_len: index.avg_doc_len(),
        num_queries: results.len(),
        output: args.output.display().to_string(),
    };
    let log_path = args.output.with_file_name("runs.jsonl");
    if let Err(err) = append_jsonl(&log_path, &record) {
        tracing::warn!(
            "could not append run record to {}: {}",
            log_path.display(),
            err
        );
    }

    println!(
        "{}: {} documents, {} terms, avg doc len {:.2}",
        args.run_tag,
        index.num_docs(),
        index.vocab_size(),
        index.avg_doc_len()
    );
    println!(
        "ranked {} queries -> {}",
        results.len(),
        args.output.display()
    );

    Ok(())
}
