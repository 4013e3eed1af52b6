use clap::{Args, Parser, Subcommand, ValueEnum};
use ranklab_core::QueryFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ranklab")]
#[command(version)]
#[command(about = "BM25 retrieval runs and TREC evaluation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a corpus and write a ranked run file
    Search(SearchArgs),

    /// Score a run file against relevance judgments (trec_eval output)
    Eval(EvalArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Corpus JSONL, one {"_id", "title", "text"} record per line
    #[arg(long)]
    pub corpus: PathBuf,

    /// Query JSONL, one {"_id", "text"} record per line
    #[arg(long)]
    pub queries: PathBuf,

    /// Stopword list (plain text, or HTML with a <pre> block)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Output run file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Index title + body instead of title only
    #[arg(long)]
    pub full_text: bool,

    /// Results kept per query
    #[arg(long, default_value_t = 100)]
    pub top_k: usize,

    /// Run tag written into the results file
    #[arg(long, default_value = "ranklab")]
    pub run_tag: String,

    /// Subset of query ids to run
    #[arg(long, value_enum, default_value = "all")]
    pub subset: QuerySubset,

    /// Disable Snowball stemming
    #[arg(long)]
    pub no_stemming: bool,

    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = 1.2)]
    pub k1: f64,

    /// BM25 document-length normalization
    #[arg(long, default_value_t = 0.75)]
    pub b: f64,
}

#[derive(Args)]
pub struct EvalArgs {
    /// Relevance judgments (3-column TSV or 4-column TREC qrels)
    pub qrels: PathBuf,

    /// Run file to score
    pub results: PathBuf,
}

/// CLI surface of [`QueryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuerySubset {
    All,
    /// Queries with odd integer ids
    Odd,
    /// Queries with even integer ids
    Even,
}

impl From<QuerySubset> for QueryFilter {
    fn from(subset: QuerySubset) -> Self {
        match subset {
            QuerySubset::All => QueryFilter::All,
            QuerySubset::Odd => QueryFilter::OddIds,
            QuerySubset::Even => QueryFilter::EvenIds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::try_parse_from([
            "ranklab",
            "search",
            "--corpus",
            "corpus.jsonl",
            "--queries",
            "queries.jsonl",
            "--output",
            "results.txt",
            "--full-text",
            "--subset",
            "odd",
            "--run-tag",
            "bm25_full",
        ]);
        assert!(cli.is_ok());
        if let Commands::Search(args) = cli.unwrap().command {
            assert!(args.full_text);
            assert_eq!(args.subset, QuerySubset::Odd);
            assert_eq!(args.top_k, 100);
            assert_eq!(args.run_tag, "bm25_full");
            assert_eq!(args.k1, 1.2);
            assert!(!args.no_stemming);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_cli_parse_eval_positionals() {
        let cli = Cli::try_parse_from(["ranklab", "eval", "qrels.tsv", "results.txt"]);
        assert!(cli.is_ok());
        if let Commands::Eval(args) = cli.unwrap().command {
            assert_eq!(args.qrels, PathBuf::from("qrels.tsv"));
            assert_eq!(args.results, PathBuf::from("results.txt"));
        } else {
            panic!("Expected Eval command");
        }
    }

    #[test]
    fn test_cli_eval_wrong_arity_fails() {
        assert!(Cli::try_parse_from(["ranklab", "eval", "qrels.tsv"]).is_err());
        assert!(Cli::try_parse_from(["ranklab", "eval", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cli_search_requires_corpus() {
        let cli = Cli::try_parse_from([
            "ranklab",
            "search",
            "--queries",
            "queries.jsonl",
            "--output",
            "out.txt",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_query_subset_maps_to_filter() {
        assert_eq!(QueryFilter::from(QuerySubset::All), QueryFilter::All);
        assert_eq!(QueryFilter::from(QuerySubset::Odd), QueryFilter::OddIds);
        assert_eq!(QueryFilter::from(QuerySubset::Even), QueryFilter::EvenIds);
    }
}
