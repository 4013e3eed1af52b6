//! File formats: JSONL corpora, qrels tables, TREC run files, stopword lists

mod error;
mod jsonl;
mod qrels;
mod run_file;
mod stopwords;
mod types;

pub use error::LoadError;
pub use jsonl::{append_jsonl, atomic_write, read_jsonl};
pub use qrels::load_qrels;
pub use run_file::{load_run, write_run};
pub use stopwords::load_stopwords;
pub use types::RunRecord;
