use crate::cli::EvalArgs;
use anyhow::Context;
use ranklab_eval::{evaluate, write_report};
use ranklab_io::{load_qrels, load_run};

pub fn run(args: &EvalArgs) -> anyhow::Result<()> {
    let qrels = load_qrels(&args.qrels).context("loading relevance judgments")?;
    let results = load_run(&args.results).context("loading run file")?;

    let (agg, per_query) = evaluate(&qrels, &results);

    let stdout = std::io::stdout();
    write_report(stdout.lock(), &agg, &per_query)?;
    Ok(())
}
